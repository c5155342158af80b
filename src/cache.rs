use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::data::builder::build_data_set;
use crate::data::loader::{load_raw_image, ImageCrateDecoder, ImageDecoder};
use crate::data::model::{DigitDataSet, DigitLabel};
use crate::error::DatasetError;

type Slot = Arc<Mutex<Option<Arc<DigitDataSet>>>>;

// ---------------------------------------------------------------------------
// DatasetCache – one built dataset per label, for the cache's lifetime
// ---------------------------------------------------------------------------

/// Lazily builds and keeps one [`DigitDataSet`] per label.
///
/// Each label has its own slot lock, so the decode and build for a label run
/// at most once even under concurrent first requests, while different labels
/// build in parallel. A failed build leaves the slot empty and the next
/// request retries. Returned datasets are shared; treat them as read-only.
pub struct DatasetCache<D = ImageCrateDecoder> {
    config: PipelineConfig,
    decoder: D,
    slots: Mutex<BTreeMap<DigitLabel, Slot>>,
}

impl DatasetCache<ImageCrateDecoder> {
    /// Cache reading sources with the default `image`-crate decoder.
    pub fn with_default_decoder(config: PipelineConfig) -> Self {
        Self::new(config, ImageCrateDecoder)
    }
}

impl<D: ImageDecoder> DatasetCache<D> {
    pub fn new(config: PipelineConfig, decoder: D) -> Self {
        Self {
            config,
            decoder,
            slots: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Dataset for `label`, building it on first request.
    pub fn get_data_set(&self, label: DigitLabel) -> Result<Arc<DigitDataSet>, DatasetError> {
        let slot = self.slot(label);
        let mut entry = slot.lock().expect("dataset slot poisoned");
        if let Some(data_set) = entry.as_ref() {
            debug!("digit {label}: cache hit");
            return Ok(Arc::clone(data_set));
        }

        let path = self.config.source_path(label);
        info!("digit {label}: building dataset from {}", path.display());
        let built = load_raw_image(&path, &self.decoder)
            .and_then(|image| build_data_set(label, &image));

        match built {
            Ok(data_set) => {
                info!(
                    "digit {label}: {} training, {} testing samples",
                    data_set.training_set.len(),
                    data_set.testing_set.len()
                );
                let data_set = Arc::new(data_set);
                *entry = Some(Arc::clone(&data_set));
                Ok(data_set)
            }
            Err(err) => {
                warn!("digit {label}: build failed: {err}");
                Err(err)
            }
        }
    }

    /// Datasets for several labels, in the order given. Stops at the first failure.
    pub fn get_data_sets<I>(&self, labels: I) -> Result<Vec<Arc<DigitDataSet>>, DatasetError>
    where
        I: IntoIterator<Item = DigitLabel>,
    {
        labels
            .into_iter()
            .map(|label| self.get_data_set(label))
            .collect()
    }

    /// Whether a built dataset is stored for `label`.
    pub fn contains(&self, label: DigitLabel) -> bool {
        let slot = {
            let slots = self.slots.lock().expect("dataset cache poisoned");
            match slots.get(&label) {
                Some(slot) => Arc::clone(slot),
                None => return false,
            }
        };
        let filled = slot.lock().expect("dataset slot poisoned").is_some();
        filled
    }

    /// Labels with a stored dataset, ascending.
    pub fn cached_labels(&self) -> Vec<DigitLabel> {
        let labels: Vec<DigitLabel> = self
            .slots
            .lock()
            .expect("dataset cache poisoned")
            .keys()
            .copied()
            .collect();
        labels
            .into_iter()
            .filter(|&label| self.contains(label))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cached_labels().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, label: DigitLabel) -> Slot {
        let mut slots = self.slots.lock().expect("dataset cache poisoned");
        Arc::clone(slots.entry(label).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CELL_SIZE;
    use crate::data::model::RawImage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use tempfile::tempdir;

    struct CountingDecoder {
        calls: AtomicUsize,
    }

    impl ImageDecoder for CountingDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<RawImage, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawImage::filled(CELL_SIZE * 20, CELL_SIZE * 55, 255))
        }
    }

    fn cache_with_sources(labels: &[u8]) -> (tempfile::TempDir, DatasetCache<CountingDecoder>) {
        let dir = tempdir().unwrap();
        let config = PipelineConfig::with_root(dir.path());
        for &value in labels {
            let path = config.source_path(DigitLabel::new(value).unwrap());
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, b"grid").unwrap();
        }
        let decoder = CountingDecoder {
            calls: AtomicUsize::new(0),
        };
        (dir, DatasetCache::new(config, decoder))
    }

    #[test]
    fn concurrent_first_requests_build_once() {
        let (_dir, cache) = cache_with_sources(&[5]);
        let label = DigitLabel::new(5).unwrap();

        let results: Vec<Arc<DigitDataSet>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| cache.get_data_set(label).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.decoder.calls.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn cached_labels_lists_only_successful_builds() {
        let (_dir, cache) = cache_with_sources(&[1, 2]);
        let labels: Vec<DigitLabel> = [1, 2, 3]
            .into_iter()
            .map(|v| DigitLabel::new(v).unwrap())
            .collect();

        assert!(cache.get_data_sets(labels[..2].iter().copied()).is_ok());
        assert!(cache.get_data_set(labels[2]).is_err());

        assert_eq!(cache.cached_labels(), labels[..2].to_vec());
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(labels[2]));
    }
}
