use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::constants::{CELL_AREA, CHANNELS_PER_PIXEL};
use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// DigitLabel – which digit a sample or dataset belongs to
// ---------------------------------------------------------------------------

/// A digit label in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DigitLabel(u8);

impl DigitLabel {
    /// Every label, in ascending order.
    pub const ALL: [DigitLabel; 10] = [
        DigitLabel(0),
        DigitLabel(1),
        DigitLabel(2),
        DigitLabel(3),
        DigitLabel(4),
        DigitLabel(5),
        DigitLabel(6),
        DigitLabel(7),
        DigitLabel(8),
        DigitLabel(9),
    ];

    pub fn new(value: u8) -> Result<Self, DatasetError> {
        if value > 9 {
            return Err(DatasetError::InvalidLabel(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DigitLabel {
    type Error = DatasetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DigitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RawImage – decoded pixel buffer
// ---------------------------------------------------------------------------

/// A decoded, channel-interleaved pixel buffer.
///
/// Only channel 0 of each pixel is read by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
    pub channels_per_pixel: usize,
}

impl RawImage {
    pub fn new(width: usize, height: usize, pixels: Vec<u8>, channels_per_pixel: usize) -> Self {
        Self {
            width,
            height,
            pixels,
            channels_per_pixel,
        }
    }

    /// An RGBA image of the given size with every byte set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(
            width,
            height,
            vec![value; width * height * CHANNELS_PER_PIXEL],
            CHANNELS_PER_PIXEL,
        )
    }

    /// Channel-0 sample at a byte offset, or `None` past either end of the buffer.
    pub fn sample_at(&self, byte_offset: i64) -> Option<u8> {
        usize::try_from(byte_offset)
            .ok()
            .and_then(|offset| self.pixels.get(offset).copied())
    }
}

// ---------------------------------------------------------------------------
// DigitMatrix – one accepted cell
// ---------------------------------------------------------------------------

/// A binarized cell: `CELL_SIZE²` entries, each 0 or 1, in local row-major order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DigitMatrix {
    pub label: DigitLabel,
    pub matrix: Vec<u8>,
}

impl DigitMatrix {
    pub fn new(label: DigitLabel, matrix: Vec<u8>) -> Self {
        debug_assert_eq!(matrix.len(), CELL_AREA);
        Self { label, matrix }
    }

    /// Number of "on" entries.
    pub fn white_count(&self) -> usize {
        self.matrix.iter().filter(|&&v| v == 1).count()
    }
}

// ---------------------------------------------------------------------------
// DigitDataSet – training and testing samples
// ---------------------------------------------------------------------------

/// Training and testing samples.
///
/// Built for one label, every element shares that label. After
/// [`combine_data_sets`](crate::combine_data_sets) labels are mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigitDataSet {
    pub training_set: Vec<DigitMatrix>,
    pub testing_set: Vec<DigitMatrix>,
}

impl DigitDataSet {
    /// Total number of samples across both subsets.
    pub fn len(&self) -> usize {
        self.training_set.len() + self.testing_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.training_set.is_empty() && self.testing_set.is_empty()
    }

    /// Count samples per label and subset.
    pub fn summary(&self) -> DataSetSummary {
        let mut per_label: BTreeMap<u8, LabelCounts> = BTreeMap::new();
        for sample in &self.training_set {
            per_label.entry(sample.label.value()).or_default().training += 1;
        }
        for sample in &self.testing_set {
            per_label.entry(sample.label.value()).or_default().testing += 1;
        }
        DataSetSummary {
            training: self.training_set.len(),
            testing: self.testing_set.len(),
            per_label,
        }
    }
}

impl AsRef<DigitDataSet> for DigitDataSet {
    fn as_ref(&self) -> &DigitDataSet {
        self
    }
}

/// Per-label sample counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub training: usize,
    pub testing: usize,
}

/// Sample counts of a [`DigitDataSet`], keyed by label value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataSetSummary {
    pub training: usize,
    pub testing: usize,
    pub per_label: BTreeMap<u8, LabelCounts>,
}
