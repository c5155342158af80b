use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::model::DigitDataSet;

// ---------------------------------------------------------------------------
// Shuffler – permutation capability used when combining
// ---------------------------------------------------------------------------

/// Produces a reordered copy of a sequence. The input is left untouched.
pub trait Shuffler {
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T>;
}

/// Uniform random permutation backed by `rand`.
#[derive(Debug, Clone)]
pub struct RandShuffler {
    rng: StdRng,
}

impl RandShuffler {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible permutations for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandShuffler {
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
    }
}

/// Returns its input order unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        items.to_vec()
    }
}

// ---------------------------------------------------------------------------
// Combining
// ---------------------------------------------------------------------------

/// Merge several datasets into one.
///
/// Training sets are concatenated in input order, testing sets likewise. With
/// `randomize`, each concatenation is shuffled independently. Inputs are
/// never modified.
pub fn combine_data_sets<I, D, S>(data_sets: I, randomize: bool, shuffler: &mut S) -> DigitDataSet
where
    I: IntoIterator<Item = D>,
    D: AsRef<DigitDataSet>,
    S: Shuffler,
{
    let mut combined = DigitDataSet::default();
    for data_set in data_sets {
        let data_set = data_set.as_ref();
        combined
            .training_set
            .extend(data_set.training_set.iter().cloned());
        combined
            .testing_set
            .extend(data_set.testing_set.iter().cloned());
    }

    if randomize {
        combined.training_set = shuffler.shuffle(&combined.training_set);
        combined.testing_set = shuffler.shuffle(&combined.testing_set);
    }

    debug!(
        "combined {} training and {} testing samples (randomize: {randomize})",
        combined.training_set.len(),
        combined.testing_set.len()
    );
    combined
}
