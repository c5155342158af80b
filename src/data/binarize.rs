use crate::constants::{INTENSITY_THRESHOLD, MIN_WHITE_PIXELS};

/// Outcome of binarizing one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binarized {
    /// Enough "on" pixels; the 0/1 matrix in local row-major order.
    Accepted(Vec<u8>),
    /// Too sparse to be a digit.
    Rejected { white_count: usize },
}

impl Binarized {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Binarized::Accepted(_))
    }
}

/// Threshold a cell's channel-0 samples and apply the blank-cell rejection.
///
/// A sample is "on" when it is strictly greater than `INTENSITY_THRESHOLD`.
pub fn binarize_cell(samples: &[u8]) -> Binarized {
    let mut white_count = 0;
    let matrix: Vec<u8> = samples
        .iter()
        .map(|&sample| {
            if sample > INTENSITY_THRESHOLD {
                white_count += 1;
                1
            } else {
                0
            }
        })
        .collect();

    if white_count >= MIN_WHITE_PIXELS {
        Binarized::Accepted(matrix)
    } else {
        Binarized::Rejected { white_count }
    }
}
