use log::debug;

use crate::constants::{EXPECTED_SAMPLE_COUNT, TRAIN_SPLIT_POSITION};
use crate::data::binarize::{binarize_cell, Binarized};
use crate::data::model::{DigitDataSet, DigitLabel, DigitMatrix, RawImage};
use crate::data::partition::GridPartitioner;
use crate::error::DatasetError;

/// Build the training and testing samples for `label` from one source grid.
///
/// The grid must hold at least `EXPECTED_SAMPLE_COUNT` cells; this is checked
/// before any cell is read. Cells go to the training set while their 1-based
/// grid position is strictly below `TRAIN_SPLIT_POSITION`, and to the testing
/// set afterwards. Rejected cells still consume their position, so the split
/// is by grid position and not by accepted count.
pub fn build_data_set(label: DigitLabel, image: &RawImage) -> Result<DigitDataSet, DatasetError> {
    let grid = GridPartitioner::new(image);
    if grid.capacity() < EXPECTED_SAMPLE_COUNT {
        return Err(DatasetError::InsufficientCells {
            rows: grid.rows(),
            columns: grid.columns(),
            required: EXPECTED_SAMPLE_COUNT,
        });
    }

    let mut data_set = DigitDataSet::default();
    let mut rejected = 0usize;

    for cell in grid.cells() {
        let samples = grid.cell_samples(image, cell);
        match binarize_cell(&samples) {
            Binarized::Accepted(matrix) => {
                let sample = DigitMatrix::new(label, matrix);
                if cell.position < TRAIN_SPLIT_POSITION {
                    data_set.training_set.push(sample);
                } else {
                    data_set.testing_set.push(sample);
                }
            }
            Binarized::Rejected { white_count } => {
                rejected += 1;
                debug!(
                    "digit {label}: rejected cell at position {} ({white_count} white pixels)",
                    cell.position
                );
            }
        }
    }

    debug!(
        "digit {label}: {} training, {} testing, {rejected} rejected of {} cells",
        data_set.training_set.len(),
        data_set.testing_set.len(),
        grid.capacity()
    );
    Ok(data_set)
}
