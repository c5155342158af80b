//! Turns USPS handwritten-digit grid images into binarized training and
//! testing samples.
//!
//! One source image per digit packs a fixed grid of 16×16 thumbnails. The
//! pipeline decodes the image, walks the grid, binarizes each cell, drops
//! near-blank cells and splits the rest by grid position. Built datasets are
//! cached per label for the lifetime of a [`DatasetCache`] and can be merged
//! with [`combine_data_sets`].

/// Pipeline locations (where the per-digit source images live).
pub mod config;
/// Fixed grid and threshold constants.
pub mod constants;
/// Dataset types, grid walking, binarization, building and combining.
pub mod data;
/// Textual rendering of a sample matrix.
pub mod render;

mod cache;
mod error;

pub use cache::DatasetCache;
pub use config::PipelineConfig;
pub use data::binarize::{binarize_cell, Binarized};
pub use data::builder::build_data_set;
pub use data::combine::{combine_data_sets, IdentityShuffler, RandShuffler, Shuffler};
pub use data::loader::{load_raw_image, ImageCrateDecoder, ImageDecoder};
pub use data::model::{DataSetSummary, DigitDataSet, DigitLabel, DigitMatrix, LabelCounts, RawImage};
pub use data::partition::{Cell, GridPartitioner};
pub use error::DatasetError;
pub use render::{print_image, PrintOptions};
