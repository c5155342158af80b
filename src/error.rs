use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading, decoding and building digit datasets.
///
/// Rejected (near-blank) cells are not errors; they are filtered out while
/// building.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read source image '{}': {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode source image '{}': {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("image grid has {rows}x{columns} cells, at least {required} required")]
    InsufficientCells {
        rows: usize,
        columns: usize,
        required: usize,
    },
    #[error("digit label must be within 0..=9, got {0}")]
    InvalidLabel(u8),
    #[error("configuration error: {0}")]
    Config(String),
}

impl DatasetError {
    /// Whether the failure came from reading or decoding the source image.
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Self::ImageLoad { .. } | Self::Decode { .. })
    }
}
