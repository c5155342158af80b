//! Data layer: decoding, grid walking, binarization, building and combining.
//!
//! Architecture:
//! ```text
//!   usps_{DIGIT}.jpg
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read bytes → ImageDecoder → RawImage
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐   ┌──────────┐
//!   │ partition  │ → │ binarize │  cell offsets → Accepted / Rejected
//!   └───────────┘   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ builder   │  positional train/test split → DigitDataSet
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ combine   │  concatenate several labels, optionally shuffle
//!   └──────────┘
//! ```

pub mod binarize;
pub mod builder;
pub mod combine;
pub mod loader;
pub mod model;
pub mod partition;
