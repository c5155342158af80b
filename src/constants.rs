/// Side length of one digit cell, in pixels.
pub const CELL_SIZE: usize = 16;

/// Number of samples in one binarized cell matrix.
pub const CELL_AREA: usize = CELL_SIZE * CELL_SIZE;

/// A channel value strictly above this counts as an "on" pixel.
pub const INTENSITY_THRESHOLD: u8 = 60;

/// Cells with fewer "on" pixels than this are rejected as blank.
pub const MIN_WHITE_PIXELS: usize = 30;

/// Minimum number of grid cells a source image must declare.
pub const EXPECTED_SAMPLE_COUNT: usize = 1100;

/// 1-based grid position at which cells stop going to the training set.
///
/// The comparison is `position < TRAIN_SPLIT_POSITION`, so a fully accepted
/// grid yields 549 training and 551 testing samples. Keep it that way unless
/// downstream consumers agree to the shift.
pub const TRAIN_SPLIT_POSITION: usize = 550;

/// Placeholder replaced with the digit label in [`SOURCE_PATH_TEMPLATE`].
pub const DIGIT_PLACEHOLDER: &str = "{DIGIT}";

/// Per-digit source image path, relative to the configured data root.
pub const SOURCE_PATH_TEMPLATE: &str = "raw_data/usps_{DIGIT}.jpg";

/// Channels per pixel in a decoded [`RawImage`](crate::RawImage).
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Default symbol used by [`print_image`](crate::print_image) for "on" samples.
pub const PRINT_SYMBOL: char = '█';

/// Default threshold used by [`print_image`](crate::print_image).
pub const PRINT_THRESHOLD: f64 = 0.5;
