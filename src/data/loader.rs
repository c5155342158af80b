use std::path::Path;

use crate::constants::CHANNELS_PER_PIXEL;
use crate::data::model::RawImage;
use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// Decoding capability
// ---------------------------------------------------------------------------

/// Turns encoded image bytes into a [`RawImage`].
///
/// The returned buffer must be channel-interleaved with at least one channel
/// per pixel; only channel 0 is read.
pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawImage, String>;
}

impl<D: ImageDecoder + ?Sized> ImageDecoder for &D {
    fn decode(&self, bytes: &[u8]) -> Result<RawImage, String> {
        (**self).decode(bytes)
    }
}

/// Default decoder backed by the `image` crate (JPEG and PNG).
///
/// Whatever the source color type, the output is RGBA8.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawImage, String> {
        let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(RawImage::new(
            width as usize,
            height as usize,
            rgba.into_raw(),
            CHANNELS_PER_PIXEL,
        ))
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the encoded bytes of a source image.
pub fn read_source(path: &Path) -> Result<Vec<u8>, DatasetError> {
    std::fs::read(path).map_err(|source| DatasetError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode the source image at `path`.
pub fn load_raw_image<D: ImageDecoder + ?Sized>(
    path: &Path,
    decoder: &D,
) -> Result<RawImage, DatasetError> {
    let bytes = read_source(path)?;
    decoder
        .decode(&bytes)
        .map_err(|reason| DatasetError::Decode {
            path: path.to_path_buf(),
            reason,
        })
}
