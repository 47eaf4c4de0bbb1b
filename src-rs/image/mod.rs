use thiserror::Error;

mod bayer;
mod diffusion;
mod grayscale;
pub mod luminance;
mod threshold;

pub use bayer::{bayer, THRESHOLD_MATRIX};
pub use diffusion::{
    atkinson, diffuse, floyd_steinberg, Kernel, LuminancePlane, ATKINSON, FLOYD_STEINBERG,
    WHITE_CUTOFF,
};
pub use grayscale::grayscale;
pub use luminance::luminance;
pub use threshold::threshold;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("buffer holds {actual} bytes, {expected} expected for the given dimensions")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("dimensions {width}x{height} overflow the address space")]
    DimensionsOverflow { width: usize, height: usize },
}

/// Caller-owned RGBA pixels, row-major, 4 bytes per pixel, no padding.
///
/// Operations borrow the buffer for the duration of one call and never
/// resize it. `data.len()` is expected to equal `width * height * 4`; use
/// [`PixelBuffer::new`] to have that checked.
pub struct PixelBuffer<'a> {
    pub data: &'a mut [u8],
    pub width: usize,
    pub height: usize,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Result<Self, BufferError> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(BufferError::DimensionsOverflow { width, height })?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            data,
            width,
            height,
        })
    }

    pub fn grayscale(&mut self) {
        grayscale::grayscale(self)
    }

    pub fn threshold(&mut self, threshold: f64) {
        threshold::threshold(self, threshold)
    }

    pub fn bayer(&mut self, threshold: f64) {
        bayer::bayer(self, threshold)
    }

    pub fn floyd_steinberg(&mut self) {
        diffusion::floyd_steinberg(self)
    }

    pub fn atkinson(&mut self) {
        diffusion::atkinson(self)
    }

    pub fn to_luminance(&self) -> LuminancePlane {
        LuminancePlane::from_pixels(self)
    }
}
