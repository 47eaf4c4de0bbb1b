//! Monochrome transforms over RGBA pixel buffers: grayscale, flat threshold,
//! 4x4 Bayer ordered dithering, and Floyd-Steinberg / Atkinson error
//! diffusion. Every transform rewrites R, G and B in place and leaves alpha
//! untouched.
//!
//! ```
//! use monodither::PixelBuffer;
//!
//! let mut data = vec![255, 0, 0, 255];
//! let mut image = PixelBuffer::new(&mut data, 1, 1).unwrap();
//! image.grayscale();
//! assert_eq!(data, [76, 76, 76, 255]);
//! ```
//!
//! Built for `wasm32`, the same operations are exported to JavaScript and
//! mutate a canvas `ImageData` directly.
// std is required: `f64::floor` is not in core, and the native cdylib needs
// an allocator and panic handler.
extern crate alloc;

pub mod image;
pub mod mode;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use image::{
    atkinson, bayer, floyd_steinberg, grayscale, luminance, threshold, BufferError, PixelBuffer,
};
pub use mode::{DitherMode, ModeError, DEFAULT_THRESHOLD};
