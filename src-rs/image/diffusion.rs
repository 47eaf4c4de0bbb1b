use alloc::vec::Vec;

use super::luminance::{clamp_u8, fill_rgb, pixel_luminance};
use super::PixelBuffer;

/// Plane luminance at or above this binarizes to white.
pub const WHITE_CUTOFF: u8 = 129;

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`. Offsets are flattened into the
/// row-major plane as `dy * width + dx` and never clipped at the sides:
/// from the last column `+1` lands at the start of the next row, from the
/// first column `dy * width - 1` lands at the end of the row above it. Each
/// neighbour receives `weight * floor(error / divisor)`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub entries: &'static [(isize, usize, i32)],
    pub divisor: i32,
}

/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Propagates 6/8 of the error; the rest is discarded.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

impl Kernel {
    pub fn total_weight(&self) -> i32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }

    /// Flat plane offsets for a row of `width` pixels.
    fn offsets(&self, width: usize) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.entries.iter().filter_map(move |&(dx, dy, weight)| {
            (dy * width)
                .checked_add_signed(dx)
                .map(|offset| (offset, weight))
        })
    }
}

/// Scratch plane of 8-bit clamped luminance, one value per pixel.
pub struct LuminancePlane {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl LuminancePlane {
    pub fn from_pixels(image: &PixelBuffer) -> LuminancePlane {
        let &PixelBuffer {
            data: ref source,
            width,
            height,
        } = image;
        LuminancePlane {
            data: source
                .chunks_exact(4)
                .take(width * height)
                .map(|rgba| clamp_u8(pixel_luminance(rgba)))
                .collect(),
            width,
            height,
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Adds `amount` at `index` with a clamped store. Returns false if the
    /// index is past the end of the plane, in which case nothing is written.
    #[inline]
    pub fn accumulate(&mut self, index: usize, amount: i32) -> bool {
        match self.data.get_mut(index) {
            Some(value) => {
                *value = (*value as i32 + amount).clamp(0, 255) as u8;
                true
            }
            None => false,
        }
    }
}

/// Scans the plane in raster order, binarizing each value into the pixel
/// buffer and pushing the floored quantization error forward through
/// `kernel` into the same plane.
pub fn diffuse(image: &mut PixelBuffer, kernel: &Kernel) {
    let mut plane = LuminancePlane::from_pixels(image);
    let width = plane.width;
    let mut dropped = 0usize;
    for (l, rgba) in image.data.chunks_exact_mut(4).enumerate() {
        let Some(current) = plane.get(l) else { break };
        let value = if current < WHITE_CUTOFF { 0 } else { 255 };
        fill_rgb(rgba, value as u8);
        let error = (current as i32 - value).div_euclid(kernel.divisor);
        for (offset, weight) in kernel.offsets(width) {
            if !plane.accumulate(l + offset, error * weight) {
                dropped += 1;
            }
        }
    }
    log::debug!(
        "diffused {}x{} (divisor {}), {} writes past the plane dropped",
        plane.width,
        plane.height,
        kernel.divisor,
        dropped
    );
}

pub fn floyd_steinberg(image: &mut PixelBuffer) {
    log::trace!("floyd-steinberg {}x{}", image.width, image.height);
    diffuse(image, &FLOYD_STEINBERG);
}

pub fn atkinson(image: &mut PixelBuffer) {
    log::trace!("atkinson {}x{}", image.width, image.height);
    diffuse(image, &ATKINSON);
}
