use super::luminance::{fill_rgb, pixel_luminance};
use super::PixelBuffer;

/// 4x4 ordered dither bias, addressed `[x % 4][y % 4]`.
pub static THRESHOLD_MATRIX: [[u8; 4]; 4] = [
    [15, 135, 45, 165],
    [195, 75, 225, 105],
    [60, 180, 30, 150],
    [240, 120, 210, 90],
];

#[inline]
pub fn bias(x: usize, y: usize) -> u8 {
    THRESHOLD_MATRIX[x & 3][y & 3]
}

/// Ordered dither: averages each pixel's luminance with the matrix bias at
/// its position, then thresholds the floored average.
pub fn bayer(image: &mut PixelBuffer, threshold: f64) {
    let width = image.width;
    log::trace!("bayer {}x{} at {}", width, image.height, threshold);
    if width == 0 {
        return;
    }
    for (p, rgba) in image.data.chunks_exact_mut(4).enumerate() {
        let x = p % width;
        let y = p / width;
        let biased = ((pixel_luminance(rgba) + bias(x, y) as f64) / 2.0).floor();
        let value = if biased < threshold { 0 } else { 255 };
        fill_rgb(rgba, value);
    }
}
