use super::luminance::{fill_rgb, pixel_luminance};
use super::PixelBuffer;

/// Binarizes every pixel against `threshold`. Pixels strictly darker than the
/// threshold become black, everything else white.
pub fn threshold(image: &mut PixelBuffer, threshold: f64) {
    log::trace!("threshold {}x{} at {}", image.width, image.height, threshold);
    for rgba in image.data.chunks_exact_mut(4) {
        let value = if pixel_luminance(rgba) < threshold { 0 } else { 255 };
        fill_rgb(rgba, value);
    }
}
