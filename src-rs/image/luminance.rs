// ITU-R BT.601 luma weights, in thousandths
const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;

/// Perceptual luminance `0.299 R + 0.587 G + 0.114 B`, unrounded.
///
/// The weighted sum is taken in integer thousandths and divided once, so the
/// result is the correctly rounded value of the exact sum: gray pixels map to
/// exactly their channel value and flooring never drops below an integer the
/// exact sum reaches.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    let milli = r as u32 * RED_WEIGHT + g as u32 * GREEN_WEIGHT + b as u32 * BLUE_WEIGHT;
    milli as f64 / 1000.0
}

/// Luminance of the first three channels of an RGBA pixel.
#[inline]
pub fn pixel_luminance(rgba: &[u8]) -> f64 {
    luminance(rgba[0], rgba[1], rgba[2])
}

/// Stores a real value into an 8-bit channel: truncates toward zero and
/// clamps to 0..=255. NaN stores as 0.
#[inline]
pub fn clamp_u8(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    value as u8
}

/// Writes `value` into R, G and B, leaving alpha alone.
#[inline]
pub fn fill_rgb(rgba: &mut [u8], value: u8) {
    rgba[..3].fill(value);
}
