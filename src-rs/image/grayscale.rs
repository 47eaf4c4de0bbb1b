use super::luminance::{clamp_u8, fill_rgb, pixel_luminance};
use super::PixelBuffer;

// replaces RGB with clamped luminance, alpha untouched
// TODO: SIMD

pub fn grayscale(image: &mut PixelBuffer) {
    log::trace!("grayscale {}x{}", image.width, image.height);
    for rgba in image.data.chunks_exact_mut(4) {
        let value = clamp_u8(pixel_luminance(rgba));
        fill_rgb(rgba, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::luminance::luminance;
    use pretty_assertions::assert_eq;

    #[test]
    fn red_becomes_4c4c4c() {
        let mut data = [255, 0, 0, 255];
        grayscale(&mut PixelBuffer::new(&mut data, 1, 1).unwrap());
        assert_eq!(data, [76, 76, 76, 255]);
    }

    #[test]
    fn matches_floored_luminance() {
        let mut data = [
            10, 200, 30, 1, //
            255, 255, 255, 2, //
            0, 0, 255, 3, //
            123, 45, 67, 4,
        ];
        let source = data;
        grayscale(&mut PixelBuffer::new(&mut data, 2, 2).unwrap());
        for (out, src) in data.chunks_exact(4).zip(source.chunks_exact(4)) {
            let expected = luminance(src[0], src[1], src[2]).floor() as u8;
            assert_eq!(out, &[expected, expected, expected, src[3]][..]);
        }
    }

    #[test]
    fn idempotent() {
        let mut data = [12, 34, 56, 78, 90, 12, 34, 56];
        grayscale(&mut PixelBuffer::new(&mut data, 2, 1).unwrap());
        let once = data;
        grayscale(&mut PixelBuffer::new(&mut data, 2, 1).unwrap());
        assert_eq!(data, once);
    }
}
