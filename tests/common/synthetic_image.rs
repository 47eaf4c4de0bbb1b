/// RGBA horizontal ramp with a distinct alpha per pixel.
pub fn gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let span = (width - 1).max(1);
    let mut img = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) * 4;
            let level = (x * 255 / span) as u8;
            img[i] = level;
            img[i + 1] = level.wrapping_add((y * 37) as u8);
            img[i + 2] = 255 - level;
            img[i + 3] = ((x * 31 + y * 17) % 256) as u8;
        }
    }
    img
}

pub fn alpha(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(4).map(|px| px[3]).collect()
}

pub fn red_pixel(alpha: u8) -> [u8; 4] {
    [255, 0, 0, alpha]
}
