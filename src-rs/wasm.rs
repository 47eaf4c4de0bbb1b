use alloc::string::ToString;

use js_sys::{Reflect, Uint8ClampedArray};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::ImageData;

use crate::image::PixelBuffer;
use crate::mode::DitherMode;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// ImageData::data() hands back a copy, so write through the live array
fn with_pixels(image: &ImageData, mode: DitherMode) -> Result<(), JsValue> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let array: Uint8ClampedArray = Reflect::get(image, &JsValue::from_str("data"))?.dyn_into()?;
    let mut data = array.to_vec();
    let mut pixels = PixelBuffer::new(&mut data, width, height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    mode.apply(&mut pixels);
    array.copy_from(&data);
    Ok(())
}

#[wasm_bindgen]
pub fn grayscale(image: &ImageData) -> Result<(), JsValue> {
    with_pixels(image, DitherMode::Grayscale)
}

#[wasm_bindgen]
pub fn threshold(image: &ImageData, threshold: f64) -> Result<(), JsValue> {
    with_pixels(image, DitherMode::Threshold(threshold))
}

#[wasm_bindgen]
pub fn bayer(image: &ImageData, threshold: f64) -> Result<(), JsValue> {
    with_pixels(image, DitherMode::Bayer(threshold))
}

#[wasm_bindgen]
pub fn floydsteinberg(image: &ImageData) -> Result<(), JsValue> {
    with_pixels(image, DitherMode::FloydSteinberg)
}

#[wasm_bindgen]
pub fn atkinson(image: &ImageData) -> Result<(), JsValue> {
    with_pixels(image, DitherMode::Atkinson)
}

/// Applies the transform named by `mode`, e.g. `"atkinson"` or `"bayer"`.
#[wasm_bindgen]
pub fn dither(image: &ImageData, mode: &str, threshold: Option<f64>) -> Result<(), JsValue> {
    let mode = DitherMode::parse(mode, threshold).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_pixels(image, mode)
}
