//! BMP codec implementation in pure Rust

mod decoder;
mod encoder;
mod header;

pub use decoder::{
    decode, decode_bmp, decode_with, load_bmp, read_dimensions, DecodeOptions, RgbaImage, RowOrder,
};
pub use encoder::{encode_bmp, BitDepth};
pub use header::{row_padding, FileHeader, InfoHeader};

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

/// Decoded image handed to JS
#[wasm_bindgen]
pub struct DecodedImage {
    image: RgbaImage,
}

#[wasm_bindgen]
impl DecodedImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.image.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// RGBA bytes, top-down; copied into a fresh `Uint8Array`
    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Uint8Array {
        Uint8Array::from(&self.image.data[..])
    }
}

/// Decode BMP to RGBA
#[wasm_bindgen(js_name = decodeBmp)]
pub fn decode_bmp_js(data: &[u8]) -> Result<DecodedImage, JsError> {
    decode_bmp(data)
        .map(|image| DecodedImage { image })
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Encode RGBA to BMP, 32-bit when `with_alpha` is set, 24-bit otherwise
#[wasm_bindgen(js_name = encodeBmp)]
pub fn encode_bmp_js(
    width: u32,
    height: u32,
    data: &[u8],
    with_alpha: bool,
) -> Result<Vec<u8>, JsError> {
    let depth = if with_alpha { BitDepth::Bgra32 } else { BitDepth::Bgr24 };
    encode_bmp(width, height, data, depth).map_err(|e| JsError::new(&e.to_string()))
}

/// Get decoded image dimensions from BMP header
#[wasm_bindgen(js_name = getBmpDimensions)]
pub fn get_bmp_dimensions(data: &[u8]) -> Result<Vec<u32>, JsError> {
    let (width, height) = read_dimensions(data).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(vec![width, height])
}
