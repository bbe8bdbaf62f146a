//! bmp-texture: BMP decoding for OpenGL/WebGL textures
//!
//! Decodes uncompressed 24/32-bit BMP files into top-down RGBA buffers ready
//! for a 2D texture upload. Builds natively or as WebAssembly.

use wasm_bindgen::prelude::*;

pub mod bmp;
pub mod error;
pub mod texture;
pub mod utils;

pub use bmp::{
    decode, decode_bmp, decode_with, encode_bmp, load_bmp, BitDepth, DecodeOptions, RgbaImage,
    RowOrder,
};
pub use error::{BmpError, ErrorKind, Result, UnsupportedFormat};
pub use texture::TextureUpload;

/// Get WASM module version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if threading is available
#[wasm_bindgen(js_name = hasThreads)]
pub fn has_threads() -> bool {
    cfg!(feature = "threads")
}
