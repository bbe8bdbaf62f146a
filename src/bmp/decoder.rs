//! BMP decoder - uncompressed 24/32-bit BGR(A) to top-down RGBA

use std::fs;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use log::{debug, trace, warn};
#[cfg(feature = "threads")]
use rayon::prelude::*;

use super::header::{row_padding, FileHeader, InfoHeader, COMPRESSION_NONE};
use crate::error::{BmpError, Result, UnsupportedFormat};

/// Decoded image, row-major top-down, 4 bytes per pixel (R, G, B, A)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// RGBA of the pixel at `(x, y)`, `y = 0` being the top row
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// How the sign of the info header height is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Positive height is bottom-up, negative height is top-down
    #[default]
    FromHeader,
    /// Always bottom-up. Negative-height files come out upside down, matching
    /// loaders that ignore the sign.
    AlwaysBottomUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub row_order: RowOrder,
    /// Upper bound on `width * height`, checked before anything is allocated
    pub max_pixels: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            row_order: RowOrder::FromHeader,
            max_pixels: 1 << 28,
        }
    }
}

/// Decode a BMP stream with default options
pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<RgbaImage> {
    decode_with(reader, &DecodeOptions::default())
}

/// Decode a BMP stream
///
/// Reads the file and info headers, seeks to the pixel array and reads it row
/// by row, skipping the padding after each row. The bit depth is only checked
/// once the pixel rows are in memory.
pub fn decode_with<R: Read + Seek>(reader: &mut R, options: &DecodeOptions) -> Result<RgbaImage> {
    let file_header = FileHeader::read_from(reader)?;
    let info = InfoHeader::read_from(reader)?;

    let width = info.abs_width();
    let height = info.abs_height();

    if info.compression != COMPRESSION_NONE {
        return Err(UnsupportedFormat::Compression(info.compression).into());
    }

    let bytes_per_pixel = info.bytes_per_pixel();
    let too_large = || BmpError::TooLarge { width, height };

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .filter(|&count| count <= options.max_pixels)
        .ok_or_else(too_large)?;
    let row_len = (width as usize)
        .checked_mul(bytes_per_pixel)
        .ok_or_else(too_large)?;
    let pixel_len = row_len
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;

    let padding = row_padding(width as usize, bytes_per_pixel);
    let top_down = options.row_order == RowOrder::FromHeader && info.is_top_down();

    debug!(
        "BMP {}x{} {} bpp, data at {}, row {} + {} padding, {}",
        width,
        height,
        info.bit_count,
        file_header.data_offset,
        row_len,
        padding,
        if top_down { "top-down" } else { "bottom-up" }
    );

    // The last row needs no trailing padding
    let required = if row_len == 0 || height == 0 {
        0
    } else {
        (row_len + padding)
            .checked_mul(height as usize - 1)
            .and_then(|n| n.checked_add(row_len))
            .ok_or_else(too_large)?
    };
    let stream_len = reader.seek(SeekFrom::End(0))?;
    let available = stream_len.saturating_sub(file_header.data_offset as u64);
    if required as u64 > available {
        return Err(BmpError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("pixel array needs {} bytes, stream has {}", required, available),
        )));
    }

    reader.seek(SeekFrom::Start(file_header.data_offset as u64))?;

    let height = height as usize;
    let mut pixels = vec![0u8; pixel_len];
    if row_len > 0 {
        for i in 0..height {
            let y = if top_down { i } else { height - 1 - i };
            let start = y * row_len;
            reader.read_exact(&mut pixels[start..start + row_len])?;
            if padding > 0 {
                reader.seek(SeekFrom::Current(padding as i64))?;
            }
        }
    }
    trace!("read {} pixel rows ({} bytes)", height, pixel_len);

    let data = if pixel_count > 0 {
        convert_to_rgba(&pixels, width as usize, bytes_per_pixel, info.bit_count)?
    } else {
        Vec::new()
    };

    Ok(RgbaImage {
        width,
        height: height as u32,
        data,
    })
}

/// Decode a BMP held in memory
pub fn decode_bmp(data: &[u8]) -> Result<RgbaImage> {
    decode(&mut Cursor::new(data))
}

/// Open and decode a BMP file
pub fn load_bmp<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let result = fs::read(path)
        .map_err(BmpError::from)
        .and_then(|bytes| decode_bmp(&bytes));

    if let Err(err) = &result {
        warn!("could not load BMP {}: {}", path.display(), err);
    }
    result
}

/// Width and height from the headers, without reading pixel data
pub fn read_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    let mut cursor = Cursor::new(data);
    FileHeader::read_from(&mut cursor)?;
    let info = InfoHeader::read_from(&mut cursor)?;
    Ok((info.abs_width(), info.abs_height()))
}

/// BGR(A) rows to RGBA rows. `pixels` is already top-down.
fn convert_to_rgba(
    pixels: &[u8],
    width: usize,
    bytes_per_pixel: usize,
    bit_count: u16,
) -> Result<Vec<u8>> {
    if bytes_per_pixel != 3 && bytes_per_pixel != 4 {
        return Err(UnsupportedFormat::BitDepth(bit_count).into());
    }

    let mut output = vec![0u8; pixels.len() / bytes_per_pixel * 4];

    let src_stride = width * bytes_per_pixel;
    let dst_stride = width * 4;

    #[cfg(feature = "threads")]
    output
        .par_chunks_mut(dst_stride)
        .zip(pixels.par_chunks(src_stride))
        .for_each(|(dst, src)| convert_row(src, dst, bytes_per_pixel));

    #[cfg(not(feature = "threads"))]
    output
        .chunks_mut(dst_stride)
        .zip(pixels.chunks(src_stride))
        .for_each(|(dst, src)| convert_row(src, dst, bytes_per_pixel));

    Ok(output)
}

#[inline]
fn convert_row(src: &[u8], dst: &mut [u8], bytes_per_pixel: usize) {
    for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(bytes_per_pixel)) {
        out[0] = px[2];
        out[1] = px[1];
        out[2] = px[0];
        out[3] = if bytes_per_pixel == 4 { px[3] } else { 255 };
    }
}
