//! BMP encoder - RGBA to uncompressed 24/32-bit BMP

use super::header::{row_padding, FILE_HEADER_SIZE, INFO_HEADER_SIZE};
use crate::error::{BmpError, Result};
use crate::utils::{write_i32_le, write_u16_le, write_u32_le};

/// Pixel layout of the encoded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// BGR, alpha dropped
    Bgr24,
    /// BGRA
    Bgra32,
}

impl BitDepth {
    #[inline]
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Bgr24 => 24,
            BitDepth::Bgra32 => 32,
        }
    }

    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Encode top-down RGBA pixel data as a bottom-up BI_RGB bitmap
pub fn encode_bmp(width: u32, height: u32, data: &[u8], depth: BitDepth) -> Result<Vec<u8>> {
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(BmpError::TooLarge { width, height });
    }

    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(BmpError::TooLarge { width, height })?;
    if data.len() != expected_len {
        return Err(BmpError::InvalidInput {
            expected: expected_len,
            actual: data.len(),
        });
    }

    let bytes_per_pixel = depth.bytes_per_pixel();
    let width_px = width as usize;
    let row_stride = width_px * bytes_per_pixel + row_padding(width_px, bytes_per_pixel);
    let pixel_data_size = row_stride * height as usize;
    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

    let file_size = u32::try_from(data_offset as usize + pixel_data_size)
        .map_err(|_| BmpError::TooLarge { width, height })?;
    let mut output = vec![0u8; file_size as usize];

    // File header (14 bytes)
    output[0] = b'B';
    output[1] = b'M';
    write_u32_le(&mut output, 2, file_size);
    write_u16_le(&mut output, 6, 0); // Reserved
    write_u16_le(&mut output, 8, 0); // Reserved
    write_u32_le(&mut output, 10, data_offset);

    // BITMAPINFOHEADER (40 bytes)
    write_u32_le(&mut output, 14, INFO_HEADER_SIZE);
    write_i32_le(&mut output, 18, width as i32);
    write_i32_le(&mut output, 22, height as i32); // Positive = bottom-up
    write_u16_le(&mut output, 26, 1); // Planes
    write_u16_le(&mut output, 28, depth.bits());
    write_u32_le(&mut output, 30, 0); // BI_RGB
    write_u32_le(&mut output, 34, pixel_data_size as u32);
    write_i32_le(&mut output, 38, 2835); // X pixels per meter (~72 DPI)
    write_i32_le(&mut output, 42, 2835); // Y pixels per meter
    write_u32_le(&mut output, 46, 0); // Colors used
    write_u32_le(&mut output, 50, 0); // Important colors

    // Pixel rows, bottom-up; padding stays zeroed
    let data_start = data_offset as usize;
    for y in 0..height as usize {
        let src_y = height as usize - 1 - y;
        let src_row = &data[src_y * width_px * 4..(src_y + 1) * width_px * 4];
        let dst_start = data_start + y * row_stride;
        let dst_row = &mut output[dst_start..dst_start + width_px * bytes_per_pixel];

        for (dst, src) in dst_row.chunks_exact_mut(bytes_per_pixel).zip(src_row.chunks_exact(4)) {
            // RGBA -> BGR(A)
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
            if depth == BitDepth::Bgra32 {
                dst[3] = src[3];
            }
        }
    }

    Ok(output)
}
