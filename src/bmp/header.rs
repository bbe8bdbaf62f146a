//! BMP file and info headers, read field by field as little-endian

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{BmpError, Result};

/// "BM" read as a little-endian u16
pub const SIGNATURE: u16 = 0x4D42;
pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;

/// BI_RGB
pub const COMPRESSION_NONE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub data_offset: u32,
}

impl FileHeader {
    /// Reads the 14-byte file header. Fails before reading further if the
    /// signature is not "BM".
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let signature = reader.read_u16::<LittleEndian>()?;
        if signature != SIGNATURE {
            return Err(BmpError::InvalidSignature(signature));
        }

        Ok(FileHeader {
            signature,
            file_size: reader.read_u32::<LittleEndian>()?,
            reserved1: reader.read_u16::<LittleEndian>()?,
            reserved2: reader.read_u16::<LittleEndian>()?,
            data_offset: reader.read_u32::<LittleEndian>()?,
        })
    }
}

/// BITMAPINFOHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(InfoHeader {
            header_size: reader.read_u32::<LittleEndian>()?,
            width: reader.read_i32::<LittleEndian>()?,
            height: reader.read_i32::<LittleEndian>()?,
            planes: reader.read_u16::<LittleEndian>()?,
            bit_count: reader.read_u16::<LittleEndian>()?,
            compression: reader.read_u32::<LittleEndian>()?,
            image_size: reader.read_u32::<LittleEndian>()?,
            x_pixels_per_meter: reader.read_i32::<LittleEndian>()?,
            y_pixels_per_meter: reader.read_i32::<LittleEndian>()?,
            colors_used: reader.read_u32::<LittleEndian>()?,
            colors_important: reader.read_u32::<LittleEndian>()?,
        })
    }

    #[inline]
    pub fn abs_width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    #[inline]
    pub fn abs_height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Negative height marks top-down row storage
    #[inline]
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Whole bytes per pixel; 0 for sub-byte depths
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bit_count / 8) as usize
    }
}

/// Filler bytes after each row so that its length is a multiple of 4
#[inline]
pub fn row_padding(width: usize, bytes_per_pixel: usize) -> usize {
    (4 - (width * bytes_per_pixel) % 4) % 4
}
