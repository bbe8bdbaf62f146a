//! Little-endian helpers for fixed-offset header fields in byte slices

/// Read u16 little-endian from slice
#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Read u32 little-endian from slice
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

#[inline]
pub fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    read_u32_le(data, offset) as i32
}

/// Write u16 little-endian to slice
#[inline]
pub fn write_u16_le(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Write u32 little-endian to slice
#[inline]
pub fn write_u32_le(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[inline]
pub fn write_i32_le(data: &mut [u8], offset: usize, value: i32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_fields() {
        let mut buf = [0u8; 8];
        write_i32_le(&mut buf, 4, -2);
        assert_eq!(buf[4..], [0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(read_i32_le(&buf, 4), -2);
        assert_eq!(read_u32_le(&buf, 4), 0xFFFF_FFFE);
        assert_eq!(read_u16_le(&buf, 4), 0xFFFE);
    }
}
