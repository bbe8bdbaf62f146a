//! Error types for BMP decoding and encoding

use std::fmt;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BmpError>;

/// Reasons a well-formed BMP is still rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFormat {
    /// Anything other than BI_RGB
    Compression(u32),
    /// Anything other than 24 or 32 bits per pixel
    BitDepth(u16),
}

impl fmt::Display for UnsupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedFormat::Compression(code) => {
                write!(f, "compressed BMPs are not supported (compression {})", code)
            }
            UnsupportedFormat::BitDepth(bits) => {
                write!(f, "unsupported BMP bit depth: {} bits per pixel", bits)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum BmpError {
    #[error("BMP I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid BMP signature 0x{0:04X}, expected 0x4D42 (\"BM\")")]
    InvalidSignature(u16),

    #[error("{0}")]
    Unsupported(UnsupportedFormat),

    #[error("BMP dimensions {width}x{height} exceed the decode limit")]
    TooLarge { width: u32, height: u32 },

    #[error("RGBA length mismatch: expected {expected}, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
}

/// Coarse error category, for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    UnsupportedFormat,
    TooLarge,
    InvalidInput,
}

impl BmpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BmpError::Io(_) => ErrorKind::Io,
            BmpError::InvalidSignature(_) => ErrorKind::Format,
            BmpError::Unsupported(_) => ErrorKind::UnsupportedFormat,
            BmpError::TooLarge { .. } => ErrorKind::TooLarge,
            BmpError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl From<UnsupportedFormat> for BmpError {
    fn from(reason: UnsupportedFormat) -> Self {
        BmpError::Unsupported(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        assert_eq!(BmpError::from(eof).kind(), ErrorKind::Io);
        assert_eq!(BmpError::InvalidSignature(0x424D).kind(), ErrorKind::Format);
        assert_eq!(
            BmpError::from(UnsupportedFormat::Compression(1)).kind(),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(
            BmpError::InvalidInput {
                expected: 16,
                actual: 15
            }
            .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            BmpError::InvalidSignature(0x424D).to_string(),
            "invalid BMP signature 0x424D, expected 0x4D42 (\"BM\")"
        );
        assert_eq!(
            BmpError::from(UnsupportedFormat::BitDepth(8)).to_string(),
            "unsupported BMP bit depth: 8 bits per pixel"
        );
    }
}
