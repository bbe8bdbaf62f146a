//! Parameters for uploading a decoded image as a 2D texture
//!
//! Only the `gl` enums are used here, no GL calls, so the descriptor can be fed
//! to `gl::TexImage2D` or, since WebGL shares the values, to `texImage2D`.

use gl::types::{GLenum, GLint};

use crate::bmp::RgbaImage;

/// A decoded image plus the upload configuration used for it: repeat wrap,
/// linear filtering, RGBA8 at mip level 0.
#[derive(Debug, Clone, Copy)]
pub struct TextureUpload<'a> {
    pub target: GLenum,
    pub level: GLint,
    pub internal_format: GLint,
    pub width: u32,
    pub height: u32,
    pub format: GLenum,
    pub data_type: GLenum,
    pub pixels: &'a [u8],
    pub wrap: GLint,
    pub filter: GLint,
}

impl<'a> TextureUpload<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        TextureUpload {
            target: gl::TEXTURE_2D,
            level: 0,
            internal_format: gl::RGBA as GLint,
            width: image.width,
            height: image.height,
            format: gl::RGBA,
            data_type: gl::UNSIGNED_BYTE,
            pixels: &image.data,
            wrap: gl::REPEAT as GLint,
            filter: gl::LINEAR as GLint,
        }
    }

    /// `(pname, param)` pairs for `glTexParameteri`, in the order they are set
    pub fn tex_parameters(&self) -> [(GLenum, GLint); 4] {
        [
            (gl::TEXTURE_WRAP_S, self.wrap),
            (gl::TEXTURE_WRAP_T, self.wrap),
            (gl::TEXTURE_MIN_FILTER, self.filter),
            (gl::TEXTURE_MAG_FILTER, self.filter),
        ]
    }
}

impl<'a> From<&'a RgbaImage> for TextureUpload<'a> {
    fn from(image: &'a RgbaImage) -> Self {
        TextureUpload::new(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_descriptor() {
        let image = RgbaImage {
            width: 2,
            height: 1,
            data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        };
        let upload = TextureUpload::from(&image);

        assert_eq!(upload.target, gl::TEXTURE_2D);
        assert_eq!(upload.level, 0);
        assert_eq!(upload.internal_format, gl::RGBA as GLint);
        assert_eq!(upload.format, gl::RGBA);
        assert_eq!(upload.data_type, gl::UNSIGNED_BYTE);
        assert_eq!((upload.width, upload.height), (2, 1));
        assert_eq!(upload.pixels.len(), (upload.width * upload.height * 4) as usize);
        assert_eq!(
            upload.tex_parameters(),
            [
                (gl::TEXTURE_WRAP_S, gl::REPEAT as GLint),
                (gl::TEXTURE_WRAP_T, gl::REPEAT as GLint),
                (gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint),
                (gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint),
            ]
        );
    }

    #[test]
    fn test_enum_values_match_webgl() {
        // WebGL callers pass these through as plain numbers
        let image = RgbaImage {
            width: 0,
            height: 0,
            data: Vec::new(),
        };
        let upload = TextureUpload::new(&image);
        assert_eq!(upload.target, 0x0DE1);
        assert_eq!(upload.format, 0x1908);
        assert_eq!(upload.data_type, 0x1401);
        assert_eq!(upload.wrap, 0x2901);
        assert_eq!(upload.filter, 0x2601);
    }
}
