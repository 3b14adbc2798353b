use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};
use std::path::Path;

use crate::error::{Result, VoteError};

/// Turns a frame file into something the UI can draw
pub trait FrameLoader {
    type Handle: Clone;

    fn load(&self, path: &Path) -> Result<Self::Handle>;
}

/// Decodes a JPEG and stretches it to a fixed square size
#[derive(Debug, Clone, Copy)]
pub struct ScaledFrameLoader {
    /// Side length in pixels
    pub size: u32,
}

impl ScaledFrameLoader {
    pub fn new(size: u32) -> Self {
        Self { size: size.max(1) }
    }
}

impl FrameLoader for ScaledFrameLoader {
    type Handle = Handle;

    fn load(&self, path: &Path) -> Result<Handle> {
        let rgba = decode_scaled(path, self.size)?;
        let (width, height) = rgba.dimensions();
        log::debug!("🖼️ Loaded {} ({}x{})", path.display(), width, height);
        Ok(Handle::from_rgba(width, height, rgba.into_raw()))
    }
}

/// Decode the image at `path` and resize it to exactly `size` x `size`
pub fn decode_scaled(path: &Path, size: u32) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| VoteError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(img.resize_exact(size, size, FilterType::Triangle).to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_decode_scales_to_square() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("person_1_frame_2.jpg");
        RgbImage::from_pixel(40, 24, Rgb([200, 30, 30])).save(&path).unwrap();

        let scaled = decode_scaled(&path, 16).unwrap();
        assert_eq!(scaled.dimensions(), (16, 16));
    }

    #[test]
    fn test_loader_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("person_1_frame_2.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();

        let err = ScaledFrameLoader::new(8).load(&path).unwrap_err();
        assert!(matches!(err, VoteError::Image { .. }));
    }

    #[test]
    fn test_loader_produces_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        RgbImage::new(10, 10).save(&path).unwrap();

        assert!(ScaledFrameLoader::new(4).load(&path).is_ok());
    }
}
