//! Image export.
//!
//! The pixel buffer holds linear colors in [0, 1]. Each component is
//! clamped and scaled straight to 8 bits; no gamma curve is applied.

use std::path::Path;

use glint_core::Color;
use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Work out the image format for `path` from its extension.
///
/// Fails if the extension is missing, unknown, or names a format the
/// `image` crate can only decode.
pub fn check_output_path(path: &Path) -> ExportResult<ImageFormat> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| ExportError::UnsupportedFormat(path.display().to_string()))?;

    if !format.can_write() {
        return Err(ExportError::UnsupportedFormat(format!(
            "{} ({:?} is read-only)",
            path.display(),
            format
        )));
    }
    Ok(format)
}

/// Convert a linear color to 8-bit RGB.
#[inline]
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [to_u8(color.x), to_u8(color.y), to_u8(color.z)]
}

/// Encode `image` and write it to `path`.
pub fn save_image(image: &ImageBuffer, path: &Path) -> ExportResult<()> {
    let format = check_output_path(path)?;

    let rgb = RgbImage::from_fn(image.width, image.height, |x, y| {
        Rgb(color_to_rgb(image.get(x, y)))
    });
    rgb.save_with_format(path, format)?;

    info!("Image saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glint_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(0.5, -1.0, 2.0)), [127, 0, 255]);
    }

    #[test]
    fn test_check_output_path() {
        assert_eq!(
            check_output_path(Path::new("out/render.png")).unwrap(),
            ImageFormat::Png
        );
        assert!(check_output_path(Path::new("render.xyz")).is_err());
        assert!(check_output_path(Path::new("render")).is_err());
    }

    #[test]
    fn test_save_png_keeps_layout() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(2, 1, Color::new(0.0, 0.0, 1.0));

        let path = temp_path("layout.png");
        save_image(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(2, 1).0, [0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let image = ImageBuffer::new(1, 1);
        let result = save_image(&image, &temp_path("render.unknown"));
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }
}
