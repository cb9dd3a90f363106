//! Image saving utilities.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Save a composed canvas as a PNG file.
///
/// The output is always PNG-encoded regardless of the path's extension.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be created or encoded.
pub fn save_png<P: AsRef<Path>>(canvas: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgba;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "dish_composer_save_{}_{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_png_regardless_of_extension() {
        let path = scratch("ext").join("dish.jpg");
        let canvas = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 128]));

        save_png(&canvas, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let reloaded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(reloaded, canvas);
    }

    #[test]
    fn test_missing_directory() {
        let path = scratch("nodir").join("no").join("such").join("dish.png");
        let canvas = RgbaImage::new(1, 1);

        let err = save_png(&canvas, &path).unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
        assert!(!path.exists());
    }
}
