//! Layer loading utilities.

use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load a layer from disk and convert it to RGBA.
///
/// The format is detected from the file contents rather than the extension,
/// so a PNG saved as `topping.img` still decodes.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] if the file cannot be opened or decoded.
pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let missing = |source: ImageError| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| missing(ImageError::IoError(err)))?
        .decode()
        .map_err(missing)?;

    tracing::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(img.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{ImageFormat, Rgb, RgbImage};

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "dish_composer_load_{}_{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_path() {
        let path = scratch("missing").join("nope.png");

        let err = load_layer(&path).unwrap_err();

        assert!(matches!(err, Error::MissingFile { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_undecodable_file() {
        let path = scratch("garbage").join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(
            load_layer(&path),
            Err(Error::MissingFile { .. })
        ));
    }

    #[test]
    fn test_rgb_converted_to_opaque_rgba() {
        let path = scratch("rgb").join("layer.bin");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let layer = load_layer(&path).unwrap();

        assert_eq!(layer.dimensions(), (3, 2));
        assert_eq!(layer.get_pixel(2, 1).0, [10, 20, 30, 255]);
    }
}
