use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Maps `input` to `<output_dir>/<input stem>.png`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".png");
    output_dir.join(name)
}

/// Writes a lossless RGBA PNG, creating parent directories as needed.
pub fn write_png(output: &Path, image: &RgbaImage) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_at(parent, e))?;
    }
    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn extensions_are_normalized_to_png() {
        let out = Path::new("/out");
        assert_eq!(
            output_path_for(Path::new("/in/a.jpg"), out),
            PathBuf::from("/out/a.png")
        );
        assert_eq!(
            output_path_for(Path::new("/in/b.jpeg"), out),
            PathBuf::from("/out/b.png")
        );
        assert_eq!(
            output_path_for(Path::new("/in/c.PNG"), out),
            PathBuf::from("/out/c.png")
        );
        assert_eq!(
            output_path_for(Path::new("/in/shot.2024.jpg"), out),
            PathBuf::from("/out/shot.2024.png")
        );
    }

    #[test]
    fn write_creates_parents_and_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/img.png");
        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4]));
        write_png(&path, &img).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), img);
    }
}
