//! PNG import and sprite preparation
//!
//! Decodes image files into RGBA buffers and applies the transforms the scene
//! needs before upload: Scale2x upscaling, stretching to the window and
//! horizontal mirroring.

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Error type for image loading
#[derive(Debug)]
pub enum AssetError {
    /// File missing or unreadable
    IoError { path: PathBuf, source: std::io::Error },
    /// File read but not a decodable image
    DecodeError { path: PathBuf, source: image::ImageError },
    /// Larger than a GPU texture can hold
    TooLarge { path: PathBuf, width: u32, height: u32 },
}

impl AssetError {
    /// The file that failed
    pub fn path(&self) -> &Path {
        match self {
            AssetError::IoError { path, .. }
            | AssetError::DecodeError { path, .. }
            | AssetError::TooLarge { path, .. } => path,
        }
    }
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::IoError { source, .. } => write!(f, "IO error: {}", source),
            AssetError::DecodeError { source, .. } => write!(f, "Decode error: {}", source),
            AssetError::TooLarge { width, height, .. } => {
                write!(f, "Image too large: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::IoError { source, .. } => Some(source),
            AssetError::DecodeError { source, .. } => Some(source),
            AssetError::TooLarge { .. } => None,
        }
    }
}

/// Load an image file as RGBA8
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage, AssetError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => AssetError::IoError { path: path.to_path_buf(), source },
        source => AssetError::DecodeError { path: path.to_path_buf(), source },
    })?;
    let rgba = img.to_rgba8();

    let (width, height) = rgba.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(AssetError::TooLarge { path: path.to_path_buf(), width, height });
    }
    Ok(rgba)
}

/// Scale2x (EPX) pixel-art upscale.
///
/// Every source pixel becomes a 2x2 block; a corner of the block takes a
/// neighbour's colour when two adjacent neighbours agree and the opposite
/// pair does not, which keeps diagonal edges sharp. Out-of-bounds neighbours
/// repeat the edge pixel.
pub fn scale2x(src: &RgbaImage) -> RgbaImage {
    let (w, h) = src.dimensions();
    let mut out = RgbaImage::new(w * 2, h * 2);
    if w == 0 || h == 0 {
        return out;
    }

    let at = |x: i64, y: i64| -> Rgba<u8> {
        let cx = x.clamp(0, w as i64 - 1) as u32;
        let cy = y.clamp(0, h as i64 - 1) as u32;
        *src.get_pixel(cx, cy)
    };

    for y in 0..h {
        for x in 0..w {
            let (xi, yi) = (x as i64, y as i64);
            let p = at(xi, yi);
            let a = at(xi, yi - 1); // up
            let b = at(xi + 1, yi); // right
            let c = at(xi - 1, yi); // left
            let d = at(xi, yi + 1); // down

            let e0 = if c == a && c != d && a != b { a } else { p };
            let e1 = if a == b && a != c && b != d { b } else { p };
            let e2 = if d == c && d != b && c != a { c } else { p };
            let e3 = if b == d && b != a && d != c { d } else { p };

            out.put_pixel(x * 2, y * 2, e0);
            out.put_pixel(x * 2 + 1, y * 2, e1);
            out.put_pixel(x * 2, y * 2 + 1, e2);
            out.put_pixel(x * 2 + 1, y * 2 + 1, e3);
        }
    }
    out
}

/// Resize to exactly `width` x `height`, ignoring aspect ratio
pub fn stretch(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    imageops::resize(src, width, height, FilterType::Triangle)
}

/// Mirror left-to-right
pub fn mirror(src: &RgbaImage) -> RgbaImage {
    imageops::flip_horizontal(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const X: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const Y: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn test_scale2x_single_pixel() {
        let src = RgbaImage::from_pixel(1, 1, X);
        let out = scale2x(&src);
        assert_eq!(out.dimensions(), (2, 2));
        assert!(out.pixels().all(|p| *p == X));
    }

    #[test]
    fn test_scale2x_flat_image_stays_flat() {
        let src = RgbaImage::from_pixel(7, 3, Y);
        let out = scale2x(&src);
        assert_eq!(out.dimensions(), (14, 6));
        assert!(out.pixels().all(|p| *p == Y));
    }

    #[test]
    fn test_scale2x_rounds_diagonal() {
        // X Y
        // Y Y
        let mut src = RgbaImage::from_pixel(2, 2, Y);
        src.put_pixel(0, 0, X);
        let out = scale2x(&src);

        // Top-left block keeps X except the corner facing the Y diagonal
        assert_eq!(*out.get_pixel(0, 0), X);
        assert_eq!(*out.get_pixel(1, 0), X);
        assert_eq!(*out.get_pixel(0, 1), X);
        assert_eq!(*out.get_pixel(1, 1), Y);
    }

    #[test]
    fn test_stretch_exact_size() {
        let src = RgbaImage::from_pixel(40, 30, X);
        let out = stretch(&src, 800, 600);
        assert_eq!(out.dimensions(), (800, 600));
    }

    #[test]
    fn test_mirror() {
        let mut src = RgbaImage::from_pixel(3, 1, Y);
        src.put_pixel(0, 0, X);
        let out = mirror(&src);
        assert_eq!(*out.get_pixel(2, 0), X);
        assert_eq!(*out.get_pixel(0, 0), Y);
    }

    #[test]
    fn test_load_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fish.png");
        RgbaImage::from_pixel(5, 4, X).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (5, 4));
        assert_eq!(*img.get_pixel(4, 3), X);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");
        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, AssetError::IoError { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_load_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("anchor.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, AssetError::DecodeError { .. }));
    }
}
