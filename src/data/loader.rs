// ============================================================
// Layer 4 — Drawing and Image Loaders
// ============================================================
// Gets user input off the disk:
//
//   *.json  → Drawing (strokes, replayed through the rasteriser)
//   *.png,
//   *.jpg … → ImageFile (decoded by the image crate)
//
// Both end up as RasterProducers, so the classify use case
// does not care which one it was handed.
//
// Image files whose size differs from the requested raster
// are scaled with the same triangle filter the rasteriser uses.
//
// Reference: image crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::{fs, path::{Path, PathBuf}};

use crate::data::rasterizer::{raster_to_rgba_image, rgba_image_to_raster};
use crate::domain::{raster::RasterImage, stroke::Drawing, traits::RasterProducer};

/// A raster captured from an image file on disk.
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RasterProducer for ImageFile {
    fn produce(&self, width: u32, height: u32) -> Result<RasterImage> {
        let img = image::open(&self.path)
            .with_context(|| format!("Cannot decode image '{}'", self.path.display()))?
            .to_rgba8();

        let img = if img.dimensions() == (width, height) {
            img
        } else {
            tracing::debug!(
                "Scaling '{}' from {}x{} to {}x{}",
                self.path.display(), img.width(), img.height(), width, height
            );
            image::imageops::resize(&img, width, height, FilterType::Triangle)
        };

        rgba_image_to_raster(&img)
    }
}

/// Read a JSON stroke file into a Drawing.
pub fn load_drawing(path: impl AsRef<Path>) -> Result<Drawing> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read stroke file '{}'", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid stroke file '{}'", path.display()))
}

/// Pick a producer by file extension: `.json` is a stroke file,
/// anything else is handed to the image decoder.
pub fn open_producer(path: impl AsRef<Path>) -> Result<Box<dyn RasterProducer>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(Box::new(load_drawing(path)?))
    } else {
        Ok(Box::new(ImageFile::new(path)))
    }
}

/// Write a raster as an image file (format from the extension).
pub fn save_raster(raster: &RasterImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    raster_to_rgba_image(raster)?
        .save(path)
        .with_context(|| format!("Cannot write image '{}'", path.display()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::raster::Rgba;

    #[test]
    fn test_png_round_trip_through_disk() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("digit.png");
        let raster = RasterImage::from_fn(28, 28, |x, _| {
            if x < 14 { Rgba::BLACK } else { Rgba::WHITE }
        });
        save_raster(&raster, &path).unwrap();

        let loaded = ImageFile::new(&path).produce(28, 28).unwrap();
        assert_eq!(loaded, raster);
    }

    #[test]
    fn test_large_image_is_scaled() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        save_raster(&RasterImage::filled(56, 84, Rgba::BLACK), &path).unwrap();

        let loaded = ImageFile::new(&path).produce(28, 28).unwrap();
        assert_eq!(loaded.dimensions(), (28, 28));
        assert_eq!(loaded.pixel(10, 10), Some(Rgba::BLACK));
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let result = ImageFile::new("/definitely/not/here.png").produce(28, 28);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_producer_reads_strokes() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("seven.json");
        let drawing = Drawing::new(280, 280).stroke([(60.0, 60.0), (220.0, 60.0), (120.0, 240.0)]);
        fs::write(&path, serde_json::to_string(&drawing).unwrap()).unwrap();

        let raster = open_producer(&path).unwrap().produce(28, 28).unwrap();
        let direct = drawing.produce(28, 28).unwrap();
        assert_eq!(raster, direct);
    }

    #[test]
    fn test_invalid_stroke_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_drawing(&path).is_err());
    }
}
