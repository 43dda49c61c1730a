// ============================================================
// Layer 4 — Raster Preprocessor
// ============================================================
// Turns a captured RasterImage into the InputTensor the
// classifier was trained on.
//
// For every pixel, in row-major order:
//   1. Take red, green, blue (alpha is ignored)
//   2. gray  = (r + g + b) / 3.0       ← plain average, NOT luma
//   3. gray  = 255 - gray              ← invert: ink becomes bright
//   4. value = gray / 255.0            ← scale to [0, 1]
//
// The model was trained on light digits over a dark background,
// while the canvas paints dark ink on white — step 3 bridges the
// two. The exact formula (unweighted average, f32 arithmetic) is
// part of the model's contract: a perceptual grayscale such as
// 0.299r + 0.587g + 0.114b gives different inputs and silently
// worse predictions.
//
// No resizing happens here — capture already guarantees the size.
//
// Reference: Rust Book §13 (Iterators)

use anyhow::Result;

use crate::domain::{
    raster::{RasterImage, Rgba},
    tensor::InputTensor,
};

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Encode a raster as an InputTensor of width × height values.
    pub fn encode(&self, raster: &RasterImage) -> Result<InputTensor> {
        let values: Vec<f32> = raster
            .pixels()
            .iter()
            .map(|&pixel| encode_pixel(pixel))
            .collect();

        InputTensor::new(raster.width(), raster.height(), values)
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Map one pixel to its normalised, inverted intensity.
fn encode_pixel(pixel: Rgba) -> f32 {
    let sum  = u32::from(pixel.r) + u32::from(pixel.g) + u32::from(pixel.b);
    let gray = sum as f32 / 3.0;
    let gray = 255.0 - gray;
    gray / 255.0
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IMAGE_HEIGHT, IMAGE_WIDTH};
    use proptest::prelude::*;

    fn encode_uniform(colour: Rgba) -> InputTensor {
        let raster = RasterImage::filled(IMAGE_WIDTH, IMAGE_HEIGHT, colour);
        Preprocessor::new().encode(&raster).unwrap()
    }

    #[test]
    fn test_white_background_is_zero() {
        let t = encode_uniform(Rgba::WHITE);
        assert_eq!(t.values().len(), 28 * 28);
        assert!(t.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_black_background_is_one() {
        let t = encode_uniform(Rgba::BLACK);
        assert!(t.values().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque      = encode_pixel(Rgba { r: 10, g: 200, b: 90, a: 255 });
        let transparent = encode_pixel(Rgba { r: 10, g: 200, b: 90, a: 0 });
        assert_eq!(opaque, transparent);
    }

    #[test]
    fn test_unweighted_average() {
        // Pure red, green and blue all average to 85 → same value,
        // which a luma formula would not produce
        let r = encode_pixel(Rgba::opaque(255, 0, 0));
        let g = encode_pixel(Rgba::opaque(0, 255, 0));
        let b = encode_pixel(Rgba::opaque(0, 0, 255));
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((r - (255.0 - 85.0) / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_row_major_order() {
        // One black pixel at (x=5, y=2) on white
        let raster = RasterImage::from_fn(IMAGE_WIDTH, IMAGE_HEIGHT, |x, y| {
            if (x, y) == (5, 2) { Rgba::BLACK } else { Rgba::WHITE }
        });
        let t = Preprocessor::new().encode(&raster).unwrap();
        let index = 2 * IMAGE_WIDTH as usize + 5;
        assert_eq!(t.values()[index], 1.0);
        assert_eq!(t.values().iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn test_keeps_raster_dimensions() {
        let raster = RasterImage::filled(4, 3, Rgba::WHITE);
        let t = Preprocessor::new().encode(&raster).unwrap();
        assert_eq!((t.width(), t.height(), t.values().len()), (4, 3, 12));
    }

    proptest! {
        #[test]
        fn prop_uniform_colour_gives_constant_tensor(r: u8, g: u8, b: u8, a: u8) {
            let t = encode_uniform(Rgba { r, g, b, a });
            let expected = (255.0 - ((r as f32 + g as f32 + b as f32) / 3.0)) / 255.0;
            for &v in t.values() {
                prop_assert_eq!(v, expected);
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
