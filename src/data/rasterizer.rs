// ============================================================
// Layer 4 — Stroke Rasteriser
// ============================================================
// Capture step: paints a Drawing onto a canvas and scales it
// down to the raster size the classifier expects.
//
// How a stroke is painted:
//   - every point is stamped as a filled disc whose diameter is
//     the pen width (round caps and joins for free)
//   - consecutive points are joined by stamping discs every half
//     canvas unit along the segment, so fast finger movements
//     still leave a continuous line
//   - a stroke with a single point leaves a single dot
//
// The canvas is painted at its own resolution (e.g. 280x280
// screen pixels) and then resized with a triangle filter to
// 28x28 — the same "draw big, export small" approach as the
// original paint surface. Anti-aliasing from the resize gives
// the grey edge pixels handwritten digit datasets contain.
//
// An empty drawing short-circuits to a plain background raster.
// Canvases larger than MAX_CANVAS_SIDE on either side are
// rejected, and each segment is clipped to the canvas (grown by
// the pen radius) before stamping, so stroke files with huge or
// far-away coordinates cost no more than one drawn across the
// canvas.
//
// Reference: image / imageproc crate documentation

use anyhow::{ensure, Context, Result};
use image::{imageops::FilterType, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::domain::{
    raster::{RasterImage, Rgba},
    stroke::{Drawing, Point},
    traits::RasterProducer,
};

/// Distance between consecutive disc stamps, in canvas units
const STAMP_SPACING: f32 = 0.5;

/// Largest canvas side a stroke file may ask for
pub const MAX_CANVAS_SIDE: u32 = 4096;

impl RasterProducer for Drawing {
    fn produce(&self, width: u32, height: u32) -> Result<RasterImage> {
        ensure!(
            self.width > 0 && self.height > 0,
            "Drawing canvas must be non-empty, got {}x{}",
            self.width, self.height
        );
        ensure!(
            self.width <= MAX_CANVAS_SIDE && self.height <= MAX_CANVAS_SIDE,
            "Drawing canvas {}x{} exceeds the {}x{} limit",
            self.width, self.height, MAX_CANVAS_SIDE, MAX_CANVAS_SIDE
        );
        ensure!(width > 0 && height > 0, "Requested raster must be non-empty");

        if self.is_empty() {
            tracing::debug!("Empty drawing — producing blank {}x{} raster", width, height);
            return Ok(RasterImage::filled(width, height, self.background));
        }

        let canvas = paint(self);
        let scaled = if canvas.dimensions() == (width, height) {
            canvas
        } else {
            image::imageops::resize(&canvas, width, height, FilterType::Triangle)
        };

        tracing::debug!(
            "Rasterised {} strokes from {}x{} canvas to {}x{}",
            self.strokes.len(), self.width, self.height, width, height
        );
        rgba_image_to_raster(&scaled)
    }
}

/// Paint every stroke at canvas resolution.
fn paint(drawing: &Drawing) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        drawing.width,
        drawing.height,
        image::Rgba(drawing.background.to_array()),
    );
    let ink    = image::Rgba(drawing.pen.colour.to_array());
    // Past w + h a disc already covers the whole canvas
    let radius = (drawing.pen.width / 2.0).max(0.5).min((drawing.width + drawing.height) as f32);

    for stroke in &drawing.strokes {
        match stroke.points.as_slice() {
            [] => {}
            [dot] => stamp(&mut canvas, *dot, radius, ink),
            points => {
                for pair in points.windows(2) {
                    draw_segment(&mut canvas, pair[0], pair[1], radius, ink);
                }
            }
        }
    }
    canvas
}

fn draw_segment(canvas: &mut RgbaImage, from: Point, to: Point, radius: f32, ink: image::Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    let Some((from, to)) = clip_segment(from, to, -radius, -radius, w as f32 + radius, h as f32 + radius)
    else {
        return;
    };

    let dx     = to.x - from.x;
    let dy     = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    let steps  = (length / STAMP_SPACING).ceil().max(1.0) as u32;

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(canvas, Point::new(from.x + dx * t, from.y + dy * t), radius, ink);
    }
}

/// Liang–Barsky clip of a segment to an axis-aligned box.
/// None when no part of it lies inside, or a coordinate is not finite.
fn clip_segment(from: Point, to: Point, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(Point, Point)> {
    if ![from.x, from.y, to.x, to.y].iter().all(|c| c.is_finite()) {
        return None;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let (mut t0, mut t1) = (0.0f32, 1.0f32);

    for (p, q) in [
        (-dx, from.x - min_x),
        ( dx, max_x - from.x),
        (-dy, from.y - min_y),
        ( dy, max_y - from.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    let at = |t: f32| Point::new(from.x + dx * t, from.y + dy * t);
    Some((at(t0), at(t1)))
}

/// Out-of-canvas parts of the disc are clipped by imageproc;
/// discs that cannot touch the canvas are skipped.
fn stamp(canvas: &mut RgbaImage, centre: Point, radius: f32, ink: image::Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    let touches = centre.x >= -radius && centre.x <= w as f32 + radius
        && centre.y >= -radius && centre.y <= h as f32 + radius;
    if !touches {
        return;
    }

    draw_filled_circle_mut(
        canvas,
        (centre.x.round() as i32, centre.y.round() as i32),
        radius.round() as i32,
        ink,
    );
}

/// Copy an image-crate buffer into the domain raster type.
pub fn rgba_image_to_raster(img: &RgbaImage) -> Result<RasterImage> {
    let pixels = img.pixels().map(|p| Rgba::from(p.0)).collect();
    RasterImage::from_pixels(img.width(), img.height(), pixels)
}

/// And back again — used when saving a raster as PNG.
pub fn raster_to_rgba_image(raster: &RasterImage) -> Result<RgbaImage> {
    let bytes: Vec<u8> = raster.pixels().iter().flat_map(|p| p.to_array()).collect();
    RgbaImage::from_raw(raster.width(), raster.height(), bytes).with_context(|| {
        format!("Pixel buffer does not fit a {}x{} image", raster.width(), raster.height())
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{stroke::Pen, IMAGE_HEIGHT, IMAGE_WIDTH};

    fn capture(drawing: &Drawing) -> RasterImage {
        drawing.produce(IMAGE_WIDTH, IMAGE_HEIGHT).unwrap()
    }

    #[test]
    fn test_empty_drawing_is_all_background() {
        let raster = capture(&Drawing::new(280, 280));
        assert_eq!(raster.dimensions(), (28, 28));
        assert!(raster.pixels().iter().all(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn test_horizontal_stroke_darkens_its_row() {
        let drawing = Drawing::new(280, 280).stroke([(40.0, 140.0), (240.0, 140.0)]);
        let raster  = capture(&drawing);

        let centre = raster.pixel(14, 14).unwrap();
        assert!(centre.r < 100, "stroke pixel should be dark, got {:?}", centre);

        let corner = raster.pixel(0, 0).unwrap();
        assert!(corner.r > 250, "far pixel should stay white, got {:?}", corner);
        let below = raster.pixel(14, 25).unwrap();
        assert!(below.r > 250);
    }

    #[test]
    fn test_single_point_leaves_a_dot() {
        let drawing = Drawing::new(280, 280).stroke([(140.0, 140.0)]);
        let raster  = capture(&drawing);
        assert!(raster.pixel(14, 14).unwrap().r < 128);
        assert!(raster.pixel(3, 3).unwrap().r > 250);
    }

    #[test]
    fn test_sparse_points_still_connect() {
        // Two far-apart points — the middle must be inked too
        let drawing = Drawing::new(280, 280).stroke([(20.0, 140.0), (260.0, 140.0)]);
        let raster  = capture(&drawing);
        for x in 4..24 {
            assert!(raster.pixel(x, 14).unwrap().r < 128, "gap at x={}", x);
        }
    }

    #[test]
    fn test_uses_pen_colour() {
        let pen     = Pen { width: 40.0, colour: Rgba::opaque(255, 0, 0) };
        let drawing = Drawing { pen, ..Drawing::new(28, 28) }.stroke([(14.0, 14.0)]);
        // Canvas already 28x28 — no resize, exact colours
        let raster  = capture(&drawing);
        assert_eq!(raster.pixel(14, 14), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn test_zero_sized_canvas_is_an_error() {
        let drawing = Drawing::new(0, 280).stroke([(1.0, 1.0)]);
        assert!(drawing.produce(IMAGE_WIDTH, IMAGE_HEIGHT).is_err());
    }

    #[test]
    fn test_oversized_canvas_is_an_error() {
        let json = r#"{ "width": 4294967295, "height": 4294967295,
                        "strokes": [ { "points": [[1, 1]] } ] }"#;
        let drawing: Drawing = serde_json::from_str(json).unwrap();
        assert!(drawing.produce(IMAGE_WIDTH, IMAGE_HEIGHT).is_err());

        let wide = Drawing::new(MAX_CANVAS_SIDE + 1, 28).stroke([(1.0, 1.0)]);
        assert!(wide.produce(IMAGE_WIDTH, IMAGE_HEIGHT).is_err());
    }

    #[test]
    fn test_far_off_canvas_stroke_leaves_canvas_blank() {
        let drawing = Drawing::new(28, 28).stroke([(1e9, 0.0), (2e9, 5.0)]);
        let raster  = capture(&drawing);
        assert!(raster.pixels().iter().all(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn test_stroke_running_off_canvas_is_clipped() {
        // Finishes quickly and still inks the on-canvas part
        let pen     = Pen { width: 4.0, colour: Rgba::BLACK };
        let drawing = Drawing { pen, ..Drawing::new(28, 28) }.stroke([(0.0, 14.0), (1e9, 14.0)]);
        let raster  = capture(&drawing);
        for x in 0..28 {
            assert_eq!(raster.pixel(x, 14), Some(Rgba::BLACK), "gap at x={}", x);
        }
        assert_eq!(raster.pixel(5, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let drawing = Drawing::new(28, 28)
            .stroke([(f32::NAN, 3.0), (f32::INFINITY, 3.0)])
            .stroke([(f32::NAN, f32::NAN)]);
        assert!(capture(&drawing).pixels().iter().all(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn test_far_away_dot_is_skipped() {
        let drawing = Drawing::new(28, 28).stroke([(3e9, -3e9)]);
        assert!(capture(&drawing).pixels().iter().all(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn test_huge_pen_floods_canvas() {
        let pen     = Pen { width: f32::INFINITY, colour: Rgba::BLACK };
        let drawing = Drawing { pen, ..Drawing::new(28, 28) }.stroke([(14.0, 14.0)]);
        assert!(capture(&drawing).pixels().iter().all(|&p| p == Rgba::BLACK));
    }

    #[test]
    fn test_clip_keeps_inside_segment() {
        let (a, b) = clip_segment(Point::new(1.0, 1.0), Point::new(5.0, 5.0), 0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!((a, b), (Point::new(1.0, 1.0), Point::new(5.0, 5.0)));
        assert!(clip_segment(Point::new(-5.0, 20.0), Point::new(-1.0, 30.0), 0.0, 0.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn test_raster_image_conversion_round_trip() {
        let raster = RasterImage::from_fn(5, 4, |x, y| Rgba::opaque(x as u8, y as u8, 7));
        let back   = rgba_image_to_raster(&raster_to_rgba_image(&raster).unwrap()).unwrap();
        assert_eq!(back, raster);
    }
}
