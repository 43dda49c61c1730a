// ============================================================
// Layer 3 — Strokes and Drawings
// ============================================================
// What the user drew, before it becomes pixels.
//
// A Drawing is a canvas (in canvas units, e.g. screen pixels),
// the pen used for every stroke, and the strokes themselves.
// Each stroke is the list of points the finger passed through.
//
// Defaults follow the original paint surface:
//   - 24-unit stroke width
//   - solid black ink
//   - white background
//
// Drawings serialise to JSON so they can be saved, replayed
// and fed to the `classify` and `render` commands:
//
//   {
//     "width": 280, "height": 280,
//     "pen": { "width": 24.0, "colour": [0, 0, 0, 255] },
//     "strokes": [ { "points": [[60, 60], [220, 60], [120, 240]] } ]
//   }
//
// Reference: Rust Book §5 (Structs), serde documentation

use serde::{Deserialize, Serialize};

use crate::domain::raster::Rgba;

/// A point on the canvas, in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// One continuous finger movement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(with = "point_pairs")]
    pub points: Vec<Point>,
}

impl Stroke {
    #[cfg(test)]
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self { points: points.into_iter().map(Point::from).collect() }
    }
}

/// Stroke style shared by every stroke in a drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    /// Stroke width in canvas units
    pub width: f32,

    /// Ink colour as [r, g, b, a]
    #[serde(with = "rgba_array")]
    pub colour: Rgba,
}

impl Default for Pen {
    fn default() -> Self {
        Self { width: 24.0, colour: Rgba::BLACK }
    }
}

/// Everything needed to rasterise the user's input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Canvas width in canvas units
    pub width: u32,

    /// Canvas height in canvas units
    pub height: u32,

    #[serde(default)]
    pub pen: Pen,

    #[serde(default, with = "rgba_array")]
    pub background: Rgba,

    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// An empty drawing with the default pen on a white canvas
    #[cfg(test)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pen:        Pen::default(),
            background: Rgba::WHITE,
            strokes:    Vec::new(),
        }
    }

    /// Add one stroke (builder style)
    #[cfg(test)]
    pub fn stroke(mut self, points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.strokes.push(Stroke::new(points));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.points.is_empty())
    }
}

// Points are written as [x, y] pairs to keep stroke files short
mod point_pairs {
    use super::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], s: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<[f32; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        pairs.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Point>, D::Error> {
        let pairs = Vec::<[f32; 2]>::deserialize(d)?;
        Ok(pairs.into_iter().map(|[x, y]| Point { x, y }).collect())
    }
}

mod rgba_array {
    use crate::domain::raster::Rgba;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(colour: &Rgba, s: S) -> Result<S::Ok, S::Error> {
        colour.to_array().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rgba, D::Error> {
        Ok(Rgba::from(<[u8; 4]>::deserialize(d)?))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_json() {
        // pen and background fall back to the defaults
        let json = r#"{ "width": 280, "height": 280,
                        "strokes": [ { "points": [[10, 20], [30, 40]] } ] }"#;
        let d: Drawing = serde_json::from_str(json).unwrap();
        assert_eq!(d.pen, Pen::default());
        assert_eq!(d.background, Rgba::WHITE);
        assert_eq!(d.strokes[0].points[1], Point::new(30.0, 40.0));
    }

    #[test]
    fn test_json_round_trip_keeps_pen() {
        let pen = Pen { width: 8.0, colour: Rgba::opaque(0, 0, 255) };
        let d   = Drawing { pen, ..Drawing::new(100, 50) }.stroke([(1.0, 2.0), (3.0, 4.0)]);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(serde_json::from_str::<Drawing>(&json).unwrap(), d);
    }

    #[test]
    fn test_drawing_with_only_empty_strokes_is_empty() {
        let d: Drawing = serde_json::from_str(r#"{ "width": 10, "height": 10,
                                                  "strokes": [ { "points": [] } ] }"#).unwrap();
        assert!(d.is_empty());
        assert!(!Drawing::new(10, 10).stroke([(1.0, 1.0)]).is_empty());
    }
}
