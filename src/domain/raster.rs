// ============================================================
// Layer 3 — RasterImage Domain Type
// ============================================================
// A captured drawing, flattened to a fixed grid of RGBA pixels.
//
// Pixels are stored row-major:
//   index = y * width + x
//
// Once built, a raster never changes. The preprocessor borrows
// it, reads every pixel once, and the raster is dropped.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

use anyhow::{ensure, Result};

/// One pixel, each channel in 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// A fully opaque colour
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Blank canvas colour
impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// A fixed-size, immutable grid of RGBA pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width:  u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RasterImage {
    /// Build a raster from row-major pixels.
    /// Fails if the pixel count does not match width × height.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        let expected = width as usize * height as usize;
        ensure!(
            pixels.len() == expected,
            "Raster of {}x{} needs {} pixels, got {}",
            width, height, expected, pixels.len()
        );
        Ok(Self { width, height, pixels })
    }

    /// A raster where every pixel has the same colour
    pub fn filled(width: u32, height: u32, colour: Rgba) -> Self {
        Self::from_fn(width, height, |_, _| colour)
    }

    /// Build a raster by asking `f` for the colour at every (x, y)
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at column `x`, row `y`, or None if out of bounds
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// All pixels in row-major scan order
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}
