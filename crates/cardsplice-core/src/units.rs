//! Conversion between PDF points and raster pixels.
//!
//! Card layouts are measured in PDF points (1/72 inch) while page images are
//! addressed in pixels. [`Dpi`] is the only bridge between the two.

/// Number of PDF points in one inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Raster resolution in dots (pixels) per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dpi(pub u32);

impl Dpi {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw dots-per-inch value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Pixels per PDF point at this resolution.
    ///
    /// At 72 DPI one point maps to exactly one pixel.
    pub fn scale(self) -> f64 {
        f64::from(self.0) / POINTS_PER_INCH
    }

    /// Convert a length in points to a length in pixels.
    pub fn points_to_pixels(self, points: f64) -> f64 {
        points * self.scale()
    }
}

impl std::fmt::Display for Dpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} dpi", self.0)
    }
}
