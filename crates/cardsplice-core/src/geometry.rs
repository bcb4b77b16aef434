//! Pixel geometry for bounding rectangles and quadrants.
//!
//! Coordinates use a top-left origin, matching raster images:
//! - `x0` / `left`: left edge
//! - `top`: distance from the top of the image
//! - `x1`: right edge (exclusive)
//! - `bottom`: bottom edge (exclusive)

use std::fmt;

/// Integer pixel box with top-left origin. Right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelBox {
    pub x0: u32,
    pub top: u32,
    pub x1: u32,
    pub bottom: u32,
}

impl PixelBox {
    pub fn new(x0: u32, top: u32, x1: u32, bottom: u32) -> Self {
        Self {
            x0,
            top,
            x1: x1.max(x0),
            bottom: bottom.max(top),
        }
    }

    /// Build a box from fractional edges.
    ///
    /// Each edge is rounded half-to-even. Negative edges land on 0.
    pub fn from_edges(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self::new(round_px(x0), round_px(top), round_px(x1), round_px(bottom))
    }

    /// Width of the box in pixels.
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height of the box in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Number of pixels covered by the box.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether the pixel at `(x, y)` lies inside the box.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.top && y < self.bottom
    }

    /// Clip the box to an image of `width` x `height` pixels.
    pub fn clamp_to(&self, width: u32, height: u32) -> PixelBox {
        PixelBox::new(
            self.x0.min(width),
            self.top.min(height),
            self.x1.min(width),
            self.bottom.min(height),
        )
    }
}

// Float-to-int `as` saturates, so NaN and negatives become 0.
fn round_px(value: f64) -> u32 {
    value.round_ties_even() as u32
}

/// A bounding rectangle made of four equal quadrants, in pixel units.
///
/// `left` and `top` locate the rectangle on the page; the full rectangle is
/// `2 * quadrant_width` wide and `2 * quadrant_height` high.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub quadrant_width: f64,
    pub quadrant_height: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, quadrant_width: f64, quadrant_height: f64) -> Self {
        Self {
            left,
            top,
            quadrant_width,
            quadrant_height,
        }
    }

    /// Right edge of the full bounding rectangle.
    pub fn right(&self) -> f64 {
        self.left + 2.0 * self.quadrant_width
    }

    /// Bottom edge of the full bounding rectangle.
    pub fn bottom(&self) -> f64 {
        self.top + 2.0 * self.quadrant_height
    }

    /// Multiply every field by `factor`.
    pub fn scaled(&self, factor: f64) -> Region {
        Region {
            left: self.left * factor,
            top: self.top * factor,
            quadrant_width: self.quadrant_width * factor,
            quadrant_height: self.quadrant_height * factor,
        }
    }

    /// The full bounding rectangle, rounded to whole pixels.
    pub fn bounding_box(&self) -> PixelBox {
        PixelBox::from_edges(self.left, self.top, self.right(), self.bottom())
    }

    /// Check that every field is finite and the quadrant size is positive.
    ///
    /// A rectangle that falls outside the page is not an error here; cropping
    /// simply yields fewer pixels.
    pub fn validate(&self) -> Result<(), RegionError> {
        let fields = [
            ("left", self.left),
            ("top", self.top),
            ("quadrant_width", self.quadrant_width),
            ("quadrant_height", self.quadrant_height),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RegionError::NonFinite { field, value });
        }
        if self.quadrant_width <= 0.0 || self.quadrant_height <= 0.0 {
            return Err(RegionError::NonPositiveSize {
                width: self.quadrant_width,
                height: self.quadrant_height,
            });
        }
        Ok(())
    }
}

/// Invalid bounding rectangle parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionError {
    /// Quadrant width or height is zero or negative.
    NonPositiveSize { width: f64, height: f64 },
    /// A field is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::NonPositiveSize { width, height } => write!(
                f,
                "quadrant size must be positive (width: {width}, height: {height})"
            ),
            RegionError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for RegionError {}
