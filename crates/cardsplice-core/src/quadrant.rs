//! Quadrant positions and the partition of a bounding rectangle.
//!
//! Layout before rotation:
//!
//! ```text
//! +---------+---------+
//! |   Q1    |   Q2    |
//! +---------+---------+
//! |   Q3    |   Q4    |
//! +---------+---------+
//! ```

use std::fmt;

use crate::geometry::{PixelBox, Region};

/// One of the four quadrants of a bounding rectangle, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in index order (Q1..Q4).
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// 1-based quadrant index used in output file names.
    pub fn index(self) -> u8 {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomLeft => 3,
            Quadrant::BottomRight => 4,
        }
    }

    /// Look up a quadrant by its 1-based index.
    pub fn from_index(index: u8) -> Option<Quadrant> {
        match index {
            1 => Some(Quadrant::TopLeft),
            2 => Some(Quadrant::TopRight),
            3 => Some(Quadrant::BottomLeft),
            4 => Some(Quadrant::BottomRight),
            _ => None,
        }
    }

    /// Column within the 2x2 grid (0 = left, 1 = right).
    pub fn column(self) -> u32 {
        match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => 0,
            Quadrant::TopRight | Quadrant::BottomRight => 1,
        }
    }

    /// Row within the 2x2 grid (0 = top, 1 = bottom).
    pub fn row(self) -> u32 {
        match self {
            Quadrant::TopLeft | Quadrant::TopRight => 0,
            Quadrant::BottomLeft | Quadrant::BottomRight => 1,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.index())
    }
}

/// Split lines of a bounding rectangle, relative to the cropped rectangle's origin.
///
/// The rectangle is divided at `round(quadrant_width)` horizontally and
/// `round(quadrant_height)` vertically, measured from the rectangle's own
/// top-left corner. When that corner lies above or left of the page, the crop
/// starts at the page edge and [`QuadrantSplit::for_region`] moves the split
/// lines back by the overhang. Partitioning always covers the actual cropped
/// size, so every pixel of the crop belongs to exactly one quadrant even when
/// the crop came back smaller than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantSplit {
    mid_x: u32,
    mid_y: u32,
}

impl QuadrantSplit {
    /// Create a split for quadrants of the given size in pixels.
    pub fn new(quadrant_width: f64, quadrant_height: f64) -> Self {
        let mid = PixelBox::from_edges(0.0, 0.0, quadrant_width, quadrant_height);
        Self {
            mid_x: mid.x1,
            mid_y: mid.bottom,
        }
    }

    /// Split for `region` as cropped from a page whose edges start at 0.
    ///
    /// A negative `left` or `top` clips the crop at the page edge, so the
    /// split moves toward the crop origin by the clipped amount. If a whole
    /// quadrant column or row is clipped, the split lands on 0.
    pub fn for_region(region: &Region) -> Self {
        let split = Self::new(region.quadrant_width, region.quadrant_height);
        Self {
            mid_x: split.mid_x.saturating_sub(overhang(region.left)),
            mid_y: split.mid_y.saturating_sub(overhang(region.top)),
        }
    }

    /// Horizontal split position.
    pub fn mid_x(&self) -> u32 {
        self.mid_x
    }

    /// Vertical split position.
    pub fn mid_y(&self) -> u32 {
        self.mid_y
    }

    /// Box of a single quadrant inside a crop of `width` x `height` pixels.
    pub fn quadrant_box(&self, quadrant: Quadrant, width: u32, height: u32) -> PixelBox {
        let mx = self.mid_x.min(width);
        let my = self.mid_y.min(height);
        let (x0, x1) = if quadrant.column() == 0 {
            (0, mx)
        } else {
            (mx, width)
        };
        let (top, bottom) = if quadrant.row() == 0 {
            (0, my)
        } else {
            (my, height)
        };
        PixelBox::new(x0, top, x1, bottom)
    }

    /// Boxes of all four quadrants, in index order.
    pub fn partition(&self, width: u32, height: u32) -> [PixelBox; 4] {
        Quadrant::ALL.map(|q| self.quadrant_box(q, width, height))
    }
}

// Whole pixels before the page edge; non-negative origins have none.
fn overhang(origin: f64) -> u32 {
    (-origin).round_ties_even() as u32
}
