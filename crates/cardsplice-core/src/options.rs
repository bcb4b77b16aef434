//! Splice configuration.
//!
//! The card layout is measured in PDF points and only turned into pixels via
//! [`PointRegion::to_pixels`], so point and pixel values never mix.

use std::path::{Path, PathBuf};

use crate::geometry::Region;
use crate::naming;
use crate::quadrant::Quadrant;
use crate::units::Dpi;

/// Bounding rectangle measured in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointRegion {
    /// Left edge of the rectangle (in points).
    pub left: f64,
    /// Top edge of the rectangle, measured from the top of the page (in points).
    pub top: f64,
    /// Width of a single quadrant (in points).
    pub quadrant_width: f64,
    /// Height of a single quadrant (in points).
    pub quadrant_height: f64,
}

impl PointRegion {
    /// Convert to a pixel [`Region`] for a page rendered at `dpi`.
    pub fn to_pixels(&self, dpi: Dpi) -> Region {
        Region::new(
            self.left,
            self.top,
            self.quadrant_width,
            self.quadrant_height,
        )
        .scaled(dpi.scale())
    }
}

impl Default for PointRegion {
    /// The card sheet layout: a 453.7 x 738 pt block at (79, 27.1), four cards per page.
    fn default() -> Self {
        Self {
            left: 79.0,
            top: 27.1,
            quadrant_width: 453.7 / 2.0,
            quadrant_height: 738.0 / 2.0,
        }
    }
}

/// Options for splitting a PDF into quadrant images.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpliceOptions {
    /// Rasterization resolution. Default: 300.
    pub dpi: Dpi,
    /// Bounding rectangle in points. Default: [`PointRegion::default`].
    pub region: PointRegion,
    /// Prefix for output file paths. Default: `output/cropped_quadrants`.
    pub output_prefix: PathBuf,
}

impl Default for SpliceOptions {
    fn default() -> Self {
        Self {
            dpi: Dpi::new(300),
            region: PointRegion::default(),
            output_prefix: PathBuf::from("output/cropped_quadrants"),
        }
    }
}

impl SpliceOptions {
    /// The bounding rectangle in pixels at the configured DPI.
    pub fn pixel_region(&self) -> Region {
        self.region.to_pixels(self.dpi)
    }

    /// Directory the output files are written into, if the prefix names one.
    pub fn output_dir(&self) -> Option<&Path> {
        naming::output_dir(&self.output_prefix)
    }

    /// Output path for one quadrant of a 1-based page number.
    pub fn quadrant_path(&self, page_number: usize, quadrant: Quadrant) -> PathBuf {
        naming::quadrant_path(&self.output_prefix, page_number, quadrant)
    }
}
