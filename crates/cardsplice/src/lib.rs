//! cardsplice: Cut scanned card sheets into rotated quadrant images.
//!
//! A PDF is rasterized page by page. From every page a bounding rectangle is
//! cropped, split into four equal quadrants, and each quadrant is rotated 90°
//! counter-clockwise and saved as a PNG.
//!
//! # Architecture
//!
//! - **cardsplice-core**: units, geometry, quadrant partitioning, pairing, options
//! - **cardsplice** (this crate): image operations, rasterizer seam, page-pair driver
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cardsplice::{PdfiumRasterizer, SpliceOptions, process_pdf};
//!
//! let rasterizer = PdfiumRasterizer::new()?;
//! let summary = process_pdf(Path::new("deck.pdf"), &SpliceOptions::default(), &rasterizer)?;
//! println!("wrote {} files", summary.files.len());
//! # Ok::<(), cardsplice::SpliceError>(())
//! ```

pub mod driver;
pub mod error;
pub mod extract;
pub mod raster;

pub use cardsplice_core;
pub use cardsplice_core::{
    Dpi, PagePair, PixelBox, PointRegion, Quadrant, QuadrantSplit, Region, RegionError,
    SpliceOptions,
};
pub use driver::{SpliceSummary, process_pages, process_pdf};
pub use error::SpliceError;
pub use extract::{Quadrants, crop_quadrants, extract_and_rotate_quadrants};
pub use raster::PageRasterizer;
#[cfg(feature = "pdfium")]
pub use raster::PdfiumRasterizer;
