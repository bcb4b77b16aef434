//! Error type for splicing operations.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every failure is fatal
//! for the current run; files written before the failure stay on disk.

use cardsplice_core::{Quadrant, RegionError};
use thiserror::Error;

/// Error type for rasterizing, cropping, and writing quadrants.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// The PDF could not be rasterized (missing library, corrupt document).
    #[error("rasterization error: {0}")]
    Raster(String),

    /// Encoding or writing an image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bounding rectangle parameters are unusable.
    #[error("invalid region: {0}")]
    InvalidRegion(#[from] RegionError),

    /// A quadrant has no pixels, so there is nothing to write.
    #[error("page {page} {quadrant} is empty; the bounding rectangle lies outside the page")]
    EmptyQuadrant { page: usize, quadrant: Quadrant },
}
