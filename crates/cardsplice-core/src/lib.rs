//! cardsplice-core: Backend-independent types for cutting card quadrants out of page images.
//!
//! This crate provides the unit conversion ([`Dpi`]), pixel geometry ([`Region`],
//! [`PixelBox`]), quadrant partitioning ([`QuadrantSplit`]), page pairing
//! ([`PagePairs`]), and the options shared by every front end ([`SpliceOptions`]).
//! It does not decode or encode images; see the `cardsplice` crate for that.

pub mod geometry;
pub mod naming;
pub mod options;
pub mod pairing;
pub mod quadrant;
pub mod units;

pub use geometry::{PixelBox, Region, RegionError};
pub use naming::{output_dir, quadrant_path};
pub use options::{PointRegion, SpliceOptions};
pub use pairing::{PagePair, PagePairs, page_pairs};
pub use quadrant::{Quadrant, QuadrantSplit};
pub use units::{Dpi, POINTS_PER_INCH};
