//! Quadrant extraction from a rendered page image.

use std::ops::Index;

use cardsplice_core::{Quadrant, QuadrantSplit, Region};
use image::DynamicImage;

use crate::error::SpliceError;

/// Four quadrant images, indexed by [`Quadrant`].
#[derive(Debug, Clone)]
pub struct Quadrants {
    images: [DynamicImage; 4],
}

impl Quadrants {
    /// Image for a single quadrant.
    pub fn get(&self, quadrant: Quadrant) -> &DynamicImage {
        &self.images[usize::from(quadrant.index() - 1)]
    }

    /// Quadrants paired with their images, in index order (Q1..Q4).
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &DynamicImage)> {
        Quadrant::ALL.into_iter().zip(self.images.iter())
    }

    /// Rotate every quadrant 90° counter-clockwise.
    ///
    /// The canvas grows to fit, so width and height swap and no pixel is lost.
    pub fn rotated_ccw(self) -> Quadrants {
        Quadrants {
            images: self.images.map(|img| img.rotate270()),
        }
    }

    pub fn into_array(self) -> [DynamicImage; 4] {
        self.images
    }
}

impl Index<Quadrant> for Quadrants {
    type Output = DynamicImage;

    fn index(&self, quadrant: Quadrant) -> &DynamicImage {
        self.get(quadrant)
    }
}

/// Crop the bounding rectangle from `page` and split it into four quadrants.
///
/// The crop is clipped to the page, so a rectangle hanging off the edge yields
/// smaller (possibly empty) quadrants rather than an error. Pixels keep the
/// quadrant they occupy in the full rectangle, also when the rectangle hangs
/// off the left or top edge. Only a non-positive or non-finite quadrant size
/// is rejected.
pub fn crop_quadrants(page: &DynamicImage, region: &Region) -> Result<Quadrants, SpliceError> {
    region.validate()?;

    let bbox = region.bounding_box();
    let cropped = page.crop_imm(bbox.x0, bbox.top, bbox.width(), bbox.height());

    let split = QuadrantSplit::for_region(region);
    let images = split
        .partition(cropped.width(), cropped.height())
        .map(|b| cropped.crop_imm(b.x0, b.top, b.width(), b.height()));

    Ok(Quadrants { images })
}

/// Crop the four quadrants of `region` from `page` and rotate each 90° counter-clockwise.
///
/// Each returned image is `quadrant_height` x `quadrant_width` pixels (up to
/// crop rounding), i.e. the pre-rotation size with width and height swapped.
pub fn extract_and_rotate_quadrants(
    page: &DynamicImage,
    region: &Region,
) -> Result<Quadrants, SpliceError> {
    Ok(crop_quadrants(page, region)?.rotated_ccw())
}
