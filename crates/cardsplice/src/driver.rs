//! Page-pair driver: rasterize a PDF and write every page's quadrants to disk.

use std::fs;
use std::path::{Path, PathBuf};

use cardsplice_core::{Quadrant, SpliceOptions, page_pairs};
use image::{DynamicImage, ImageFormat};

use crate::error::SpliceError;
use crate::extract::{Quadrants, extract_and_rotate_quadrants};
use crate::raster::PageRasterizer;

/// What a splice run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpliceSummary {
    /// Number of pages processed.
    pub pages: usize,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Rasterize `pdf_path` and write four rotated quadrants per page.
///
/// See [`process_pages`] for the write order and naming. Any failure stops
/// the run; files written before it stay on disk.
pub fn process_pdf(
    pdf_path: &Path,
    options: &SpliceOptions,
    rasterizer: &dyn PageRasterizer,
) -> Result<SpliceSummary, SpliceError> {
    let pages = rasterizer.rasterize(pdf_path, options.dpi)?;
    #[cfg(feature = "tracing")]
    tracing::info!(
        path = %pdf_path.display(),
        pages = pages.len(),
        dpi = options.dpi.value(),
        "rasterized PDF"
    );
    process_pages(&pages, options)
}

/// Write four rotated quadrants for each of `pages`.
///
/// Pages are handled in pairs `(1, 2), (3, 4), ...`; a trailing odd page is
/// handled alone. Files are named `{prefix}_page{N}_q{i}.png`. The output
/// directory is created on demand.
///
/// A rectangle clipped by the page edge still extracts, but a quadrant left
/// with no pixels ends the run at write time with
/// [`SpliceError::EmptyQuadrant`].
pub fn process_pages(
    pages: &[DynamicImage],
    options: &SpliceOptions,
) -> Result<SpliceSummary, SpliceError> {
    let region = options.pixel_region();
    region.validate()?;

    let mut summary = SpliceSummary {
        pages: pages.len(),
        files: Vec::with_capacity(pages.len() * Quadrant::ALL.len()),
    };

    for pair in page_pairs(pages.len()) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            first = pair.first_number(),
            second = ?pair.second_number(),
            "processing page pair"
        );

        let first = extract_and_rotate_quadrants(&pages[pair.first], &region)?;
        let second = pair
            .second
            .map(|i| extract_and_rotate_quadrants(&pages[i], &region))
            .transpose()?;

        ensure_output_dir(options)?;

        write_quadrants(&first, pair.first_number(), options, &mut summary.files)?;
        if let (Some(quadrants), Some(number)) = (second, pair.second_number()) {
            write_quadrants(&quadrants, number, options, &mut summary.files)?;
        }
    }

    Ok(summary)
}

fn ensure_output_dir(options: &SpliceOptions) -> Result<(), SpliceError> {
    if let Some(dir) = options.output_dir() {
        fs::create_dir_all(dir)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(dir = %dir.display(), "output directory ready");
    }
    Ok(())
}

fn write_quadrants(
    quadrants: &Quadrants,
    page_number: usize,
    options: &SpliceOptions,
    written: &mut Vec<PathBuf>,
) -> Result<(), SpliceError> {
    for (quadrant, image) in quadrants.iter() {
        let path = options.quadrant_path(page_number, quadrant);
        write_png(image, &path, page_number, quadrant)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "wrote quadrant"
        );
        written.push(path);
    }
    Ok(())
}

fn write_png(
    image: &DynamicImage,
    path: &Path,
    page: usize,
    quadrant: Quadrant,
) -> Result<(), SpliceError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SpliceError::EmptyQuadrant { page, quadrant });
    }
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsplice_core::{Dpi, PointRegion};
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    /// Pages where the red channel carries the page index.
    struct FakeRasterizer {
        pages: usize,
        size: (u32, u32),
    }

    impl PageRasterizer for FakeRasterizer {
        fn rasterize(&self, _path: &Path, _dpi: Dpi) -> Result<Vec<DynamicImage>, SpliceError> {
            Ok((0..self.pages)
                .map(|i| {
                    DynamicImage::ImageRgb8(RgbImage::from_pixel(
                        self.size.0,
                        self.size.1,
                        Rgb([i as u8, 0, 0]),
                    ))
                })
                .collect())
        }
    }

    struct FailingRasterizer;

    impl PageRasterizer for FailingRasterizer {
        fn rasterize(&self, _path: &Path, _dpi: Dpi) -> Result<Vec<DynamicImage>, SpliceError> {
            Err(SpliceError::Raster("corrupt PDF".to_string()))
        }
    }

    /// 72 DPI so points equal pixels: a 20x16 block at (5, 4) on a 40x30 page.
    fn options_in(dir: &TempDir) -> SpliceOptions {
        SpliceOptions {
            dpi: Dpi::new(72),
            region: PointRegion {
                left: 5.0,
                top: 4.0,
                quadrant_width: 10.0,
                quadrant_height: 8.0,
            },
            output_prefix: dir.path().join("output").join("cards"),
        }
    }

    fn run(pages: usize, dir: &TempDir) -> Result<SpliceSummary, SpliceError> {
        let rasterizer = FakeRasterizer {
            pages,
            size: (40, 30),
        };
        process_pdf(Path::new("deck.pdf"), &options_in(dir), &rasterizer)
    }

    fn file_names(summary: &SpliceSummary) -> Vec<String> {
        summary
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn even_page_count_writes_four_files_per_page() {
        let dir = TempDir::new().unwrap();
        let summary = run(4, &dir).unwrap();
        assert_eq!(summary.pages, 4);
        assert_eq!(summary.files.len(), 16);
        for path in &summary.files {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn odd_page_count_processes_last_page_alone() {
        let dir = TempDir::new().unwrap();
        let summary = run(3, &dir).unwrap();
        assert_eq!(summary.files.len(), 12);
        let names = file_names(&summary);
        assert!(names.contains(&"cards_page3_q4.png".to_string()));
        assert!(!dir.path().join("output/cards_page4_q1.png").exists());
    }

    #[test]
    fn files_are_named_by_page_then_quadrant() {
        let dir = TempDir::new().unwrap();
        let summary = run(2, &dir).unwrap();
        assert_eq!(
            file_names(&summary),
            vec![
                "cards_page1_q1.png",
                "cards_page1_q2.png",
                "cards_page1_q3.png",
                "cards_page1_q4.png",
                "cards_page2_q1.png",
                "cards_page2_q2.png",
                "cards_page2_q3.png",
                "cards_page2_q4.png",
            ]
        );
    }

    #[test]
    fn written_files_are_rotated_quadrants_of_the_right_page() {
        let dir = TempDir::new().unwrap();
        run(2, &dir).unwrap();
        let img = image::open(dir.path().join("output/cards_page2_q3.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!((img.width(), img.height()), (8, 10));
        assert_eq!(img.get_pixel(0, 0), &Rgb([1, 0, 0]));
    }

    #[test]
    fn existing_output_dir_is_fine() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("output")).unwrap();
        assert!(run(1, &dir).is_ok());
        // Second run overwrites in place.
        assert_eq!(run(1, &dir).unwrap().files.len(), 4);
    }

    #[test]
    fn no_pages_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let summary = run(0, &dir).unwrap();
        assert!(summary.files.is_empty());
        assert!(!dir.path().join("output").exists());
    }

    #[test]
    fn rasterizer_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let err = process_pdf(Path::new("deck.pdf"), &options_in(&dir), &FailingRasterizer)
            .unwrap_err();
        assert!(matches!(err, SpliceError::Raster(_)));
        assert!(!dir.path().join("output").exists());
    }

    #[test]
    fn partially_off_page_rectangle_still_writes_reduced_quadrants() {
        let dir = TempDir::new().unwrap();
        let mut options = options_in(&dir);
        // 20px wide block starting at x=25 on a 40px page: right column is 5px wide.
        options.region.left = 25.0;
        let pages = vec![DynamicImage::ImageRgb8(RgbImage::new(40, 30))];
        let summary = process_pages(&pages, &options).unwrap();
        assert_eq!(summary.files.len(), 4);
        let q2 = image::open(&summary.files[1]).unwrap();
        assert_eq!((q2.width(), q2.height()), (8, 5));
    }

    #[test]
    fn empty_quadrant_aborts_after_earlier_writes() {
        let dir = TempDir::new().unwrap();
        let mut options = options_in(&dir);
        // Block starts at x=35: Q1 gets 5px, Q2 gets nothing.
        options.region.left = 35.0;
        let pages = vec![DynamicImage::ImageRgb8(RgbImage::new(40, 30))];
        let err = process_pages(&pages, &options).unwrap_err();
        assert!(matches!(
            err,
            SpliceError::EmptyQuadrant {
                page: 1,
                quadrant: Quadrant::TopRight
            }
        ));
        assert!(dir.path().join("output/cards_page1_q1.png").exists());
    }

    #[test]
    fn invalid_region_is_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let mut options = options_in(&dir);
        options.region.quadrant_height = 0.0;
        let pages = vec![DynamicImage::ImageRgb8(RgbImage::new(40, 30))];
        let err = process_pages(&pages, &options).unwrap_err();
        assert!(matches!(err, SpliceError::InvalidRegion(_)));
        assert!(!dir.path().join("output").exists());
    }

    #[test]
    fn bare_prefix_has_no_output_dir() {
        let options = SpliceOptions {
            output_prefix: PathBuf::from("cards"),
            ..SpliceOptions::default()
        };
        assert_eq!(options.output_dir(), None);
        assert_eq!(
            options.quadrant_path(7, Quadrant::BottomLeft),
            PathBuf::from("cards_page7_q3.png")
        );
    }
}
