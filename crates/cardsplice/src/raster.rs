//! PDF rasterization.
//!
//! [`PageRasterizer`] is the seam between the splice driver and whatever turns
//! a PDF into page images. [`PdfiumRasterizer`] (feature `pdfium`) renders
//! through a dynamically bound pdfium library.

use std::path::Path;

use cardsplice_core::Dpi;
use image::DynamicImage;

use crate::error::SpliceError;

/// Turns a PDF file into one decoded image per page.
///
/// All pages are returned at once, in document order.
pub trait PageRasterizer {
    fn rasterize(&self, path: &Path, dpi: Dpi) -> Result<Vec<DynamicImage>, SpliceError>;
}

#[cfg(feature = "pdfium")]
pub use self::pdfium::PdfiumRasterizer;

#[cfg(feature = "pdfium")]
mod pdfium {
    use std::path::Path;

    use cardsplice_core::Dpi;
    use image::{DynamicImage, RgbaImage};
    use pdfium_render::prelude::{PdfBitmap, PdfRenderConfig, Pdfium, PdfiumError};

    use super::PageRasterizer;
    use crate::error::SpliceError;

    fn pdfium_err(err: PdfiumError) -> SpliceError {
        SpliceError::Raster(format!("pdfium: {err:?}"))
    }

    /// Rasterizer backed by the pdfium shared library.
    pub struct PdfiumRasterizer {
        pdfium: Pdfium,
    }

    impl PdfiumRasterizer {
        /// Bind to a pdfium library in the working directory, falling back to
        /// the system-wide installation.
        pub fn new() -> Result<Self, SpliceError> {
            Self::with_library_dir(Path::new("./"))
                .or_else(|_| Self::from_system_library())
        }

        /// Bind to the pdfium library inside `dir`.
        pub fn with_library_dir(dir: &Path) -> Result<Self, SpliceError> {
            let lib = Pdfium::pdfium_platform_library_name_at_path(dir);
            let bindings = Pdfium::bind_to_library(&lib).map_err(|e| {
                SpliceError::Raster(format!(
                    "failed to load pdfium from {}: {e:?}",
                    lib.display()
                ))
            })?;
            Ok(Self {
                pdfium: Pdfium::new(bindings),
            })
        }

        /// Bind to the system pdfium library.
        pub fn from_system_library() -> Result<Self, SpliceError> {
            let bindings = Pdfium::bind_to_system_library().map_err(|e| {
                SpliceError::Raster(format!(
                    "failed to load pdfium: {e:?}. Place a pdfium shared library in the \
                     working directory or install it system-wide"
                ))
            })?;
            Ok(Self {
                pdfium: Pdfium::new(bindings),
            })
        }
    }

    impl PageRasterizer for PdfiumRasterizer {
        fn rasterize(&self, path: &Path, dpi: Dpi) -> Result<Vec<DynamicImage>, SpliceError> {
            if !path.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("file not found: {}", path.display()),
                )
                .into());
            }

            let document = self
                .pdfium
                .load_pdf_from_file(path, None)
                .map_err(pdfium_err)?;
            let config = PdfRenderConfig::new().scale_page_by_factor(dpi.scale() as f32);

            let mut pages = Vec::with_capacity(document.pages().len() as usize);
            for page in document.pages().iter() {
                let bitmap = page.render_with_config(&config).map_err(pdfium_err)?;
                pages.push(bitmap_to_image(&bitmap)?);
            }
            Ok(pages)
        }
    }

    fn bitmap_to_image(bitmap: &PdfBitmap) -> Result<DynamicImage, SpliceError> {
        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;
        RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes())
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(|| {
                SpliceError::Raster(format!(
                    "rendered bitmap does not match its {width}x{height} size"
                ))
            })
    }
}
