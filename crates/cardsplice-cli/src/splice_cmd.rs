use std::path::Path;

use cardsplice::{PdfiumRasterizer, SpliceOptions, process_pdf};

pub fn run(file: &Path) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let options = SpliceOptions::default();
    let rasterizer = PdfiumRasterizer::new().map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    let summary = process_pdf(file, &options, &rasterizer).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    if summary.pages == 0 {
        tracing::warn!(path = %file.display(), "PDF has no pages");
    }
    eprintln!(
        "Wrote {} quadrant image(s) from {} page(s).",
        summary.files.len(),
        summary.pages
    );
    Ok(())
}
