use std::path::PathBuf;

use clap::Parser;

/// Cut scanned card sheets into rotated quadrant images.
///
/// Every page of the PDF is rendered at 300 DPI. The card block on each page
/// is split into four quadrants, each rotated 90° counter-clockwise and saved
/// as output/cropped_quadrants_page{N}_q{1..4}.png.
#[derive(Debug, Parser)]
#[command(name = "cardsplice", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "PDF_PATH")]
    pub file: PathBuf,
}
