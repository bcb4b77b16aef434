//! Output file naming.
//!
//! Quadrant files are named `{prefix}_page{N}_q{i}.png`, where `N` is the
//! 1-based page number and `i` the quadrant index. The prefix may carry a
//! directory component (e.g. `output/cropped_quadrants`).

use std::path::{Path, PathBuf};

use crate::quadrant::Quadrant;

/// Path of the PNG file for one quadrant of one page.
pub fn quadrant_path(prefix: &Path, page_number: usize, quadrant: Quadrant) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_page{page_number}_q{}.png", quadrant.index()));
    PathBuf::from(name)
}

/// Directory that must exist before files with `prefix` can be written.
///
/// Returns `None` when the prefix is a bare file stem in the working directory.
pub fn output_dir(prefix: &Path) -> Option<&Path> {
    prefix.parent().filter(|p| !p.as_os_str().is_empty())
}
