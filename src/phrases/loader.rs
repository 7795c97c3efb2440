//! Phrase bank loading utilities
//!
//! A phrase bank directory holds one `*.txt` file per category with one phrase per
//! line. The category name is the file stem in uppercase.

use super::{Category, PhraseCatalog};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load the phrases of a single category file
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load every `*.txt` category file in a directory
///
/// Categories are ordered by file name.
///
/// # Errors
///
/// Returns an I/O error if the directory or any category file cannot be read.
///
/// # Examples
/// ```no_run
/// use wheel_of_fortune::phrases::loader::load_from_dir;
///
/// let catalog = load_from_dir("data").unwrap();
/// println!("Loaded {} phrases", catalog.len());
/// ```
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> io::Result<PhraseCatalog> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut categories = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let phrases = load_from_file(&path)?;
        debug!(category = stem, phrases = phrases.len(), "loaded category");
        categories.push(Category::new(stem.to_uppercase(), phrases));
    }

    Ok(PhraseCatalog::new(categories))
}
