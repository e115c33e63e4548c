//! Asset pipeline for styles and images.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_content::is_asset_path;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Find image assets under `root`, relative to it.
    ///
    /// Hidden entries and the `exclude` directory (usually the build output)
    /// are skipped.
    pub fn collect_images(root: &Path, exclude: &Path) -> Vec<PathBuf> {
        let exclude = exclude.canonicalize().unwrap_or_else(|_| exclude.to_path_buf());

        let mut images: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || (!is_hidden(e) && !is_excluded(e, &exclude)))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
            .filter(|relative| is_asset_path(&url_path(relative)))
            .collect();

        images.sort();
        images
    }

    /// Copy `images` (relative to `from`) into `to`, preserving layout.
    ///
    /// Returns the number of files copied, or the first failing path. A file
    /// whose target is the source itself is skipped.
    pub fn copy_images(
        from: &Path,
        to: &Path,
        images: &[PathBuf],
    ) -> Result<usize, (PathBuf, io::Error)> {
        images
            .par_iter()
            .map(|relative| -> Result<bool, (PathBuf, io::Error)> {
                let source = from.join(relative);
                let target = to.join(relative);

                if is_same_file(&source, &target) {
                    return Ok(false);
                }

                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|e| (source.clone(), e))?;
                }
                fs::copy(&source, &target).map_err(|e| (source.clone(), e))?;

                tracing::debug!("Copied {}", relative.display());
                Ok(true)
            })
            .collect::<Result<Vec<bool>, _>>()
            .map(|copied| copied.into_iter().filter(|c| *c).count())
    }
}

fn is_same_file(source: &Path, target: &Path) -> bool {
    match (source.canonicalize(), target.canonicalize()) {
        (Ok(s), Ok(t)) => s == t,
        _ => false,
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn is_excluded(entry: &DirEntry, exclude: &Path) -> bool {
    entry.file_type().is_dir()
        && entry
            .path()
            .canonicalize()
            .map(|p| p == exclude)
            .unwrap_or(false)
}

/// The URL path a file would be requested under.
fn url_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}
