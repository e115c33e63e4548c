//! Asset/page split for incoming request paths.

use std::sync::LazyLock;

use regex::Regex;

/// Case-sensitive image suffixes served from disk.
static ASSET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(jpg|jpeg|png|svg)$").expect("valid asset pattern"));

/// What a request path asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// An image file under the base directory
    Asset,

    /// The portfolio page
    Page,
}

impl RequestKind {
    /// Classify a URL path (without query string).
    ///
    /// Anything that is not an image suffix is a page request, including
    /// `/`, extensionless paths and other file types.
    pub fn classify(path: &str) -> Self {
        if is_asset_path(path) {
            RequestKind::Asset
        } else {
            RequestKind::Page
        }
    }
}

/// Whether `path` ends in `.jpg`, `.jpeg`, `.png` or `.svg`.
pub fn is_asset_path(path: &str) -> bool {
    ASSET_PATTERN.is_match(path)
}
