//! Static hosting for the folio portfolio page.
//!
//! Mounts the content payload into an existing page shell and writes a
//! ready-to-host site directory with the referenced images.

pub mod assets;
pub mod builder;
pub mod mount;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use mount::{inject, Mounted, StaticHost};
