//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_content::{ContentPayload, TemplateEngine};

use crate::assets::AssetPipeline;
use crate::mount::StaticHost;

/// Configuration for building the static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the images the page refers to
    pub asset_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Page shell to mount into; the built-in shell when unset
    pub shell: Option<PathBuf>,

    /// Minify the payload style block
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            output_dir: PathBuf::from("dist"),
            shell: None,
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of images copied
    pub assets: usize,

    /// Whether the shell had a mount point
    pub mounted: bool,

    /// Whether the carousel script was attached
    pub carousel_attached: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read shell: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Failed to copy asset {path}: {message}")]
    CopyError { path: String, message: String },
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    payload: &'static ContentPayload,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder for the portfolio payload.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            payload: ContentPayload::portfolio(),
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let shell = self.load_shell()?;
        let host = StaticHost::new(self.payload).with_styles(self.styles());

        let (html, mounted, carousel_attached) = match host.mount(&shell) {
            Some(page) => (page.html, true, page.carousel_attached),
            None => (shell, false, false),
        };

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let assets = self.copy_assets()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            assets,
            mounted,
            carousel_attached,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Read the configured shell, or render the built-in one.
    fn load_shell(&self) -> Result<String, BuildError> {
        match &self.config.shell {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e))),
            None => self
                .templates
                .render_shell(self.payload)
                .map_err(|e| BuildError::TemplateError(e.to_string())),
        }
    }

    /// The style block to mount, minified when configured.
    fn styles(&self) -> String {
        let styles = self.payload.styles();

        if !self.config.minify {
            return styles.to_string();
        }

        AssetPipeline::minify_css(styles).unwrap_or_else(|e| {
            tracing::warn!("Failed to minify styles, using original: {}", e);
            styles.to_string()
        })
    }

    /// Copy every image under the asset directory into the output.
    ///
    /// Nothing is copied when the output is the asset directory itself.
    fn copy_assets(&self) -> Result<usize, BuildError> {
        if same_dir(&self.config.asset_dir, &self.config.output_dir) {
            tracing::info!("Output is the asset directory; images left in place");
            return Ok(0);
        }

        let images = AssetPipeline::collect_images(&self.config.asset_dir, &self.config.output_dir);

        let copied = AssetPipeline::copy_images(
            &self.config.asset_dir,
            &self.config.output_dir,
            &images,
        )
        .map_err(|(path, e)| BuildError::CopyError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!("Copied {} images", copied);

        Ok(copied)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builds_site_with_default_shell() {
        let temp = tempdir().unwrap();
        let assets = temp.path().join("site");
        let out = temp.path().join("dist");

        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("profilepic.jpg"), b"jpg").unwrap();
        fs::write(assets.join("hanapp2.jpg"), b"jpg").unwrap();
        fs::write(assets.join("index.js"), b"js").unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            asset_dir: assets,
            output_dir: out.clone(),
            ..Default::default()
        });
        let result = builder.build().unwrap();

        assert!(result.mounted);
        assert!(result.carousel_attached);
        assert_eq!(result.assets, 2);
        assert!(out.join("profilepic.jpg").exists());
        assert!(!out.join("index.js").exists());

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Allan Paul | Portfolio</title>"));
        assert_eq!(html.matches("<h1>Allan Paul Permejo</h1>").count(), 1);
        assert!(html.contains(r#"document.getElementById("hanapp-slideshow")"#));
    }

    #[test]
    fn mounts_into_custom_shell() {
        let temp = tempdir().unwrap();
        let shell = temp.path().join("shell.html");
        let out = temp.path().join("dist");
        fs::write(
            &shell,
            r#"<html><head><title>Mine</title></head><body><div id="app">Loading...</div></body></html>"#,
        )
        .unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            asset_dir: temp.path().to_path_buf(),
            output_dir: out.clone(),
            shell: Some(shell),
            minify: false,
        });
        let result = builder.build().unwrap();

        assert!(result.mounted);

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<html><head><title>Mine</title>"));
        assert!(!html.contains("Loading..."));
        assert!(html.contains("--primary: #2c3c7c;"));
        assert!(html.ends_with("</div></body></html>"));
    }

    #[test]
    fn shell_without_mount_is_written_unchanged() {
        let temp = tempdir().unwrap();
        let shell = temp.path().join("shell.html");
        let out = temp.path().join("dist");
        let original = "<html><body><main>static</main></body></html>";
        fs::write(&shell, original).unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            asset_dir: temp.path().to_path_buf(),
            output_dir: out.clone(),
            shell: Some(shell),
            ..Default::default()
        });
        let result = builder.build().unwrap();

        assert!(!result.mounted);
        assert!(!result.carousel_attached);
        assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), original);
    }

    #[test]
    fn output_inside_asset_dir_is_not_recopied() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        fs::write(temp.path().join("sysad.png"), b"png").unwrap();

        let config = BuildConfig {
            asset_dir: temp.path().to_path_buf(),
            output_dir: out.clone(),
            ..Default::default()
        };

        StaticBuilder::new(config.clone()).build().unwrap();
        let second = StaticBuilder::new(config).build().unwrap();

        assert_eq!(second.assets, 1);
        assert!(!out.join("dist").exists());
    }

    #[test]
    fn missing_shell_is_an_error() {
        let temp = tempdir().unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            asset_dir: temp.path().to_path_buf(),
            output_dir: temp.path().join("dist"),
            shell: Some(temp.path().join("nope.html")),
            ..Default::default()
        });

        assert!(matches!(
            builder.build(),
            Err(BuildError::ReadError(_))
        ));
    }

    #[test]
    fn output_equal_to_asset_dir_keeps_images() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("profilepic.jpg"), b"real jpeg bytes").unwrap();

        let result = StaticBuilder::new(BuildConfig {
            asset_dir: temp.path().to_path_buf(),
            output_dir: temp.path().join("."),
            ..Default::default()
        })
        .build()
        .unwrap();

        assert_eq!(result.assets, 0);
        assert!(result.mounted);
        assert_eq!(
            fs::read(temp.path().join("profilepic.jpg")).unwrap(),
            b"real jpeg bytes"
        );
        assert!(temp.path().join("index.html").exists());
    }
}
