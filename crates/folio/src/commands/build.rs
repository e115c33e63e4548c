//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use folio_static::{BuildConfig, StaticBuilder};

use crate::config::ConfigFile;

/// Run the build command. Flags override the config file.
pub async fn run(
    output: Option<PathBuf>,
    shell: Option<PathBuf>,
    assets: Option<PathBuf>,
    minify: Option<bool>,
    file_config: &ConfigFile,
) -> Result<()> {
    tracing::info!("Building static site...");

    let config = BuildConfig {
        asset_dir: assets.unwrap_or_else(|| file_config.site.assets.clone()),
        output_dir: output.unwrap_or_else(|| file_config.site.output.clone()),
        shell: shell.or_else(|| file_config.site.shell.clone()),
        minify: minify.unwrap_or(file_config.build.minify),
    };

    let result = tokio::task::spawn_blocking(move || StaticBuilder::new(config).build()).await??;

    if !result.mounted {
        tracing::warn!("Shell has no id=\"app\" element; index.html was written unchanged");
    }

    tracing::info!(
        "Built page with {} images in {}ms",
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
