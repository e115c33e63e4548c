//! Local server command.

use std::path::PathBuf;

use anyhow::Result;
use folio_server::{PortfolioServer, ServerConfig};

use crate::config::ConfigFile;

/// Run the server. Host and port are fixed; only the image directory varies.
pub async fn run(dir: Option<PathBuf>, file_config: &ConfigFile) -> Result<()> {
    let base_dir = dir.unwrap_or_else(|| file_config.site.assets.clone());

    if !base_dir.is_dir() {
        anyhow::bail!("Directory not found: {}", base_dir.display());
    }

    let config = ServerConfig {
        base_dir,
        ..Default::default()
    };

    PortfolioServer::new(config).start().await?;

    Ok(())
}
