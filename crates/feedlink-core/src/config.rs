use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/feedlink/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedlinkConfig {
    /// Additional hosts classified with the YouTube rules (e.g. a mirror
    /// frontend serving the same URL shapes).
    #[serde(default)]
    pub extra_youtube_hosts: Vec<String>,
    /// Additional hosts classified with the Vimeo rules.
    #[serde(default)]
    pub extra_vimeo_hosts: Vec<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FeedlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FeedlinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
