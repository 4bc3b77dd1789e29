use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use color_eyre::eyre::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlVideoDir {
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlDataDir {
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlConfig {
    #[serde(rename = "VideoDir")]
    pub video_dir: TomlVideoDir,
    #[serde(rename = "DataDir")]
    pub data_dir: TomlDataDir,
    pub address: Option<String>,
    pub port: Option<u16>,
}

/// Root directory scanned for unprocessed videos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDir {
    pub path: PathBuf,
}

/// Directory holding the database file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub video_dir: VideoDir,
    pub data_dir: DataDir,
    pub address: Option<String>,
    pub port: Option<u16>,
}

pub async fn read_config(path: &Path) -> Result<Config> {
    let toml_str = tokio::fs::read_to_string(path)
        .await
        .context(format!("Error reading config file {}", path))?;
    // all relative paths in the config file are relative to its parent directory
    let config_dir = path.parent().unwrap_or(Path::new("."));
    parse_config(&toml_str, config_dir)
}

pub fn parse_config(toml_str: &str, config_dir: &Path) -> Result<Config> {
    let toml_config: TomlConfig = toml::from_str(toml_str).context("Error parsing config file")?;
    let video_dir = VideoDir {
        path: resolve_relative(config_dir, &toml_config.video_dir.path),
    };
    let data_dir = DataDir {
        path: resolve_relative(config_dir, &toml_config.data_dir.path),
    };
    Ok(Config {
        video_dir,
        data_dir,
        address: toml_config.address,
        port: toml_config.port,
    })
}

fn resolve_relative(config_dir: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        config_dir.join(path)
    }
}
