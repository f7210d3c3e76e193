use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;
use strum_macros::Display;
use strum_macros::EnumString;
use tracing::debug;

use crate::error::Result;
use crate::error::SpecmapError;
use crate::merge::MergeOptions;

pub const DEFAULT_DATASET_URL: &str =
    "http://static.ofcom.org.uk/static/spectrum/data/spectrumMapping.json";

const CONFIG_DIR: &str = ".specmap";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VisualTemplate {
    #[default]
    Light,
    Dark,
}

/// Runtime options for the spectrum map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecmapConfig {
    /// Highlight merged regions instead of the clicked source band
    #[serde(default = "default_true")]
    pub merge: bool,

    /// Merge distance in Hz
    #[serde(default)]
    pub threshold: f64,

    /// Only merge neighbours sharing a usage name
    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub template: VisualTemplate,

    /// Directory holding downloads, the cached table and logs
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,

    /// Region tag used in download file names
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_true() -> bool {
    true
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("spectrum")
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_region() -> String {
    "uk".to_string()
}

impl Default for SpecmapConfig {
    fn default() -> Self {
        Self {
            merge: true,
            threshold: 0.0,
            unique: false,
            template: VisualTemplate::default(),
            cache_dir: default_cache_dir(),
            dataset_url: default_dataset_url(),
            region: default_region(),
        }
    }
}

impl SpecmapConfig {
    /// `~/.specmap/config.toml`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: SpecmapConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.merge_options().validate()?;
        if self.region.is_empty() || self.region.contains('_') {
            return Err(SpecmapError::Config(format!(
                "region must be non-empty and must not contain '_': {:?}",
                self.region
            )));
        }
        Ok(())
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            threshold: self.threshold,
            unique: self.unique,
        }
    }
}
