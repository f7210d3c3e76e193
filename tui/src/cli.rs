use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use specmap_core::SpecmapConfig;
use specmap_core::VisualTemplate;

#[derive(Debug, Parser)]
#[command(name = "specmap", version, about = "Interactive spectrum allocation map")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Rebuild the cached band table from the latest download
    #[arg(long)]
    pub refresh: bool,

    /// Download a fresh copy of the dataset before opening the map
    #[arg(long)]
    pub download: bool,

    /// Config file (defaults to ~/.specmap/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the spectrum mapping document into the cache directory
    Download(DownloadArgs),

    /// List cached downloads
    List(ListArgs),
}

#[derive(Debug, Parser)]
pub struct DownloadArgs {
    /// Document URL (defaults to the configured dataset URL)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Region tag used in the file name
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only list downloads for this region
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,
}

/// Flags that take precedence over the config file.
#[derive(Debug, Default, Parser)]
pub struct ConfigOverrides {
    /// Merge distance in Hz
    #[arg(long, value_name = "HZ", global = true)]
    pub threshold: Option<f64>,

    /// Only merge neighbouring bands with the same usage name
    #[arg(long, global = true)]
    pub unique: bool,

    /// Highlight the clicked band itself instead of its merged region
    #[arg(long, global = true)]
    pub no_merge: bool,

    /// Visual template: light or dark
    #[arg(long, value_name = "TEMPLATE", global = true)]
    pub template: Option<VisualTemplate>,

    /// Directory for downloads, the cached table and logs
    #[arg(long, value_name = "PATH", global = true)]
    pub cache_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SpecmapConfig) {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.unique {
            config.unique = true;
        }
        if self.no_merge {
            config.merge = false;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(cache_dir) = &self.cache_dir {
            config.cache_dir.clone_from(cache_dir);
        }
    }
}
