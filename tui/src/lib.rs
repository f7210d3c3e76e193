//! Terminal front end for the spectrum allocation map.

use std::path::Path;

use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use specmap_core::ControllerOptions;
use specmap_core::SpecmapConfig;
use specmap_core::SpectrumController;
use specmap_dataset::DatasetStore;
use specmap_dataset::DownloadQuery;
use specmap_dataset::Downloader;
use specmap_dataset::RefreshOptions;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

mod app;
mod app_event;
mod app_event_sender;
mod band_list;
mod cli;
mod hint_bar;
mod plot_view;
mod render;
mod sector_picker;
mod theme;
mod tui;

pub use cli::Cli;
pub use cli::Command;
pub use cli::ConfigOverrides;
pub use cli::DownloadArgs;
pub use cli::ListArgs;

use crate::app::App;
use crate::theme::Theme;

const LOG_FILE: &str = "specmap-tui.log";
const DEFAULT_LOG_FILTER: &str = "specmap_core=info,specmap_dataset=info,specmap_tui=info";

pub async fn run_main(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let _log_guard = init_logging(&config.cache_dir)?;
    let store = DatasetStore::new(&config.cache_dir);

    match cli.command {
        Some(Command::Download(args)) => {
            let region = args.region.unwrap_or_else(|| config.region.clone());
            let url = args.url.unwrap_or_else(|| config.dataset_url.clone());
            let file_name = store
                .download(&Downloader::new()?, Some(url.as_str()), &region)
                .await?;
            println!("{file_name}");
            Ok(())
        }
        Some(Command::List(args)) => {
            let query = DownloadQuery {
                region: args.region,
                ..Default::default()
            };
            for name in store.list_downloads(&query)? {
                println!("{name}");
            }
            Ok(())
        }
        None => {
            if cli.download {
                store
                    .download(&Downloader::new()?, Some(config.dataset_url.as_str()), &config.region)
                    .await?;
            }
            let table = if cli.refresh || cli.download {
                store.refresh(RefreshOptions {
                    region: Some(config.region.clone()),
                    ..Default::default()
                })?
            } else {
                store.retrieve().wrap_err(
                    "no cached band table; run `specmap download` then `specmap --refresh`",
                )?
            };
            info!(bands = table.len(), "opening spectrum map");

            let controller = SpectrumController::new(table, ControllerOptions::from(&config))?;
            let theme = Theme::for_template(config.template);
            let mut terminal = tui::init()?;
            let result = App::run(&mut terminal, controller, theme).await;
            tui::restore()?;
            result
        }
    }
}

/// Config file, then command-line overrides.
fn load_config(cli: &Cli) -> Result<SpecmapConfig> {
    let mut config = match cli.config.clone().or_else(SpecmapConfig::default_path) {
        Some(path) => SpecmapConfig::load(&path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => SpecmapConfig::default(),
    };
    cli.overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Logs go to a file in the cache directory so they never touch the
/// terminal. `RUST_LOG` overrides the default filter.
fn init_logging(cache_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(cache_dir)
        .wrap_err_with(|| format!("failed to create {}", cache_dir.display()))?;
    let appender = tracing_appender::rolling::never(cache_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init();
    Ok(guard)
}
