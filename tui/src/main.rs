use clap::Parser;
use specmap_tui::Cli;
use specmap_tui::run_main;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    run_main(cli).await
}
