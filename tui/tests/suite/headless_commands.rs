use clap::Parser;
use specmap_tui::Cli;
use specmap_tui::run_main;

fn cli(cache_dir: &std::path::Path, args: &[&str]) -> Cli {
    let config = cache_dir.join("missing-config.toml");
    let mut argv = vec![
        "specmap".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--cache-dir".to_string(),
        cache_dir.display().to_string(),
    ];
    argv.extend(args.iter().map(|arg| (*arg).to_string()));
    Cli::try_parse_from(argv).expect("parse")
}

#[tokio::test]
async fn list_on_empty_cache_succeeds_and_creates_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    run_main(cli(dir.path(), &["list"])).await.expect("list");
    assert!(dir.path().join("specmap-tui.log").exists());
}

#[tokio::test]
async fn download_rejects_region_with_separator() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = run_main(cli(
        dir.path(),
        &["download", "--url", "http://127.0.0.1:9/none.json", "--region", "north_uk"],
    ))
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_cached_table_reports_hint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = run_main(cli(dir.path(), &[]))
        .await
        .expect_err("no cached table");
    assert!(format!("{err:?}").contains("specmap --refresh"), "{err:?}");
}

#[tokio::test]
async fn invalid_threshold_is_rejected_before_any_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = dir.path().join("never-created");
    let result = run_main(cli(&cache, &["--threshold=-1", "list"])).await;
    assert!(result.is_err());
    assert!(!cache.exists());
}
