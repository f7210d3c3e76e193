use std::path::Path;

use pretty_assertions::assert_eq;
use specmap_core::BandFilter;
use specmap_core::BandTable;
use specmap_dataset::DatasetError;
use specmap_dataset::DatasetStore;
use specmap_dataset::DownloadQuery;
use specmap_dataset::RefreshOptions;

const DOCUMENT: &str = r#"{"bands":[
    {"lf":0,"uf":100,"s":"Amateur","u":"x"},
    {"lf":150,"uf":200,"s":"Amateur","u":"y"},
    {"lf":2400000000,"uf":2483500000,"s":"Licence exempt","u":"Wi-Fi","v":"2.4"}
]}"#;

fn seed(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).expect("create dir");
    for name in names {
        std::fs::write(dir.join(name), DOCUMENT).expect("write download");
    }
}

#[test]
fn list_filters_by_region_date_and_time() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed(
        dir.path(),
        &[
            "spectrum_uk_20240102_120000.json",
            "spectrum_uk_20240101_090000.json",
            "spectrum_ie_20240103_080000.json",
            "notes.txt",
        ],
    );
    let store = DatasetStore::new(dir.path());

    assert_eq!(
        store.list_downloads(&DownloadQuery::default()).expect("list"),
        vec![
            "spectrum_ie_20240103_080000.json".to_string(),
            "spectrum_uk_20240101_090000.json".to_string(),
            "spectrum_uk_20240102_120000.json".to_string(),
        ]
    );
    assert_eq!(
        store.list_downloads(&DownloadQuery::region("ie")).expect("list"),
        vec!["spectrum_ie_20240103_080000.json".to_string()]
    );

    let query = DownloadQuery {
        region: Some("uk".to_string()),
        dates: 20240101..=20240101,
        ..Default::default()
    };
    assert_eq!(
        store.list_downloads(&query).expect("list"),
        vec!["spectrum_uk_20240101_090000.json".to_string()]
    );

    let query = DownloadQuery {
        times: 100_000..=240_000,
        ..Default::default()
    };
    assert_eq!(
        store.list_downloads(&query).expect("list"),
        vec!["spectrum_uk_20240102_120000.json".to_string()]
    );
}

#[test]
fn refresh_uses_latest_download_and_caches_the_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed(
        dir.path(),
        &[
            "spectrum_uk_20240101_090000.json",
            "spectrum_uk_20240102_120000.json",
        ],
    );
    std::fs::write(
        dir.path().join("spectrum_ie_20250101_000000.json"),
        r#"{"bands":[]}"#,
    )
    .expect("write");
    let store = DatasetStore::new(dir.path());

    let table = store
        .refresh(RefreshOptions {
            region: Some("uk".to_string()),
            ..Default::default()
        })
        .expect("refresh");
    assert_eq!(table.len(), 3);
    let wifi = &table.bands()[2];
    assert_eq!(wifi.unique_id, "2.4 GHz to 2.4835 GHz — Wi-Fi");
    assert_eq!(wifi.bandwidth, 83_500_000.0);
    assert_eq!(wifi.variant.as_deref(), Some("2.4"));

    assert_eq!(store.retrieve().expect("retrieve"), table);
}

#[test]
fn refresh_applies_filter_before_caching() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed(dir.path(), &["spectrum_uk_20240101_090000.json"]);
    let store = DatasetStore::new(dir.path());

    let amateur_only = |table: BandTable| table.filter(&BandFilter::sectors(["Amateur"]));
    let table = store
        .refresh(RefreshOptions {
            filename: Some("spectrum_uk_20240101_090000.json".to_string()),
            filter: Some(&amateur_only),
            ..Default::default()
        })
        .expect("refresh");
    assert_eq!(table.sectors(), vec!["Amateur".to_string()]);
    assert_eq!(store.retrieve().expect("retrieve").len(), 2);
}

#[test]
fn refresh_reports_missing_downloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = DatasetStore::new(dir.path());
    let err = store.refresh(RefreshOptions::default()).expect_err("empty");
    assert!(matches!(err, DatasetError::NoDownloads(_)));
    assert!(err.is_resource_absence());

    seed(dir.path(), &["spectrum_uk_20240101_090000.json"]);
    let err = store
        .refresh(RefreshOptions {
            filename: Some("spectrum_uk_20991231_000000.json".to_string()),
            ..Default::default()
        })
        .expect_err("unknown file");
    assert!(matches!(err, DatasetError::FileNotFound(_)));

    // present, but outside the requested region
    let err = store
        .refresh(RefreshOptions {
            filename: Some("spectrum_uk_20240101_090000.json".to_string()),
            region: Some("ie".to_string()),
            ..Default::default()
        })
        .expect_err("wrong region");
    assert!(matches!(err, DatasetError::FileNotFound(_)));
}

#[test]
fn retrieve_without_cached_table_is_resource_absence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = DatasetStore::new(dir.path()).retrieve().expect_err("absent");
    assert!(matches!(err, DatasetError::CachedTableMissing(_)));
    assert!(err.is_resource_absence());
}

#[test]
fn retrieve_rejects_cached_rows_with_inverted_bounds() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed(dir.path(), &["spectrum_uk_20240101_090000.json"]);
    let store = DatasetStore::new(dir.path());
    store.refresh(RefreshOptions::default()).expect("refresh");

    let path = store.cached_table_path();
    let mut rows: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).expect("read cache")).expect("json");
    rows[1]["upper_freq"] = serde_json::json!(10.0);
    std::fs::write(&path, serde_json::to_vec(&rows).expect("serialize")).expect("write cache");

    let err = store.retrieve().expect_err("corrupt cache");
    assert!(
        matches!(
            err,
            DatasetError::Band(specmap_core::SpecmapError::InvalidBand { .. })
        ),
        "{err:?}"
    );
}
