use pretty_assertions::assert_eq;
use specmap_dataset::DatasetError;
use specmap_dataset::DatasetStore;
use specmap_dataset::DownloadName;
use specmap_dataset::DownloadQuery;
use specmap_dataset::Downloader;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

const BODY: &str = r#"{"bands":[{"lf":0,"uf":100,"s":"Amateur","u":"x"}]}"#;

#[tokio::test]
async fn download_stores_timestamped_copy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spectrumMapping.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = DatasetStore::new(dir.path().join("spectrum"));
    let downloader = Downloader::new().expect("client");
    let url = format!("{}/spectrumMapping.json", server.uri());

    let file_name = store
        .download(&downloader, Some(url.as_str()), "uk")
        .await
        .expect("download");
    let name = DownloadName::parse(&file_name).expect("well-formed name");
    assert_eq!(name.region, "uk");
    assert_eq!(
        std::fs::read_to_string(store.dir().join(&file_name)).expect("read"),
        BODY
    );
    assert_eq!(
        store.list_downloads(&DownloadQuery::region("uk")).expect("list"),
        vec![file_name]
    );
}

#[tokio::test]
async fn back_to_back_downloads_keep_both_copies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = DatasetStore::new(dir.path());
    let downloader = Downloader::new().expect("client");
    let first = store
        .download(&downloader, Some(server.uri().as_str()), "uk")
        .await
        .expect("first download");
    let second = store
        .download(&downloader, Some(server.uri().as_str()), "uk")
        .await
        .expect("second download");

    assert_ne!(first, second);
    assert_eq!(
        store.list_downloads(&DownloadQuery::region("uk")).expect("list"),
        vec![first, second]
    );
}

#[tokio::test]
async fn http_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = DatasetStore::new(dir.path());
    let downloader = Downloader::new().expect("client");
    let err = store
        .download(&downloader, Some(server.uri().as_str()), "uk")
        .await
        .expect_err("503");
    assert!(matches!(err, DatasetError::HttpStatus { status: 503, .. }));
    assert!(
        store
            .list_downloads(&DownloadQuery::default())
            .expect("list")
            .is_empty()
    );
}

#[tokio::test]
async fn malformed_document_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = DatasetStore::new(dir.path());
    let downloader = Downloader::new().expect("client");
    let err = store
        .download(&downloader, Some(server.uri().as_str()), "uk")
        .await
        .expect_err("not json");
    assert!(matches!(err, DatasetError::Serialization(_)));
}

#[tokio::test]
async fn region_with_separator_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = DatasetStore::new(dir.path());
    let downloader = Downloader::new().expect("client");
    let err = store
        .download(&downloader, Some("http://127.0.0.1:9"), "north_uk")
        .await
        .expect_err("bad region");
    assert!(matches!(err, DatasetError::InvalidRegion(_)));
}
