use std::time::Duration;

use chrono::Local;
use specmap_core::DEFAULT_DATASET_URL;
use tracing::debug;
use tracing::info;

use crate::cache::DatasetStore;
use crate::cache::DownloadName;
use crate::document::SpectrumDocument;
use crate::error::DatasetError;
use crate::error::Result;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Downloader {
    http: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetches the raw spectrum document. The body must parse as one.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(DatasetError::HttpStatus {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body = resp.bytes().await?.to_vec();
        SpectrumDocument::from_slice(&body)?;
        Ok(body)
    }
}

impl DatasetStore {
    /// Downloads the document at `url` (the Ofcom UK map when empty) and
    /// stores it as `spectrum_<region>_<date>_<time>.json`. Returns the
    /// new file name.
    pub async fn download(
        &self,
        downloader: &Downloader,
        url: Option<&str>,
        region: &str,
    ) -> Result<String> {
        if region.is_empty() || region.contains('_') {
            return Err(DatasetError::InvalidRegion(region.to_string()));
        }
        let url = url
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_DATASET_URL);
        let body = downloader.fetch(url).await?;

        tokio::fs::create_dir_all(self.dir()).await?;
        let file_name = self.unused_download_name(region).await?;
        tokio::fs::write(self.dir().join(&file_name), &body).await?;
        info!(url, file = %file_name, bytes = body.len(), "spectrum map downloaded");
        Ok(file_name)
    }

    /// Names carry one-second resolution, so a name already on disk means
    /// another download landed this second. Waits for the next one.
    async fn unused_download_name(&self, region: &str) -> Result<String> {
        loop {
            let now = Local::now();
            let file_name = DownloadName::at(region, &now).file_name();
            if !tokio::fs::try_exists(self.dir().join(&file_name)).await? {
                return Ok(file_name);
            }
            let wait = 1_000 - u64::from(now.timestamp_subsec_millis().min(999));
            debug!(file = %file_name, wait_ms = wait, "download name taken");
            tokio::time::sleep(Duration::from_millis(wait)).await;
        }
    }
}
