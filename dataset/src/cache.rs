use std::ops::RangeInclusive;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Datelike;
use chrono::TimeZone;
use chrono::Timelike;
use specmap_core::BandTable;
use tracing::debug;
use tracing::info;

use crate::document::SpectrumDocument;
use crate::error::DatasetError;
use crate::error::Result;

const DOWNLOAD_PREFIX: &str = "spectrum";
const DOWNLOAD_EXTENSION: &str = "json";
const CACHED_TABLE: &str = "bands.json";

/// `spectrum_<region>_<YYYYMMDD>_<HHMMSS>.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadName {
    pub region: String,
    pub date: u64,
    pub time: u32,
}

impl DownloadName {
    pub fn at<Tz: TimeZone>(region: &str, timestamp: &DateTime<Tz>) -> Self {
        let year = u64::try_from(timestamp.year()).unwrap_or_default();
        Self {
            region: region.to_string(),
            date: year * 10_000 + u64::from(timestamp.month()) * 100 + u64::from(timestamp.day()),
            time: timestamp.hour() * 10_000 + timestamp.minute() * 100 + timestamp.second(),
        }
    }

    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name
            .strip_prefix(DOWNLOAD_PREFIX)?
            .strip_prefix('_')?
            .strip_suffix(DOWNLOAD_EXTENSION)?
            .strip_suffix('.')?;
        let mut parts = stem.split('_');
        let region = parts.next()?;
        let date = parts.next()?.parse().ok()?;
        let time = parts.next()?.parse().ok()?;
        if region.is_empty() || parts.next().is_some() {
            return None;
        }
        Some(Self {
            region: region.to_string(),
            date,
            time,
        })
    }

    pub fn file_name(&self) -> String {
        format!(
            "{DOWNLOAD_PREFIX}_{}_{:08}_{:06}.{DOWNLOAD_EXTENSION}",
            self.region, self.date, self.time
        )
    }
}

/// Filter for cached downloads. Ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadQuery {
    pub region: Option<String>,
    pub dates: RangeInclusive<u64>,
    pub times: RangeInclusive<u32>,
}

impl Default for DownloadQuery {
    fn default() -> Self {
        Self {
            region: None,
            dates: 0..=4_294_967_295,
            times: 0..=240_000,
        }
    }
}

impl DownloadQuery {
    pub fn region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    fn matches(&self, name: &DownloadName) -> bool {
        self.region
            .as_deref()
            .is_none_or(|region| region == name.region)
            && self.dates.contains(&name.date)
            && self.times.contains(&name.time)
    }
}

/// Callback applied to a freshly parsed table before it is cached.
pub type TableFilter<'a> = &'a dyn Fn(BandTable) -> BandTable;

#[derive(Default)]
pub struct RefreshOptions<'a> {
    /// A specific download. The latest matching one is used when unset.
    pub filename: Option<String>,
    pub region: Option<String>,
    pub filter: Option<TableFilter<'a>>,
}

/// Directory holding raw downloads and the prepared band table.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    dir: PathBuf,
}

impl DatasetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cached_table_path(&self) -> PathBuf {
        self.dir.join(CACHED_TABLE)
    }

    /// Sorted names of cached downloads matching `query`. A missing
    /// directory has no downloads.
    pub fn list_downloads(&self, query: &DownloadQuery) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut names = Vec::new();
        for entry in entries {
            let file_name = entry?.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if DownloadName::parse(file_name).is_some_and(|name| query.matches(&name)) {
                names.push(file_name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Parses a cached download into a prepared band table and stores it
    /// as the cached table.
    pub fn refresh(&self, options: RefreshOptions<'_>) -> Result<BandTable> {
        let query = DownloadQuery {
            region: options.region,
            ..Default::default()
        };
        let downloads = self.list_downloads(&query)?;
        let filename = match options.filename {
            Some(filename) if downloads.contains(&filename) => filename,
            Some(filename) => return Err(DatasetError::FileNotFound(filename)),
            None => downloads
                .last()
                .cloned()
                .ok_or_else(|| DatasetError::NoDownloads(self.dir.clone()))?,
        };

        let bytes = std::fs::read(self.dir.join(&filename))?;
        let mut table = SpectrumDocument::from_slice(&bytes)?.into_table();
        if let Some(filter) = options.filter {
            table = filter(table);
        }
        self.store_table(&table)?;
        info!(file = %filename, bands = table.len(), "band table refreshed");
        Ok(table)
    }

    /// Loads the table written by the last [`DatasetStore::refresh`].
    pub fn retrieve(&self) -> Result<BandTable> {
        let path = self.cached_table_path();
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(DatasetError::CachedTableMissing(path));
            }
            Err(err) => return Err(err.into()),
        };
        let table: BandTable = serde_json::from_slice(&bytes)?;
        table.validate()?;
        debug!(path = %path.display(), bands = table.len(), "cached band table loaded");
        Ok(table)
    }

    fn store_table(&self, table: &BandTable) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{CACHED_TABLE}.tmp"));
        std::fs::write(&tmp, serde_json::to_vec(table)?)?;
        std::fs::rename(&tmp, self.cached_table_path())?;
        Ok(())
    }
}
