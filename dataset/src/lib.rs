//! # Specmap Dataset
//!
//! Downloads the published spectrum mapping document, keeps timestamped
//! copies in a cache directory and prepares the band table consumed by
//! `specmap-core`.

mod cache;
mod document;
mod download;
mod error;

pub use cache::DatasetStore;
pub use cache::DownloadName;
pub use cache::DownloadQuery;
pub use cache::RefreshOptions;
pub use cache::TableFilter;
pub use document::RawBand;
pub use document::SpectrumDocument;
pub use download::Downloader;
pub use error::DatasetError;
pub use error::Result;
