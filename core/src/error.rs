use thiserror::Error;

use crate::store::Field;

#[derive(Debug, Error)]
pub enum SpecmapError {
    #[error("invalid band bounds: lower {lower} Hz, upper {upper} Hz")]
    InvalidBand { lower: f64, upper: f64 },

    #[error("threshold must be more than or equal to 0, got {0}")]
    NegativeThreshold(f64),

    #[error(
        "band merge error: band {position} of sector {sector:?} starts at {lower_freq} Hz, before {previous} Hz"
    )]
    UnsortedSector {
        sector: String,
        position: usize,
        lower_freq: f64,
        previous: f64,
    },

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("field {0} cannot be used here")]
    UnsupportedField(Field),

    #[error("value kind does not match field {0}")]
    ValueKindMismatch(Field),

    #[error("unknown sector {0:?}")]
    UnknownSector(String),

    #[error("band index {index} out of range for sector {sector:?} ({len} bands)")]
    BandIndexOutOfRange {
        sector: String,
        index: usize,
        len: usize,
    },

    #[error("could not display band {unique_id:?}: {matches} matching regions")]
    LookupInconsistency { unique_id: String, matches: usize },

    #[error("band table is empty")]
    EmptyTable,

    #[error("no sector has been loaded")]
    NotLoaded,

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SpecmapError {
    /// True for errors that point at an indexing bug rather than bad input.
    pub fn is_lookup_inconsistency(&self) -> bool {
        matches!(self, Self::LookupInconsistency { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpecmapError>;
