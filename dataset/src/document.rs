//! Remote spectrum mapping document.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use specmap_core::Band;
use specmap_core::BandTable;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumDocument {
    pub bands: Vec<RawBand>,
}

/// One row as published, with the dataset's short column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBand {
    pub lf: f64,
    pub uf: f64,
    pub s: String,
    pub u: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<Value>,
}

impl RawBand {
    pub fn into_band(self) -> specmap_core::Result<Band> {
        let band = Band::new(self.lf, self.uf, self.s, self.u)?;
        Ok(match self.v {
            None | Some(Value::Null) => band,
            Some(Value::String(variant)) => band.with_variant(variant),
            Some(other) => band.with_variant(other.to_string()),
        })
    }
}

impl SpectrumDocument {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Converts every row into a [`Band`], in document order. Rows with
    /// invalid bounds are dropped.
    pub fn into_table(self) -> BandTable {
        self.bands
            .into_iter()
            .enumerate()
            .filter_map(|(row, raw)| match raw.into_band() {
                Ok(band) => Some(band),
                Err(err) => {
                    warn!(row, "skipping band: {err}");
                    None
                }
            })
            .collect()
    }
}
