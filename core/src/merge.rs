//! Proximity merging of bands within a sector.
//!
//! Bands of one sector are walked once in table order. A band joins the
//! pending merged band when its lower edge lies within `threshold` Hz of
//! the pending upper edge; otherwise the pending band is closed and the
//! band starts a new one. In unique mode two consecutive bands only join
//! when they share a usage name, and names are not concatenated.

use tracing::debug;

use crate::band::Band;
use crate::band::LABEL_SEPARATOR;
use crate::error::Result;
use crate::error::SpecmapError;
use crate::store::BandTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOptions {
    /// Largest gap in Hz between two bands that still merges them.
    pub threshold: f64,
    /// Only merge neighbours with equal usage names.
    pub unique: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            unique: false,
        }
    }
}

impl MergeOptions {
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(SpecmapError::NegativeThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Merges every sector of `table`. Sectors keep their first-occurrence
/// order and the returned table owns all of its bands.
pub fn merge_bands(table: &BandTable, options: MergeOptions) -> Result<BandTable> {
    options.validate()?;
    let mut merged = Vec::with_capacity(table.len());
    for sector in table.sectors() {
        merged.extend(merge_sector(&sector, table.sector_bands(&sector), options)?);
    }
    debug!(
        source = table.len(),
        merged = merged.len(),
        threshold = options.threshold,
        unique = options.unique,
        "merged band table"
    );
    Ok(BandTable::new(merged))
}

/// Merges the bands of a single sector, given in table order.
pub fn merge_sector<'a>(
    sector: &str,
    bands: impl IntoIterator<Item = &'a Band>,
    options: MergeOptions,
) -> Result<Vec<Band>> {
    options.validate()?;
    let mut out: Vec<Band> = Vec::new();
    let mut current_upper = 0.0;
    let mut current_lower = 0.0;
    let mut current_usage = String::new();

    for (position, band) in bands.into_iter().enumerate() {
        if band.lower_freq < current_lower {
            return Err(SpecmapError::UnsortedSector {
                sector: sector.to_string(),
                position,
                lower_freq: band.lower_freq,
                previous: current_lower,
            });
        }
        let adjacent = current_upper + options.threshold >= band.lower_freq
            && (!options.unique || current_usage == band.usage_name);

        match out.last_mut() {
            Some(pending) if adjacent => {
                if band.upper_freq >= pending.upper_freq {
                    pending.upper_freq = band.upper_freq;
                }
                if !options.unique {
                    pending.usage_name.push_str(LABEL_SEPARATOR);
                    pending.usage_name.push_str(&band.usage_name);
                }
                pending.members.extend(band.members.iter().cloned());
                current_upper = pending.upper_freq;
                current_lower = pending.lower_freq;
            }
            _ => {
                out.push(band.clone());
                current_upper = band.upper_freq;
                current_lower = band.lower_freq;
            }
        }
        current_usage.clone_from(&band.usage_name);
    }

    for band in &mut out {
        band.refresh_derived();
    }
    Ok(out)
}
