use indexmap::IndexMap;

use crate::cutoff::split_unique_id;
use crate::error::Result;
use crate::error::SpecmapError;
use crate::store::BandTable;

/// One selectable source band.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEntry {
    pub unique_id: String,
    pub lower_freq: f64,
    pub upper_freq: f64,
    pub bandwidth: f64,
}

impl SelectionEntry {
    pub fn cutoff_label(&self) -> &str {
        split_unique_id(&self.unique_id).0
    }

    pub fn usage_label(&self) -> &str {
        split_unique_id(&self.unique_id).1
    }
}

/// Per-sector listing of the unmerged bands, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionIndex {
    sectors: IndexMap<String, Vec<SelectionEntry>>,
}

impl SelectionIndex {
    pub fn build(table: &BandTable) -> Self {
        let mut sectors: IndexMap<String, Vec<SelectionEntry>> = IndexMap::new();
        for band in table {
            sectors
                .entry(band.sector.clone())
                .or_default()
                .push(SelectionEntry {
                    unique_id: band.unique_id.clone(),
                    lower_freq: band.lower_freq,
                    upper_freq: band.upper_freq,
                    bandwidth: band.bandwidth,
                });
        }
        Self { sectors }
    }

    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.sectors.keys().map(String::as_str)
    }

    pub fn contains_sector(&self, sector: &str) -> bool {
        self.sectors.contains_key(sector)
    }

    pub fn entries(&self, sector: &str) -> Result<&[SelectionEntry]> {
        self.sectors
            .get(sector)
            .map(Vec::as_slice)
            .ok_or_else(|| SpecmapError::UnknownSector(sector.to_string()))
    }

    pub fn entry(&self, sector: &str, index: usize) -> Result<&SelectionEntry> {
        let entries = self.entries(sector)?;
        entries
            .get(index)
            .ok_or_else(|| SpecmapError::BandIndexOutOfRange {
                sector: sector.to_string(),
                index,
                len: entries.len(),
            })
    }

    pub fn listing(&self, sector: &str) -> Result<BandListing> {
        let entries = self.entries(sector)?;
        Ok(BandListing {
            cutoffs: entries
                .iter()
                .map(|entry| entry.cutoff_label().to_string())
                .collect(),
            usages: entries
                .iter()
                .map(|entry| entry.usage_label().to_string())
                .collect(),
        })
    }
}

/// The two index-linked columns of the band selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandListing {
    pub cutoffs: Vec<String>,
    pub usages: Vec<String>,
}

impl BandListing {
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<(&str, &str)> {
        let cutoff = self.cutoffs.get(index)?;
        let usage = self.usages.get(index)?;
        Some((cutoff.as_str(), usage.as_str()))
    }
}
