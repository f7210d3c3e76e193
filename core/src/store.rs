//! In-memory band table and its query operations.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

use crate::band::Band;
use crate::band::check_bounds;
use crate::cutoff;
use crate::error::Result;
use crate::error::SpecmapError;

/// Columns of a band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    LowerFreq,
    UpperFreq,
    Sector,
    UsageName,
    Variant,
    Bandwidth,
    UniqueId,
    RenderRegion,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Missing,
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// OR-combined column constraints. A row matches when any listed value
/// of any listed column equals the row's cell. `include = false` keeps
/// the rows that do not match instead.
#[derive(Debug, Clone)]
pub struct BandFilter {
    pub lower_freq: Vec<f64>,
    pub upper_freq: Vec<f64>,
    pub sector: Vec<String>,
    pub usage_name: Vec<String>,
    pub variant: Vec<String>,
    pub include: bool,
}

impl Default for BandFilter {
    fn default() -> Self {
        Self {
            lower_freq: Vec::new(),
            upper_freq: Vec::new(),
            sector: Vec::new(),
            usage_name: Vec::new(),
            variant: Vec::new(),
            include: true,
        }
    }
}

impl BandFilter {
    pub fn sectors<I, S>(sectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sector: sectors.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn excluding(mut self) -> Self {
        self.include = false;
        self
    }

    fn matches(&self, band: &Band) -> bool {
        let hit = self.lower_freq.contains(&band.lower_freq)
            || self.upper_freq.contains(&band.upper_freq)
            || self.sector.contains(&band.sector)
            || self.usage_name.contains(&band.usage_name)
            || band
                .variant
                .as_ref()
                .is_some_and(|variant| self.variant.contains(variant));
        hit == self.include
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandTable {
    bands: Vec<Band>,
}

impl BandTable {
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Band> {
        self.bands.iter()
    }

    pub fn into_bands(self) -> Vec<Band> {
        self.bands
    }

    /// Checks the bounds of every row. Tables built through [`Band::new`]
    /// always pass; deserialized ones may not.
    pub fn validate(&self) -> Result<()> {
        self.bands
            .iter()
            .try_for_each(|band| check_bounds(band.lower_freq, band.upper_freq))
    }

    /// Distinct sectors in first-occurrence order.
    pub fn sectors(&self) -> Vec<String> {
        let mut sectors: Vec<String> = Vec::new();
        for band in &self.bands {
            if !sectors.contains(&band.sector) {
                sectors.push(band.sector.clone());
            }
        }
        sectors
    }

    pub fn sector_bands<'a>(&'a self, sector: &'a str) -> impl Iterator<Item = &'a Band> + 'a {
        self.bands.iter().filter(move |band| band.sector == sector)
    }

    pub fn filter(&self, filter: &BandFilter) -> BandTable {
        self.retain_cloned(|band| filter.matches(band))
    }

    /// Rows fully contained in `[lower, upper]`. Missing bounds default to
    /// the smallest lower and largest upper frequency in the table.
    pub fn filter_by_range(&self, lower: Option<f64>, upper: Option<f64>) -> BandTable {
        let lower = lower.unwrap_or_else(|| self.min_of(|band| band.lower_freq));
        let upper = upper.unwrap_or_else(|| self.max_of(|band| band.upper_freq));
        self.retain_cloned(|band| band.lower_freq >= lower && band.upper_freq <= upper)
    }

    pub fn filter_by_bandwidth(&self, min_bw: Option<f64>, max_bw: Option<f64>) -> BandTable {
        let min_bw = min_bw.unwrap_or_else(|| self.min_of(|band| band.bandwidth));
        let max_bw = max_bw.unwrap_or_else(|| self.max_of(|band| band.bandwidth));
        self.retain_cloned(|band| band.bandwidth >= min_bw && band.bandwidth <= max_bw)
    }

    /// Distinct values per column in first-occurrence order. Without a
    /// field every column except the render region is listed.
    pub fn unique_values(&self, field: Option<Field>) -> Result<IndexMap<Field, Vec<FieldValue>>> {
        let fields = match field {
            Some(Field::RenderRegion) => {
                return Err(SpecmapError::UnsupportedField(Field::RenderRegion));
            }
            Some(field) => vec![field],
            None => vec![
                Field::LowerFreq,
                Field::UpperFreq,
                Field::Sector,
                Field::UsageName,
                Field::Variant,
                Field::Bandwidth,
                Field::UniqueId,
            ],
        };
        let mut out = IndexMap::new();
        for field in fields {
            let mut values: Vec<FieldValue> = Vec::new();
            for band in &self.bands {
                let value = cell(band, field);
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            out.insert(field, values);
        }
        Ok(out)
    }

    /// Replaces every `old` cell of `field` with `new`. The table is left
    /// unchanged when any row would become invalid.
    pub fn set_value(
        &mut self,
        field: Option<Field>,
        old: Option<FieldValue>,
        new: Option<FieldValue>,
    ) -> Result<usize> {
        let field = field.ok_or(SpecmapError::MissingArgument("field"))?;
        let old = old.ok_or(SpecmapError::MissingArgument("old value"))?;
        let new = new.ok_or(SpecmapError::MissingArgument("new value"))?;
        if matches!(
            field,
            Field::Bandwidth | Field::UniqueId | Field::RenderRegion
        ) {
            return Err(SpecmapError::UnsupportedField(field));
        }

        let mut updated = self.bands.clone();
        let mut touched = 0;
        for band in updated.iter_mut().filter(|band| cell(band, field) == old) {
            assign(band, field, &new)?;
            check_bounds(band.lower_freq, band.upper_freq)?;
            band.unique_id = cutoff::unique_id(band.lower_freq, band.upper_freq, &band.usage_name);
            band.members = vec![band.unique_id.clone()];
            band.refresh_derived();
            touched += 1;
        }
        self.bands = updated;
        Ok(touched)
    }

    /// Drops rows repeating an earlier row's bounds, sector and usage name.
    pub fn deduplicate(&self) -> BandTable {
        let mut kept: Vec<Band> = Vec::with_capacity(self.bands.len());
        for band in &self.bands {
            let duplicate = kept.iter().any(|other| {
                other.lower_freq == band.lower_freq
                    && other.upper_freq == band.upper_freq
                    && other.sector == band.sector
                    && other.usage_name == band.usage_name
            });
            if !duplicate {
                kept.push(band.clone());
            }
        }
        BandTable::new(kept)
    }

    fn retain_cloned(&self, keep: impl Fn(&Band) -> bool) -> BandTable {
        BandTable::new(self.bands.iter().filter(|band| keep(band)).cloned().collect())
    }

    fn min_of(&self, value: impl Fn(&Band) -> f64) -> f64 {
        self.bands.iter().map(value).fold(f64::INFINITY, f64::min)
    }

    fn max_of(&self, value: impl Fn(&Band) -> f64) -> f64 {
        self.bands.iter().map(value).fold(f64::NEG_INFINITY, f64::max)
    }
}

impl FromIterator<Band> for BandTable {
    fn from_iter<T: IntoIterator<Item = Band>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BandTable {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}

fn cell(band: &Band, field: Field) -> FieldValue {
    match field {
        Field::LowerFreq => FieldValue::Number(band.lower_freq),
        Field::UpperFreq => FieldValue::Number(band.upper_freq),
        Field::Bandwidth => FieldValue::Number(band.bandwidth),
        Field::Sector => FieldValue::Text(band.sector.clone()),
        Field::UsageName => FieldValue::Text(band.usage_name.clone()),
        Field::UniqueId => FieldValue::Text(band.unique_id.clone()),
        Field::Variant => band
            .variant
            .clone()
            .map_or(FieldValue::Missing, FieldValue::Text),
        Field::RenderRegion => FieldValue::Text(band.render_region.name.clone()),
    }
}

fn assign(band: &mut Band, field: Field, value: &FieldValue) -> Result<()> {
    match (field, value) {
        (Field::LowerFreq, FieldValue::Number(v)) => band.lower_freq = *v,
        (Field::UpperFreq, FieldValue::Number(v)) => band.upper_freq = *v,
        (Field::Sector, FieldValue::Text(v)) => band.sector = v.clone(),
        (Field::UsageName, FieldValue::Text(v)) => band.usage_name = v.clone(),
        (Field::Variant, FieldValue::Text(v)) => band.variant = Some(v.clone()),
        (Field::Variant, FieldValue::Missing) => band.variant = None,
        (field, _) => return Err(SpecmapError::ValueKindMismatch(field)),
    }
    Ok(())
}
