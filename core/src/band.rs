use serde::Deserialize;
use serde::Serialize;

use crate::cutoff;
use crate::error::Result;
use crate::error::SpecmapError;
use crate::palette::Rgba;
use crate::palette::Shade;
use crate::palette::sector_colour;

/// Joins usage names of merged bands and the lines of a display name.
pub const LABEL_SEPARATOR: &str = "<br>";

/// Vertical extent of every drawn region. Regions hang below the axis.
pub const REGION_FLOOR: f64 = -300.0;
pub const REGION_CEILING: f64 = 0.0;

const REGION_LINE_WIDTH: f64 = 2.0;

/// Drawable payload for one band: a closed rectangle outline plus the
/// styling a plot needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRegion {
    pub x: [f64; 4],
    pub y: [f64; 4],
    pub name: String,
    pub fill: Rgba,
    pub line: Rgba,
    pub line_width: f64,
    /// Marker tags. Regions carry their sector so a sector change can
    /// clear them by tag.
    pub ids: Vec<String>,
}

impl RenderRegion {
    pub fn rectangle(lower: f64, upper: f64) -> [f64; 4] {
        [lower, lower, upper, upper]
    }

    pub fn lower(&self) -> f64 {
        self.x[0]
    }

    pub fn upper(&self) -> f64 {
        self.x[2]
    }

    pub fn width(&self) -> f64 {
        self.upper() - self.lower()
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.ids.iter().any(|id| id == marker)
    }

    /// Name lines split on [`LABEL_SEPARATOR`].
    pub fn name_lines(&self) -> impl Iterator<Item = &str> {
        self.name.split(LABEL_SEPARATOR).filter(|line| !line.is_empty())
    }
}

pub fn display_name(sector: &str, label: &str) -> String {
    format!("{sector}{LABEL_SEPARATOR}{label}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower_freq: f64,
    pub upper_freq: f64,
    pub sector: String,
    pub usage_name: String,
    /// The dataset's free-form `v` column.
    #[serde(default)]
    pub variant: Option<String>,
    pub bandwidth: f64,
    pub unique_id: String,
    /// Identifiers of the source bands this band stands for.
    pub members: Vec<String>,
    pub render_region: RenderRegion,
}

impl Band {
    pub fn new(
        lower_freq: f64,
        upper_freq: f64,
        sector: impl Into<String>,
        usage_name: impl Into<String>,
    ) -> Result<Self> {
        check_bounds(lower_freq, upper_freq)?;
        let sector = sector.into();
        let usage_name = usage_name.into();
        let unique_id = cutoff::unique_id(lower_freq, upper_freq, &usage_name);
        let mut band = Self {
            lower_freq,
            upper_freq,
            sector,
            usage_name,
            variant: None,
            bandwidth: 0.0,
            members: vec![unique_id.clone()],
            unique_id,
            render_region: RenderRegion {
                x: [0.0; 4],
                y: [REGION_FLOOR, REGION_CEILING, REGION_CEILING, REGION_FLOOR],
                name: String::new(),
                fill: Rgba::TRANSPARENT,
                line: Rgba::TRANSPARENT,
                line_width: REGION_LINE_WIDTH,
                ids: Vec::new(),
            },
        };
        band.refresh_derived();
        Ok(band)
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Recomputes bandwidth and the render region from the current bounds,
    /// sector and usage name.
    pub fn refresh_derived(&mut self) {
        self.bandwidth = self.upper_freq - self.lower_freq;
        let colour = sector_colour(&self.sector, Shade::Translucent);
        let region = &mut self.render_region;
        region.x = RenderRegion::rectangle(self.lower_freq, self.upper_freq);
        region.name = display_name(&self.sector, &self.usage_name);
        region.fill = colour;
        region.line = colour;
        region.ids = vec![self.sector.clone()];
    }

    pub fn is_member(&self, unique_id: &str) -> bool {
        self.members.iter().any(|member| member == unique_id)
    }
}

pub(crate) fn check_bounds(lower: f64, upper: f64) -> Result<()> {
    // Written to also reject NaN.
    if lower >= 0.0 && upper > lower {
        Ok(())
    } else {
        Err(SpecmapError::InvalidBand { lower, upper })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derives_bandwidth_identity_and_region() {
        let band = Band::new(1e3, 2.5e3, "Amateur", "Beacons").expect("band");
        assert_eq!(band.bandwidth, 1.5e3);
        assert_eq!(band.unique_id, "1.0 kHz to 2.5 kHz — Beacons");
        assert_eq!(band.members, vec![band.unique_id.clone()]);
        assert_eq!(band.render_region.x, [1e3, 1e3, 2.5e3, 2.5e3]);
        assert_eq!(band.render_region.name, "Amateur<br>Beacons");
        assert_eq!(band.render_region.ids, vec!["Amateur".to_string()]);
        assert_eq!(band.render_region.fill.a, 0.2);
    }

    #[test]
    fn rejects_inverted_or_empty_bands() {
        assert!(Band::new(10.0, 10.0, "A", "x").is_err());
        assert!(Band::new(10.0, 5.0, "A", "x").is_err());
        assert!(Band::new(-1.0, 5.0, "A", "x").is_err());
        assert!(Band::new(f64::NAN, 5.0, "A", "x").is_err());
    }

    #[test]
    fn name_lines_split_on_separator() {
        let mut band = Band::new(0.0, 1.0, "A", "x").expect("band");
        band.usage_name = "x<br>y".to_string();
        band.refresh_derived();
        let lines: Vec<&str> = band.render_region.name_lines().collect();
        assert_eq!(lines, vec!["A", "x", "y"]);
    }
}
