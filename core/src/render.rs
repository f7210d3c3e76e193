//! Render commands and the retained plot model that consumes them.

use crate::band::RenderRegion;
use crate::band::display_name;
use crate::palette::Rgba;
use crate::palette::Shade;
use crate::palette::sector_colour;
use crate::selection::BandListing;

/// Marker carried by the overlay region.
pub const OVERLAY_MARKER: &str = "overlay";

/// The whole frequency axis, 0 to 4.096 GHz.
pub const FULL_SPAN: AxisRange = AxisRange {
    lower: 0.0,
    upper: 4.096e9,
};

/// Multiple of the highlighted bandwidth shown on each side when zoomed.
const ZOOM_PADDING: f64 = 2.0;
const OVERLAY_LINE_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    pub fn around(lower: f64, upper: f64, bandwidth: f64) -> Self {
        Self {
            lower: lower - ZOOM_PADDING * bandwidth,
            upper: upper + ZOOM_PADDING * bandwidth,
        }
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

/// The single highlighted region on the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub sector: Option<String>,
    pub unique_id: Option<String>,
    pub region: RenderRegion,
}

impl Overlay {
    /// Zero-width and fully transparent.
    pub fn blank() -> Self {
        Self {
            sector: None,
            unique_id: None,
            region: RenderRegion {
                x: [0.0; 4],
                y: [
                    crate::band::REGION_FLOOR,
                    crate::band::REGION_CEILING,
                    crate::band::REGION_CEILING,
                    crate::band::REGION_FLOOR,
                ],
                name: String::new(),
                fill: Rgba::TRANSPARENT,
                line: Rgba::TRANSPARENT,
                line_width: 0.0,
                ids: vec![OVERLAY_MARKER.to_string()],
            },
        }
    }

    pub fn highlight(sector: &str, unique_id: &str, lower: f64, upper: f64) -> Self {
        let mut overlay = Self::blank();
        let region = &mut overlay.region;
        region.x = RenderRegion::rectangle(lower, upper);
        region.line = sector_colour(sector, Shade::Opaque);
        region.line_width = OVERLAY_LINE_WIDTH;
        region.name = display_name(sector, unique_id);
        region.ids = vec![sector.to_string(), OVERLAY_MARKER.to_string()];
        overlay.sector = Some(sector.to_string());
        overlay.unique_id = Some(unique_id.to_string());
        overlay
    }

    pub fn is_blank(&self) -> bool {
        self.unique_id.is_none()
    }

    pub fn width(&self) -> f64 {
        self.region.width()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Remove every drawn region tagged with `marker`.
    ClearRegions { marker: String },
    AddRegions(Vec<RenderRegion>),
    SetAxisRange(AxisRange),
    SetOverlay(Overlay),
    ResetOverlay,
    SetListing(BandListing),
    SetSelection(Option<usize>),
}

/// Commands produced by one transition; applied as a single redraw.
pub type RenderBatch = Vec<RenderCommand>;

/// Retained drawing state built up from render batches.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSurface {
    pub regions: Vec<RenderRegion>,
    pub overlay: Overlay,
    pub axis: AxisRange,
    pub listing: BandListing,
    pub selection: Option<usize>,
    /// Number of batches applied so far.
    pub revision: u64,
}

impl Default for PlotSurface {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            overlay: Overlay::blank(),
            axis: FULL_SPAN,
            listing: BandListing::default(),
            selection: None,
            revision: 0,
        }
    }
}

impl PlotSurface {
    pub fn apply(&mut self, batch: &[RenderCommand]) {
        for command in batch {
            match command {
                RenderCommand::ClearRegions { marker } => {
                    self.regions.retain(|region| !region.has_marker(marker));
                }
                RenderCommand::AddRegions(regions) => self.regions.extend(regions.iter().cloned()),
                RenderCommand::SetAxisRange(axis) => self.axis = *axis,
                RenderCommand::SetOverlay(overlay) => self.overlay = overlay.clone(),
                RenderCommand::ResetOverlay => self.overlay = Overlay::blank(),
                RenderCommand::SetListing(listing) => self.listing = listing.clone(),
                RenderCommand::SetSelection(selection) => self.selection = *selection,
            }
        }
        self.revision += 1;
    }
}
