//! Render/overlay controller.
//!
//! The controller owns the source table, the selection index and the
//! merged bands of the active sector. Every transition stages a complete
//! new [`SpectrumView`] together with the [`RenderBatch`] that turns the
//! previous view into it, and commits both only after all fallible work
//! has succeeded. A failed event therefore leaves the committed view as
//! it was.

use std::sync::Arc;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::band::Band;
use crate::band::RenderRegion;
use crate::config::SpecmapConfig;
use crate::error::Result;
use crate::error::SpecmapError;
use crate::merge::MergeOptions;
use crate::merge::merge_sector;
use crate::render::AxisRange;
use crate::render::FULL_SPAN;
use crate::render::Overlay;
use crate::render::RenderBatch;
use crate::render::RenderCommand;
use crate::selection::BandListing;
use crate::selection::SelectionIndex;
use crate::store::BandTable;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    SectorView { sector: String },
    BandActive { sector: String, index: usize },
}

impl ViewState {
    pub fn sector(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::SectorView { sector } | Self::BandActive { sector, .. } => Some(sector),
        }
    }
}

/// Immutable snapshot of everything on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumView {
    pub state: ViewState,
    pub regions: Vec<RenderRegion>,
    pub overlay: Overlay,
    pub axis: AxisRange,
    pub listing: BandListing,
    pub selection: Option<usize>,
}

impl SpectrumView {
    fn idle() -> Self {
        Self {
            state: ViewState::Idle,
            regions: Vec::new(),
            overlay: Overlay::blank(),
            axis: FULL_SPAN,
            listing: BandListing::default(),
            selection: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    /// Highlight the merged region containing a clicked band rather than
    /// the band itself.
    pub merge: bool,
    pub merge_options: MergeOptions,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            merge: true,
            merge_options: MergeOptions::default(),
        }
    }
}

impl From<&SpecmapConfig> for ControllerOptions {
    fn from(config: &SpecmapConfig) -> Self {
        Self {
            merge: config.merge,
            merge_options: config.merge_options(),
        }
    }
}

/// Result of a committed transition.
#[derive(Debug, Clone)]
pub struct Transition {
    pub view: Arc<SpectrumView>,
    pub batch: RenderBatch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Highlight {
    lower: f64,
    upper: f64,
    bandwidth: f64,
}

pub struct SpectrumController {
    options: ControllerOptions,
    source: BandTable,
    selection: SelectionIndex,
    /// Merged bands of the sector currently drawn.
    merged: BandTable,
    view: Arc<SpectrumView>,
}

impl SpectrumController {
    pub fn new(source: BandTable, options: ControllerOptions) -> Result<Self> {
        options.merge_options.validate()?;
        let selection = SelectionIndex::build(&source);
        Ok(Self {
            options,
            source,
            selection,
            merged: BandTable::default(),
            view: Arc::new(SpectrumView::idle()),
        })
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn sectors(&self) -> Vec<String> {
        self.selection.sectors().map(str::to_string).collect()
    }

    pub fn view(&self) -> Arc<SpectrumView> {
        Arc::clone(&self.view)
    }

    pub fn merged(&self) -> &BandTable {
        &self.merged
    }

    /// Draws the first sector and highlights its first band. The axis
    /// keeps the full span.
    pub fn load(&mut self) -> Result<Transition> {
        let sector = self
            .selection
            .sectors()
            .next()
            .ok_or(SpecmapError::EmptyTable)?
            .to_string();
        let (merged, mut view, mut batch) = self.stage_sector(&sector)?;
        let unique_id = self.selection.entry(&sector, 0)?.unique_id.clone();
        let highlight = self.highlight(&merged, &sector, 0)?;
        let overlay = Overlay::highlight(&sector, &unique_id, highlight.lower, highlight.upper);

        view.overlay = overlay.clone();
        view.selection = Some(0);
        view.state = ViewState::BandActive {
            sector: sector.clone(),
            index: 0,
        };
        batch.push(RenderCommand::SetOverlay(overlay));
        batch.push(RenderCommand::SetSelection(Some(0)));

        info!(sector = %sector, bands = self.source.len(), "spectrum map loaded");
        self.merged = merged;
        Ok(self.commit(view, batch))
    }

    pub fn change_sector(&mut self, sector: &str) -> Result<Transition> {
        let (merged, view, batch) = self.stage_sector(sector)?;
        info!(sector, regions = merged.len(), "sector changed");
        self.merged = merged;
        Ok(self.commit(view, batch))
    }

    pub fn select_band(&mut self, index: usize) -> Result<Transition> {
        let sector = self
            .view
            .state
            .sector()
            .ok_or(SpecmapError::NotLoaded)?
            .to_string();
        let unique_id = self.selection.entry(&sector, index)?.unique_id.clone();
        let highlight = self.highlight(&self.merged, &sector, index)?;
        let axis = AxisRange::around(highlight.lower, highlight.upper, highlight.bandwidth);
        let overlay = Overlay::highlight(&sector, &unique_id, highlight.lower, highlight.upper);

        let mut view = SpectrumView::clone(&self.view);
        view.overlay = overlay.clone();
        view.axis = axis;
        view.selection = Some(index);
        view.state = ViewState::BandActive {
            sector: sector.clone(),
            index,
        };
        let batch = vec![
            RenderCommand::SetOverlay(overlay),
            RenderCommand::SetAxisRange(axis),
            RenderCommand::SetSelection(Some(index)),
        ];
        debug!(sector = %sector, index, unique_id = %unique_id, "band selected");
        Ok(self.commit(view, batch))
    }

    /// Clears the selection, restores the full axis and blanks the overlay.
    pub fn reset(&mut self) -> Transition {
        let mut view = SpectrumView::clone(&self.view);
        view.selection = None;
        view.axis = FULL_SPAN;
        view.overlay = Overlay::blank();
        if let ViewState::BandActive { sector, .. } = &view.state {
            view.state = ViewState::SectorView {
                sector: sector.clone(),
            };
        }
        let batch = vec![
            RenderCommand::SetSelection(None),
            RenderCommand::SetAxisRange(FULL_SPAN),
            RenderCommand::ResetOverlay,
        ];
        debug!("selection reset");
        self.commit(view, batch)
    }

    fn stage_sector(&self, sector: &str) -> Result<(BandTable, SpectrumView, RenderBatch)> {
        if !self.selection.contains_sector(sector) {
            return Err(SpecmapError::UnknownSector(sector.to_string()));
        }
        let merged = BandTable::new(merge_sector(
            sector,
            self.source.sector_bands(sector),
            self.options.merge_options,
        )?);
        let listing = self.selection.listing(sector)?;
        let regions: Vec<RenderRegion> = merged
            .iter()
            .map(|band| band.render_region.clone())
            .collect();

        let mut batch = Vec::new();
        if let Some(previous) = self.view.state.sector() {
            batch.push(RenderCommand::ClearRegions {
                marker: previous.to_string(),
            });
        }
        batch.extend([
            RenderCommand::SetAxisRange(FULL_SPAN),
            RenderCommand::AddRegions(regions.clone()),
            RenderCommand::ResetOverlay,
            RenderCommand::SetListing(listing.clone()),
            RenderCommand::SetSelection(None),
        ]);

        let view = SpectrumView {
            state: ViewState::SectorView {
                sector: sector.to_string(),
            },
            regions,
            overlay: Overlay::blank(),
            axis: FULL_SPAN,
            listing,
            selection: None,
        };
        Ok((merged, view, batch))
    }

    fn highlight(&self, merged: &BandTable, sector: &str, index: usize) -> Result<Highlight> {
        let entry = self.selection.entry(sector, index)?;
        let region = locate(merged, &entry.unique_id)?;
        Ok(if self.options.merge {
            Highlight {
                lower: region.lower_freq,
                upper: region.upper_freq,
                bandwidth: region.bandwidth,
            }
        } else {
            Highlight {
                lower: entry.lower_freq,
                upper: entry.upper_freq,
                bandwidth: entry.bandwidth,
            }
        })
    }

    fn commit(&mut self, view: SpectrumView, batch: RenderBatch) -> Transition {
        self.view = Arc::new(view);
        Transition {
            view: Arc::clone(&self.view),
            batch,
        }
    }
}

/// The single merged band standing for `unique_id`.
pub fn locate<'a>(merged: &'a BandTable, unique_id: &str) -> Result<&'a Band> {
    let mut matches = merged.iter().filter(|band| band.is_member(unique_id));
    match (matches.next(), matches.count()) {
        (Some(band), 0) => Ok(band),
        (first, rest) => {
            let matches = usize::from(first.is_some()) + rest;
            warn!(unique_id, matches, "band lookup is inconsistent");
            Err(SpecmapError::LookupInconsistency {
                unique_id: unique_id.to_string(),
                matches,
            })
        }
    }
}
