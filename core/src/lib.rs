//! # Specmap Core
//!
//! Band table, proximity merging and the selection/overlay state machine
//! behind the interactive spectrum allocation map.
//!
//! ## Example
//!
//! ```no_run
//! use specmap_core::Band;
//! use specmap_core::BandTable;
//! use specmap_core::ControllerOptions;
//! use specmap_core::SpectrumController;
//!
//! fn main() -> specmap_core::Result<()> {
//!     let table = BandTable::new(vec![
//!         Band::new(0.0, 100.0, "Amateur", "x")?,
//!         Band::new(150.0, 200.0, "Amateur", "y")?,
//!     ]);
//!     let mut controller = SpectrumController::new(table, ControllerOptions::default())?;
//!     let transition = controller.load()?;
//!     println!("{} render commands", transition.batch.len());
//!     Ok(())
//! }
//! ```

mod band;
mod config;
mod controller;
mod cutoff;
mod error;
mod merge;
mod palette;
mod render;
mod selection;
mod store;

pub use band::Band;
pub use band::LABEL_SEPARATOR;
pub use band::REGION_CEILING;
pub use band::REGION_FLOOR;
pub use band::RenderRegion;
pub use band::display_name;
pub use config::DEFAULT_DATASET_URL;
pub use config::SpecmapConfig;
pub use config::VisualTemplate;
pub use controller::ControllerOptions;
pub use controller::SpectrumController;
pub use controller::SpectrumView;
pub use controller::Transition;
pub use controller::ViewState;
pub use controller::locate;
pub use cutoff::FrequencyUnit;
pub use cutoff::UNIQUE_ID_SEPARATOR;
pub use cutoff::cutoff_range;
pub use cutoff::format_frequency;
pub use cutoff::split_unique_id;
pub use cutoff::unique_id;
pub use error::Result;
pub use error::SpecmapError;
pub use merge::MergeOptions;
pub use merge::merge_bands;
pub use merge::merge_sector;
pub use palette::Rgba;
pub use palette::Shade;
pub use palette::sector_colour;
pub use render::AxisRange;
pub use render::FULL_SPAN;
pub use render::OVERLAY_MARKER;
pub use render::Overlay;
pub use render::PlotSurface;
pub use render::RenderBatch;
pub use render::RenderCommand;
pub use selection::BandListing;
pub use selection::SelectionEntry;
pub use selection::SelectionIndex;
pub use store::BandFilter;
pub use store::BandTable;
pub use store::Field;
pub use store::FieldValue;
