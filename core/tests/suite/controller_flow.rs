use pretty_assertions::assert_eq;
use specmap_core::AxisRange;
use specmap_core::Band;
use specmap_core::BandTable;
use specmap_core::ControllerOptions;
use specmap_core::FULL_SPAN;
use specmap_core::MergeOptions;
use specmap_core::PlotSurface;
use specmap_core::SpecmapConfig;
use specmap_core::SpectrumController;
use specmap_core::ViewState;

fn band(lower: f64, upper: f64, sector: &str, usage: &str) -> Band {
    Band::new(lower, upper, sector, usage).expect("valid band")
}

fn controller(bands: Vec<Band>, threshold: f64) -> SpectrumController {
    SpectrumController::new(
        BandTable::new(bands),
        ControllerOptions {
            merge: true,
            merge_options: MergeOptions {
                threshold,
                unique: false,
            },
        },
    )
    .expect("controller")
}

#[test]
fn single_band_selection_pads_by_twice_the_bandwidth() {
    let mut ctl = controller(vec![band(0.0, 100.0, "A", "x")], 0.0);
    ctl.load().expect("load");
    let view = ctl.select_band(0).expect("select").view;

    assert_eq!(view.overlay.region.x, [0.0, 0.0, 100.0, 100.0]);
    assert_eq!(
        view.axis,
        AxisRange {
            lower: -200.0,
            upper: 300.0
        }
    );
}

#[test]
fn selection_after_sector_change_reads_the_new_sector() {
    let mut ctl = controller(
        vec![
            band(0.0, 100.0, "A", "x"),
            band(5e6, 6e6, "B", "p"),
            band(7e6, 9e6, "B", "q"),
        ],
        0.0,
    );
    ctl.load().expect("load");
    ctl.change_sector("B").expect("change");
    let view = ctl.select_band(0).expect("select").view;

    assert_eq!(
        view.state,
        ViewState::BandActive {
            sector: "B".to_string(),
            index: 0
        }
    );
    assert_eq!(view.overlay.sector.as_deref(), Some("B"));
    assert_eq!(view.overlay.region.x, [5e6, 5e6, 6e6, 6e6]);
    assert_eq!(view.listing.usages, vec!["p".to_string(), "q".to_string()]);
}

#[test]
fn reset_always_returns_to_full_span() {
    let mut ctl = controller(vec![band(0.0, 100.0, "A", "x"), band(1e3, 2e3, "B", "p")], 0.0);
    let mut surface = PlotSurface::default();

    let mut check = |transition: specmap_core::Transition, ctl: &mut SpectrumController| {
        surface.apply(&transition.batch);
        let reset = ctl.reset();
        surface.apply(&reset.batch);
        assert_eq!(reset.view.axis, FULL_SPAN);
        assert_eq!(reset.view.overlay.width(), 0.0);
        assert_eq!(surface.axis, FULL_SPAN);
        assert_eq!(surface.overlay.width(), 0.0);
    };

    let loaded = ctl.load().expect("load");
    check(loaded, &mut ctl);
    let selected = ctl.select_band(0).expect("select");
    check(selected, &mut ctl);
    let changed = ctl.change_sector("B").expect("change");
    check(changed, &mut ctl);
}

#[test]
fn config_drives_controller_options() {
    let config = SpecmapConfig {
        merge: false,
        threshold: 25.0,
        unique: true,
        ..Default::default()
    };
    let options = ControllerOptions::from(&config);
    assert!(!options.merge);
    assert_eq!(
        options.merge_options,
        MergeOptions {
            threshold: 25.0,
            unique: true
        }
    );
}
