use pretty_assertions::assert_eq;
use specmap_core::Band;
use specmap_core::BandTable;
use specmap_core::MergeOptions;
use specmap_core::SpecmapError;
use specmap_core::merge_bands;

fn band(lower: f64, upper: f64, sector: &str, usage: &str) -> Band {
    Band::new(lower, upper, sector, usage).expect("valid band")
}

fn options(threshold: f64, unique: bool) -> MergeOptions {
    MergeOptions { threshold, unique }
}

#[test]
fn nearby_bands_merge_with_concatenated_names() {
    let table = BandTable::new(vec![band(0.0, 100.0, "A", "x"), band(150.0, 200.0, "A", "y")]);
    let merged = merge_bands(&table, options(50.0, false)).expect("merge");

    assert_eq!(merged.len(), 1);
    let region = &merged.bands()[0];
    assert_eq!(
        (region.lower_freq, region.upper_freq, region.sector.as_str()),
        (0.0, 200.0, "A")
    );
    assert_eq!(region.usage_name, "x<br>y");
    assert_eq!(region.bandwidth, 200.0);
    assert_eq!(region.render_region.x, [0.0, 0.0, 200.0, 200.0]);
    assert_eq!(region.render_region.name, "A<br>x<br>y");
}

#[test]
fn threshold_boundary_is_inclusive() {
    let threshold = 1_000.0;
    let at = BandTable::new(vec![
        band(0.0, 5_000.0, "A", "x"),
        band(5_000.0 + threshold, 9_000.0, "A", "y"),
    ]);
    assert_eq!(merge_bands(&at, options(threshold, false)).expect("merge").len(), 1);

    let beyond = BandTable::new(vec![
        band(0.0, 5_000.0, "A", "x"),
        band(5_000.0 + threshold + 0.5, 9_000.0, "A", "y"),
    ]);
    assert_eq!(merge_bands(&beyond, options(threshold, false)).expect("merge").len(), 2);
}

#[test]
fn unique_mode_never_joins_different_usages() {
    let table = BandTable::new(vec![
        band(0.0, 100.0, "A", "x"),
        band(50.0, 120.0, "A", "y"),
        band(120.0, 300.0, "A", "y"),
    ]);
    let merged = merge_bands(&table, options(1e9, true)).expect("merge");
    let names: Vec<&str> = merged.iter().map(|b| b.usage_name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(merged.bands()[1].upper_freq, 300.0);
}

#[test]
fn merging_merged_output_is_stable() {
    let table = BandTable::new(vec![
        band(0.0, 100.0, "A", "x"),
        band(90.0, 150.0, "A", "y"),
        band(400.0, 500.0, "A", "z"),
        band(10.0, 20.0, "B", "p"),
        band(25.0, 40.0, "B", "q"),
    ]);
    let once = merge_bands(&table, options(10.0, false)).expect("first merge");
    let twice = merge_bands(&once, options(10.0, false)).expect("second merge");
    assert_eq!(once, twice);
    assert_eq!(once.sectors(), vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn unsorted_sector_is_rejected() {
    let table = BandTable::new(vec![band(500.0, 600.0, "A", "x"), band(100.0, 200.0, "A", "y")]);
    let err = merge_bands(&table, options(0.0, false)).expect_err("unsorted");
    assert!(matches!(err, SpecmapError::UnsortedSector { position: 1, .. }));
}

#[test]
fn source_table_is_not_aliased() {
    let table = BandTable::new(vec![band(0.0, 100.0, "A", "x"), band(100.0, 200.0, "A", "y")]);
    let mut merged = merge_bands(&table, options(0.0, false)).expect("merge").into_bands();
    merged[0].render_region.name.push_str(" edited");
    assert_eq!(table.bands()[0].render_region.name, "A<br>x");
}
