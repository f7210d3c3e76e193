use pretty_assertions::assert_eq;
use specmap_core::FrequencyUnit;
use specmap_core::cutoff_range;
use specmap_core::format_frequency;
use specmap_core::unique_id;

#[test]
fn units_scale_with_magnitude() {
    assert_eq!(format_frequency(2.4e9), "2.4 GHz");
    assert_eq!(format_frequency(2.4e6), "2.4 MHz");
    assert_eq!(format_frequency(2.4e3), "2.4 kHz");
    assert_eq!(format_frequency(240.0), "240.0 Hz");
}

#[test]
fn unit_boundaries_switch_at_exact_powers() {
    assert_eq!(FrequencyUnit::for_value(999.0), FrequencyUnit::Hz);
    assert_eq!(FrequencyUnit::for_value(1e3), FrequencyUnit::KHz);
    assert_eq!(FrequencyUnit::for_value(1e6), FrequencyUnit::MHz);
    assert_eq!(FrequencyUnit::for_value(1e9), FrequencyUnit::GHz);
    assert_eq!(format_frequency(1e3), "1.0 kHz");
    assert_eq!(format_frequency(1e6), "1.0 MHz");
    assert_eq!(format_frequency(1e9), "1.0 GHz");
}

#[test]
fn each_bound_picks_its_own_unit() {
    assert_eq!(cutoff_range(500.0, 2.5e6), "500.0 Hz to 2.5 MHz");
    assert_eq!(
        unique_id(2.4e9, 2.4835e9, "Wi-Fi"),
        "2.4 GHz to 2.4835 GHz — Wi-Fi"
    );
}
