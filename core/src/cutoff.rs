//! Frequency cutoff strings used to build band identifiers.

use strum_macros::Display;

/// Separates the cutoff range from the usage name inside a `unique_id`.
pub const UNIQUE_ID_SEPARATOR: &str = " — ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FrequencyUnit {
    #[strum(serialize = "Hz")]
    Hz,
    #[strum(serialize = "kHz")]
    KHz,
    #[strum(serialize = "MHz")]
    MHz,
    #[strum(serialize = "GHz")]
    GHz,
}

impl FrequencyUnit {
    /// Largest unit whose magnitude does not exceed `hz`.
    pub fn for_value(hz: f64) -> Self {
        if hz >= 1e9 {
            Self::GHz
        } else if hz >= 1e6 {
            Self::MHz
        } else if hz >= 1e3 {
            Self::KHz
        } else {
            Self::Hz
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1e3,
            Self::MHz => 1e6,
            Self::GHz => 1e9,
        }
    }
}

/// `2.4e9` becomes `2.4 GHz`, `240` becomes `240.0 Hz`.
pub fn format_frequency(hz: f64) -> String {
    let unit = FrequencyUnit::for_value(hz);
    // Debug keeps the fractional part and prints the shortest round-trip form.
    format!("{:?} {unit}", hz / unit.divisor())
}

pub fn cutoff_range(lower_freq: f64, upper_freq: f64) -> String {
    format!(
        "{} to {}",
        format_frequency(lower_freq),
        format_frequency(upper_freq)
    )
}

pub fn unique_id(lower_freq: f64, upper_freq: f64, usage_name: &str) -> String {
    format!(
        "{}{UNIQUE_ID_SEPARATOR}{usage_name}",
        cutoff_range(lower_freq, upper_freq)
    )
}

/// Splits a `unique_id` into its cutoff range and usage name. Identifiers
/// without a separator are treated as a bare usage name.
pub fn split_unique_id(unique_id: &str) -> (&str, &str) {
    unique_id
        .split_once(UNIQUE_ID_SEPARATOR)
        .unwrap_or(("", unique_id))
}
