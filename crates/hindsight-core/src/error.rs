// File: crates/hindsight-core/src/error.rs
// Summary: Error taxonomy for configuration and gallery setup failures.

use thiserror::Error;

/// A malformed `Question`; surfaced at instance construction, never later.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("chart data is empty")]
    EmptyData,
    #[error("duplicate year {0} in chart data")]
    DuplicateYear(i32),
    #[error("era boundaries must be strictly increasing (saw {prev}, then {next})")]
    UnorderedEraBoundary { prev: i32, next: i32 },
    #[error("last era boundary {last} does not reach the final data year {max_year}")]
    UncoveredTail { last: i32, max_year: i32 },
    #[error("anchor year {0} is not a data year")]
    AnchorNotInData(i32),
    #[error("value axis bounds are invalid (min {min} >= max {max})")]
    BadValueBounds { min: f64, max: f64 },
    #[error("log scale requires positive values (saw {0})")]
    NonPositiveLogValue(f64),
}

/// A chart slot that cannot be wired up; surfaced when mounting a gallery.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no question configured for chart '{key}'")]
    UnknownQuestion { key: String },
    #[error("chart '{key}' has no companion result panel")]
    MissingResultPanel { key: String },
    #[error("chart '{key}': {source}")]
    Config {
        key: String,
        #[source]
        source: ConfigError,
    },
}
