// File: crates/hindsight-core/src/question.rs
// Summary: Per-chart configuration object supplied fully formed by the embedding page.

/// One era boundary on the year axis: the era ends at `year` and is styled
/// by `class` (resolved against the theme; empty means the default class).
#[derive(Clone, Debug)]
pub struct EraLine {
    pub year: i32,
    pub class: String,
}

impl EraLine {
    pub fn new(year: i32, class: impl Into<String>) -> Self {
        Self { year, class: class.into() }
    }
}

/// Year axis configuration: axis title plus the ordered era boundaries.
#[derive(Clone, Debug, Default)]
pub struct YearsAxis {
    pub label: String,
    pub lines: Vec<EraLine>,
}

/// Value axis configuration. `min`/`max` override the auto-derived bounds;
/// `lines` are values whose gridlines are highlighted.
#[derive(Clone, Debug, Default)]
pub struct ValuesAxis {
    pub label: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub lines: Vec<f64>,
}

/// Immutable configuration for one chart instance. Validation happens when
/// an instance is built from it, not here; this is plain data.
#[derive(Clone, Debug)]
pub struct Question {
    /// Raw year -> value pairs in configuration order.
    pub data: Vec<(i32, f64)>,
    pub years_axis: YearsAxis,
    pub values_axis: ValuesAxis,
    /// Unit suffix for value labels ("Mio.", "%", ...).
    pub unit: String,
    /// Fixed-point digits for value labels; `None` falls back to the
    /// renderer's per-label default.
    pub precision: Option<u32>,
    /// Logarithmic value axis.
    pub log: bool,
    /// Pin the drawing anchor to a fixed data year instead of the median.
    pub anchor: Option<i32>,
}

impl Question {
    pub fn new(data: Vec<(i32, f64)>) -> Self {
        Self {
            data,
            years_axis: YearsAxis::default(),
            values_axis: ValuesAxis::default(),
            unit: String::new(),
            precision: None,
            log: false,
            anchor: None,
        }
    }

    pub fn with_years_axis(mut self, label: impl Into<String>, lines: Vec<EraLine>) -> Self {
        self.years_axis = YearsAxis { label: label.into(), lines };
        self
    }

    pub fn with_values_axis(mut self, axis: ValuesAxis) -> Self {
        self.values_axis = axis;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn with_anchor(mut self, year: i32) -> Self {
        self.anchor = Some(year);
        self
    }
}
