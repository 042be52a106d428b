// File: crates/hindsight-core/src/segment.rs
// Summary: Partition of the year range into styled era segments.

use crate::error::ConfigError;
use crate::question::EraLine;

/// The era style class used when a boundary does not name one.
pub const DEFAULT_CLASS: &str = "black";

/// How many trailing segments are masked until the reveal.
const HIDDEN_TAIL: usize = 3;

/// One era: the series points with `lower_year <= year <= upper_year`,
/// styled by `class`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub lower_year: i32,
    pub upper_year: i32,
    pub class: String,
}

/// Ordered, contiguous cover of `[min_year, max_year]`. The trailing
/// segments are the hidden ones the user is asked to draw.
#[derive(Clone, Debug)]
pub struct SegmentPlan {
    segments: Vec<Segment>,
    hidden_from: usize,
}

impl SegmentPlan {
    /// Derive the plan from the configured era boundaries. Boundaries must
    /// be strictly increasing and the last one must land on `max_year`; an
    /// empty list degrades to a single default-styled segment.
    pub fn from_axis(min_year: i32, max_year: i32, lines: &[EraLine]) -> Result<Self, ConfigError> {
        let mut segments = Vec::new();
        if lines.is_empty() {
            segments.push(Segment {
                lower_year: min_year,
                upper_year: max_year,
                class: DEFAULT_CLASS.to_string(),
            });
        } else {
            let mut lower = min_year;
            for line in lines {
                if line.year <= lower {
                    return Err(ConfigError::UnorderedEraBoundary { prev: lower, next: line.year });
                }
                let class = if line.class.is_empty() {
                    DEFAULT_CLASS.to_string()
                } else {
                    line.class.clone()
                };
                segments.push(Segment { lower_year: lower, upper_year: line.year, class });
                lower = line.year;
            }
            if lower != max_year {
                return Err(ConfigError::UncoveredTail { last: lower, max_year });
            }
        }
        let hidden_from = segments.len() - HIDDEN_TAIL.min(segments.len());
        Ok(Self { segments, hidden_from })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the segment at `idx` is masked until the reveal.
    pub fn is_hidden(&self, idx: usize) -> bool {
        idx >= self.hidden_from
    }

    pub fn hidden_count(&self) -> usize {
        self.segments.len() - self.hidden_from
    }

    /// Boundary years, for gridline highlighting: the range start plus
    /// every segment's upper edge.
    pub fn boundaries(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.segments.len() + 1);
        out.push(self.segments[0].lower_year);
        out.extend(self.segments.iter().map(|s| s.upper_year));
        out
    }
}
