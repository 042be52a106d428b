// File: crates/hindsight-core/src/state.rs
// Summary: Per-instance mutable draw state: the user-authored series and its flags.

use crate::series::Series;

/// One user-editable point. Until the user reaches it, `value`/`label` hold
/// the anchor's value and `defined` is false.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserPoint {
    pub year: i32,
    pub value: f64,
    pub label: f64,
    pub defined: bool,
}

/// The state a chart instance mutates while the user draws. Rebuilt from
/// scratch whenever the instance is torn down (resize, refresh).
#[derive(Clone, Debug)]
pub struct DrawState {
    pub your_data: Vec<UserPoint>,
    pub completed: bool,
    pub result_shown: bool,
}

impl DrawState {
    /// One entry per series year from the anchor onward, every value seeded
    /// with the anchor's known value, only the anchor entry pre-defined.
    pub fn new(series: &Series, anchor_year: i32) -> Self {
        let mut seed = None;
        let mut your_data = Vec::new();
        for p in series.points() {
            if p.year < anchor_year {
                continue;
            }
            let (value, label) = *seed.get_or_insert((p.value, p.label));
            your_data.push(UserPoint {
                year: p.year,
                value,
                label,
                defined: p.year == anchor_year,
            });
        }
        Self { your_data, completed: false, result_shown: false }
    }

    pub fn all_defined(&self) -> bool {
        self.your_data.iter().all(|p| p.defined)
    }

    /// The right-edge point (the user's final answer once defined).
    pub fn last_point(&self) -> Option<&UserPoint> {
        self.your_data.last()
    }
}
