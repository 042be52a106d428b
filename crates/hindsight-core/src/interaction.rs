// File: crates/hindsight-core/src/interaction.rs
// Summary: Typed pointer events and the pure transition over DrawState.

use crate::scale::{ValueScale, YearScale};
use crate::state::DrawState;
use crate::types::clamp;

/// What kind of pointer gesture reached the chart. `Move` is a hover and
/// only steers the preview indicator; `Drag` and `Click` author points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Drag,
    Click,
}

/// A pointer event in plot-relative pixels (origin at the top-left of the
/// drawing area, inside the margins).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }
}

/// What a pointer application did to the state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionOutcome {
    /// The event authored at least one point (the instance counts as drawn).
    pub drew: bool,
    /// This event flipped `completed` from false to true.
    pub became_complete: bool,
}

/// Apply an authoring event to the state. The caller guards on
/// `result_shown`; this function assumes drawing is still allowed.
///
/// The pointer position is inverted through the scales, the year clamped
/// into `[anchor_year, max]` and the value into the y domain. Points within
/// half a year of the pointer take its value; every point the pointer has
/// reached or passed (`point.year - pointer_year < 0.5`) becomes defined,
/// so sweeping rightward commits the years passed over. Retreating never
/// clears a flag.
pub fn apply_pointer(
    state: &mut DrawState,
    x_scale: &YearScale,
    y_scale: &ValueScale,
    anchor_year: i32,
    event: PointerEvent,
) -> InteractionOutcome {
    let mut outcome = InteractionOutcome::default();
    if event.kind == PointerKind::Move {
        return outcome;
    }
    outcome.drew = true;

    let (_, max_year) = x_scale.domain();
    let year = clamp(x_scale.from_px(event.x), anchor_year as f64, max_year);
    let value = y_scale.clamp_domain(y_scale.from_px(event.y));

    for point in state.your_data.iter_mut() {
        if point.year <= anchor_year {
            continue;
        }
        if (point.year as f64 - year).abs() < 0.5 {
            point.value = value;
            point.label = value;
        }
        if point.year as f64 - year < 0.5 {
            point.defined = true;
        }
    }

    if !state.completed && state.all_defined() {
        state.completed = true;
        outcome.became_complete = true;
    }
    outcome
}
