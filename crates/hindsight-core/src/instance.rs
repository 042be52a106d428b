// File: crates/hindsight-core/src/instance.rs
// Summary: One mounted chart: config, derived model, layout, and lifecycle.

use std::time::Duration;

use crate::error::ConfigError;
use crate::interaction::{apply_pointer, InteractionOutcome, PointerEvent};
use crate::question::Question;
use crate::reveal::{RevealEvent, RevealTransition};
use crate::scale::{margin10, ValueScale, YearScale};
use crate::segment::SegmentPlan;
use crate::series::Series;
use crate::state::DrawState;
use crate::types::{clamp, Insets};

/// Fixed geometry of a mounted instance: surface size, margins, and the
/// scales derived from them. Rebuilt wholesale on resize.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub x: YearScale,
    pub y: ValueScale,
}

impl Layout {
    pub fn plot_width(&self) -> f32 {
        (self.width - self.insets.hsum() as i32).max(1) as f32
    }

    pub fn plot_height(&self) -> f32 {
        (self.height - self.insets.vsum() as i32).max(1) as f32
    }
}

/// The explicit per-chart context object: everything one mounted chart
/// owns, created at setup and destroyed (replaced) at teardown. There is
/// no shared registry keyed by chart id; lifetime is the struct's.
pub struct ChartInstance {
    key: String,
    question: Question,
    series: Series,
    plan: SegmentPlan,
    anchor_year: i32,
    layout: Layout,
    state: DrawState,
    drawn: bool,
    drag_enabled: bool,
    markers_revealed: bool,
    result_panel_shown: bool,
    preview_y: f32,
    reveal: Option<RevealTransition>,
    generation: u64,
}

impl ChartInstance {
    /// Validate the question and derive the full model for a surface of
    /// `width` x `height` pixels. All configuration errors surface here.
    pub fn new(
        key: impl Into<String>,
        question: Question,
        width: i32,
        height: i32,
    ) -> Result<Self, ConfigError> {
        Self::build(key.into(), question, width, height, 0)
    }

    fn build(
        key: String,
        question: Question,
        width: i32,
        height: i32,
        generation: u64,
    ) -> Result<Self, ConfigError> {
        let series = Series::from_pairs(&question.data)?;
        let anchor_year = series.resolve_anchor(question.anchor)?;
        let plan = SegmentPlan::from_axis(
            series.min_year(),
            series.max_year(),
            &question.years_axis.lines,
        )?;
        if let (Some(min), Some(max)) = (question.values_axis.min, question.values_axis.max) {
            if min >= max {
                return Err(ConfigError::BadValueBounds { min, max });
            }
        }
        let layout = build_layout(&question, &series, width, height)?;
        let state = DrawState::new(&series, anchor_year);
        let anchor_value = state.your_data[0].value;
        let preview_y = layout.y.to_px(anchor_value);
        Ok(Self {
            key,
            question,
            series,
            plan,
            anchor_year,
            layout,
            state,
            drawn: false,
            drag_enabled: true,
            markers_revealed: false,
            result_panel_shown: false,
            preview_y,
            reveal: None,
            generation,
        })
    }

    /// Tear down and rebuild from the same question at a new size: draw
    /// state reset to the anchor-seeded form, any in-flight reveal dropped,
    /// generation bumped so stale transitions stay inert.
    pub fn rebuild(&mut self, width: i32, height: i32) -> Result<(), ConfigError> {
        let next = Self::build(
            self.key.clone(),
            self.question.clone(),
            width,
            height,
            self.generation + 1,
        )?;
        *self = next;
        Ok(())
    }

    /// Feed a pointer event. The preview indicator tracks the vertical
    /// position on every event; authoring is a no-op once the result is
    /// shown.
    pub fn pointer(&mut self, event: PointerEvent) -> InteractionOutcome {
        let (v_min, v_max) = self.layout.y.domain();
        let a = self.layout.y.to_px(v_max);
        let b = self.layout.y.to_px(v_min);
        self.preview_y = clamp(event.y, a.min(b), a.max(b));

        if self.state.result_shown || !self.drag_enabled {
            return InteractionOutcome::default();
        }
        let outcome = apply_pointer(
            &mut self.state,
            &self.layout.x,
            &self.layout.y,
            self.anchor_year,
            event,
        );
        if outcome.drew {
            self.drawn = true;
        }
        outcome
    }

    /// Start the reveal. Ignored (returns false, state unchanged) unless
    /// the drawing is complete and the result is not already shown. The
    /// drag hit-region is disabled immediately.
    pub fn begin_reveal(&mut self) -> bool {
        if !self.state.completed || self.state.result_shown {
            return false;
        }
        self.state.result_shown = true;
        self.drag_enabled = false;
        let from = self.layout.x.to_px(self.anchor_year as f64);
        let to = self.layout.x.to_px(self.series.max_year() as f64);
        self.reveal = Some(RevealTransition::new(self.generation, from, to));
        true
    }

    /// Advance the in-flight reveal transition, if any. The hidden markers
    /// and the result panel flip visible on the `Finished` event, not
    /// before.
    pub fn advance(&mut self, dt: Duration) -> Option<RevealEvent> {
        let generation = self.generation;
        let event = self.reveal.as_mut()?.advance(dt, generation);
        if let Some(RevealEvent::Finished) = event {
            self.markers_revealed = true;
            self.result_panel_shown = true;
        }
        event
    }

    /// Visible width of the clip over the hidden segments: the anchor
    /// position until a reveal runs, then the transition's growing width.
    pub fn mask_px(&self) -> f32 {
        match &self.reveal {
            Some(t) => t.mask_px(),
            None => self.layout.x.to_px(self.anchor_year as f64),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn plan(&self) -> &SegmentPlan {
        &self.plan
    }

    pub fn anchor_year(&self) -> i32 {
        self.anchor_year
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// The user has authored at least one point since the last rebuild.
    pub fn drawn(&self) -> bool {
        self.drawn
    }

    pub fn completed(&self) -> bool {
        self.state.completed
    }

    pub fn result_shown(&self) -> bool {
        self.state.result_shown
    }

    /// Whether the host should accept a reveal request right now.
    pub fn reveal_enabled(&self) -> bool {
        self.state.completed && !self.state.result_shown
    }

    pub fn markers_revealed(&self) -> bool {
        self.markers_revealed
    }

    /// The companion result region is marked "shown" (reveal finished).
    pub fn result_panel_shown(&self) -> bool {
        self.result_panel_shown
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn reveal_in_flight(&self) -> bool {
        matches!(&self.reveal, Some(t) if !t.is_finished())
    }

    pub fn preview_y(&self) -> f32 {
        self.preview_y
    }

    /// Teardown counter; bumped on every rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn build_layout(
    question: &Question,
    series: &Series,
    width: i32,
    height: i32,
) -> Result<Layout, ConfigError> {
    let insets = Insets::default();
    let plot_w = (width - insets.hsum() as i32).max(1) as f32;
    let plot_h = (height - insets.vsum() as i32).max(1) as f32;
    let x = YearScale::new(series.min_year(), series.max_year(), plot_w);
    let v_min = question
        .values_axis
        .min
        .unwrap_or_else(|| margin10(series.min_value(), false));
    let v_max = question
        .values_axis
        .max
        .unwrap_or_else(|| margin10(series.max_value(), true));
    let y = if question.log {
        ValueScale::log10(v_min, v_max, plot_h)?
    } else {
        ValueScale::linear(v_min, v_max, plot_h)
    };
    Ok(Layout { width, height, insets, x, y })
}
