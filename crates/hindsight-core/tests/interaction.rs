// File: crates/hindsight-core/tests/interaction.rs
// Purpose: Validate the pointer state machine: clamping, snap-forward, completion.

use hindsight_core::{
    ChartInstance, EraLine, PointerEvent, PointerKind, Question, ValuesAxis,
};

fn three_point_question() -> Question {
    Question::new(vec![(2000, 10.0), (2005, 20.0), (2010, 15.0)])
        .with_values_axis(ValuesAxis {
            label: String::new(),
            min: Some(0.0),
            max: Some(30.0),
            lines: Vec::new(),
        })
        .with_years_axis(
            "",
            vec![EraLine::new(2005, "black"), EraLine::new(2010, "red")],
        )
}

fn instance() -> ChartInstance {
    ChartInstance::new("q", three_point_question(), 660, 400).unwrap()
}

fn drag_at(inst: &mut ChartInstance, year: f64, value: f64) -> hindsight_core::InteractionOutcome {
    let x = inst.layout().x.to_px(year);
    let y = inst.layout().y.to_px(value);
    inst.pointer(PointerEvent::new(PointerKind::Drag, x, y))
}

#[test]
fn initial_state_is_anchor_seeded() {
    let inst = instance();
    assert_eq!(inst.anchor_year(), 2005);
    let your = &inst.state().your_data;
    assert_eq!(your.len(), 2);
    assert_eq!((your[0].year, your[0].value, your[0].defined), (2005, 20.0, true));
    assert_eq!((your[1].year, your[1].value, your[1].defined), (2010, 20.0, false));
    assert!(!inst.completed());
    assert!(!inst.result_shown());
}

#[test]
fn drag_on_final_year_defines_it_and_completes() {
    let mut inst = instance();
    let outcome = drag_at(&mut inst, 2010.0, 18.0);
    let p = inst.state().your_data[1];
    assert!((p.value - 18.0).abs() < 1e-6);
    assert!(p.defined);
    assert!(outcome.became_complete);
    assert!(inst.completed());
    assert!(inst.reveal_enabled());
}

#[test]
fn out_of_range_year_clamps_to_domain_edge() {
    let mut inst = instance();
    let outcome = drag_at(&mut inst, 2030.0, 18.0);
    let p = inst.state().your_data[1];
    assert!((p.value - 18.0).abs() < 1e-6);
    assert!(p.defined);
    assert!(outcome.became_complete);
}

#[test]
fn out_of_range_value_clamps_to_y_domain() {
    let mut inst = instance();
    drag_at(&mut inst, 2010.0, 150.0);
    let p = inst.state().your_data[1];
    assert!((p.value - 30.0).abs() < 1e-6);

    inst.rebuild(660, 400).unwrap();
    drag_at(&mut inst, 2010.0, -150.0);
    let p = inst.state().your_data[1];
    assert!((p.value - 0.0).abs() < 1e-6);
}

#[test]
fn sweeping_right_commits_passed_years() {
    let q = Question::new(vec![
        (2000, 10.0),
        (2002, 11.0),
        (2004, 12.0),
        (2006, 13.0),
        (2008, 14.0),
    ])
    .with_values_axis(ValuesAxis {
        label: String::new(),
        min: Some(0.0),
        max: Some(30.0),
        lines: Vec::new(),
    });
    let mut inst = ChartInstance::new("q", q, 660, 400).unwrap();
    assert_eq!(inst.anchor_year(), 2004);

    // pointer lands on 2008 directly: 2006 is passed over and committed too
    drag_at(&mut inst, 2008.0, 22.0);
    let your = &inst.state().your_data;
    assert!(your.iter().find(|p| p.year == 2006).unwrap().defined);
    assert!(your.iter().find(|p| p.year == 2008).unwrap().defined);
    // only the point near the pointer takes its value
    assert!((your.iter().find(|p| p.year == 2008).unwrap().value - 22.0).abs() < 1e-6);
    assert!((your.iter().find(|p| p.year == 2006).unwrap().value - 12.0).abs() < 1e-6);
}

#[test]
fn retreating_never_clears_defined_flags() {
    let q = Question::new(vec![
        (2000, 10.0),
        (2002, 11.0),
        (2004, 12.0),
        (2006, 13.0),
        (2008, 14.0),
    ])
    .with_values_axis(ValuesAxis {
        label: String::new(),
        min: Some(0.0),
        max: Some(30.0),
        lines: Vec::new(),
    });
    let mut inst = ChartInstance::new("q", q, 660, 400).unwrap();

    drag_at(&mut inst, 2008.0, 22.0);
    drag_at(&mut inst, 2006.0, 25.0);
    let your = &inst.state().your_data;
    assert!(your.iter().find(|p| p.year == 2008).unwrap().defined);
    // the revisited year still takes the new value
    assert!((your.iter().find(|p| p.year == 2006).unwrap().value - 25.0).abs() < 1e-6);
}

#[test]
fn completion_is_reported_exactly_once() {
    let mut inst = instance();
    let first = drag_at(&mut inst, 2010.0, 18.0);
    assert!(first.became_complete);
    let second = drag_at(&mut inst, 2010.0, 12.0);
    assert!(!second.became_complete);
    assert!(inst.completed());
}

#[test]
fn hover_moves_only_steer_the_preview() {
    let mut inst = instance();
    let y = inst.layout().y.to_px(25.0);
    let outcome = inst.pointer(PointerEvent::new(PointerKind::Move, 10.0, y));
    assert!(!outcome.drew);
    assert!(!inst.drawn());
    assert!(!inst.state().your_data[1].defined);
    assert!((inst.preview_y() - y).abs() < 1e-3);
}

#[test]
fn preview_is_clamped_to_the_plot() {
    let mut inst = instance();
    inst.pointer(PointerEvent::new(PointerKind::Move, 10.0, -500.0));
    assert_eq!(inst.preview_y(), 0.0);
    inst.pointer(PointerEvent::new(PointerKind::Move, 10.0, 5000.0));
    assert_eq!(inst.preview_y(), inst.layout().plot_height());
}

#[test]
fn first_authoring_event_marks_the_chart_drawn() {
    let mut inst = instance();
    assert!(!inst.drawn());
    drag_at(&mut inst, 2007.0, 18.0);
    assert!(inst.drawn());
}

#[test]
fn clicks_author_like_drags() {
    let mut inst = instance();
    let x = inst.layout().x.to_px(2010.0);
    let y = inst.layout().y.to_px(18.0);
    let outcome = inst.pointer(PointerEvent::new(PointerKind::Click, x, y));
    assert!(outcome.drew);
    assert!(inst.completed());
}

#[test]
fn reveal_is_rejected_before_completion() {
    let mut inst = instance();
    assert!(!inst.begin_reveal());
    assert!(!inst.result_shown());
    assert!(inst.drag_enabled());
}

#[test]
fn authoring_stops_once_the_result_is_shown() {
    let mut inst = instance();
    drag_at(&mut inst, 2010.0, 18.0);
    assert!(inst.begin_reveal());

    let outcome = drag_at(&mut inst, 2010.0, 5.0);
    assert!(!outcome.drew);
    let p = inst.state().your_data[1];
    assert!((p.value - 18.0).abs() < 1e-6, "value must not change after reveal");
}
