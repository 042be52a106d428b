// File: crates/hindsight-core/tests/lifecycle.rs
// Purpose: Validate gallery setup errors, resize debounce, and rebuild idempotence.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use hindsight_core::{
    ConfigError, Gallery, PointerEvent, PointerKind, Question, SetupError, Slot, ValuesAxis,
};

fn question() -> Question {
    Question::new(vec![(2000, 10.0), (2005, 20.0), (2010, 15.0)]).with_values_axis(ValuesAxis {
        label: String::new(),
        min: Some(0.0),
        max: Some(30.0),
        lines: Vec::new(),
    })
}

fn questions() -> BTreeMap<String, Question> {
    let mut map = BTreeMap::new();
    map.insert("growth".to_string(), question());
    map
}

#[test]
fn mounts_one_instance_per_slot() {
    let gallery = Gallery::mount(&questions(), &[Slot::new("growth", 660)]).unwrap();
    assert_eq!(gallery.len(), 1);
    let inst = gallery.instance("growth").unwrap();
    assert_eq!(inst.key(), "growth");
    assert_eq!(inst.layout().width, 660);
    assert_eq!(inst.layout().height, 400);
}

#[test]
fn unknown_question_is_a_setup_error() {
    let err = Gallery::mount(&questions(), &[Slot::new("missing", 660)]).unwrap_err();
    assert!(matches!(err, SetupError::UnknownQuestion { key } if key == "missing"));
}

#[test]
fn missing_result_panel_is_a_setup_error() {
    let err = Gallery::mount(
        &questions(),
        &[Slot::new("growth", 660).without_result_panel()],
    )
    .unwrap_err();
    assert!(matches!(err, SetupError::MissingResultPanel { key } if key == "growth"));
}

#[test]
fn config_errors_carry_their_chart_key() {
    let mut map = BTreeMap::new();
    map.insert("empty".to_string(), Question::new(Vec::new()));
    let err = Gallery::mount(&map, &[Slot::new("empty", 660)]).unwrap_err();
    match err {
        SetupError::Config { key, source } => {
            assert_eq!(key, "empty");
            assert_eq!(source, ConfigError::EmptyData);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rebuild_reproduces_the_initial_state() {
    let slots = [Slot::new("growth", 660)];
    let mut gallery = Gallery::mount(&questions(), &slots).unwrap();

    let before: Vec<_> = gallery
        .instance("growth")
        .unwrap()
        .state()
        .your_data
        .clone();

    // scribble, complete, reveal
    {
        let inst = gallery.instance_mut("growth").unwrap();
        let x = inst.layout().x.to_px(2010.0);
        let y = inst.layout().y.to_px(18.0);
        inst.pointer(PointerEvent::new(PointerKind::Drag, x, y));
        assert!(inst.begin_reveal());
        inst.advance(Duration::from_secs(1));
        assert!(inst.result_panel_shown());
    }

    gallery.reset_all(&slots).unwrap();
    let inst = gallery.instance("growth").unwrap();
    assert_eq!(inst.state().your_data, before);
    assert!(!inst.completed());
    assert!(!inst.result_shown());
    assert!(!inst.reveal_enabled());
    assert!(!inst.drawn());
    assert!(!inst.markers_revealed());
    assert!(!inst.result_panel_shown());
    assert!(inst.drag_enabled());
}

#[test]
fn resize_bursts_coalesce_into_one_rebuild() {
    let slots = [Slot::new("growth", 660)];
    let mut gallery = Gallery::mount(&questions(), &slots).unwrap();
    let t0 = Instant::now();

    gallery.notify_resize(t0);
    gallery.notify_resize(t0 + Duration::from_millis(40));
    gallery.notify_resize(t0 + Duration::from_millis(80));

    // still within the quiet period of the last notification
    assert!(!gallery.poll_resize(t0 + Duration::from_millis(120), &slots).unwrap());
    assert!(gallery.resize_pending());

    let wider = [Slot::new("growth", 900)];
    assert!(gallery.poll_resize(t0 + Duration::from_millis(180), &wider).unwrap());
    assert_eq!(gallery.instance("growth").unwrap().layout().width, 900);

    // the deadline is consumed
    assert!(!gallery.poll_resize(t0 + Duration::from_millis(400), &wider).unwrap());
}

#[test]
fn resize_mid_reveal_discards_the_instance_state() {
    let slots = [Slot::new("growth", 660)];
    let mut gallery = Gallery::mount(&questions(), &slots).unwrap();
    {
        let inst = gallery.instance_mut("growth").unwrap();
        let x = inst.layout().x.to_px(2010.0);
        let y = inst.layout().y.to_px(18.0);
        inst.pointer(PointerEvent::new(PointerKind::Drag, x, y));
        inst.begin_reveal();
        inst.advance(Duration::from_millis(200));
    }

    let t0 = Instant::now();
    gallery.notify_resize(t0);
    assert!(gallery.poll_resize(t0 + Duration::from_millis(150), &slots).unwrap());

    let inst = gallery.instance("growth").unwrap();
    assert!(!inst.result_shown());
    assert!(!inst.reveal_in_flight());
}

#[test]
fn advance_all_ticks_every_instance() {
    let mut map = questions();
    map.insert("second".to_string(), question());
    let slots = [Slot::new("growth", 660), Slot::new("second", 500)];
    let mut gallery = Gallery::mount(&map, &slots).unwrap();

    for key in ["growth", "second"] {
        let inst = gallery.instance_mut(key).unwrap();
        let x = inst.layout().x.to_px(2010.0);
        let y = inst.layout().y.to_px(18.0);
        inst.pointer(PointerEvent::new(PointerKind::Drag, x, y));
        assert!(inst.begin_reveal());
    }

    gallery.advance_all(Duration::from_secs(1));
    for key in ["growth", "second"] {
        assert!(gallery.instance(key).unwrap().result_panel_shown());
    }
}
