// File: crates/hindsight-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use hindsight_core::{ChartInstance, EraLine, Question, RenderOptions};

fn sample_question() -> Question {
    Question::new(vec![
        (1960, 12.0),
        (1970, 18.0),
        (1980, 26.0),
        (1990, 22.0),
        (2000, 30.0),
        (2010, 34.0),
    ])
    .with_years_axis(
        "Jahr",
        vec![
            EraLine::new(1980, "black"),
            EraLine::new(2000, "red"),
            EraLine::new(2010, "red"),
        ],
    )
    .with_unit("Mio.")
    .with_precision(0)
}

#[test]
fn render_smoke_png() {
    let inst = ChartInstance::new("smoke", sample_question(), 800, 400).expect("valid question");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    inst.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = inst.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let inst = ChartInstance::new("smoke", sample_question(), 640, 400).expect("valid question");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = inst.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}
