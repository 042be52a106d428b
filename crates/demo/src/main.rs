// File: crates/demo/src/main.rs
// Summary: Demo loads a year/value CSV (or built-in sample), scripts a drawing
// gesture through the engine, and renders the initial/drawn/revealed stages to PNGs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use hindsight_core::{
    ChartInstance, EraLine, Gallery, PointerEvent, PointerKind, Question, RenderOptions, Slot,
};

const KEY: &str = "population";

fn main() -> Result<()> {
    let data = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let rows = load_year_value_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} rows from {}", rows.len(), path.display());
            rows
        }
        None => {
            let rows = sample_population();
            println!("No CSV given; using the built-in sample ({} rows)", rows.len());
            rows
        }
    };

    if data.is_empty() {
        anyhow::bail!("no rows loaded — check headers/delimiter.");
    }

    let question = build_question(data);
    let mut questions = BTreeMap::new();
    questions.insert(KEY.to_string(), question);

    let slots = [Slot::new(KEY, 960)];
    let mut gallery = Gallery::mount(&questions, &slots)?;

    let opts = RenderOptions::default();
    let out_dir = PathBuf::from("target/out");

    // Stage 1: the untouched chart, hidden tail masked at the anchor.
    {
        let inst = gallery.instance(KEY).expect("mounted");
        println!(
            "Anchor year {}, {} segments ({} hidden)",
            inst.anchor_year(),
            inst.plan().len(),
            inst.plan().hidden_count()
        );
        let out = out_dir.join("hindsight_initial.png");
        inst.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }

    // Stage 2: a scripted left-to-right gesture draws a guess.
    {
        let inst = gallery.instance_mut(KEY).expect("mounted");
        script_gesture(inst);
        assert!(inst.completed(), "gesture should complete the drawing");
        println!("Drawing complete; reveal control enabled: {}", inst.reveal_enabled());
        let out = out_dir.join("hindsight_drawn.png");
        inst.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }

    // Stage 3: reveal, ticking the transition to completion.
    {
        let inst = gallery.instance_mut(KEY).expect("mounted");
        assert!(inst.begin_reveal());
        let step = Duration::from_millis(100);
        while inst.reveal_in_flight() {
            inst.advance(step);
        }
        println!(
            "Reveal finished; result panel shown: {}",
            inst.result_panel_shown()
        );
        let out = out_dir.join("hindsight_revealed.png");
        inst.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Drag once per data year after the anchor, ramping from the anchor value
/// toward a flat guess. The snap-forward rule commits each year in turn.
fn script_gesture(inst: &mut ChartInstance) {
    let anchor_year = inst.anchor_year();
    let anchor_value = inst.state().your_data[0].value;
    let years: Vec<i32> = inst
        .series()
        .points()
        .iter()
        .map(|p| p.year)
        .filter(|&y| y > anchor_year)
        .collect();
    let target = anchor_value * 0.95;
    let n = years.len().max(1) as f64;
    for (i, year) in years.into_iter().enumerate() {
        let t = (i + 1) as f64 / n;
        let guess = anchor_value + (target - anchor_value) * t;
        let x = inst.layout().x.to_px(year as f64);
        let y = inst.layout().y.to_px(guess);
        inst.pointer(PointerEvent::new(PointerKind::Drag, x, y));
    }
}

fn build_question(data: Vec<(i32, f64)>) -> Question {
    let mut years: Vec<i32> = data.iter().map(|&(y, _)| y).collect();
    years.sort_unstable();
    let last = years[years.len() - 1];
    // era boundaries at the third points of the range, accent on the tail
    let b1 = years[years.len() / 3];
    let b2 = years[years.len() * 2 / 3];
    let mut lines = Vec::new();
    if b1 > years[0] {
        lines.push(EraLine::new(b1, "black"));
    }
    if b2 > b1 {
        lines.push(EraLine::new(b2, "red"));
    }
    if last > b2 {
        lines.push(EraLine::new(last, "red"));
    }
    Question::new(data)
        .with_years_axis("Jahr", lines)
        .with_unit("Mio.")
        .with_precision(1)
}

/// Population-style sample series (millions by decade).
fn sample_population() -> Vec<(i32, f64)> {
    vec![
        (1880, 45.2),
        (1890, 49.4),
        (1900, 56.4),
        (1910, 64.9),
        (1920, 61.8),
        (1930, 65.1),
        (1940, 69.8),
        (1950, 68.7),
        (1960, 72.7),
        (1970, 77.7),
        (1980, 78.3),
        (1990, 79.8),
        (2000, 82.2),
        (2010, 81.8),
    ]
}

/// Load a two-column CSV into (year, value) rows, probing common headers.
fn load_year_value_csv(path: &Path) -> Result<Vec<(i32, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_year = idx(&["year", "jahr", "date"]).unwrap_or(0);
    let i_value = idx(&["value", "wert", "population"]).unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let year = rec.get(i_year).and_then(|s| s.trim().parse::<i32>().ok());
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(year), Some(value)) = (year, value) {
            out.push((year, value));
        }
    }
    Ok(out)
}
