// File: crates/hindsight-core/src/path.rs
// Summary: Line/area path generators over accessor closures with a defined-predicate.

use skia_safe as skia;

/// Build a polyline through `data`, reading coordinates through the `x`/`y`
/// accessors. Runs where `defined` is false break the path into separate
/// subpaths (the standard broken-line behavior of a defined predicate).
pub fn line_path<D>(
    data: &[D],
    x: impl Fn(&D) -> f32,
    y: impl Fn(&D) -> f32,
    defined: impl Fn(&D) -> bool,
) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for d in data {
        if !defined(d) {
            pen_down = false;
            continue;
        }
        let p = (x(d), y(d));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    path
}

/// Build a filled region between the value curve and a horizontal baseline.
/// Each defined run becomes its own closed subpath.
pub fn area_path<D>(
    data: &[D],
    x: impl Fn(&D) -> f32,
    y: impl Fn(&D) -> f32,
    baseline_px: f32,
    defined: impl Fn(&D) -> bool,
) -> skia::Path {
    let mut path = skia::Path::new();
    let mut run: Vec<(f32, f32)> = Vec::new();
    for d in data {
        if defined(d) {
            run.push((x(d), y(d)));
        } else {
            close_run(&mut path, &run, baseline_px);
            run.clear();
        }
    }
    close_run(&mut path, &run, baseline_px);
    path
}

fn close_run(path: &mut skia::Path, run: &[(f32, f32)], baseline_px: f32) {
    if run.is_empty() {
        return;
    }
    path.move_to((run[0].0, baseline_px));
    for &p in run {
        path.line_to(p);
    }
    path.line_to((run[run.len() - 1].0, baseline_px));
    path.close();
}
