// File: crates/hindsight-core/src/ticks.rs
// Summary: Tick layout helpers (nice linear steps, per-decade log ticks).

/// Linear ticks at a "nice" step (1/2/5 x 10^k) chosen to land near
/// `target` ticks over `[min, max]`.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 {
        return Vec::new();
    }
    let raw_step = (max - min) / target as f64;
    let mag = 10f64.powf(raw_step.log10().floor());
    let norm = raw_step / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    let step = nice * mag;
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    let mut i = 0u32;
    while v <= max + step * 1e-9 {
        out.push(v);
        i += 1;
        v = first + step * i as f64;
    }
    out
}

/// Log ticks: every mantissa 1..=9 per decade intersecting `[min, max]`.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0) || !(max > min) {
        return Vec::new();
    }
    let mut out = Vec::new();
    let lo_decade = min.log10().floor() as i32;
    let hi_decade = max.log10().ceil() as i32;
    for d in lo_decade..=hi_decade {
        let base = 10f64.powi(d);
        for m in 1..=9 {
            let v = m as f64 * base;
            if v >= min * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9) {
                out.push(v);
            }
        }
    }
    out
}

pub fn is_power_of_ten(v: f64) -> bool {
    if v <= 0.0 {
        return false;
    }
    let l = v.log10();
    (l - l.round()).abs() < 1e-9
}

/// Log-axis tick label: the value for exact powers of ten, blank otherwise.
pub fn log_tick_label(v: f64) -> String {
    if is_power_of_ten(v) {
        format_tick(v)
    } else {
        String::new()
    }
}

/// Plain tick label with float noise trimmed.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{:.6}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
