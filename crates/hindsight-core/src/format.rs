// File: crates/hindsight-core/src/format.rs
// Summary: Localized value formatting for floating labels.

/// Viewport widths at or below this drop the unit suffix to save space.
pub const UNIT_BREAKPOINT: f32 = 600.0;

/// Format a value for a floating label: fixed-point with the question's
/// precision when set, else with `default_precision` when given, else the
/// shortest plain rendering. Decimal mark is a comma, thousands are grouped
/// with periods, and the unit suffix is appended only on viewports wider
/// than [`UNIT_BREAKPOINT`].
pub fn format_value(
    value: f64,
    precision: Option<u32>,
    default_precision: Option<u32>,
    unit: &str,
    viewport_width: f32,
) -> String {
    let number = match precision.or(default_precision) {
        Some(digits) => format!("{:.*}", digits as usize, value),
        None => format!("{}", value),
    };
    let localized = localize(&number);
    if viewport_width <= UNIT_BREAKPOINT {
        return localized;
    }
    format!("{} {}", localized, unit).trim_end().to_string()
}

/// Swap separators: "." becomes the thousands group mark, "," the decimal mark.
fn localize(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }
    match frac_part {
        Some(f) => format!("{}{},{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
