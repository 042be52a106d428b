// File: crates/hindsight-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub grid_highlight: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    /// Era stroke for the default ("black") class.
    pub era_default: skia::Color,
    /// Era stroke for the accent ("red") class.
    pub era_accent: skia::Color,
    /// Alpha applied to era strokes for the filled area below the curve.
    pub area_alpha: u8,
    pub user_line: skia::Color,
    pub preview: skia::Color,
    pub anchor_ring: skia::Color,
    pub label_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            grid_highlight: skia::Color::from_argb(255, 190, 190, 200),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick_label: skia::Color::from_argb(255, 100, 100, 110),
            era_default: skia::Color::from_argb(255, 34, 34, 38),
            era_accent: skia::Color::from_argb(255, 200, 60, 60),
            area_alpha: 48,
            user_line: skia::Color::from_argb(255, 32, 120, 200),
            preview: skia::Color::from_argb(255, 150, 150, 160),
            anchor_ring: skia::Color::from_argb(255, 32, 120, 200),
            label_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            grid_highlight: skia::Color::from_argb(255, 80, 80, 90),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            era_default: skia::Color::from_argb(255, 220, 220, 228),
            era_accent: skia::Color::from_argb(255, 220, 80, 80),
            area_alpha: 64,
            user_line: skia::Color::from_argb(255, 64, 160, 255),
            preview: skia::Color::from_argb(255, 120, 120, 130),
            anchor_ring: skia::Color::from_argb(255, 64, 160, 255),
            label_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    /// Resolve an era style class to its stroke color.
    pub fn era_color(&self, class: &str) -> skia::Color {
        match class {
            "red" => self.era_accent,
            _ => self.era_default,
        }
    }

    /// The translucent fill under an era curve.
    pub fn area_color(&self, class: &str) -> skia::Color {
        let c = self.era_color(class);
        skia::Color::from_argb(self.area_alpha, c.r(), c.g(), c.b())
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
