// File: crates/hindsight-core/src/chart.rs
// Summary: Chart rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::format::format_value;
use crate::instance::ChartInstance;
use crate::path::{area_path, line_path};
use crate::series::SeriesPoint;
use crate::state::UserPoint;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::ticks::{format_tick, linear_ticks, log_tick_label, log_ticks};

pub struct RenderOptions {
    pub theme: Theme,
    /// Logical width of the hosting viewport; at or below 600 the unit
    /// suffix is dropped from value labels.
    pub viewport_width: f32,
    /// Draw text (disable for platform-independent pixel tests).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            viewport_width: 1024.0,
            draw_labels: true,
        }
    }
}

impl ChartInstance {
    /// Render into an RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster_surface(opts)?;
        let (w, h) = (self.layout().width, self.layout().height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, w, h, row_bytes))
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn raster_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = (self.layout().width, self.layout().height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        canvas.save();
        let insets = self.layout().insets;
        canvas.translate((insets.left as f32, insets.top as f32));

        let shaper = TextShaper::new();
        draw_grid(canvas, self, opts);
        draw_axes(canvas, self, opts, &shaper);
        draw_segments(canvas, self, opts);
        draw_user_line(canvas, self, opts, &shaper);
        draw_markers(canvas, self, opts, &shaper);
        draw_preview(canvas, self, opts);

        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn y_tick_values(inst: &ChartInstance) -> Vec<f64> {
    let (d0, d1) = inst.layout().y.domain();
    let (lo, hi) = (d0.min(d1), d0.max(d1));
    if inst.layout().y.is_log() {
        log_ticks(lo, hi)
    } else {
        linear_ticks(lo, hi, 10)
    }
}

fn draw_grid(canvas: &skia::Canvas, inst: &ChartInstance, opts: &RenderOptions) {
    let l = inst.layout();
    let (plot_w, plot_h) = (l.plot_width(), l.plot_height());
    let boundaries = inst.plan().boundaries();

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // one vertical line per year; era boundaries highlighted
    for year in inst.series().min_year()..=inst.series().max_year() {
        let x = l.x.to_px(year as f64);
        paint.set_color(if boundaries.contains(&year) {
            opts.theme.grid_highlight
        } else {
            opts.theme.grid
        });
        canvas.draw_line((x, 0.0), (x, plot_h), &paint);
    }

    // one horizontal line per value tick; configured axis lines highlighted
    let marked = &inst.question().values_axis.lines;
    for v in y_tick_values(inst) {
        let y = l.y.to_px(v);
        let highlighted = marked.iter().any(|m| (m - v).abs() < 1e-9);
        paint.set_color(if highlighted {
            opts.theme.grid_highlight
        } else {
            opts.theme.grid
        });
        canvas.draw_line((0.0, y), (plot_w, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, inst: &ChartInstance, opts: &RenderOptions, shaper: &TextShaper) {
    let l = inst.layout();
    let (plot_w, plot_h) = (l.plot_width(), l.plot_height());

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(opts.theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((0.0, plot_h), (plot_w, plot_h), &axis_paint);
    canvas.draw_line((0.0, 0.0), (0.0, plot_h), &axis_paint);

    if !opts.draw_labels {
        return;
    }

    // x ticks keep only the final two digits of the year
    let (min_year, max_year) = l.x.domain();
    for t in linear_ticks(min_year, max_year, 10) {
        if (t - t.round()).abs() > 1e-9 {
            continue;
        }
        let year = t.round() as i64;
        let label = format!("{:02}", year.rem_euclid(100));
        shaper.draw_center(canvas, &label, l.x.to_px(t), plot_h + 18.0, 12.0, opts.theme.tick_label, true);
    }

    for v in y_tick_values(inst) {
        let label = if l.y.is_log() {
            log_tick_label(v)
        } else {
            format_tick(v)
        };
        if label.is_empty() {
            continue;
        }
        shaper.draw_right(canvas, &label, -8.0, l.y.to_px(v) + 4.0, 12.0, opts.theme.tick_label, true);
    }

    // axis titles at the plot edges
    let q = inst.question();
    if !q.values_axis.label.is_empty() {
        shaper.draw_left(canvas, &q.values_axis.label, -25.0, -20.0, 13.0, opts.theme.axis_label, false);
    }
    if !q.years_axis.label.is_empty() {
        shaper.draw_right(canvas, &q.years_axis.label, plot_w - 15.0, plot_h + 38.0, 13.0, opts.theme.axis_label, false);
    }
}

fn draw_segments(canvas: &skia::Canvas, inst: &ChartInstance, opts: &RenderOptions) {
    let l = *inst.layout();
    let points = inst.series().points();
    let plot_h = l.plot_height();

    for (idx, seg) in inst.plan().segments().iter().enumerate() {
        let (lower, upper) = (seg.lower_year, seg.upper_year);
        let hidden = inst.plan().is_hidden(idx);

        let area = area_path(
            points,
            |p: &SeriesPoint| l.x.to_px(p.year as f64),
            |p: &SeriesPoint| l.y.to_px(p.value),
            plot_h,
            |p: &SeriesPoint| p.year >= lower && p.year <= upper,
        );
        let line = line_path(
            points,
            |p: &SeriesPoint| l.x.to_px(p.year as f64),
            |p: &SeriesPoint| l.y.to_px(p.value),
            |p: &SeriesPoint| p.year >= lower && p.year <= upper,
        );

        if hidden {
            canvas.save();
            canvas.clip_rect(
                skia::Rect::from_ltrb(0.0, 0.0, inst.mask_px(), plot_h),
                None,
                None,
            );
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(opts.theme.area_color(&seg.class));
        canvas.draw_path(&area, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(opts.theme.era_color(&seg.class));
        canvas.draw_path(&line, &stroke);

        if hidden {
            canvas.restore();
        }
    }
}

fn draw_markers(canvas: &skia::Canvas, inst: &ChartInstance, opts: &RenderOptions, shaper: &TextShaper) {
    let plan = inst.plan();
    for (idx, seg) in plan.segments().iter().enumerate() {
        let hidden = plan.is_hidden(idx) && !inst.markers_revealed();
        if idx == 0 {
            draw_marker(canvas, inst, opts, shaper, seg.lower_year, &seg.class, hidden);
        }
        draw_marker(canvas, inst, opts, shaper, seg.upper_year, &seg.class, hidden);
    }
}

/// A boundary dot plus its floating value label, edge-aligned at the range
/// ends. Hidden markers stay out entirely until the reveal finishes.
fn draw_marker(
    canvas: &skia::Canvas,
    inst: &ChartInstance,
    opts: &RenderOptions,
    shaper: &TextShaper,
    year: i32,
    class: &str,
    hidden: bool,
) {
    if hidden {
        return;
    }
    let Some(point) = inst.series().point_at(year) else {
        return;
    };
    let l = inst.layout();
    let x = l.x.to_px(year as f64);
    let y = l.y.to_px(point.value);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(opts.theme.era_color(class));
    canvas.draw_circle((x, y), 5.0, &dot);

    if year == inst.anchor_year() {
        let mut ring = skia::Paint::default();
        ring.set_anti_alias(true);
        ring.set_style(skia::paint::Style::Stroke);
        ring.set_stroke_width(2.0);
        ring.set_color(opts.theme.anchor_ring);
        canvas.draw_circle((x, y), 8.0, &ring);
    }

    if !opts.draw_labels {
        return;
    }
    let q = inst.question();
    let text = format_value(point.label, q.precision, None, &q.unit, opts.viewport_width);
    let ly = y - 12.0;
    if year == inst.series().min_year() {
        shaper.draw_left(canvas, &text, x, ly, 12.0, opts.theme.label_text, false);
    } else if year == inst.series().max_year() {
        shaper.draw_right(canvas, &text, x, ly, 12.0, opts.theme.label_text, false);
    } else {
        shaper.draw_center(canvas, &text, x, ly, 12.0, opts.theme.label_text, false);
    }
}

fn draw_user_line(canvas: &skia::Canvas, inst: &ChartInstance, opts: &RenderOptions, shaper: &TextShaper) {
    let l = *inst.layout();
    let data = &inst.state().your_data;

    let path = line_path(
        data,
        |p: &UserPoint| l.x.to_px(p.year as f64),
        |p: &UserPoint| l.y.to_px(p.value),
        |p: &UserPoint| p.defined,
    );
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(3.0);
    stroke.set_color(opts.theme.user_line);
    canvas.draw_path(&path, &stroke);

    // the user's answer label at the right edge once the final point is set
    let Some(last) = inst.state().last_point() else {
        return;
    };
    if !last.defined || !opts.draw_labels {
        return;
    }
    let q = inst.question();
    let text = format_value(last.label, q.precision, Some(0), &q.unit, opts.viewport_width);
    shaper.draw_right(
        canvas,
        &text,
        l.x.to_px(inst.series().max_year() as f64),
        l.y.to_px(last.value) - 12.0,
        12.0,
        opts.theme.user_line,
        false,
    );
}

/// The arrow that tracks the pointer's height at the anchor, inviting the
/// user to draw. Gone once the result is shown.
fn draw_preview(canvas: &skia::Canvas, inst: &ChartInstance, opts: &RenderOptions) {
    if inst.state().result_shown {
        return;
    }
    let Some(anchor) = inst.series().point_at(inst.anchor_year()) else {
        return;
    };
    let l = inst.layout();
    let x1 = l.x.to_px(anchor.year as f64);
    let y1 = l.y.to_px(anchor.value);
    let x2 = x1 + 100.0;
    let y2 = inst.preview_y();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(opts.theme.preview);
    canvas.draw_line((x1, y1), (x2, y2), &stroke);

    let mut head = skia::Path::new();
    head.move_to((x2, y2 - 4.0));
    head.line_to((x2, y2 + 4.0));
    head.line_to((x2 + 6.0, y2));
    head.close();
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(opts.theme.preview);
    canvas.draw_path(&head, &fill);
}
