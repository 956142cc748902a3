// File: crates/heatmap-core/src/render.rs
// Summary: Headless raster rendering of a heat map (PNG / RGBA8) using Skia CPU surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::error::RenderError;
use crate::geometry::{clamp, RectF};
use crate::heatmap::HeatMap;
use crate::legend::Legend;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::{Layout, LEGEND_HEIGHT};

const TITLE_SIZE: f32 = 20.0;
const DESCRIPTION_SIZE: f32 = 13.0;
const TICK_LABEL_SIZE: f32 = 11.0;
const LEGEND_LABEL_SIZE: f32 = 13.0;
const TOOLTIP_SIZE: f32 = 13.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub layout: Layout,
    pub theme: Theme,
    /// Title, tick labels, legend labels. Off for byte-stable snapshots.
    pub draw_labels: bool,
    /// Adds a strip of `LEGEND_HEIGHT` pixels under the canvas.
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            theme: Theme::classic(),
            draw_labels: true,
            draw_legend: true,
        }
    }
}

impl RenderOptions {
    /// Pixel size of the whole output image.
    pub fn surface_size(&self) -> (i32, i32) {
        let extra = if self.draw_legend { LEGEND_HEIGHT } else { 0 };
        (self.layout.width as i32, (self.layout.height + extra) as i32)
    }
}

/// Owns the text shaper so repeated frames (hover redraws) reuse the font collection.
pub struct Renderer {
    pub opts: RenderOptions,
    shaper: TextShaper,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    fn surface(&self) -> Result<skia::Surface, RenderError> {
        let (width, height) = self.opts.surface_size();
        skia::surfaces::raster_n32_premul((width, height)).ok_or(RenderError::Surface { width, height })
    }

    pub fn png_bytes(&self, heatmap: &HeatMap) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.surface()?;
        self.paint(surface.canvas(), heatmap, None);
        encode_png(&mut surface)
    }

    /// Returns (pixels, width, height, stride) with unpremultiplied RGBA rows.
    pub fn rgba8(&self, heatmap: &HeatMap, tooltip: Option<&Tooltip>) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = self.surface()?;
        self.paint(surface.canvas(), heatmap, tooltip);
        read_rgba8(&mut surface)
    }

    pub fn error_png_bytes(&self, message: &str) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.surface()?;
        self.paint_error(surface.canvas(), message);
        encode_png(&mut surface)
    }

    pub fn error_rgba8(&self, message: &str) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = self.surface()?;
        self.paint_error(surface.canvas(), message);
        read_rgba8(&mut surface)
    }

    fn paint(&self, canvas: &skia::Canvas, heatmap: &HeatMap, tooltip: Option<&Tooltip>) {
        let theme = &self.opts.theme;
        canvas.clear(theme.background);

        draw_cells(canvas, heatmap, theme);
        self.draw_axis(canvas, heatmap.x_axis());
        self.draw_axis(canvas, heatmap.y_axis());

        if self.opts.draw_labels {
            let layout = &self.opts.layout;
            let cx = layout.width as f32 * 0.5;
            self.shaper.draw_bold(canvas, heatmap.title(), cx, 26.0, TITLE_SIZE, theme.title, Anchor::Middle);
            self.shaper.draw(canvas, &heatmap.description(), cx, 46.0, DESCRIPTION_SIZE, theme.title, Anchor::Middle);
        }
        if self.opts.draw_legend {
            self.draw_legend(canvas, heatmap.legend(), self.opts.layout.height as f32);
        }
        if let Some(t) = tooltip.filter(|t| t.visible) {
            self.draw_tooltip(canvas, t);
        }
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &Axis) {
        let theme = &self.opts.theme;
        let mut line = skia::Paint::default();
        line.set_color(theme.axis_line);
        line.set_anti_alias(true);
        line.set_stroke_width(1.0);

        let (a, b) = axis.domain_segment();
        canvas.draw_line(a, b, &line);

        line.set_color(theme.tick);
        for tick in &axis.ticks {
            let (p0, p1) = axis.tick_segment(tick);
            canvas.draw_line(p0, p1, &line);
            if !self.opts.draw_labels {
                continue;
            }
            match axis.orient {
                Orient::Bottom => self.shaper.draw(
                    canvas,
                    &tick.label,
                    tick.pos,
                    axis.offset + TICK_SIZE + TICK_PADDING + TICK_LABEL_SIZE,
                    TICK_LABEL_SIZE,
                    theme.axis_label,
                    Anchor::Middle,
                ),
                Orient::Left => self.shaper.draw(
                    canvas,
                    &tick.label,
                    axis.offset - TICK_SIZE - TICK_PADDING,
                    tick.pos + TICK_LABEL_SIZE * 0.32,
                    TICK_LABEL_SIZE,
                    theme.axis_label,
                    Anchor::End,
                ),
            }
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, legend: &Legend, origin_y: f32) {
        let theme = &self.opts.theme;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(false);
        for entry in &legend.entries {
            fill.set_color(theme.bucket_color(entry.bucket));
            canvas.draw_rect(to_skia_rect(&entry.swatch, 0.0, origin_y), &fill);
            if self.opts.draw_labels {
                let (lx, ly) = entry.label_at;
                self.shaper.draw(
                    canvas,
                    entry.label,
                    lx,
                    origin_y + ly + LEGEND_LABEL_SIZE * 0.32,
                    LEGEND_LABEL_SIZE,
                    theme.axis_label,
                    Anchor::Start,
                );
            }
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, tooltip: &Tooltip) {
        let theme = &self.opts.theme;
        let (width, height) = self.opts.surface_size();
        let pad = 6.0;
        let text_w = if self.opts.draw_labels { self.shaper.measure_width(&tooltip.text, TOOLTIP_SIZE) } else { 120.0 };
        let box_w = text_w + 2.0 * pad;
        let box_h = TOOLTIP_SIZE + 2.0 * pad;
        let (ax, ay) = tooltip.anchor;
        // Prefer above-right of the pointer, but stay on the surface.
        let left = clamp(ax + 12.0, 0.0, (width as f32 - box_w).max(0.0));
        let top = clamp(ay - box_h - 8.0, 0.0, (height as f32 - box_h).max(0.0));

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.tooltip_background);
        canvas.draw_round_rect(skia::Rect::from_xywh(left, top, box_w, box_h), 4.0, 4.0, &bg);
        if self.opts.draw_labels {
            self.shaper.draw(
                canvas,
                &tooltip.text,
                left + pad,
                top + pad + TOOLTIP_SIZE * 0.85,
                TOOLTIP_SIZE,
                theme.tooltip_text,
                Anchor::Start,
            );
        }
    }

    /// The visible error state: a plain panel with the failure message instead of a chart.
    fn paint_error(&self, canvas: &skia::Canvas, message: &str) {
        let theme = &self.opts.theme;
        canvas.clear(theme.background);
        let layout = &self.opts.layout;
        let panel = skia::Rect::from_xywh(
            layout.left(),
            layout.top(),
            layout.plot_width(),
            layout.plot_height(),
        );
        let mut bg = skia::Paint::default();
        bg.set_color(theme.error_background);
        canvas.draw_rect(panel, &bg);

        let mut border = skia::Paint::default();
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(2.0);
        border.set_color(theme.error_text);
        canvas.draw_rect(panel, &border);

        if self.opts.draw_labels {
            let cx = layout.width as f32 * 0.5;
            self.shaper.draw_bold(canvas, "Unable to draw chart", cx, layout.top() + 48.0, TITLE_SIZE, theme.error_text, Anchor::Middle);
            self.shaper.draw_wrapped(
                canvas,
                message,
                layout.left() + 24.0,
                layout.top() + 72.0,
                layout.plot_width() - 48.0,
                DESCRIPTION_SIZE + 1.0,
                theme.error_text,
            );
        }
    }
}

fn draw_cells(canvas: &skia::Canvas, heatmap: &HeatMap, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(false);
    fill.set_style(skia::paint::Style::Fill);
    for cell in heatmap.cells() {
        fill.set_color(theme.bucket_color(cell.bucket));
        canvas.draw_rect(to_skia_rect(&cell.rect, 0.0, 0.0), &fill);
    }
}

fn to_skia_rect(r: &RectF, dx: f32, dy: f32) -> skia::Rect {
    skia::Rect::from_xywh(r.left + dx, r.top + dy, r.width, r.height)
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>, RenderError> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode("PNG"))?;
    Ok(data.as_bytes().to_vec())
}

fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None::<skia::ColorSpace>);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::Encode("RGBA8 pixels"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

// ---- convenience wrappers ----------------------------------------------------

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(heatmap: &HeatMap, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
    let bytes = render_to_png_bytes(heatmap, opts)?;
    write_file(output_png_path.as_ref(), &bytes)
}

pub fn render_to_png_bytes(heatmap: &HeatMap, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    Renderer::new(*opts).png_bytes(heatmap)
}

pub fn render_to_rgba8(heatmap: &HeatMap, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
    Renderer::new(*opts).rgba8(heatmap, None)
}

pub fn render_error_to_png_bytes(message: &str, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    Renderer::new(*opts).error_png_bytes(message)
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote image");
    Ok(())
}
