// File: crates/heatmap-core/src/svg.rs
// Summary: SVG document output. Keeps per-cell data attributes and native hover tooltips (<title>).

use std::fmt::Write as _;
use std::path::Path;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::cell::{format_number, Cell};
use crate::error::RenderError;
use crate::heatmap::HeatMap;
use crate::render::{write_file, RenderOptions};
use crate::theme::{hex, Theme};

/// Render the whole chart as a standalone SVG document.
pub fn render_to_svg(heatmap: &HeatMap, opts: &RenderOptions) -> String {
    let theme = &opts.theme;
    let layout = &opts.layout;
    let (width, height) = opts.surface_size();
    let mut out = String::with_capacity(256 + heatmap.cells().len() * 180);

    open_document(&mut out, width, height, theme);

    if opts.draw_labels {
        let cx = layout.width as f32 * 0.5;
        let _ = writeln!(
            out,
            r#"<text id="title" x="{cx}" y="26" text-anchor="middle" font-size="20" font-weight="bold" fill="{}">{}</text>"#,
            hex(theme.title),
            escape(heatmap.title()),
        );
        let _ = writeln!(
            out,
            r#"<text id="description" x="{cx}" y="46" text-anchor="middle" font-size="13" fill="{}">{}</text>"#,
            hex(theme.title),
            escape(&heatmap.description()),
        );
    }

    let _ = writeln!(out, r#"<g id="canvas">"#);
    for cell in heatmap.cells() {
        write_cell(&mut out, cell, theme);
    }
    let _ = writeln!(out, "</g>");

    write_axis(&mut out, heatmap.x_axis(), theme, opts.draw_labels);
    write_axis(&mut out, heatmap.y_axis(), theme, opts.draw_labels);

    if opts.draw_legend {
        let _ = writeln!(out, r#"<g id="legend" transform="translate(0,{})">"#, layout.height);
        for entry in &heatmap.legend().entries {
            let s = &entry.swatch;
            let _ = writeln!(
                out,
                r#"<g><rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                s.left,
                s.top,
                s.width,
                s.height,
                hex(theme.bucket_color(entry.bucket)),
            );
            if opts.draw_labels {
                let (lx, ly) = entry.label_at;
                let _ = write!(
                    out,
                    r#"<text x="{lx}" y="{ly}" dy="0.32em" font-size="13" fill="{}">{}</text>"#,
                    hex(theme.axis_label),
                    escape(entry.label),
                );
            }
            let _ = writeln!(out, "</g>");
        }
        let _ = writeln!(out, "</g>");
    }

    out.push_str("</svg>\n");
    out
}

/// The error state as an SVG document: a panel with the failure message.
pub fn render_error_svg(message: &str, opts: &RenderOptions) -> String {
    let theme = &opts.theme;
    let layout = &opts.layout;
    let (width, height) = opts.surface_size();
    let mut out = String::new();
    open_document(&mut out, width, height, theme);
    let _ = writeln!(
        out,
        r#"<g id="error"><rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        layout.left(),
        layout.top(),
        layout.plot_width(),
        layout.plot_height(),
        hex(theme.error_background),
        hex(theme.error_text),
    );
    let cx = layout.width as f32 * 0.5;
    let _ = writeln!(
        out,
        r#"<text x="{cx}" y="{}" text-anchor="middle" font-size="20" font-weight="bold" fill="{}">Unable to draw chart</text>"#,
        layout.top() + 48.0,
        hex(theme.error_text),
    );
    let _ = writeln!(
        out,
        r#"<text x="{cx}" y="{}" text-anchor="middle" font-size="14" fill="{}">{}</text></g>"#,
        layout.top() + 80.0,
        hex(theme.error_text),
        escape(message),
    );
    out.push_str("</svg>\n");
    out
}

pub fn render_to_svg_file(heatmap: &HeatMap, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<(), RenderError> {
    write_file(path.as_ref(), render_to_svg(heatmap, opts).as_bytes())
}

fn open_document(out: &mut String, width: i32, height: i32, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, hex(theme.background));
}

fn write_cell(out: &mut String, cell: &Cell, theme: &Theme) {
    let r = &cell.rect;
    let _ = writeln!(
        out,
        r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}" data-bucket="{}" data-month="{}" data-year="{}" data-temp="{}"><title>{}</title></rect>"#,
        r.left,
        r.top,
        r.width,
        r.height,
        hex(theme.bucket_color(cell.bucket)),
        cell.bucket.name(),
        cell.data_month(),
        cell.data_year(),
        format_number(cell.temperature),
        escape(&cell.tooltip_text()),
    );
}

fn write_axis(out: &mut String, axis: &Axis, theme: &Theme, labels: bool) {
    let (a, b) = axis.range;
    let (transform, domain) = match axis.orient {
        Orient::Bottom => (format!("translate(0,{})", axis.offset), format!("M{a},0H{b}")),
        Orient::Left => (format!("translate({},0)", axis.offset), format!("M0,{a}V{b}")),
    };
    let _ = writeln!(out, r#"<g id="{}" transform="{transform}" font-size="11">"#, axis.id);
    let _ = writeln!(
        out,
        r#"<path class="domain" d="{domain}" stroke="{}" fill="none"/>"#,
        hex(theme.axis_line)
    );
    for tick in &axis.ticks {
        let (tick_transform, line, text) = match axis.orient {
            Orient::Bottom => (
                format!("translate({},0)", tick.pos),
                format!(r#"<line y2="{TICK_SIZE}""#),
                format!(r#"<text y="{}" dy="0.71em" text-anchor="middle""#, TICK_SIZE + TICK_PADDING),
            ),
            Orient::Left => (
                format!("translate(0,{})", tick.pos),
                format!(r#"<line x2="-{TICK_SIZE}""#),
                format!(r#"<text x="-{}" dy="0.32em" text-anchor="end""#, TICK_SIZE + TICK_PADDING),
            ),
        };
        let _ = write!(
            out,
            r#"<g class="tick" transform="{tick_transform}">{line} stroke="{}"/>"#,
            hex(theme.tick)
        );
        if labels {
            let _ = write!(out, r#"{text} fill="{}">{}</text>"#, hex(theme.axis_label), escape(&tick.label));
        }
        let _ = writeln!(out, "</g>");
    }
    let _ = writeln!(out, "</g>");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
