// File: crates/heatmap-window/src/main.rs
// Summary: Windowed heat map viewer; CPU render blitted via softbuffer, tooltip follows the hovered cell.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use heatmap_core::{HeatMap, Hover, Layout, RenderOptions, Renderer};
use heatmap_loader::{LoadError, LoaderConfig, Source, DEFAULT_URL};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// What the window shows: the chart, or the placard when loading failed.
enum View {
    Chart(HeatMap),
    Failed(String),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: URL or path to a local copy of the document
    let source = source_from_arg(std::env::args().nth(1));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create Tokio runtime")?;
    let loaded = runtime
        .block_on(source.load(&LoaderConfig::default()))
        .and_then(|ds| HeatMap::build(ds, Layout::default()).map_err(LoadError::from));
    let view = match loaded {
        Ok(hm) => View::Chart(hm),
        Err(e) => View::Failed(format!("{}: {e}", e.kind().as_str())),
    };
    if let View::Failed(msg) = &view {
        warn!(source = %source.describe(), "{msg}");
    }

    let renderer = Renderer::new(RenderOptions::default());
    let (width, height) = renderer.opts.surface_size();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(heatmap_core::dataset::TITLE)
        .with_inner_size(PhysicalSize::new(width as u32, height as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut hover = Hover::new();
    info!(width, height, "window ready");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    if let View::Chart(hm) = &view {
                        if hover.pointer_moved(hm, position.x as f32, position.y as f32) {
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if hover.pointer_left() {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let frame = match &view {
                    View::Chart(hm) => renderer.rgba8(hm, Some(hover.tooltip())),
                    View::Failed(msg) => renderer.error_rgba8(msg),
                };
                match frame {
                    Ok((rgba, w, h, stride)) => {
                        if let Err(e) = present(&mut surface, window.inner_size(), &rgba, w, h, stride) {
                            error!("present failed: {e}");
                        }
                    }
                    Err(e) => error!("render failed: {e}"),
                }
            }
            _ => {}
        }
    })
}

fn source_from_arg(arg: Option<String>) -> Source {
    match arg {
        Some(a) if a.starts_with("http://") || a.starts_with("https://") => Source::Url(a),
        Some(a) => Source::File(PathBuf::from(a)),
        None => Source::Url(DEFAULT_URL.to_string()),
    }
}

/// Copy RGBA rows into the 0RGB window buffer, clipped to the window size.
fn present(
    surface: &mut softbuffer::Surface,
    size: PhysicalSize<u32>,
    rgba: &[u8],
    w: u32,
    h: u32,
    stride: usize,
) -> Result<()> {
    let (Some(sw), Some(sh)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(sw, sh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    let cols = size.width.min(w) as usize;
    let rows = size.height.min(h) as usize;
    for y in 0..rows {
        let src = &rgba[y * stride..y * stride + cols * 4];
        let dst = &mut frame[y * size.width as usize..y * size.width as usize + cols];
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *d = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
