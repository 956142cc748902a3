// File: crates/heatmap-cli/src/main.rs
// Summary: Loads the temperature document (URL or file) and renders the heat map to PNG/SVG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heatmap_core::{render_error_svg, theme, HeatMap, Layout, RenderOptions, Renderer, Theme};
use heatmap_loader::{LoadError, LoaderConfig, Source, DEFAULT_URL};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Both,
}

impl Format {
    fn png(self) -> bool { matches!(self, Format::Png | Format::Both) }
    fn svg(self) -> bool { matches!(self, Format::Svg | Format::Both) }
}

/// Render the monthly global land-surface temperature heat map
#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heat map to PNG/SVG")]
struct Args {
    /// Dataset URL
    #[arg(long, default_value = DEFAULT_URL, env = "HEATMAP_URL")]
    url: String,

    /// Read the dataset from a local JSON file instead of the URL
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out", env = "HEATMAP_OUT_DIR")]
    out: PathBuf,

    /// Which files to write
    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Color theme (classic, dark, high-contrast)
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Leave the legend strip off
    #[arg(long)]
    no_legend: bool,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    run(args)
}

/// Load, build and write the requested outputs. On failure the error placard is
/// written in place of the chart and the error is returned.
fn run(args: Args) -> Result<()> {
    let source = match &args.input {
        Some(path) => Source::File(path.clone()),
        None => Source::Url(args.url.clone()),
    };
    let config = LoaderConfig {
        timeout: args.timeout_secs.map(Duration::from_secs),
        ..LoaderConfig::default()
    };
    let theme = theme::lookup(&args.theme).unwrap_or_else(|| {
        warn!(theme = %args.theme, "unknown theme, using classic");
        Theme::classic()
    });
    let opts = RenderOptions {
        layout: Layout::default(),
        theme,
        draw_labels: true,
        draw_legend: !args.no_legend,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create Tokio runtime")?;
    let loaded = runtime.block_on(source.load(&config));

    let heatmap = match loaded.and_then(|ds| HeatMap::build(ds, opts.layout).map_err(LoadError::from)) {
        Ok(hm) => hm,
        Err(err) => {
            let message = format!("{}: {err}", err.kind().as_str());
            warn!(source = %source.describe(), "{message}");
            write_error_state(&args, &opts, &message)?;
            anyhow::bail!("cannot render {}: {message}", source.describe());
        }
    };
    info!(cells = heatmap.cells().len(), description = %heatmap.description(), "heat map ready");

    let renderer = Renderer::new(opts);
    if args.format.png() {
        let out = args.out.join("heatmap.png");
        let bytes = renderer.png_bytes(&heatmap).context("rendering PNG")?;
        write_output(&out, &bytes)?;
    }
    if args.format.svg() {
        let out = args.out.join("heatmap.svg");
        let doc = heatmap_core::render_to_svg(&heatmap, &opts);
        write_output(&out, doc.as_bytes())?;
    }
    Ok(())
}

/// Replace the chart with a placard naming the failure, in the requested formats.
fn write_error_state(args: &Args, opts: &RenderOptions, message: &str) -> Result<()> {
    if args.format.png() {
        let bytes = Renderer::new(*opts).error_png_bytes(message).context("rendering error placard")?;
        write_output(&args.out.join("heatmap_error.png"), &bytes)?;
    }
    if args.format.svg() {
        write_output(&args.out.join("heatmap_error.svg"), render_error_svg(message, opts).as_bytes())?;
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}
