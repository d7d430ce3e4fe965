// File: crates/demo/src/main.rs
// Summary: `dashctl` renders CPU samples from JSON/CSV files and snapshots the hub's client pages to HTML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::series::{parse_csv, parse_json, parse_json_newest_first};
use chart_core::{theme, ChartConfig, Container, Element, Sample, Theme};
use chart_render_skia::SkiaRenderer;
use clap::{Parser, Subcommand};
use dashboard_shell::{HttpDataSource, Shell, ShellConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CPU dashboard tooling
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one sample file to SVG, PNG and/or HTML
    Render {
        /// Samples as `[[unix_seconds, value|null], ...]` (.json) or `timestamp,value` rows (.csv)
        #[arg(long)]
        input: PathBuf,
        /// Input JSON is newest first, as the hub serves it
        #[arg(long)]
        newest_first: bool,
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long)]
        html: Option<PathBuf>,
        /// TOML chart config (size, margins, line style, tick count)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value = "dark")]
        theme: String,
    },
    /// Fetch every client from the hub and write a static page per view
    Browse {
        /// Hub base URL [default: $DASH_HUB_URL or http://127.0.0.1:8890]
        #[arg(long)]
        hub: Option<String>,
        /// Per-request timeout [default: $DASH_TIMEOUT_SECS or 10]
        #[arg(long)]
        timeout_secs: Option<u64>,
        #[arg(long, default_value = "target/out/dashboard")]
        out: PathBuf,
        #[arg(long, default_value = "dark")]
        theme: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match args.command {
        Commands::Render { input, newest_first, svg, png, html, config, theme } => {
            let config = load_config(config.as_deref())?;
            let theme = pick_theme(&theme);
            render_file(&input, newest_first, &config, theme, Outputs { svg, png, html })
        }
        Commands::Browse { hub, timeout_secs, out, theme, config } => {
            let config = load_config(config.as_deref())?;
            // flags win over DASH_HUB_URL / DASH_TIMEOUT_SECS
            let env = ShellConfig::from_env()?;
            let shell_config = ShellConfig::new(
                hub.unwrap_or(env.hub_url),
                timeout_secs.map(Duration::from_secs).unwrap_or(env.request_timeout),
            )?;
            browse(&shell_config, &out, pick_theme(&theme), config).await
        }
    }
}

struct Outputs {
    svg: Option<PathBuf>,
    png: Option<PathBuf>,
    html: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    let Some(path) = path else {
        return Ok(ChartConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartConfig::from_toml_str(&text).with_context(|| format!("invalid chart config '{}'", path.display()))
}

fn pick_theme(name: &str) -> Theme {
    let theme = theme::find(name);
    if !theme.name.eq_ignore_ascii_case(name) {
        warn!(requested = name, using = theme.name, "unknown theme");
    }
    theme
}

fn load_samples(path: &Path, newest_first: bool) -> Result<Vec<Sample>> {
    let is_csv = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let samples = if is_csv {
        let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        parse_csv(file)?
    } else {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        if newest_first { parse_json_newest_first(&text)? } else { parse_json(&text)? }
    };
    Ok(samples)
}

fn render_file(input: &Path, newest_first: bool, config: &ChartConfig, theme: Theme, outputs: Outputs) -> Result<()> {
    let samples = load_samples(input, newest_first)
        .with_context(|| format!("failed to load samples '{}'", input.display()))?;
    info!(samples = samples.len(), input = %input.display(), "loaded samples");

    let graphic = chart_core::render(&samples, config);
    for note in &graphic.notes {
        info!(?note, "render note");
    }

    // nothing requested: default SVG next to the other demo outputs
    let svg = match (&outputs.svg, &outputs.png, &outputs.html) {
        (None, None, None) => Some(out_name(input, "svg")),
        _ => outputs.svg,
    };

    if let Some(path) = svg {
        write_text(&path, &graphic.to_svg())?;
    }
    if let Some(path) = outputs.png {
        SkiaRenderer::new(theme).render_to_png(&graphic, &path)?;
        info!(path = %path.display(), "wrote");
    }
    if let Some(path) = outputs.html {
        let mut page = Container::new("container");
        page.append(Element::new("h3", "CPU Usage"));
        chart_core::render_into(&samples, config, &mut page);
        write_text(&path, &page.to_page("CPU Usage", &theme))?;
    }
    Ok(())
}

async fn browse(shell_config: &ShellConfig, out: &Path, theme: Theme, config: ChartConfig) -> Result<()> {
    let source = HttpDataSource::new(shell_config)?;
    let mut shell = Shell::new(source, config);

    let mut container = Container::new("container");
    shell
        .refresh_clients(&mut container)
        .await
        .with_context(|| format!("listing clients from {}", shell_config.hub_url))?;
    write_text(&out.join("index.html"), &container.to_page("Clients", &theme))?;

    let clients = shell.state().clients.clone();
    for client in &clients {
        let mut detail = Container::new("container");
        if let Err(err) = shell.select_client(client.id, &mut detail).await {
            warn!(client = client.id, %err, "skipping client");
            continue;
        }
        write_text(&out.join(client.detail_href()), &detail.to_page(&client.address, &theme))?;
    }
    info!(clients = clients.len(), out = %out.display(), "dashboard written");
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>.<ext>
fn out_name(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.{ext}"))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote");
    Ok(())
}
