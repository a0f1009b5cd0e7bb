//! infradash CLI: Terminal monitoring dashboard

use clap::{Parser, Subcommand};
use infradash_core::{DashboardConfig, ManualTimers, MarkerFeed, MarkerId, Timeline};
use infradash_tui::{render_snapshot, App, DashboardSetup};
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Infrastructure monitoring dashboard with an incident timeline
#[derive(Parser)]
#[command(name = "infradash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// JSON marker feed replacing the built-in timeline
    #[arg(long, global = true)]
    markers: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard (default when no command specified)
    Tui,

    /// Render one frame of the dashboard to stdout
    Snapshot {
        /// Terminal width
        #[arg(long, default_value = "120")]
        width: u16,

        /// Terminal height
        #[arg(long, default_value = "40")]
        height: u16,

        /// Show the tooltip of a marker
        #[arg(long)]
        hover: Option<u64>,

        /// Scroll the timeline right by this many columns
        #[arg(long, default_value = "0")]
        scroll: u32,
    },

    /// List the timeline markers
    Markers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

const DEFAULT_CONFIG: &str = ".infradash/config.json";
const LOG_ENV: &str = "INFRADASH_LOG";

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui(&cli.config, cli.markers.as_deref()),
        Some(Commands::Snapshot {
            width,
            height,
            hover,
            scroll,
        }) => {
            init_stderr_logging();
            cmd_snapshot(&cli.config, cli.markers.as_deref(), width, height, hover, scroll)
        }
        Some(Commands::Markers { json }) => {
            init_stderr_logging();
            cmd_markers(&cli.config, cli.markers.as_deref(), json)
        }
        Some(Commands::Config { init }) => {
            init_stderr_logging();
            cmd_config(&cli.config, init)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log to a file while the TUI owns the terminal.
fn init_file_logging(path: &Path) -> CliResult {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn config_dir(config_path: &Path) -> &Path {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn load_setup(config_path: &Path, markers: Option<&Path>) -> Result<DashboardSetup, Box<dyn std::error::Error>> {
    let config = DashboardConfig::load(config_path)?;
    let timeline = load_timeline(markers)?;
    Ok(DashboardSetup::new(config, timeline))
}

fn load_timeline(markers: Option<&Path>) -> Result<Timeline, Box<dyn std::error::Error>> {
    match markers {
        Some(path) => {
            let timeline = MarkerFeed::load(path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), count = timeline.len(), "loaded markers");
            Ok(timeline)
        }
        None => Ok(Timeline::mock()),
    }
}

fn cmd_tui(config_path: &Path, markers: Option<&Path>) -> CliResult {
    // Config errors go to the terminal before the TUI takes it over
    let config = DashboardConfig::load(config_path)?;
    init_file_logging(&config.log_path(config_dir(config_path)))?;

    let timeline = load_timeline(markers)?;
    let setup = DashboardSetup::new(config, timeline);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(infradash_tui::run_tui(setup))
}

fn cmd_snapshot(
    config_path: &Path,
    markers: Option<&Path>,
    width: u16,
    height: u16,
    hover: Option<u64>,
    scroll: u32,
) -> CliResult {
    let setup = load_setup(config_path, markers)?;
    let mut app = App::new(setup, ManualTimers::new());

    // Layout first so the scroll clamps against the real viewport
    app.sync_layout(Rect::new(0, 0, width, height));
    app.timeline.scroll_by(i64::from(scroll));

    if let Some(id) = hover {
        let id = MarkerId(id);
        if app.timeline.timeline().find(id).is_none() {
            return Err(format!("No marker with id {id}").into());
        }
        app.timeline.pointer_entered_marker(id);
    }

    println!("{}", render_snapshot(&mut app, width, height));
    Ok(())
}

fn cmd_markers(config_path: &Path, markers: Option<&Path>, json: bool) -> CliResult {
    // Validates the config even though only the timeline is printed
    let setup = load_setup(config_path, markers)?;
    let timeline = setup.timeline;

    if json {
        println!("{}", serde_json::to_string_pretty(timeline.markers())?);
        return Ok(());
    }

    if timeline.is_empty() {
        println!("No events");
        return Ok(());
    }
    for marker in timeline.markers() {
        println!(
            "{:>4}  {:<14} {:<18} {}",
            marker.id.0,
            marker.category.as_str(),
            marker.occurred_at,
            marker.label
        );
    }
    Ok(())
}

fn cmd_config(config_path: &Path, init: bool) -> CliResult {
    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            DashboardConfig::default().save(config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
    }

    let config = DashboardConfig::load(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!(
        "log file: {}",
        config.log_path(config_dir(config_path)).display()
    );
    Ok(())
}
