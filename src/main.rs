mod app;
mod capture;
mod config;
mod ui;

use anyhow::{Context, Result};
use app::Controller;
use capture::{CaptureSpec, CaptureTools, ExternalTools};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

/// Browse two packet captures side by side and diff the selected records
#[derive(Parser)]
#[command(name = "capdiff", version, about)]
struct Cli {
    /// Left capture and initial record, as SOURCE:IDENTIFIER
    left: CaptureSpec,

    /// Right capture and initial record, as SOURCE:IDENTIFIER
    right: CaptureSpec,

    /// Display filter used when listing records (default 'sip', '' lists every frame)
    #[arg(long)]
    filter: Option<String>,

    /// Path to the tshark binary
    #[arg(long)]
    tshark: Option<String>,

    /// Diff program, or 'builtin' for the in-process differ
    #[arg(long)]
    diff_tool: Option<String>,

    /// Context lines around each change (builtin differ)
    #[arg(long)]
    context: Option<usize>,

    /// Extra config file, applied over the global and local ones
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a log to this file (also read from CAPDIFF_LOG)
    #[arg(long, env = "CAPDIFF_LOG")]
    log: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log {
        init_logging(path, cli.verbose)?;
    }

    let mut config = config::load_config(cli.config.as_deref());
    if let Some(ref filter) = cli.filter {
        config.tools.display_filter = filter.clone();
    }
    if let Some(ref tshark) = cli.tshark {
        config.tools.tshark = tshark.clone();
    }
    if let Some(ref diff) = cli.diff_tool {
        config.tools.diff = diff.clone();
    }
    if let Some(context) = cli.context {
        config.tools.context = context;
    }

    tracing::info!(left = %cli.left, right = %cli.right, "starting capdiff");
    let tools = ExternalTools::from_config(&config.tools);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = terminal
        .size()
        .map_err(anyhow::Error::from)
        .and_then(|size| {
            let screen = Rect::new(0, 0, size.width, size.height);
            let mut controller = Controller::new(tools, config, &cli.left, &cli.right, screen);
            run_app(&mut terminal, &mut controller)
        });

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!(error = %format!("{:#}", err), "exiting on error");
    }
    result
}

/// Draw, block for one event, apply it. Nothing runs between events.
fn run_app<T: CaptureTools>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller<T>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, controller))?;

        let event = event::read()?;
        controller.handle_event(&event);

        if controller.should_quit {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
