use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use pdfgist::session::Session;
use pdfgist::summarizer::Precision;
use pdfgist::tui::{input, App};

#[derive(Parser, Debug)]
#[command(name = "pdfgist")]
#[command(about = "Extractive PDF summarizer with a terminal interface")]
#[command(version)]
struct Args {
    /// PDF file to preselect in the session
    pdf: Option<PathBuf>,

    /// Precision level: low, medium, or high (unrecognized values fall back to medium)
    #[arg(long, default_value = "medium")]
    precision: String,

    /// Model label shown in the summary header (unrecognized labels fall back to the default)
    #[arg(long)]
    model: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to a file: stdout belongs to the alternate screen
    let log_appender = tracing_appender::rolling::never(std::env::temp_dir(), "pdfgist.log");
    let (log_writer, _log_guard) = tracing_appender::non_blocking(log_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(log_writer)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    info!(?args, "Starting pdfgist");

    // Validate any preselected PDF early to fail fast with a clear error
    if let Some(ref path) = args.pdf {
        if !path.exists() {
            anyhow::bail!("PDF file not found: {}", path.display());
        }
        if !pdfgist::tui::picker::has_pdf_extension(path) {
            anyhow::bail!("Not a PDF file: {}", path.display());
        }
    }

    let mut session = Session::new();
    session.pdf_path = args.pdf;
    session.precision = Precision::parse(&args.precision);
    if let Some(ref model) = args.model {
        session.set_model(model);
    }

    let app = App::new(session);
    run_tui(app)
}

/// Set up the terminal, run the synchronous event loop, and restore the
/// terminal on the way out.
fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restore the terminal before a panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain stray input left over from launching the command
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let tick_rate = Duration::from_millis(100);
    loop {
        terminal.draw(|f| app.view(f))?;

        // Every operation, summarization included, runs to completion on
        // this thread before the next draw
        if event::poll(tick_rate)? {
            let evt = event::read()?;
            app.update(input::map_event(&evt));
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    info!("pdfgist exiting");
    Ok(())
}
