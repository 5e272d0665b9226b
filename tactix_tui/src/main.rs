//! Terminal frontend for the tactix engine.
//!
//! Owns the terminal and the event loop; all game decisions live in
//! `tactix_engine`. The computer opponent's "thinking" delay runs as a
//! spawned timer task whose tick carries a generation stamp, so a
//! restart or mode switch before it fires simply makes the tick stale.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::{App, Signal};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tactix_engine::Mode;
use tokio::sync::mpsc;
use tracing::info;

/// Tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tactix", version)]
struct Cli {
    /// Game mode: player-vs-player or player-vs-computer
    #[arg(long, default_value_t = Mode::PlayerVsComputer)]
    mode: Mode,

    /// Computer "thinking" delay in milliseconds
    #[arg(long, default_value_t = 400)]
    delay_ms: u64,

    /// Seed for the computer's move selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (logging to the terminal would corrupt the UI)
    #[arg(long, default_value = "tactix.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(mode = %cli.mode, delay_ms = cli.delay_ms, "starting tactix");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.mode, Duration::from_millis(cli.delay_ms), cli.seed);
    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {err}");
    }
    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<u64>();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Arm the thinking timer when the computer's turn begins. The
        // tick carries the generation it was armed for; App discards
        // ticks whose generation no longer matches.
        if let Some(generation) = app.timer_to_arm() {
            let tx = tick_tx.clone();
            let delay = app.delay();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(generation);
            });
        }

        if let Ok(generation) = tick_rx.try_recv() {
            app.on_thinking_elapsed(generation);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && app.handle_key(key.code) == Signal::Quit
                {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}
