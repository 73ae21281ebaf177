//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::{GameEngine, OpponentTurn};
use tictactoe_tui::{App, Cli, OpponentScheduler, ui};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = cli.engine_config()?;
    info!(mode = ?config.mode(), seed = ?config.seed(), "Starting tictactoe");
    let app = App::new(GameEngine::from_config(&config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "TUI exited with error");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Sends logs to a file so they don't interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all)]
async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let (mut scheduler, mut turns) = OpponentScheduler::new();

    loop {
        drain_turns(&mut app, &mut turns);
        scheduler.sync(app.pending_opponent_turn());

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            scheduler.cancel();
            info!("Exiting");
            return Ok(());
        }
    }
}

fn drain_turns(app: &mut App, turns: &mut mpsc::UnboundedReceiver<OpponentTurn>) {
    while let Ok(turn) = turns.try_recv() {
        app.play_opponent(turn);
    }
}
