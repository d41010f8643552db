//! Terminal front end for the flag game.
//!
//! A thin host over [`SessionEngine`]: it draws the round and feeds key
//! presses back as guesses and round advances.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Dialog};
pub use input::{FlagSlot, move_cursor};
pub use ui::flag_glyph;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::games::flags::{RandomSource, SessionEngine};
use crate::store::HighScoreStore;

/// Runs the terminal game until the player quits.
///
/// Logs go to `guess_the_flag.log` so they don't corrupt the screen.
pub fn run_tui<R: RandomSource, S: HighScoreStore>(engine: SessionEngine<R, S>) -> Result<()> {
    let log_file = std::fs::File::create("guess_the_flag.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,guess_the_flag=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Guess the Flag TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(high_score = app.engine().high_score(), "Leaving Guess the Flag");
    res
}

#[instrument(skip_all)]
fn run_app<B, R, S>(terminal: &mut Terminal<B>, app: &mut App<R, S>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    R: RandomSource,
    S: HighScoreStore,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match app.handle_key(key.code) {
                Ok(AppAction::Quit) => return Ok(()),
                Ok(AppAction::Continue) => {}
                Err(e) => warn!(error = %e, "Key ignored"),
            }
        }
    }
}
