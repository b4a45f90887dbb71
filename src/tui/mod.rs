//! Terminal front end.
//!
//! A synchronous loop: poll crossterm for one event, fold it into the
//! [`App`], redraw the whole frame.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Command, command_for_key, command_for_mouse};
pub use layout::{Hit, ScreenLayout};

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the game in the terminal until the user quits.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(err).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            return Err(err).context("Failed to create terminal");
        }
    };

    let mut app = App::new(*settings.display());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.state().last_step(),
        status = ?app.state().status(),
        "Terminal UI closed"
    );
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}
