//! Terminal lifecycle and the main draw/input loop
//!
//! Raw mode and the alternate screen are entered once at startup and torn
//! down on every exit path, including panics, so a crash never leaves the
//! shell in raw mode.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::store::Store;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// The terminal type the dashboard draws to
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, chaining a panic hook that
/// restores the terminal before the panic message prints
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leave the alternate screen and disable raw mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Drive the dashboard until the user quits
pub fn run_tui(store: &Store, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(store, settings)?;
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    loop {
        // Drain store changes and refresh derived data before drawing
        app.sync();

        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        match events.next()? {
            // The next draw picks up the new size
            Event::Resize(..) => {}
            event => handle_event(&mut app, event)?,
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()
}
