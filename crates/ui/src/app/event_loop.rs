use super::{App, TuiView};
use crate::event_handler::TerminalEvents;
use crate::state::AppState;

use ratatui::{Terminal, backend::CrosstermBackend};
use relayhub_core::{Clipboard, Clock, Controller, Settings};
use std::io::{self, Result};
use std::panic;

/// Take over the terminal and run the relay hub until the user quits
pub fn run<C: Clipboard, K: Clock>(settings: &Settings, controller: Controller<C, K>) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableBracketedPaste
    )?;
    install_panic_hook();

    let result = run_app(settings, controller);
    let restored = restore_terminal();
    result.and(restored)
}

fn run_app<C: Clipboard, K: Clock>(settings: &Settings, controller: Controller<C, K>) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let view = TuiView::new(terminal, AppState::from_settings(settings), TerminalEvents::default());
    let mut app = App::new(controller, view);
    app.run();

    Ok(())
}

/// Leave the alternate screen, bracketed paste and raw mode
pub fn restore_terminal() -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
