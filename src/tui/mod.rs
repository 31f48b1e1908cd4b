//! Interactive terminal shell

pub mod app;
pub mod events;
pub mod input;
pub mod render;

pub use app::App;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, stdout};

use crate::error::Result;
use crate::infrastructure::JournalRepository;
use events::{handle_event, EventResult};
use render::render;

/// Take over the terminal and run the shell until the user quits.
///
/// The terminal is restored on every exit path. An error from the shell
/// itself is reported ahead of any error from restoring.
pub fn run<R: JournalRepository>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
        let result = run_app(&mut terminal, app, event::read);
        result.and(terminal.show_cursor())
    });
    let restored = restore_terminal();

    result?;
    restored?;
    Ok(())
}

/// Leave raw mode and the alternate screen, attempting both even if one fails
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    raw.and(screen)
}

fn run_app<B, R, F>(terminal: &mut Terminal<B>, mut app: App<R>, mut next_event: F) -> io::Result<()>
where
    B: Backend,
    R: JournalRepository,
    F: FnMut() -> io::Result<Event>,
{
    tracing::info!(date = app.date(), "shell started");
    draw(terminal, &mut app)?;

    loop {
        match handle_event(&mut app, next_event()?) {
            EventResult::Quit => {
                tracing::info!("shell quit");
                return Ok(());
            }
            EventResult::NeedsRedraw => draw(terminal, &mut app)?,
            EventResult::Continue => {}
        }
    }
}

fn draw<B: Backend, R: JournalRepository>(terminal: &mut Terminal<B>, app: &mut App<R>) -> io::Result<()> {
    let size = terminal.size()?;
    app.set_viewport(Rect::new(0, 0, size.width, size.height));
    terminal.draw(|f| render(f, app))?;
    Ok(())
}
