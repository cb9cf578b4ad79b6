use crate::form::SignupForm;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Mount `form` in the terminal and run until the user quits.
///
/// Returns the form so callers can inspect the final state after the
/// terminal has been restored.
pub fn run(form: SignupForm) -> io::Result<SignupForm> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(form);
    let events = EventHandler::new();
    tracing::info!("terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next() {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Next draw picks up the new size
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            None => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!(submissions = app.submit_count(), "terminal UI stopped");
    Ok(app.into_form())
}
