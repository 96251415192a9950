//! Key handling.
//!
//! The only interaction is quitting. Keys are read on a blocking worker so
//! the tick loop never waits on the terminal.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::oneshot;
use tracing::warn;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Watch the terminal for a quit key.
///
/// The receiver resolves once a quit key is pressed, or with an error if
/// reading terminal events fails. Dropping the receiver stops the worker.
/// Must be called from inside a tokio runtime.
pub fn spawn_quit_listener() -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => {}
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if should_quit(key) => {
                        let _ = tx.send(());
                        return;
                    }
                    Ok(_) => {}
                    Err(err) => {
                        warn!(error = %err, "failed to read terminal event");
                        return;
                    }
                },
                Err(err) => {
                    warn!(error = %err, "failed to poll terminal events");
                    return;
                }
            }
        }
    });
    rx
}
