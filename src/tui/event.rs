//! Event Handling
//!
//! Turns keyboard input and timer ticks into [`AppAction`]s.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Quit immediately (Ctrl+C)
    ForceQuit,
    /// Submit the idea, or open the analysis view from home
    Submit,
    /// Cycle between home and analysis views (Tab)
    SwitchView,
    /// Toggle help overlay
    ToggleHelp,
    /// Cancel a running analysis or close the help overlay
    Escape,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    /// Text input for the idea box
    Input(KeyEvent),
    /// Timer tick; drives the workflow and the hero animation
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::Receiver<AppAction>,
    _tx: mpsc::Sender<AppAction>,
}

impl EventHandler {
    /// Create a new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let tx_clone = tx.clone();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                let tick = tick_interval.tick();
                let crossterm_event = reader.next().fuse();

                tokio::select! {
                    _ = tick => {
                        if tx_clone.send(AppAction::Tick).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = crossterm_event => {
                        if let Some(action) = map_event(evt) {
                            if tx_clone.send(action).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Wait for the next action
    pub async fn next(&mut self) -> Option<AppAction> {
        self.rx.recv().await
    }
}

fn map_event(event: Event) -> Option<AppAction> {
    match event {
        Event::Key(key) => map_key_event(key),
        _ => None,
    }
}

/// Map a key event to an app action
pub fn map_key_event(key: KeyEvent) -> Option<AppAction> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(AppAction::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(AppAction::Quit),

        (KeyModifiers::NONE, code) | (KeyModifiers::SHIFT, code) => match code {
            KeyCode::Esc => Some(AppAction::Escape),
            KeyCode::Enter => Some(AppAction::Submit),
            KeyCode::F(1) => Some(AppAction::ToggleHelp),
            KeyCode::Tab | KeyCode::BackTab => Some(AppAction::SwitchView),

            KeyCode::Up => Some(AppAction::ScrollUp),
            KeyCode::Down => Some(AppAction::ScrollDown),
            KeyCode::PageUp => Some(AppAction::ScrollPageUp),
            KeyCode::PageDown => Some(AppAction::ScrollPageDown),

            _ => Some(AppAction::Input(key)),
        },

        _ => Some(AppAction::Input(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(AppAction::Quit)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppAction::ForceQuit)
        );
        assert_eq!(map_key_event(key(KeyCode::F(1), KeyModifiers::NONE)), Some(AppAction::ToggleHelp));
        assert_eq!(map_key_event(key(KeyCode::Tab, KeyModifiers::NONE)), Some(AppAction::SwitchView));
        assert_eq!(map_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Some(AppAction::Escape));
        assert_eq!(map_key_event(key(KeyCode::PageDown, KeyModifiers::NONE)), Some(AppAction::ScrollPageDown));
    }

    #[test]
    fn test_characters_are_input() {
        let k = key(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(k), Some(AppAction::Input(k)));
        let backspace = key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(map_key_event(backspace), Some(AppAction::Input(backspace)));
    }
}
