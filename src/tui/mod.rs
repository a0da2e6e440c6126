//! Terminal User Interface Module
//!
//! Home page and analysis chat for EntreSupport, built with Ratatui.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │          EntreSupport   [ Home ]  [ Analyze ]                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─ Analysis Progress ─────────────────────────────────────┐    │
//! │  │ ✓ ✓ ● Identifying market trends... ○ ○ ○                │    │
//! │  │ ██████████████░░░░░░░░░░░░░░ 45%                         │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │  ┌─ Conversation ──────────────────────────────────────────┐    │
//! │  │  You: cat food delivery                                  │    │
//! │  │  ◐ Identifying market trends...                          │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │  ┌─ Startup Idea ──────────────────────────────────────────┐    │
//! │  │ > Describe your startup idea...                          │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │  [Enter] Analyze | [Tab] Switch view | [Esc] Cancel | [F1] Help │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, View};
pub use event::{AppAction, EventHandler};

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info};

use crate::config::Config;
use crate::source::AnalysisSource;

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(50);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run(config: Config, source: Arc<dyn AnalysisSource>) -> anyhow::Result<()> {
    info!(source = source.name(), "Starting TUI mode");

    let mut terminal = init_terminal()?;
    let mut app = App::new(config, source);
    let mut events = EventHandler::new(TICK_RATE);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> anyhow::Result<()> {
    while !app.should_quit {
        let size = terminal.size()?;
        let view = app.base_view();
        let viewport = ui::content_area(view, Rect::new(0, 0, size.width, size.height));
        let content = ui::content_lines(app, view, viewport.width).len();
        app.update_scroll_bounds(
            u16::try_from(content).unwrap_or(u16::MAX),
            viewport.height,
        );

        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next().await {
            Some(action) => app.handle_action(action),
            None => break,
        }
    }

    app.workflow.stop();
    info!("TUI exited normally");
    Ok(())
}
