//! Application State
//!
//! Contains the main application state and logic for the TUI.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::KeyEvent;
use tracing::{debug, info};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::landing::{landing_page, LandingPage, Typewriter};
use crate::source::AnalysisSource;
use crate::tui::event::AppAction;
use crate::workflow::{AnalysisWorkflow, SubmitOutcome};

const PLACEHOLDER: &str = "Describe your startup idea...";
const PAGE: u16 = 10;

/// Current view/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Analyze,
    Help,
}

/// Main application state
pub struct App {
    pub config: Config,

    // UI State
    pub view: View,
    /// View to return to when help closes
    pub previous_view: View,
    pub should_quit: bool,
    pub scroll_offset: u16,
    pub max_scroll: u16,
    pub ticks: u64,

    // Analysis
    pub workflow: AnalysisWorkflow,
    pub input: TextArea<'static>,

    // Home
    pub landing: LandingPage,
    pub hero_word: String,
    typewriter: Option<Typewriter>,
    next_keystroke: Instant,
}

impl App {
    pub fn new(config: Config, source: Arc<dyn AnalysisSource>) -> Self {
        let workflow = AnalysisWorkflow::new(source, &config.analysis);
        let landing = landing_page();
        let typewriter = landing.typewriter();
        let next_keystroke = Instant::now()
            + typewriter
                .as_ref()
                .map(Typewriter::initial_delay)
                .unwrap_or_default();

        Self {
            config,
            view: View::Home,
            previous_view: View::Home,
            should_quit: false,
            scroll_offset: 0,
            max_scroll: 0,
            ticks: 0,
            workflow,
            input: new_input(),
            landing,
            hero_word: String::new(),
            typewriter,
            next_keystroke,
        }
    }

    /// View drawn underneath the help overlay
    pub fn base_view(&self) -> View {
        match self.view {
            View::Help => self.previous_view,
            other => other,
        }
    }

    /// Whether the idea box accepts keystrokes
    pub fn input_enabled(&self) -> bool {
        self.view == View::Analyze && !self.workflow.is_analyzing()
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::Submit => match self.view {
                View::Home => self.show(View::Analyze),
                View::Analyze => self.submit_idea(),
                View::Help => self.close_help(),
            },
            AppAction::SwitchView => match self.view {
                View::Home => self.show(View::Analyze),
                View::Analyze => self.show(View::Home),
                View::Help => self.close_help(),
            },
            AppAction::ToggleHelp => {
                if self.view == View::Help {
                    self.close_help();
                } else {
                    self.previous_view = self.view;
                    self.view = View::Help;
                }
            }
            AppAction::Escape => match self.view {
                View::Help => self.close_help(),
                View::Analyze if self.workflow.is_analyzing() => {
                    self.workflow.stop();
                }
                _ => {}
            },
            AppAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppAction::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1).min(self.max_scroll);
            }
            AppAction::ScrollPageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE);
            }
            AppAction::ScrollPageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(PAGE).min(self.max_scroll);
            }
            AppAction::Input(key) => self.handle_input(key),
            AppAction::Tick => self.on_tick(),
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if self.input_enabled() {
            self.input.input(key);
        }
    }

    fn submit_idea(&mut self) {
        if self.workflow.is_analyzing() {
            return;
        }

        let idea = self.input.lines().join("\n");
        match self.workflow.submit(&idea) {
            SubmitOutcome::Started(run) => {
                info!(run, "Idea submitted from TUI");
                self.input = new_input();
                self.scroll_to_bottom();
            }
            outcome => debug!(?outcome, "Submission ignored"),
        }
    }

    fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);

        if self.workflow.poll_events() > 0 {
            self.scroll_to_bottom();
        }

        if let Some(typewriter) = self.typewriter.as_mut() {
            let now = Instant::now();
            if now >= self.next_keystroke {
                let (text, delay) = typewriter.step();
                self.hero_word = text;
                self.next_keystroke = now + delay;
            }
        }
    }

    fn show(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.scroll_offset = 0;
            self.max_scroll = 0;
            if view == View::Analyze {
                self.scroll_to_bottom();
            }
        }
    }

    fn close_help(&mut self) {
        self.view = self.previous_view;
    }

    /// Follow the conversation; clamped on the next bounds update
    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    /// Update max scroll based on content
    pub fn update_scroll_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.max_scroll = content_height.saturating_sub(viewport_height);
        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
        }
    }
}

fn new_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(PLACEHOLDER);
    input
}
