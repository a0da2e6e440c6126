//! Theme and Styling
//!
//! Colours and styles for the TUI, and the mapping from report tones to
//! terminal colours.

use ratatui::style::{Color, Modifier, Style};

use crate::workflow::{MessageRole, Tone};

/// Application theme
pub struct Theme;

impl Theme {
    // === Palette ===

    /// Primary accent (indigo)
    pub const ACCENT: Color = Color::Rgb(99, 102, 241);
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
    pub const WARNING: Color = Color::Rgb(234, 179, 8);
    pub const ERROR: Color = Color::Rgb(239, 68, 68);
    pub const INFO: Color = Color::Rgb(59, 130, 246);

    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 229, 229);
    pub const TEXT_SECONDARY: Color = Color::Rgb(161, 161, 161);
    pub const TEXT_DIM: Color = Color::Rgb(82, 82, 82);

    pub const BORDER: Color = Color::Rgb(51, 51, 51);
    pub const BORDER_FOCUSED: Color = Color::Rgb(99, 102, 241);

    // === Styles ===

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::BORDER_FOCUSED)
    }

    pub fn shortcut_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Active/in-progress indicator
    pub fn active() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn complete() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn pending() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Speaker label for a conversation entry
    pub fn role(role: MessageRole) -> Style {
        let color = match role {
            MessageRole::User => Self::SUCCESS,
            MessageRole::Agent => Self::ACCENT,
            MessageRole::System => Self::WARNING,
            MessageRole::Error => Self::ERROR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn tone_color(tone: Tone) -> Color {
        match tone {
            Tone::Default => Self::TEXT_PRIMARY,
            Tone::Primary => Self::ACCENT,
            Tone::Muted => Self::TEXT_SECONDARY,
            Tone::Red => Self::ERROR,
            Tone::Yellow => Self::WARNING,
            Tone::Green => Self::SUCCESS,
            Tone::Blue => Self::INFO,
        }
    }

    pub fn tone(tone: Tone) -> Style {
        Style::default().fg(Self::tone_color(tone))
    }

    /// Filled badge, e.g. "High Priority"
    pub fn badge(tone: Tone) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::tone_color(tone))
            .add_modifier(Modifier::BOLD)
    }
}

/// Progress stage icons
pub struct Icons;

impl Icons {
    pub const COMPLETE: &'static str = "✓";
    pub const ACTIVE: &'static str = "●";
    pub const PENDING: &'static str = "○";
    pub const CURSOR: &'static str = "▌";
    pub const DOT: &'static str = "•";
    pub const SPINNER: [&'static str; 4] = ["◐", "◓", "◑", "◒"];
}
