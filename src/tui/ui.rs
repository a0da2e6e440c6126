//! UI Rendering
//!
//! Main UI layout and rendering logic for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets::{self, wrap};
use crate::workflow::{MessageContent, MessageRole, Tone};

const HEADER: u16 = 3;
const PROGRESS: u16 = 4;
const INPUT: u16 = 3;
const STATUS: u16 = 1;

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    match app.base_view() {
        View::Analyze => render_analyze(frame, app),
        _ => render_home(frame, app),
    }

    if app.view == View::Help {
        render_help(frame);
    }
}

/// Area the scrollable content is drawn into for `view`
pub fn content_area(view: View, area: Rect) -> Rect {
    let inner = |r: Rect| Block::default().borders(Borders::ALL).inner(r);
    match view {
        View::Analyze => inner(analyze_layout(area)[2]),
        _ => inner(home_layout(area)[1]),
    }
}

/// Lines of the scrollable content for `view` at `width` columns
pub fn content_lines(app: &App, view: View, width: u16) -> Vec<Line<'static>> {
    match view {
        View::Analyze => conversation_lines(app, width),
        _ => widgets::landing_lines(&app.landing, &app.hero_word, width),
    }
}

fn home_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER),
            Constraint::Min(5),
            Constraint::Length(STATUS),
        ])
        .split(area)
}

fn analyze_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER),
            Constraint::Length(PROGRESS),
            Constraint::Min(5),
            Constraint::Length(INPUT),
            Constraint::Length(STATUS),
        ])
        .split(area)
}

fn render_home(frame: &mut Frame, app: &App) {
    let chunks = home_layout(frame.area());

    render_header(frame, chunks[0], View::Home);

    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let lines = widgets::landing_lines(&app.landing, &app.hero_word, inner.width);
    render_scrolled(frame, inner, lines, app.scroll_offset);

    render_status_bar(frame, chunks[2], app);
}

fn render_analyze(frame: &mut Frame, app: &App) {
    let chunks = analyze_layout(frame.area());

    render_header(frame, chunks[0], View::Analyze);
    widgets::render_progress(
        frame,
        chunks[1],
        app.workflow.stages(),
        app.workflow.progress(),
        app.workflow.is_analyzing(),
    );
    render_messages(frame, chunks[2], app);
    render_input(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, view: View) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(format!(" {} ", label), Theme::badge(Tone::Primary))
        } else {
            Span::styled(format!(" {} ", label), Theme::text_secondary())
        }
    };

    let title = Line::from(vec![
        Span::styled("EntreSupport", Theme::title()),
        Span::styled("  ", Theme::text()),
        tab("Home", view == View::Home),
        Span::raw(" "),
        tab("Analyze", view == View::Analyze),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    frame.render_widget(header, area);
}

/// Conversation log as pre-wrapped lines
pub fn conversation_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let messages = app.workflow.messages();
    let mut lines: Vec<Line<'static>> = Vec::new();

    if messages.is_empty() {
        lines.push(Line::from(Span::styled(
            "Describe your startup idea below and press Enter. We'll research the market, \
             competitors, team and SWOT for you.",
            Theme::text_dim(),
        )));
        return lines;
    }

    let body_width = usize::from(width.saturating_sub(2));
    for message in messages {
        if message.is_loading() {
            let frame = Icons::SPINNER[(app.ticks as usize) % Icons::SPINNER.len()];
            let label = message.content.as_text().unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", frame), Theme::active()),
                Span::styled(label.to_string(), Theme::active()),
            ]));
            lines.push(Line::from(""));
            continue;
        }

        let speaker = match message.role {
            MessageRole::User => "You",
            MessageRole::Agent => "EntreSupport",
            MessageRole::System => "System",
            MessageRole::Error => "Error",
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", speaker),
            Theme::role(message.role),
        )));

        match &message.content {
            MessageContent::Text(text) => {
                let style = if message.role == MessageRole::Error {
                    Theme::error()
                } else {
                    Theme::text()
                };
                for line in wrap(text, body_width) {
                    lines.push(Line::from(vec![Span::raw("  "), Span::styled(line, style)]));
                }
            }
            MessageContent::Report(report) => {
                for line in widgets::report_lines(report, width.saturating_sub(2)) {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(line.spans);
                    lines.push(Line::from(spans));
                }
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

fn render_messages(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Conversation ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = conversation_lines(app, inner.width);
    render_scrolled(frame, inner, lines, app.scroll_offset);
}

/// Offsets past the end show the last page
fn render_scrolled(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, offset: u16) {
    let max = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(area.height);
    frame.render_widget(Paragraph::new(lines).scroll((offset.min(max), 0)), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let enabled = app.input_enabled();
    let block = Block::default()
        .title(if enabled {
            " Startup Idea "
        } else {
            " Startup Idea (analysis in progress, Esc to cancel) "
        })
        .borders(Borders::ALL)
        .border_style(if enabled {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.input, inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.workflow.is_analyzing() {
        Span::styled(
            format!("Analyzing... {}%", app.workflow.progress().percent),
            Theme::active(),
        )
    } else {
        Span::styled("Ready", Theme::text_secondary())
    };

    let shortcuts = [
        ("[Enter]", " Analyze "),
        ("[Tab]", " Switch view "),
        ("[Esc]", " Cancel "),
        ("[Ctrl+Q]", " Quit "),
        ("[F1]", " Help"),
    ]
    .into_iter()
    .flat_map(|(key, desc)| {
        [
            Span::styled(key, Theme::shortcut_key()),
            Span::styled(desc, Theme::shortcut_desc()),
        ]
    });

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let shortcut = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<13}", key), Theme::shortcut_key()),
            Span::styled(desc, Theme::text()),
        ])
    };

    let help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
        shortcut("Enter", "Analyze idea / open analysis"),
        shortcut("Tab", "Switch between Home and Analyze"),
        shortcut("Esc", "Cancel analysis / close help"),
        shortcut("↑/↓", "Scroll"),
        shortcut("PageUp/Down", "Scroll page"),
        shortcut("F1", "Toggle this help"),
        shortcut("Ctrl+Q", "Quit application"),
        shortcut("Ctrl+C", "Force quit"),
        Line::from(""),
        Line::from(Span::styled("Press Esc or F1 to close", Theme::text_dim())),
    ];

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
