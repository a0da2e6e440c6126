//! Progress Widget
//!
//! Stage checklist plus a gauge for the running analysis.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::theme::{Icons, Theme};
use crate::workflow::{ProgressState, StageSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageState {
    Pending,
    Active,
    Complete,
}

fn stage_state(index: usize, progress: ProgressState, analyzing: bool) -> StageState {
    if !analyzing {
        StageState::Pending
    } else if index < progress.stage_index {
        StageState::Complete
    } else if index == progress.stage_index {
        StageState::Active
    } else {
        StageState::Pending
    }
}

/// Render the progress indicator
pub fn render_progress(
    frame: &mut Frame,
    area: Rect,
    stages: &StageSequence,
    progress: ProgressState,
    analyzing: bool,
) {
    let block = Block::default()
        .title(" Analysis Progress ")
        .borders(Borders::ALL)
        .border_style(if analyzing {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(stage_line(stages, progress, analyzing)), rows[0]);

    let (percent, label) = if analyzing {
        let label = stages.label(progress.stage_index).unwrap_or_else(|| stages.first());
        (progress.percent.min(100), format!("{}% {}", progress.percent, label))
    } else {
        (0, "Waiting for an idea...".to_string())
    };

    let gauge = Gauge::default()
        .gauge_style(Theme::title())
        .percent(u16::from(percent))
        .label(Span::styled(label, Theme::text()));
    frame.render_widget(gauge, rows[1]);
}

/// One icon per stage, the active one followed by its label
fn stage_line(stages: &StageSequence, progress: ProgressState, analyzing: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, label) in stages.labels().iter().enumerate() {
        let (icon, style) = match stage_state(index, progress, analyzing) {
            StageState::Complete => (Icons::COMPLETE, Theme::complete()),
            StageState::Active => (Icons::ACTIVE, Theme::active()),
            StageState::Pending => (Icons::PENDING, Theme::pending()),
        };
        spans.push(Span::styled(format!("{} ", icon), style));
        if analyzing && index == progress.stage_index {
            spans.push(Span::styled(format!("{} ", label), style));
        }
    }
    Line::from(spans)
}
