//! Report Widget
//!
//! Lays out a [`RenderedReport`] as pre-wrapped terminal lines.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::wrap;
use crate::tui::theme::{Icons, Theme};
use crate::workflow::{Block, Item, RenderedReport, Section, Tag};

const INDENT: &str = "  ";

/// Lines for `report`, wrapped to `width` columns
pub fn report_lines(report: &RenderedReport, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines = Vec::new();
    for section in &report.sections {
        section_lines(section, width, &mut lines);
    }
    lines
}

fn section_lines(section: &Section, width: usize, out: &mut Vec<Line<'static>>) {
    if let Some(title) = &section.title {
        out.push(Line::from(Span::styled(
            title.clone(),
            Theme::title().add_modifier(Modifier::UNDERLINED),
        )));
    }
    if let Some(subtitle) = &section.subtitle {
        for line in wrap(subtitle, width) {
            out.push(Line::from(Span::styled(line, Theme::heading())));
        }
    }
    for block in &section.blocks {
        block_lines(block, width, out);
    }
    out.push(Line::from(""));
}

fn block_lines(block: &Block, width: usize, out: &mut Vec<Line<'static>>) {
    let tone = Theme::tone(block.tone);
    let body_width = width.saturating_sub(INDENT.len());

    if let Some(title) = &block.title {
        let mut spans = vec![Span::styled(title.clone(), tone.add_modifier(Modifier::BOLD))];
        if let Some(badge) = &block.badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", badge.label), Theme::badge(badge.tone)));
        }
        out.push(Line::from(spans));
    }

    if let Some(body) = &block.body {
        let style = if block.title.is_some() {
            Theme::text_secondary()
        } else {
            tone
        };
        for line in wrap(body, body_width) {
            out.push(Line::from(vec![Span::raw(INDENT), Span::styled(line, style)]));
        }
    }

    for item in &block.items {
        item_lines(item, body_width, out);
    }

    if !block.tags.is_empty() {
        let mut spans = vec![Span::raw(INDENT), Span::styled("Skills: ", Theme::text_dim())];
        spans.extend(tag_spans(&block.tags));
        out.push(Line::from(spans));
    }

    if let Some(footer) = &block.footer {
        for line in wrap(footer, body_width) {
            out.push(Line::from(vec![Span::raw(INDENT), Span::styled(line, Theme::text_dim())]));
        }
    }
}

fn item_lines(item: &Item, width: usize, out: &mut Vec<Line<'static>>) {
    let text = match &item.detail {
        Some(detail) => format!("{}: {}", item.text, detail),
        None => item.text.clone(),
    };

    let bullet = format!("{} ", Icons::DOT);
    for (i, line) in wrap(&text, width.saturating_sub(2)).into_iter().enumerate() {
        let lead = if i == 0 { bullet.clone() } else { "  ".to_string() };
        out.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(lead, Theme::text_dim()),
            Span::styled(line, Theme::text()),
        ]));
    }

    if !item.tags.is_empty() {
        let mut spans = vec![Span::raw(INDENT), Span::raw("  ")];
        spans.extend(tag_spans(&item.tags));
        out.push(Line::from(spans));
    }
}

fn tag_spans(tags: &[Tag]) -> Vec<Span<'static>> {
    tags.iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("[{}]", tag.label), Theme::tone(tag.tone)),
                Span::raw(" "),
            ]
        })
        .collect()
}
