//! Landing Widget
//!
//! Home view: hero with the typewriter headline, stats, features, mentors,
//! networking, knowledge base and the call to action.

use ratatui::{
    layout::Alignment,
    style::Modifier,
    text::{Line, Span},
};

use super::wrap;
use crate::landing::LandingPage;
use crate::tui::theme::{Icons, Theme};
use crate::workflow::Tone;

/// Lines for the home view. `typed` is the typewriter's visible text.
pub fn landing_lines(page: &LandingPage, typed: &str, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines = Vec::new();
    let hero = &page.hero;

    lines.push(centered(Span::styled(format!(" {} ", hero.badge), Theme::title())));
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled(format!("{} ", hero.headline_prefix), Theme::heading()),
            Span::styled(typed.to_string(), Theme::title()),
            Span::styled(Icons::CURSOR, Theme::title()),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(centered(Span::styled(hero.headline_suffix, Theme::heading())));
    lines.push(Line::from(""));
    for line in wrap(hero.tagline, width) {
        lines.push(centered(Span::styled(line, Theme::text_secondary())));
    }
    lines.push(Line::from(""));

    let stats: Vec<Span> = hero
        .stats
        .iter()
        .flat_map(|stat| {
            [
                Span::styled(stat.value, Theme::heading()),
                Span::styled(format!(" {}   ", stat.label), Theme::text_dim()),
            ]
        })
        .collect();
    lines.push(Line::from(stats).alignment(Alignment::Center));
    lines.push(Line::from(""));

    heading(&mut lines, "Everything You Need to Succeed");
    for feature in &page.features {
        card(&mut lines, feature.title, None, feature.description, width);
    }

    heading(&mut lines, "Mentorship");
    for mentor in &page.mentors {
        let meta = format!(
            "{} at {} · {} · {:.1} ({} reviews)",
            mentor.role, mentor.company, mentor.availability, mentor.rating, mentor.reviews
        );
        card(&mut lines, mentor.name, Some(meta), mentor.bio, width);
        tags(&mut lines, &mentor.expertise);
    }

    heading(&mut lines, "Networking Hub");
    for profile in &page.profiles {
        let meta = format!("{} at {} · {}", profile.role, profile.company, profile.industry);
        card(&mut lines, profile.name, Some(meta), profile.bio, width);
        tags(&mut lines, &profile.skills);
    }
    for event in &page.events {
        let meta = format!(
            "{} · {} {} · {} attendees",
            event.category, event.date, event.time, event.attendees
        );
        card(&mut lines, event.title, Some(meta), event.description, width);
    }

    heading(&mut lines, "Knowledge Base");
    for article in &page.articles {
        let meta = format!(
            "{} · {}, {} · {} · {}",
            article.category, article.author, article.author_role, article.date, article.read_time
        );
        card(&mut lines, article.title, Some(meta), article.summary, width);
    }

    let cta = &page.call_to_action;
    lines.push(centered(Span::styled(format!(" {} ", cta.badge), Theme::title())));
    lines.push(centered(Span::styled(cta.title, Theme::heading())));
    for line in wrap(cta.body, width) {
        lines.push(centered(Span::styled(line, Theme::text_secondary())));
    }
    lines.push(
        Line::from(vec![
            Span::styled("[Enter] ", Theme::shortcut_key()),
            Span::styled(cta.primary_action, Theme::text()),
        ])
        .alignment(Alignment::Center),
    );

    lines
}

fn centered(span: Span<'static>) -> Line<'static> {
    Line::from(span).alignment(Alignment::Center)
}

fn heading(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        title,
        Theme::title().add_modifier(Modifier::UNDERLINED),
    )));
}

fn card(
    lines: &mut Vec<Line<'static>>,
    title: &'static str,
    meta: Option<String>,
    body: &str,
    width: usize,
) {
    lines.push(Line::from(Span::styled(title, Theme::heading())));
    if let Some(meta) = meta {
        for line in wrap(&meta, width.saturating_sub(2)) {
            lines.push(Line::from(vec![Span::raw("  "), Span::styled(line, Theme::text_dim())]));
        }
    }
    for line in wrap(body, width.saturating_sub(2)) {
        lines.push(Line::from(vec![Span::raw("  "), Span::styled(line, Theme::text_secondary())]));
    }
    lines.push(Line::from(""));
}

fn tags(lines: &mut Vec<Line<'static>>, labels: &[&'static str]) {
    // Attach to the card above, before its spacer
    let spacer = lines.pop();
    let mut spans = vec![Span::raw("  ")];
    for label in labels {
        spans.push(Span::styled(format!("[{}] ", label), Theme::tone(Tone::Primary)));
    }
    lines.push(Line::from(spans));
    lines.extend(spacer);
}
