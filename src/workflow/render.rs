//! Result Renderer
//!
//! Maps an [`AnalysisResult`] to a UI-neutral tree (section → block → item)
//! that presentation layers walk. Pure: same input, same tree, input untouched.

use serde::Serialize;

use crate::models::{AnalysisResult, Priority, TeamResource};

pub const INTRO: &str = "Based on comprehensive market research and AI-powered analysis, \
                         here's what I found about your startup idea:";

/// Semantic colour hint; presentation layers pick the actual colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Default,
    Primary,
    Muted,
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Intro,
    MarketOverview,
    Team,
    Swot,
    Sources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Item {
    fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            detail: None,
            tags: Vec::new(),
        }
    }
}

/// A card inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Block {
    fn titled(title: &str, tone: Tone) -> Self {
        Self {
            title: Some(title.to_string()),
            body: None,
            tone,
            badge: None,
            items: Vec::new(),
            tags: Vec::new(),
            footer: None,
        }
    }

    fn list(title: &str, tone: Tone, items: &[String]) -> Self {
        Self {
            items: items.iter().map(|s| Item::text(s)).collect(),
            ..Self::titled(title, tone)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub sections: Vec<Section>,
}

impl RenderedReport {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Plain-text rendering for logs and the headless CLI
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            if let Some(title) = &section.title {
                out.push_str(&format!("== {} ==\n", title));
            }
            if let Some(subtitle) = &section.subtitle {
                out.push_str(subtitle);
                out.push('\n');
            }
            for block in &section.blocks {
                if let Some(title) = &block.title {
                    match &block.badge {
                        Some(badge) => out.push_str(&format!("[{}] ({})\n", title, badge.label)),
                        None => out.push_str(&format!("[{}]\n", title)),
                    }
                }
                if let Some(body) = &block.body {
                    out.push_str(body);
                    out.push('\n');
                }
                for item in &block.items {
                    out.push_str(&format!("  • {}", item.text));
                    if let Some(detail) = &item.detail {
                        out.push_str(&format!(": {}", detail));
                    }
                    if !item.tags.is_empty() {
                        out.push_str(&format!(" [{}]", join_tags(&item.tags)));
                    }
                    out.push('\n');
                }
                if !block.tags.is_empty() {
                    out.push_str(&format!("  Skills: {}\n", join_tags(&block.tags)));
                }
                if let Some(footer) = &block.footer {
                    out.push_str(&format!("  {}\n", footer));
                }
            }
            out.push('\n');
        }
        out
    }
}

fn join_tags(tags: &[Tag]) -> String {
    tags.iter().map(|t| t.label.as_str()).collect::<Vec<_>>().join(", ")
}

pub fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Red,
        Priority::Medium => Tone::Yellow,
        Priority::Low => Tone::Green,
    }
}

/// Render an analysis result into display sections
pub fn render(result: &AnalysisResult) -> RenderedReport {
    RenderedReport {
        sections: vec![
            intro_section(),
            market_section(result),
            team_section(&result.team_resources),
            swot_section(result),
            sources_section(result),
        ],
    }
}

fn intro_section() -> Section {
    Section {
        kind: SectionKind::Intro,
        title: None,
        subtitle: None,
        blocks: vec![Block {
            title: None,
            body: Some(INTRO.to_string()),
            ..Block::titled("", Tone::Muted)
        }],
    }
}

fn market_section(result: &AnalysisResult) -> Section {
    let market = &result.market_research;

    let competitors = Block {
        items: market
            .competitors
            .iter()
            .map(|c| Item {
                text: c.name.clone(),
                detail: Some(c.description.clone()),
                tags: c
                    .strengths
                    .iter()
                    .map(|s| Tag {
                        label: s.clone(),
                        tone: Tone::Primary,
                    })
                    .collect(),
            })
            .collect(),
        ..Block::titled("Competitors", Tone::Default)
    };

    Section {
        kind: SectionKind::MarketOverview,
        title: Some("Market Overview".to_string()),
        subtitle: Some(format!("Market Size: {}", market.market_size.value)),
        blocks: vec![
            Block::list("Market Trends", Tone::Default, &market.trends),
            competitors,
        ],
    }
}

fn team_card(resource: &TeamResource) -> Block {
    Block {
        body: Some(resource.description.clone()),
        badge: Some(Tag {
            label: format!("{} Priority", resource.priority),
            tone: priority_tone(resource.priority),
        }),
        tags: resource
            .key_skills
            .iter()
            .map(|s| Tag {
                label: s.clone(),
                tone: Tone::Muted,
            })
            .collect(),
        footer: Some(format!("Estimated Salary: {}", resource.estimated_salary)),
        ..Block::titled(&resource.role, Tone::Default)
    }
}

fn team_section(resources: &[TeamResource]) -> Section {
    Section {
        kind: SectionKind::Team,
        title: Some("Required Team".to_string()),
        subtitle: None,
        blocks: resources.iter().map(team_card).collect(),
    }
}

fn swot_section(result: &AnalysisResult) -> Section {
    let swot = &result.swot_analysis;
    Section {
        kind: SectionKind::Swot,
        title: Some("SWOT Analysis".to_string()),
        subtitle: None,
        blocks: vec![
            Block::list("Strengths", Tone::Green, &swot.strengths),
            Block::list("Weaknesses", Tone::Red, &swot.weaknesses),
            Block::list("Opportunities", Tone::Blue, &swot.opportunities),
            Block::list("Threats", Tone::Yellow, &swot.threats),
        ],
    }
}

fn sources_section(result: &AnalysisResult) -> Section {
    Section {
        kind: SectionKind::Sources,
        title: None,
        subtitle: None,
        blocks: vec![Block::list(
            "Research Sources",
            Tone::Muted,
            &result.market_research.sources,
        )],
    }
}
