//! Demo Analysis Fixture
//!
//! The canned "cat food delivery" report returned by the demo flow and the
//! demo `/api/analyze` endpoint, whatever idea was submitted.

use crate::models::{
    AnalysisResult, Competitor, MarketResearch, MarketSize, Priority, SwotAnalysis, TeamResource,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the demo analysis result
pub fn demo_analysis() -> AnalysisResult {
    AnalysisResult {
        market_research: MarketResearch {
            market_size: MarketSize {
                value: "$12.5B".to_string(),
                year: 2024,
                cagr: "8.2%".to_string(),
            },
            competitors: vec![
                Competitor {
                    name: "PawFresh Meals".to_string(),
                    description: "Direct competitor offering fresh cat food delivery".to_string(),
                    strengths: strings(&[
                        "Established brand",
                        "Wide delivery network",
                        "Premium packaging",
                    ]),
                },
                Competitor {
                    name: "Kitty's Kitchen".to_string(),
                    description: "Local cat food preparation service".to_string(),
                    strengths: strings(&["Personal touch", "Local ingredients", "Custom recipes"]),
                },
            ],
            trends: strings(&[
                "Growing pet humanization trend",
                "Increasing focus on pet health and nutrition",
                "Rising demand for natural and organic pet food",
                "Subscription-based pet food services gaining popularity",
            ]),
            sources: strings(&[
                "Pet Food Industry Report 2024",
                "Global Market Insights",
                "Consumer Pet Trends Survey",
            ]),
            error: None,
        },
        team_resources: vec![
            TeamResource {
                role: "Head Chef / Recipe Developer".to_string(),
                description: "Responsible for creating nutritionally balanced cat food recipes"
                    .to_string(),
                key_skills: strings(&[
                    "Pet nutrition expertise",
                    "Food safety certification",
                    "Recipe development",
                ]),
                estimated_salary: "$65,000 - $85,000".to_string(),
                priority: Priority::High,
                error: None,
            },
            TeamResource {
                role: "Operations Manager".to_string(),
                description: "Manages kitchen operations and delivery logistics".to_string(),
                key_skills: strings(&[
                    "Food service management",
                    "Supply chain",
                    "Team leadership",
                ]),
                estimated_salary: "$55,000 - $75,000".to_string(),
                priority: Priority::High,
                error: None,
            },
            TeamResource {
                role: "Veterinary Consultant".to_string(),
                description: "Ensures recipes meet feline nutritional requirements".to_string(),
                key_skills: strings(&["Veterinary license", "Feline nutrition", "Food safety"]),
                estimated_salary: "$40,000 - $60,000 (Part-time)".to_string(),
                priority: Priority::Medium,
                error: None,
            },
        ],
        swot_analysis: SwotAnalysis {
            strengths: strings(&[
                "Personalized approach to cat nutrition",
                "Fresh, human-grade ingredients",
                "Transparent recipe formulation",
                "Home delivery convenience",
            ]),
            weaknesses: strings(&[
                "Higher cost compared to commercial cat food",
                "Limited shelf life of fresh products",
                "Initial kitchen setup costs",
                "Need for specialized storage and delivery",
            ]),
            opportunities: strings(&[
                "Growing pet food market",
                "Increasing pet parent spending",
                "Expansion to multiple cities",
                "Partnership with veterinarians",
            ]),
            threats: strings(&[
                "Strict food safety regulations",
                "Competition from large pet food companies",
                "Rising ingredient costs",
                "Customer retention challenges",
            ]),
            error: None,
        },
    }
}
