//! Landing Content
//!
//! Static sample data behind the home view and `GET /api/landing`.

pub mod typewriter;

use serde::Serialize;

pub use typewriter::Typewriter;

pub const TYPEWRITER_WORDS: [&str; 4] = ["entrepreneurs", "startups", "innovators", "founders"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub mentors: Vec<Mentor>,
    pub profiles: Vec<Profile>,
    pub events: Vec<NetworkingEvent>,
    pub articles: Vec<Article>,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub badge: &'static str,
    pub headline_prefix: &'static str,
    pub headline_suffix: &'static str,
    pub typewriter_words: Vec<&'static str>,
    pub tagline: &'static str,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub expertise: Vec<&'static str>,
    pub availability: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub industry: &'static str,
    pub skills: Vec<&'static str>,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NetworkingEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub description: &'static str,
    pub attendees: u32,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    pub author_role: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub badge: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

impl LandingPage {
    pub fn typewriter(&self) -> Option<Typewriter> {
        Typewriter::new(&self.hero.typewriter_words)
    }
}

pub fn landing_page() -> LandingPage {
    LandingPage {
        hero: hero(),
        features: features(),
        mentors: mentors(),
        profiles: profiles(),
        events: events(),
        articles: articles(),
        call_to_action: CallToAction {
            badge: "Get Started Today",
            title: "Ready to Transform Your Entrepreneurial Journey?",
            body: "Join thousands of founders who are accelerating their growth, making valuable \
                   connections, and accessing the knowledge they need to succeed.",
            primary_action: "Analyze Your Startup",
            secondary_action: "Schedule a Demo",
        },
    }
}

fn hero() -> Hero {
    Hero {
        badge: "The Ultimate Platform for Entrepreneurs",
        headline_prefix: "Empowering",
        headline_suffix: "to succeed together",
        typewriter_words: TYPEWRITER_WORDS.to_vec(),
        tagline: "Connect with mentors, find collaborators, and access the resources you need \
                  through our AI-powered entrepreneurial ecosystem.",
        stats: vec![
            Stat { value: "10K+", label: "Entrepreneurs" },
            Stat { value: "1.5K+", label: "Mentors" },
            Stat { value: "92%", label: "Success Rate" },
            Stat { value: "24/7", label: "Support" },
        ],
    }
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "AI-Powered Mentor Matching",
            description: "Our intelligent algorithm matches you with mentors who have the specific \
                          expertise you need at your current stage.",
            icon: "sparkles",
        },
        Feature {
            title: "Smart Networking",
            description: "Connect with the right people through our AI-driven recommendation system \
                          based on mutual interests and goals.",
            icon: "users",
        },
        Feature {
            title: "Personalized Knowledge",
            description: "Access a curated library of resources tailored to your industry, business \
                          stage, and specific challenges.",
            icon: "book",
        },
        Feature {
            title: "Expert Webinars",
            description: "Attend live and on-demand webinars from industry leaders covering the \
                          latest trends and strategies.",
            icon: "award",
        },
        Feature {
            title: "Founder Community",
            description: "Join discussions with fellow entrepreneurs to share experiences, get \
                          advice, and build lasting relationships.",
            icon: "message",
        },
        Feature {
            title: "Virtual Events",
            description: "Participate in exclusive networking events, pitch competitions, and \
                          workshops from anywhere in the world.",
            icon: "calendar",
        },
    ]
}

fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            name: "Sarah Johnson",
            role: "CEO & Founder",
            company: "GrowthMentor Inc.",
            expertise: vec!["Business Strategy", "Fundraising", "Marketing"],
            availability: "10 hrs/week",
            rating: 4.9,
            reviews: 124,
            bio: "Former VP at Fortune 500 company with 15+ years of experience helping startups \
                  scale and raise capital.",
        },
        Mentor {
            name: "Michael Chen",
            role: "Tech Advisor",
            company: "TechStars",
            expertise: vec!["Software Development", "Product Management", "AI"],
            availability: "5 hrs/week",
            rating: 4.7,
            reviews: 98,
            bio: "Ex-Google engineer with deep expertise in AI and machine learning. Helped 20+ \
                  startups build scalable products.",
        },
        Mentor {
            name: "Elena Rodriguez",
            role: "Marketing Director",
            company: "Growth Hackers",
            expertise: vec!["Digital Marketing", "Social Media", "SEO", "Content Strategy"],
            availability: "8 hrs/week",
            rating: 4.8,
            reviews: 87,
            bio: "Digital marketing wizard who has helped startups grow from zero to millions in \
                  revenue through innovative strategies.",
        },
    ]
}

fn profiles() -> Vec<Profile> {
    vec![
        Profile {
            name: "David Park",
            role: "Startup Founder",
            company: "InnovateTech",
            industry: "SaaS",
            skills: vec!["Project Management", "Team Leadership", "Business Development"],
            bio: "Building the next generation of project management tools. Looking to connect \
                  with fellow founders and potential investors.",
        },
        Profile {
            name: "Jessica Wong",
            role: "Angel Investor",
            company: "Horizon Ventures",
            industry: "Fintech",
            skills: vec!["Investment Strategy", "Financial Analysis", "Business Scaling"],
            bio: "Angel investor looking for promising early-stage startups in fintech and health \
                  tech spaces. Previously founded and sold two successful companies.",
        },
    ]
}

fn events() -> Vec<NetworkingEvent> {
    vec![
        NetworkingEvent {
            title: "Startup Pitch Night",
            date: "Oct 15, 2023",
            time: "6:00 PM - 9:00 PM",
            description: "Present your startup idea to a panel of investors and get valuable \
                          feedback. Network with fellow entrepreneurs.",
            attendees: 120,
            category: "Pitch",
        },
        NetworkingEvent {
            title: "Tech Founders Meetup",
            date: "Oct 22, 2023",
            time: "5:30 PM - 7:30 PM",
            description: "Monthly gathering of tech founders to share experiences, challenges and \
                          opportunities in the industry.",
            attendees: 85,
            category: "Meetup",
        },
    ]
}

fn articles() -> Vec<Article> {
    vec![
        Article {
            title: "Securing Your First Round of Funding: A Complete Guide",
            category: "Funding",
            author: "Alex Morgan",
            author_role: "VC Partner",
            date: "Sep 28, 2023",
            read_time: "8 min read",
            summary: "Learn the essential steps to prepare your startup for investment, from \
                      crafting the perfect pitch deck to navigating term sheets.",
        },
        Article {
            title: "Building a Minimum Viable Product That Customers Actually Want",
            category: "Product Development",
            author: "Sophia Lee",
            author_role: "Product Strategist",
            date: "Oct 5, 2023",
            read_time: "6 min read",
            summary: "Avoid the common pitfalls of MVP development and learn how to create a \
                      product that genuinely addresses customer pain points.",
        },
        Article {
            title: "The Legal Essentials Every Startup Founder Should Know",
            category: "Legal",
            author: "James Wilson",
            author_role: "Startup Attorney",
            date: "Oct 10, 2023",
            read_time: "10 min read",
            summary: "Navigate the complex legal landscape of starting a business, from \
                      incorporation to intellectual property protection.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_counts() {
        let page = landing_page();
        assert_eq!(page.hero.stats.len(), 4);
        assert_eq!(page.features.len(), 6);
        assert_eq!(page.mentors.len(), 3);
        assert_eq!(page.profiles.len(), 2);
        assert_eq!(page.events.len(), 2);
        assert_eq!(page.articles.len(), 3);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(landing_page()).unwrap();
        assert_eq!(json["hero"]["typewriterWords"][0], "entrepreneurs");
        assert_eq!(json["articles"][0]["readTime"], "8 min read");
        assert_eq!(json["callToAction"]["primaryAction"], "Analyze Your Startup");
        assert_eq!(json["mentors"][1]["reviews"], 98);
    }

    #[test]
    fn test_typewriter_starts_on_first_word() {
        let mut tw = landing_page().typewriter().unwrap();
        assert_eq!(tw.step().0, "e");
    }
}
