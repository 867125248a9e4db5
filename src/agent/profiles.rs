//! Built-in agent profiles

use super::{AgentKind, AgentProfile, Gradient, PromptButton, DEFAULT_ICON};

const FLIGHT_PROMPTS: &[(&str, &str)] = &[
    ("Book a flight", "Hi, I want to book a flight"),
    ("Find cheapest fares", "Find me the cheapest flight from New York to London next month"),
    ("Business class", "Show me business class flights from Delhi to Singapore this weekend"),
];

const WRITING_PROMPTS: &[(&str, &str)] = &[
    ("Write an article", "I need help writing an article"),
    ("Outline a draft", "Help me outline a blog post about remote work"),
    ("Polish my text", "Proofread and polish the paragraph I paste next"),
];

const FINANCE_PROMPTS: &[(&str, &str)] = &[
    ("Monthly budget", "Help me build a monthly budget"),
    ("Savings plan", "How much should I save each month for an emergency fund?"),
    ("Reduce spending", "Suggest ways to cut my monthly expenses"),
];

const TRAVEL_PROMPTS: &[(&str, &str)] = &[
    ("Plan a trip", "Plan a trip to Goa for 3 days"),
    ("Weekend getaway", "Suggest a weekend getaway within driving distance"),
    ("Things to do", "What are the must-see sights in Lisbon?"),
];

const NO_PROMPTS: &[(&str, &str)] = &[];

fn buttons(pairs: &[(&str, &str)]) -> Vec<PromptButton> {
    pairs
        .iter()
        .map(|(label, prompt)| PromptButton {
            label: (*label).to_string(),
            prompt: (*prompt).to_string(),
        })
        .collect()
}

fn sky_gradient() -> Gradient {
    Gradient {
        from: "#dceefb".to_string(),
        via: "#bcdff5".to_string(),
        to: "#a3d8f4".to_string(),
    }
}

/// Profile for an agent kind
pub fn profile_for(kind: AgentKind) -> AgentProfile {
    let (title, description, icon, prompts): (&str, &str, &str, &[(&str, &str)]) = match kind {
        AgentKind::FlightBooking => (
            "Flight Booking Agent",
            "Book your next flight in just 4 easy steps: search available flights, choose the one that fits you best, enter your details, and complete the payment.\nSay \"Hi, I want to book a flight\" to get started!",
            "Plane",
            FLIGHT_PROMPTS,
        ),
        AgentKind::Writing => (
            "Writing Agent",
            "Think of this as your personal co-writer! From outlining to polishing final drafts, this writing agent supports every part of the writing process. Say \"I need help writing an article\" to get started.",
            "PenLine",
            WRITING_PROMPTS,
        ),
        AgentKind::FinanceAdvisor => (
            "Finance Advisor",
            "Manage your money smarter — from budgeting to saving, this agent helps you plan your financial future.\nSay \"Help me build a monthly budget\" to get started.",
            "PiggyBank",
            FINANCE_PROMPTS,
        ),
        AgentKind::TravelPlanner => (
            "Travel Planner",
            "Plan dream vacations or weekend getaways with ease. This agent finds destinations, creates itineraries, and suggests activities.\nSay \"Plan a trip to Goa for 3 days\" to begin.",
            "Map",
            TRAVEL_PROMPTS,
        ),
        AgentKind::Generic => ("", "", DEFAULT_ICON, NO_PROMPTS),
    };

    AgentProfile {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        head_heading: title.to_string(),
        icon: icon.to_string(),
        background: sky_gradient(),
        prompt_buttons: buttons(prompts),
    }
}
