//! Per-agent branding and prompt configuration
//!
//! The deployment is built for one agent type. Its profile is resolved once
//! from configuration and handed to the thread by reference.

mod profiles;

pub use profiles::profile_for;

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// Icon used when an agent type has no dedicated icon
pub const DEFAULT_ICON: &str = "Bot";

/// Known agent deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    FlightBooking,
    Writing,
    FinanceAdvisor,
    TravelPlanner,
    /// Unknown or unset agent key
    Generic,
}

impl AgentKind {
    /// Map a deployment key (e.g. `flight_booking_agent`) to a kind
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "flight_booking_agent" => AgentKind::FlightBooking,
            "writing_agent" => AgentKind::Writing,
            "finance_advisor_agent" => AgentKind::FinanceAdvisor,
            "travel_planner_agent" => AgentKind::TravelPlanner,
            _ => AgentKind::Generic,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AgentKind::FlightBooking => "flight_booking_agent",
            AgentKind::Writing => "writing_agent",
            AgentKind::FinanceAdvisor => "finance_advisor_agent",
            AgentKind::TravelPlanner => "travel_planner_agent",
            AgentKind::Generic => "",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Generic => write!(f, "generic"),
            other => write!(f, "{}", other.key()),
        }
    }
}

/// Quick-start prompt shown before the chat starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PromptButton {
    pub label: String,
    pub prompt: String,
}

/// Background gradient stops (CSS colors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Gradient {
    pub from: String,
    pub via: String,
    pub to: String,
}

/// Branding and prompts for one agent deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AgentProfile {
    #[serde(skip)]
    #[ts(skip)]
    pub kind: AgentKind,
    /// Landing heading
    pub title: String,
    /// Landing description; may contain line breaks
    pub description: String,
    /// Heading shown in the thread header once the chat starts
    pub head_heading: String,
    /// Icon name from the client's icon set
    pub icon: String,
    pub background: Gradient,
    pub prompt_buttons: Vec<PromptButton>,
}

impl AgentProfile {
    /// Resolve the profile for a deployment key
    pub fn from_key(key: &str) -> Self {
        profile_for(AgentKind::from_key(key))
    }
}
