//! Deployment configuration read from the environment

use crate::agent::AgentProfile;

/// Environment variable naming the agent deployment
pub const ASSISTANT_ID_VAR: &str = "ASSISTANT_ID";
/// Name the web client build uses for the same setting
pub const PUBLIC_ASSISTANT_ID_VAR: &str = "NEXT_PUBLIC_ASSISTANT_ID";
/// Whether tool messages are hidden in the thread by default
pub const HIDE_TOOL_CALLS_VAR: &str = "INBOX_HIDE_TOOL_CALLS";

/// Configuration for the inbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxConfig {
    /// Agent deployment key, e.g. `flight_booking_agent`
    pub assistant_id: Option<String>,
    pub hide_tool_calls: bool,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            assistant_id: None,
            hide_tool_calls: true,
        }
    }
}

impl InboxConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let assistant_id = lookup(ASSISTANT_ID_VAR)
            .or_else(|| lookup(PUBLIC_ASSISTANT_ID_VAR))
            .filter(|id| !id.trim().is_empty());

        let hide_tool_calls = match lookup(HIDE_TOOL_CALLS_VAR) {
            None => true,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    var = HIDE_TOOL_CALLS_VAR,
                    value = %raw,
                    "Ignoring unrecognized boolean, using default"
                );
                true
            }),
        };

        Self {
            assistant_id,
            hide_tool_calls,
        }
    }

    /// Resolve the agent profile for this deployment
    pub fn profile(&self) -> AgentProfile {
        AgentProfile::from_key(self.assistant_id.as_deref().unwrap_or(""))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
