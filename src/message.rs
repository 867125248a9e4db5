//! Transcript message types
//!
//! Mirrors the records the streaming transport delivers for a thread. Only
//! the fields the data layer reads are typed; everything else is dropped on
//! deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message type as reported by the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Human,
    Ai,
    Tool,
    System,
    /// Any other type the transport emits (e.g. `remove`)
    #[serde(untagged)]
    Other(String),
}

/// Message content: either plain text or a list of typed blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl MessageContent {
    /// Text view of the content. Block content concatenates its text blocks.
    pub fn as_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    ContentBlock::Other(_) => None,
                })
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

/// Content block inside a multi-part message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Text { text: String },
    /// Images, tool-use blocks and anything else the thread does not read
    Other(Value),
}

/// Tool invocation requested by an `ai` message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

/// A single transcript record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ThreadMessage {
    /// Human message with plain text content
    pub fn human(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            message_type: MessageType::Human,
            name: None,
            content: MessageContent::Text(text.into()),
            tool_calls: vec![],
            tool_call_id: None,
        }
    }

    /// AI message with plain text content
    pub fn ai(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            message_type: MessageType::Ai,
            name: None,
            content: MessageContent::Text(text.into()),
            tool_calls: vec![],
            tool_call_id: None,
        }
    }

    /// Tool response message
    pub fn tool(
        id: impl Into<String>,
        name: impl Into<String>,
        tool_call_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            message_type: MessageType::Tool,
            name: Some(name.into()),
            content: MessageContent::Text(content.into()),
            tool_calls: vec![],
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCallRef>) -> Self {
        self.tool_calls = tool_calls;
        self
    }

    pub fn is_ai(&self) -> bool {
        self.message_type == MessageType::Ai
    }

    pub fn is_tool(&self) -> bool {
        self.message_type == MessageType::Tool
    }

    /// Text view of the content
    pub fn text(&self) -> String {
        self.content.as_text()
    }

    /// Message id, or empty when the transport did not assign one
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
