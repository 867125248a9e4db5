//! Agent Inbox - chat client core for LangGraph-style agents
//!
//! Turns the streamed transcript of an agent thread into renderable state:
//! the thread state machine with optimistic submissions, and the flight
//! offer pipeline that extracts `search_offers` results, groups them by
//! flight and labels fare tiers.

pub mod agent;
pub mod config;
pub mod message;
pub mod offers;
pub mod thread;
pub mod transcript;
