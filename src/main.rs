//! inbox-render - render a saved thread transcript as view JSON
//!
//! Usage: `inbox-render [transcript.json]`. Reads stdin when no path is
//! given and prints the derived thread view to stdout.

use agent_inbox::config::InboxConfig;
use agent_inbox::offers::ExpansionState;
use agent_inbox::thread::{transition, ThreadContext, ThreadEvent, ThreadState, ThreadView};
use agent_inbox::transcript::{load_transcript, parse_transcript};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_inbox=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = InboxConfig::from_env();
    let context = ThreadContext::from_config(&config);
    tracing::info!(
        agent = %context.profile.kind,
        hide_tool_calls = context.hide_tool_calls,
        "Configuration loaded"
    );

    let messages = match std::env::args().nth(1) {
        Some(path) => load_transcript(path)?,
        None => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            parse_transcript(&json)?
        }
    };

    let result = transition(&ThreadState::new(), &context, ThreadEvent::StreamValues { messages })?;
    let view = ThreadView::build(&result.new_state, &context, &ExpansionState::new());

    tracing::info!(
        messages = view.messages.len(),
        offer_groups = view.offer_groups.len(),
        fallbacks = view.offer_fallbacks.len(),
        "Rendered thread"
    );
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
