//! Routes events to their processor.

use tracing::{debug, info};

use crate::envelope::Envelope;
use crate::event::{Context, EventJson};
use crate::events::TypedEvent;

/// Lambda-style entry point.
///
/// The context is accepted for signature compatibility with serverless
/// runtimes and is not read by any processor.
pub fn handler(event: &EventJson, context: Option<&Context>) -> Envelope {
    let source = context
        .and_then(|ctx| ctx.get("source"))
        .and_then(|value| value.as_str())
        .unwrap_or("-");
    debug!(source, "handling event");

    let envelope = dispatch(event);
    if envelope.is_ok() {
        debug!(message = %envelope.message, "event processed");
    } else {
        info!(reason = ?envelope.errors, "event rejected");
    }
    envelope
}

/// Parses the event into its typed form and processes it.
///
/// Never panics: every failure is returned as an error envelope.
pub fn dispatch(event: &EventJson) -> Envelope {
    TypedEvent::parse(event)
        .inspect(|typed| debug!(event_type = %typed.kind(), "dispatching"))
        .map_or_else(Envelope::from, |typed| typed.process())
}
