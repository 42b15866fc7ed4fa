//! Typed events produced by the validating parse step.
//!
//! Every field of a typed event has already passed its checks and been
//! normalized, so processors only compute derived values.

use crate::email::EmailAddress;
use crate::envelope::Envelope;
use crate::errors::Rejection;
use crate::event::{display_value, is_truthy, EventJson, EventObject};
use crate::policy::{Currency, EventKind, Plan};
use crate::processors::{payment, signup, upload};

/// Validated `USER_SIGNUP` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupEvent {
    /// User identifier.
    pub user_id: i64,
    /// Lowercased email address.
    pub email: EmailAddress,
    /// Requested plan.
    pub plan: Plan,
}

/// Validated `PAYMENT` event.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentEvent {
    /// Payment identifier, as received.
    pub payment_id: String,
    /// Paying user.
    pub user_id: i64,
    /// Positive amount, rounded to three decimals.
    pub amount: f64,
    /// Settlement currency.
    pub currency: Currency,
}

/// Validated `FILE_UPLOAD` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUploadEvent {
    /// Trimmed file name.
    pub file_name: String,
    /// Object size in bytes.
    pub size_bytes: u64,
    /// Lowercased bucket name.
    pub bucket: String,
    /// Lowercased uploader email.
    pub uploader: EmailAddress,
}

/// An event of one of the supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedEvent {
    /// `USER_SIGNUP`
    UserSignup(SignupEvent),
    /// `PAYMENT`
    Payment(PaymentEvent),
    /// `FILE_UPLOAD`
    FileUpload(FileUploadEvent),
}

impl TypedEvent {
    /// Parses and validates a JSON event.
    ///
    /// Inspects the `type` field to pick the event kind, then runs that
    /// kind's checks in their fixed order. The first failed check is
    /// returned.
    pub fn parse(event: &EventJson) -> Result<Self, Rejection> {
        let object = event.as_object().ok_or(Rejection::NotAnObject)?;
        match event_kind(object)? {
            EventKind::UserSignup => signup::parse(object).map(TypedEvent::UserSignup),
            EventKind::Payment => payment::parse(object).map(TypedEvent::Payment),
            EventKind::FileUpload => upload::parse(object).map(TypedEvent::FileUpload),
        }
    }

    /// Returns the kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            TypedEvent::UserSignup(_) => EventKind::UserSignup,
            TypedEvent::Payment(_) => EventKind::Payment,
            TypedEvent::FileUpload(_) => EventKind::FileUpload,
        }
    }

    /// Computes derived fields and wraps the result in a success envelope.
    pub fn process(&self) -> Envelope {
        match self {
            TypedEvent::UserSignup(event) => signup::process(event),
            TypedEvent::Payment(event) => payment::process(event),
            TypedEvent::FileUpload(event) => upload::process(event),
        }
    }
}

/// Reads the `type` discriminator of an event object.
pub fn event_kind(event: &EventObject) -> Result<EventKind, Rejection> {
    let raw = event
        .get("type")
        .filter(|value| is_truthy(value))
        .ok_or(Rejection::MissingType)?;

    raw.as_str()
        .and_then(|name| name.parse().ok())
        .ok_or_else(|| Rejection::UnsupportedType(display_value(raw)))
}
