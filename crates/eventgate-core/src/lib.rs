//! Validation, normalization and routing of serverless-style events.
//!
//! This crate provides:
//! - A Lambda-style [`handler`] entry point taking an event and an optional context
//! - Typed events produced by a validating parse step ([`TypedEvent::parse`])
//! - Per-kind processors for user signups, payments and file uploads
//! - The uniform [`Envelope`] returned by every code path
//!
//! Core invariants:
//! - Every call is stateless; the same event always yields the same envelope
//! - Failures are values: a rejected event produces an error envelope, never a panic
//! - The first failed check wins; an error envelope carries exactly one message
//!
//! ## Quick Start
//!
//! ```rust
//! use eventgate_core::{handler, Status};
//! use serde_json::json;
//!
//! let event = json!({
//!     "type": "USER_SIGNUP",
//!     "user_id": 1,
//!     "email": "A@B.COM",
//!     "plan": "PRO"
//! });
//!
//! let envelope = handler(&event, None);
//! assert_eq!(envelope.status, Status::Ok);
//! assert_eq!(envelope.message, "Signup processed");
//! ```

#![deny(missing_docs)]

/// Dispatcher and handler entry point.
pub mod dispatcher;
/// Email-shape validation.
pub mod email;
/// Response envelope types and builders.
pub mod envelope;
/// Rejection reasons reported in error envelopes.
pub mod errors;
/// Untyped event and context aliases plus field accessors.
pub mod event;
/// Typed events produced by the validating parse step.
pub mod events;
/// Process-wide policy constants and enumerations.
pub mod policy;
/// Per-kind processors.
pub mod processors;
/// Decimal rounding for monetary amounts.
pub mod rounding;
/// Validation errors for shaped identifiers.
pub mod validation;

pub use dispatcher::{dispatch, handler};
pub use email::{is_email, EmailAddress};
pub use envelope::{Envelope, EventData, FileUploadData, PaymentData, SignupData, Status};
pub use errors::Rejection;
pub use event::{Context, EventJson};
pub use events::{FileUploadEvent, PaymentEvent, SignupEvent, TypedEvent};
pub use policy::{Currency, EventKind, Plan, StorageClass};
pub use rounding::round_half_even;
pub use validation::ValidationError;
