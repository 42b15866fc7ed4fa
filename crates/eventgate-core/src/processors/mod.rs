//! Per-kind processors.
//!
//! Each processor exposes the same two steps:
//! - `parse`: presence checks, then type and value checks, then normalization
//! - `process`: derived fields for an already-validated event
//!
//! [`TypedEvent`](crate::TypedEvent) picks the processor from the event type.

/// `PAYMENT` events.
pub mod payment;
/// `USER_SIGNUP` events.
pub mod signup;
/// `FILE_UPLOAD` events.
pub mod upload;
