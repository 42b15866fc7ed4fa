use serde::{Deserialize, Serialize};

use crate::email::EmailAddress;
use crate::errors::Rejection;
use crate::policy::{Currency, Plan, StorageClass};

/// Message carried by every error envelope.
pub const REJECTED_MESSAGE: &str = "Event rejected";

/// Outcome of a handler call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The event was accepted and normalized.
    Ok,
    /// The event was rejected.
    Error,
}

/// Uniform response returned by every code path.
///
/// Field order is the serialized order: `status`, `message`, `data`, `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// `ok` or `error`.
    pub status: Status,
    /// Short human-readable summary.
    pub message: String,
    /// Normalized record on success, `null` on error.
    pub data: Option<EventData>,
    /// Error messages in reporting order; empty on success.
    pub errors: Vec<String>,
}

impl Envelope {
    /// Builds a success envelope.
    pub fn ok(message: impl Into<String>, data: impl Into<EventData>) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
            data: Some(data.into()),
            errors: Vec::new(),
        }
    }

    /// Builds an error envelope carrying `messages` in the given order.
    pub fn error<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            status: Status::Error,
            message: REJECTED_MESSAGE.to_string(),
            data: None,
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds an error envelope for a single rejection.
    pub fn rejected(rejection: &Rejection) -> Self {
        Self::error([rejection.to_string()])
    }

    /// Returns true for success envelopes.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<Rejection> for Envelope {
    fn from(rejection: Rejection) -> Self {
        Envelope::rejected(&rejection)
    }
}

/// Kind-specific normalized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventData {
    /// Result of a user signup.
    Signup(SignupData),
    /// Result of a payment.
    Payment(PaymentData),
    /// Result of a file upload.
    FileUpload(FileUploadData),
}

/// Normalized user signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupData {
    /// User identifier.
    pub user_id: i64,
    /// Lowercased email address.
    pub email: EmailAddress,
    /// Lowercased plan.
    pub plan: Plan,
    /// Subject line for the welcome email.
    pub welcome_email_subject: String,
}

/// Normalized payment with derived fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Payment identifier, as received.
    pub payment_id: String,
    /// Paying user.
    pub user_id: i64,
    /// Amount rounded to three decimals.
    pub amount: f64,
    /// Uppercased currency code.
    pub currency: Currency,
    /// Processing fee rounded to three decimals.
    pub fee: f64,
    /// `amount - fee`, rounded to three decimals.
    pub net_amount: f64,
}

/// Normalized file upload with its storage tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadData {
    /// File name with surrounding whitespace removed.
    pub file_name: String,
    /// Object size in bytes.
    pub size_bytes: u64,
    /// Lowercased bucket name.
    pub bucket: String,
    /// Lowercased uploader email.
    pub uploader: EmailAddress,
    /// Tier derived from `size_bytes`.
    pub storage_class: StorageClass,
}

impl From<SignupData> for EventData {
    fn from(data: SignupData) -> Self {
        EventData::Signup(data)
    }
}

impl From<PaymentData> for EventData {
    fn from(data: PaymentData) -> Self {
        EventData::Payment(data)
    }
}

impl From<FileUploadData> for EventData {
    fn from(data: FileUploadData) -> Self {
        EventData::FileUpload(data)
    }
}
