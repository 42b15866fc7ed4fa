//! Immutable policy shared by every invocation.
//!
//! Nothing here is mutated at runtime; enumerations double as the allowed-value
//! sets for their fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Fee charged on every payment, as a fraction of the amount.
pub const FEE_RATE: f64 = 0.02;

/// Decimal places kept for `amount`, `fee` and `net_amount`.
pub const AMOUNT_SCALE: usize = 3;

/// Uploads of at least this many bytes leave the `STANDARD` class.
pub const STANDARD_IA_MIN_BYTES: u64 = 1_000_000;

/// Uploads of at least this many bytes are archived to `GLACIER`.
pub const GLACIER_MIN_BYTES: u64 = 50_000_000;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            /// Parses the exact wire representation (case-sensitive).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ValidationError::UnknownVariant {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Event kinds accepted by the dispatcher.
    EventKind, "type" {
        /// A new user signed up.
        UserSignup => "USER_SIGNUP",
        /// A payment was made.
        Payment => "PAYMENT",
        /// A file was uploaded to a bucket.
        FileUpload => "FILE_UPLOAD",
    }
}

wire_enum! {
    /// Subscription plans a user can sign up for.
    Plan, "plan" {
        /// Free tier.
        Free => "free",
        /// Paid tier.
        Pro => "pro",
        /// Education tier.
        Edu => "edu",
    }
}

wire_enum! {
    /// Settlement currencies.
    Currency, "currency" {
        /// Bahraini dinar.
        Bhd => "BHD",
        /// US dollar.
        Usd => "USD",
        /// Euro.
        Eur => "EUR",
    }
}

wire_enum! {
    /// Object-storage tier chosen from the upload size.
    StorageClass, "storage_class" {
        /// Frequently accessed objects.
        Standard => "STANDARD",
        /// Infrequently accessed objects.
        StandardIa => "STANDARD_IA",
        /// Archived objects.
        Glacier => "GLACIER",
    }
}

impl StorageClass {
    /// Picks the tier for an object of `size_bytes`.
    ///
    /// Each threshold belongs to the higher tier: exactly 1,000,000 bytes is
    /// `STANDARD_IA`.
    pub fn for_size(size_bytes: u64) -> Self {
        if size_bytes < STANDARD_IA_MIN_BYTES {
            StorageClass::Standard
        } else if size_bytes < GLACIER_MIN_BYTES {
            StorageClass::StandardIa
        } else {
            StorageClass::Glacier
        }
    }
}
