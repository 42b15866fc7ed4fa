use tracing::debug;

use crate::envelope::{Envelope, PaymentData};
use crate::errors::Rejection;
use crate::event::{as_int, as_number, field, require_fields, EventObject};
use crate::events::PaymentEvent;
use crate::policy::{Currency, AMOUNT_SCALE, FEE_RATE};
use crate::rounding::round_half_even;

const REQUIRED: [&str; 4] = ["payment_id", "user_id", "amount", "currency"];

/// Validates and normalizes a `PAYMENT` event.
///
/// The returned amount is already rounded to [`AMOUNT_SCALE`] places.
pub fn parse(event: &EventObject) -> Result<PaymentEvent, Rejection> {
    require_fields(event, &REQUIRED)?;

    let payment_id = field(event, "payment_id")?
        .as_str()
        .ok_or_else(|| Rejection::wrong_type("payment_id", "string"))?;

    let user_id = as_int(field(event, "user_id")?)
        .ok_or_else(|| Rejection::wrong_type("user_id", "int"))?;

    let amount = as_number(field(event, "amount")?)
        .ok_or_else(|| Rejection::wrong_type("amount", "number"))?;
    if amount <= 0.0 {
        return Err(Rejection::NotPositive("amount"));
    }

    let currency = field(event, "currency")?
        .as_str()
        .ok_or_else(|| Rejection::wrong_type("currency", "string"))?;
    let currency: Currency = currency
        .to_uppercase()
        .parse()
        .map_err(|_| Rejection::Invalid("currency"))?;

    Ok(PaymentEvent {
        payment_id: payment_id.to_string(),
        user_id,
        amount: round_half_even(amount, AMOUNT_SCALE),
        currency,
    })
}

/// Computes the fee and net amount.
///
/// `fee` is rounded from the rounded amount, and `net_amount` is the rounded
/// amount minus the rounded fee, rounded again.
pub fn process(event: &PaymentEvent) -> Envelope {
    let fee = round_half_even(event.amount * FEE_RATE, AMOUNT_SCALE);
    let net_amount = round_half_even(event.amount - fee, AMOUNT_SCALE);

    debug!(
        payment_id = %event.payment_id,
        amount = event.amount,
        currency = %event.currency,
        fee,
        "payment accepted"
    );

    Envelope::ok(
        "Payment processed",
        PaymentData {
            payment_id: event.payment_id.clone(),
            user_id: event.user_id,
            amount: event.amount,
            currency: event.currency,
            fee,
            net_amount,
        },
    )
}
