use tracing::debug;

use crate::email::EmailAddress;
use crate::envelope::{Envelope, SignupData};
use crate::errors::Rejection;
use crate::event::{as_int, field, require_fields, EventObject};
use crate::events::SignupEvent;
use crate::policy::Plan;

const REQUIRED: [&str; 3] = ["user_id", "email", "plan"];

/// Validates and normalizes a `USER_SIGNUP` event.
pub fn parse(event: &EventObject) -> Result<SignupEvent, Rejection> {
    require_fields(event, &REQUIRED)?;

    let user_id = as_int(field(event, "user_id")?)
        .ok_or_else(|| Rejection::wrong_type("user_id", "int"))?;

    let email = field(event, "email")?
        .as_str()
        .and_then(|s| EmailAddress::parse(s).ok())
        .ok_or(Rejection::Invalid("email"))?;

    let plan = field(event, "plan")?
        .as_str()
        .ok_or_else(|| Rejection::wrong_type("plan", "string"))?;
    let plan: Plan = plan
        .to_lowercase()
        .parse()
        .map_err(|_| Rejection::Invalid("plan"))?;

    Ok(SignupEvent {
        user_id,
        email: email.to_lowercase(),
        plan,
    })
}

/// Builds the signup record and its welcome email subject.
pub fn process(event: &SignupEvent) -> Envelope {
    debug!(user_id = event.user_id, plan = %event.plan, "signup accepted");
    Envelope::ok(
        "Signup processed",
        SignupData {
            user_id: event.user_id,
            email: event.email.clone(),
            plan: event.plan,
            welcome_email_subject: format!("Welcome to the {} plan!", event.plan),
        },
    )
}
