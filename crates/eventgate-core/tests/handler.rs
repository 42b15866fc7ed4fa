use eventgate_core::{
    dispatch, handler, Context, Envelope, EventData, EventKind, Rejection, Status, StorageClass,
    TypedEvent,
};
use serde_json::{json, Value};

fn assert_rejected(envelope: &Envelope, message: &str) {
    assert_eq!(envelope.status, Status::Error);
    assert_eq!(envelope.message, "Event rejected");
    assert_eq!(envelope.data, None);
    assert_eq!(envelope.errors, vec![message.to_string()]);
}

fn make_signup() -> Value {
    json!({"type": "USER_SIGNUP", "user_id": 1, "email": "A@B.COM", "plan": "PRO"})
}

fn make_payment() -> Value {
    json!({"type": "PAYMENT", "payment_id": "p1", "user_id": 2, "amount": 100, "currency": "usd"})
}

fn make_upload(size_bytes: u64) -> Value {
    json!({
        "type": "FILE_UPLOAD",
        "file_name": " photo.png ",
        "size_bytes": size_bytes,
        "bucket": "Media",
        "uploader": "Cam@Example.org"
    })
}

#[test]
fn test_non_object_events_are_rejected() {
    for event in [json!(null), json!(1), json!("USER_SIGNUP"), json!([make_signup()]), json!(true)] {
        assert_rejected(&dispatch(&event), "Event must be a dictionary");
    }
}

#[test]
fn test_missing_or_falsy_type_is_rejected() {
    for event in [
        json!({}),
        json!({"user_id": 1}),
        json!({"type": null}),
        json!({"type": ""}),
        json!({"type": 0}),
        json!({"type": false}),
    ] {
        assert_rejected(&dispatch(&event), "Missing event type");
    }
}

#[test]
fn test_unsupported_type_names_the_value() {
    assert_rejected(
        &dispatch(&json!({"type": "REFUND"})),
        "Unsupported event type: REFUND",
    );
    assert_rejected(
        &dispatch(&json!({"type": "payment"})),
        "Unsupported event type: payment",
    );
    assert_rejected(&dispatch(&json!({"type": 7})), "Unsupported event type: 7");
    assert_rejected(
        &dispatch(&json!({"type": ["PAYMENT"]})),
        r#"Unsupported event type: ["PAYMENT"]"#,
    );
}

#[test]
fn test_signup_success() {
    let envelope = dispatch(&make_signup());
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "status": "ok",
            "message": "Signup processed",
            "data": {
                "user_id": 1,
                "email": "a@b.com",
                "plan": "pro",
                "welcome_email_subject": "Welcome to the pro plan!"
            },
            "errors": []
        })
    );
}

#[test]
fn test_signup_missing_fields_in_order() {
    let mut event = make_signup();
    event.as_object_mut().unwrap().remove("email");
    assert_rejected(&dispatch(&event), "Missing field: email");

    // user_id is checked before email.
    event.as_object_mut().unwrap().remove("user_id");
    assert_rejected(&dispatch(&event), "Missing field: user_id");
}

#[test]
fn test_signup_rejections() {
    let cases = [
        (json!({"user_id": true}), "user_id must be int"),
        (json!({"user_id": 1.0}), "user_id must be int"),
        (json!({"email": "no-at-sign"}), "Invalid email"),
        (json!({"email": "a@b.com\n"}), "Invalid email"),
        (json!({"plan": ["pro"]}), "plan must be string"),
        (json!({"plan": "gold"}), "Invalid plan"),
    ];
    for (patch, message) in cases {
        let mut event = make_signup();
        for (k, v) in patch.as_object().unwrap() {
            event[k] = v.clone();
        }
        assert_rejected(&dispatch(&event), message);
    }
}

#[test]
fn test_payment_success() {
    let envelope = dispatch(&make_payment());
    assert_eq!(envelope.status, Status::Ok);
    assert_eq!(envelope.message, "Payment processed");
    assert!(envelope.errors.is_empty());
    assert_eq!(
        serde_json::to_value(&envelope.data).unwrap(),
        json!({
            "payment_id": "p1",
            "user_id": 2,
            "amount": 100.0,
            "currency": "USD",
            "fee": 2.0,
            "net_amount": 98.0
        })
    );
}

#[test]
fn test_payment_rejections() {
    let cases = [
        (json!({"amount": 0}), "amount must be greater than 0"),
        (json!({"amount": -10.5}), "amount must be greater than 0"),
        (json!({"amount": "100"}), "amount must be number"),
        (json!({"currency": "gbp"}), "Invalid currency"),
        (json!({"currency": null}), "currency must be string"),
        (json!({"payment_id": 17}), "payment_id must be string"),
    ];
    for (patch, message) in cases {
        let mut event = make_payment();
        for (k, v) in patch.as_object().unwrap() {
            event[k] = v.clone();
        }
        assert_rejected(&dispatch(&event), message);
    }

    let mut event = make_payment();
    event.as_object_mut().unwrap().remove("currency");
    assert_rejected(&dispatch(&event), "Missing field: currency");
}

#[test]
fn test_upload_storage_classes() {
    let cases = [
        (0, StorageClass::Standard),
        (999_999, StorageClass::Standard),
        (1_000_000, StorageClass::StandardIa),
        (49_999_999, StorageClass::StandardIa),
        (50_000_000, StorageClass::Glacier),
    ];
    for (size, expected) in cases {
        let envelope = dispatch(&make_upload(size));
        assert_eq!(envelope.message, "Upload processed");
        match envelope.data {
            Some(EventData::FileUpload(data)) => {
                assert_eq!(data.storage_class, expected, "size {size}");
                assert_eq!(data.file_name, "photo.png");
                assert_eq!(data.bucket, "media");
                assert_eq!(data.uploader.as_str(), "cam@example.org");
                assert_eq!(data.size_bytes, size);
            }
            other => panic!("expected upload data, got {other:?}"),
        }
    }
}

#[test]
fn test_upload_rejections() {
    let mut event = make_upload(10);
    event["uploader"] = json!("not-an-email");
    assert_rejected(&dispatch(&event), "Invalid uploader email");

    let mut event = make_upload(10);
    event["size_bytes"] = json!(-1);
    assert_rejected(&dispatch(&event), "size_bytes must be non-negative integer");

    let mut event = make_upload(10);
    event.as_object_mut().unwrap().remove("bucket");
    assert_rejected(&dispatch(&event), "Missing field: bucket");
}

#[test]
fn test_dispatch_is_idempotent() {
    for event in [make_signup(), make_payment(), make_upload(5), json!({"type": "X"})] {
        let first = dispatch(&event);
        let second = dispatch(&event);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

// Payment amounts below 0.0005 are the exception; see the test below.
#[test]
fn test_success_data_is_accepted_again() {
    for event in [
        make_signup(),
        make_payment(),
        make_upload(75_000_000),
        json!({"type": "PAYMENT", "payment_id": "p9", "user_id": 3, "amount": 12.3456, "currency": "Eur"}),
    ] {
        let first = dispatch(&event);
        assert!(first.is_ok());

        let mut replay = serde_json::to_value(&first.data).unwrap();
        replay["type"] = event["type"].clone();
        let second = dispatch(&replay);
        assert!(second.is_ok(), "replay rejected: {:?}", second.errors);
        assert_eq!(second.data, first.data);
    }
}

#[test]
fn test_tiny_payment_rounds_to_zero_and_replay_is_rejected() {
    // The positivity check sees the raw amount; rounding happens afterwards.
    let event = json!({"type": "PAYMENT", "payment_id": "p0", "user_id": 4, "amount": 0.0004, "currency": "usd"});
    let first = dispatch(&event);
    assert!(first.is_ok());
    assert_eq!(
        serde_json::to_value(&first.data).unwrap(),
        json!({
            "payment_id": "p0",
            "user_id": 4,
            "amount": 0.0,
            "currency": "USD",
            "fee": 0.0,
            "net_amount": 0.0
        })
    );

    let mut replay = serde_json::to_value(&first.data).unwrap();
    replay["type"] = json!("PAYMENT");
    assert_rejected(&dispatch(&replay), "amount must be greater than 0");
}

#[test]
fn test_handler_ignores_context() {
    let mut context = Context::new();
    context.insert("source".into(), json!("local"));

    let event = make_payment();
    assert_eq!(handler(&event, Some(&context)), dispatch(&event));
    assert_eq!(handler(&event, None), dispatch(&event));
}

#[test]
fn test_typed_parse_matches_dispatch() {
    let typed = TypedEvent::parse(&make_signup()).unwrap();
    assert_eq!(typed.kind(), EventKind::UserSignup);
    assert_eq!(typed.process(), dispatch(&make_signup()));

    assert_eq!(
        TypedEvent::parse(&json!([])).unwrap_err(),
        Rejection::NotAnObject
    );
    assert_eq!(
        TypedEvent::parse(&json!({"type": "PAYMENT", "payment_id": "p"})).unwrap_err(),
        Rejection::MissingField("user_id")
    );
}
