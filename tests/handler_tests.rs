use scoreboard_sync_lambda::handler::{Request, Response};

#[test]
fn request_defaults_test_flag_and_ignores_scheduler_fields() {
    let scheduled = serde_json::json!({
        "version": "0",
        "id": "53dc4d37-cffa-4f76-80c9-8b7d4a4d2eaa",
        "detail-type": "Scheduled Event",
        "source": "aws.events",
        "time": "2025-06-01T19:00:00Z",
        "resources": ["arn:aws:events:us-east-1:123456789012:rule/scoreboard-every-5m"],
        "detail": {}
    });
    let req: Request = serde_json::from_value(scheduled).unwrap();
    assert!(!req.test);

    let req: Request = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(!req.test);
}

#[test]
fn request_reads_test_flag() {
    let req: Request = serde_json::from_value(serde_json::json!({ "test": true })).unwrap();
    assert!(req.test);
}

#[test]
fn any_payload_is_accepted_and_defaults_test_flag() {
    for raw in ["null", "\"hello\"", "42", "[]", r#"{"test":"yes"}"#, r#"{"test":null}"#] {
        // the runtime decodes the payload as a plain JSON value, which never rejects valid JSON
        let payload: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(Request::from_payload(&payload), Request { test: false }, "payload was: {}", raw);
    }
}

#[test]
fn payload_test_flag_is_read_when_boolean() {
    let payload = serde_json::json!({ "test": true, "source": "manual" });
    assert!(Request::from_payload(&payload).test);
}

#[test]
fn response_serializes_summary_fields() {
    let resp = Response { message: "Upserted 2 of 3 games.".to_string(), games_written: 2, games_skipped: 1 };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value["message"], "Upserted 2 of 3 games.");
    assert_eq!(value["games_written"], 2);
    assert_eq!(value["games_skipped"], 1);
}
