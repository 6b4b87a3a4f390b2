use desk_model::{Message, NewMessage, NewUser, Record, RecordId, Session, UserRecord};
use pretty_assertions::assert_eq;
use std::str::FromStr;

// ── RecordId ─────────────────────────────────────────────────────

#[test]
fn record_id_display_and_parse() {
    let id = RecordId::new(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(RecordId::from_str(" 42 ").unwrap(), id);
    assert!(RecordId::from_str("forty-two").is_err());
}

#[test]
fn record_id_display_honors_width() {
    assert_eq!(format!("{:<4}|", RecordId::new(7)), "7   |");
    assert_eq!(format!("{:>4}|", RecordId::new(7)), "   7|");
}

#[test]
fn record_id_next_and_order() {
    assert_eq!(RecordId::new(3).next(), RecordId::new(4));
    assert_eq!(RecordId::new(u64::MAX).next(), RecordId::new(u64::MAX));
    assert!(RecordId::new(1) < RecordId::new(2));
}

#[test]
fn record_id_serializes_as_number() {
    let json = serde_json::to_string(&RecordId::new(5)).unwrap();
    assert_eq!(json, "5");
}

// ── Message ──────────────────────────────────────────────────────

#[test]
fn message_resource_is_posts() {
    assert_eq!(Message::RESOURCE, "posts");
    assert_eq!(UserRecord::RESOURCE, "users");
}

#[test]
fn message_decodes_remote_payload_ignoring_extra_fields() {
    let json = r#"{"userId": 1, "id": 3, "title": "qui est esse", "body": "est rerum"}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg, Message::new(3, "qui est esse", "est rerum"));
}

#[test]
fn message_draft_roundtrip() {
    let draft = NewMessage::new("Hi there", "Body text");
    let msg = Message::from_draft(RecordId::new(4), draft.clone());
    assert_eq!(msg.id(), RecordId::new(4));
    assert_eq!(msg.to_draft(), draft);
}

#[test]
fn new_message_serializes_without_id() {
    let value = serde_json::to_value(NewMessage::new("t1t", "b1b")).unwrap();
    assert_eq!(value, serde_json::json!({"title": "t1t", "body": "b1b"}));
}

// ── UserRecord ───────────────────────────────────────────────────

#[test]
fn user_decodes_remote_payload_ignoring_nested_objects() {
    let json = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {"street": "Kulas Light", "city": "Gwenborough"},
        "phone": "1-770-736-8031 x56442"
    }"#;
    let user: UserRecord = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, RecordId::new(1));
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.phone, "1-770-736-8031 x56442");
}

#[test]
fn user_draft_roundtrip() {
    let draft = NewUser::new("Ervin Howell", "shanna@melissa.tv", "010-692-6593");
    let user = UserRecord::from_draft(RecordId::new(2), draft.clone());
    assert_eq!(user.to_draft(), draft);
}

// ── Session ──────────────────────────────────────────────────────

#[test]
fn session_json_shape() {
    let session = Session::new("a@b.com");
    let json = serde_json::to_string(&session).unwrap();
    assert_eq!(json, r#"{"email":"a@b.com"}"#);
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
