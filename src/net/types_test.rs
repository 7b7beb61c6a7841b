use super::*;
use crate::error::ErrorCode;

#[test]
fn from_json_reads_provider_field_names() {
    let raw = r#"{"uid":"abc","displayName":"Dewi","photoURL":"https://img.test/d.png","email":"d@x.test"}"#;
    let user = SessionUser::from_json(raw).unwrap();
    assert_eq!(user.uid, "abc");
    assert_eq!(user.display_name(), Some("Dewi"));
    assert_eq!(user.photo_url(), Some("https://img.test/d.png"));
    assert_eq!(user.email.as_deref(), Some("d@x.test"));
}

#[test]
fn from_json_accepts_null_optional_fields() {
    let raw = r#"{"uid":"abc","displayName":null,"photoURL":null,"email":null}"#;
    let user = SessionUser::from_json(raw).unwrap();
    assert_eq!(user.display_name(), None);
    assert_eq!(user.photo_url(), None);
}

#[test]
fn from_json_ignores_unknown_fields() {
    let raw = r#"{"uid":"abc","emailVerified":true,"providerData":[]}"#;
    let user = SessionUser::from_json(raw).unwrap();
    assert_eq!(user.uid, "abc");
}

#[test]
fn from_json_rejects_non_objects() {
    let err = SessionUser::from_json("42").unwrap_err();
    assert_eq!(err.error_code(), "E_PROVIDER_UNAVAILABLE");
}

#[test]
fn blank_fields_read_as_absent() {
    let user = SessionUser {
        uid: "abc".into(),
        display_name: Some(String::new()),
        photo_url: Some("   ".into()),
        email: None,
    };
    assert_eq!(user.display_name(), None);
    assert_eq!(user.photo_url(), None);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let user = SessionUser { display_name: Some(" Dewi ".into()), ..SessionUser::default() };
    assert_eq!(user.display_name(), Some("Dewi"));
}
