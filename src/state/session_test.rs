use super::*;
use crate::config::SessionMode;

fn legacy(storage: MemoryStorage) -> StoredSession<MemoryStorage> {
    StoredSession::new(storage, &GuardConfig::for_mode(SessionMode::Legacy))
}

fn token_mode(storage: MemoryStorage) -> StoredSession<MemoryStorage> {
    StoredSession::new(storage, &GuardConfig::for_mode(SessionMode::Token))
}

// =============================================================
// decode_session
// =============================================================

#[test]
fn decode_numeric_id() {
    let session = decode_session(r#"{"id":7,"role":"USER"}"#).unwrap().unwrap();
    assert_eq!(session, Session { id: "7".to_owned(), role: Role::User });
}

#[test]
fn decode_string_id_and_ignores_extra_fields() {
    let session = decode_session(r#"{"id":"h-5","role":"HOTEL","name":"Seaside","email":"a@b.c"}"#)
        .unwrap()
        .unwrap();
    assert_eq!(session.id, "h-5");
    assert_eq!(session.role, Role::Hotel);
    assert_eq!(session.dashboard_path(), "/hotel/h-5");
}

#[test]
fn decode_null_is_no_session() {
    assert!(decode_session("null").unwrap().is_none());
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(decode_session("{not json"), Err(SessionError::Malformed(_))));
}

#[test]
fn decode_rejects_missing_role() {
    assert!(decode_session(r#"{"id":7}"#).is_err());
}

#[test]
fn decode_reads_any_other_role_as_hotel() {
    for role in [r#""ADMIN""#, r#""user""#, "null", "3"] {
        let raw = format!(r#"{{"id":3,"role":{role}}}"#);
        let session = decode_session(&raw).unwrap().unwrap();
        assert_eq!(session.role, Role::Hotel, "{role}");
        assert_eq!(session.dashboard_path(), "/hotel/3");
    }
}

#[test]
fn decode_rejects_empty_id() {
    assert!(decode_session(r#"{"id":"  ","role":"USER"}"#).is_err());
}

// =============================================================
// StoredSession
// =============================================================

#[test]
fn stored_session_reads_configured_key() {
    let provider = legacy(MemoryStorage::new().with_item("currentUser", r#"{"id":3,"role":"USER"}"#));
    assert_eq!(provider.session().map(|s| s.id), Some("3".to_owned()));

    let other_key = legacy(MemoryStorage::new().with_item("user", r#"{"id":3,"role":"USER"}"#));
    assert!(other_key.session().is_none());
}

#[test]
fn stored_session_malformed_record_is_absent() {
    let provider = legacy(MemoryStorage::new().with_item("currentUser", "undefined"));
    assert!(provider.session().is_none());
}

#[test]
fn stored_session_legacy_mode_has_no_token() {
    let provider = legacy(MemoryStorage::new().with_item("token", "abc"));
    assert!(provider.token().is_none());
}

#[test]
fn stored_session_token_mode_reads_token() {
    let provider = token_mode(
        MemoryStorage::new()
            .with_item("user", r#"{"id":5,"role":"HOTEL"}"#)
            .with_item("token", "jwt-abc"),
    );
    assert_eq!(provider.session().map(|s| s.role), Some(Role::Hotel));
    assert_eq!(provider.token().as_deref(), Some("jwt-abc"));
}

#[test]
fn stored_session_empty_token_is_absent() {
    let provider = token_mode(MemoryStorage::new().with_item("token", ""));
    assert!(provider.token().is_none());
}

#[test]
fn stored_session_whitespace_token_is_present() {
    let provider = token_mode(MemoryStorage::new().with_item("token", "  "));
    assert_eq!(provider.token().as_deref(), Some("  "));
}

#[test]
fn memory_storage_remove_item() {
    let mut storage = MemoryStorage::new().with_item("currentUser", "null");
    storage.remove_item("currentUser");
    assert!(storage.get_item("currentUser").is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    assert!(LocalStorage.get_item("currentUser").is_none());
}
