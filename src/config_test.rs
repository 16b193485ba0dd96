use super::*;

#[test]
fn parse_mode_defaults_to_legacy() {
    assert_eq!(parse_mode(None), Ok(SessionMode::Legacy));
}

#[test]
fn parse_mode_is_case_insensitive_and_trims() {
    assert_eq!(parse_mode(Some(" Token ")), Ok(SessionMode::Token));
    assert_eq!(parse_mode(Some("LEGACY")), Ok(SessionMode::Legacy));
}

#[test]
fn parse_mode_rejects_unknown() {
    assert_eq!(parse_mode(Some("cookie")), Err(ConfigError::UnknownMode("cookie".to_owned())));
}

#[test]
fn legacy_config_uses_current_user_key() {
    let cfg = GuardConfig::for_mode(SessionMode::Legacy);
    assert_eq!(cfg.session_key, "currentUser");
    assert_eq!(cfg.token_key, None);
    assert_eq!(cfg.entry_path, "/login");
    assert!(!cfg.requires_token());
}

#[test]
fn token_config_uses_separate_token_key() {
    let cfg = GuardConfig::for_mode(SessionMode::Token);
    assert_eq!(cfg.session_key, "user");
    assert_eq!(cfg.token_key.as_deref(), Some("token"));
    assert_eq!(cfg.entry_path, "/");
    assert!(cfg.requires_token());
}

#[test]
fn default_config_is_legacy() {
    assert_eq!(GuardConfig::default(), GuardConfig::for_mode(SessionMode::Legacy));
}
