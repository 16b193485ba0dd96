//! Guard configuration: which storage keys hold the session and where
//! unauthenticated visitors are sent.
//!
//! The session mode is fixed at build time through `PORTAL_SESSION_MODE`
//! (`legacy` by default, or `token`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const LEGACY_SESSION_KEY: &str = "currentUser";
pub const LEGACY_ENTRY_PATH: &str = "/login";

pub const TOKEN_SESSION_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
pub const TOKEN_ENTRY_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown session mode {0:?} (expected `legacy` or `token`)")]
    UnknownMode(String),
}

/// How the login flow persists the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// A single `currentUser` record.
    #[default]
    Legacy,
    /// A `user` record plus a separate `token` credential.
    Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub mode: SessionMode,
    pub session_key: String,
    pub token_key: Option<String>,
    pub entry_path: String,
}

impl GuardConfig {
    #[must_use]
    pub fn for_mode(mode: SessionMode) -> Self {
        match mode {
            SessionMode::Legacy => Self {
                mode,
                session_key: LEGACY_SESSION_KEY.to_owned(),
                token_key: None,
                entry_path: LEGACY_ENTRY_PATH.to_owned(),
            },
            SessionMode::Token => Self {
                mode,
                session_key: TOKEN_SESSION_KEY.to_owned(),
                token_key: Some(TOKEN_KEY.to_owned()),
                entry_path: TOKEN_ENTRY_PATH.to_owned(),
            },
        }
    }

    /// Build config from the `PORTAL_SESSION_MODE` value captured at compile
    /// time. Absent means legacy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownMode`] for any other value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        parse_mode(option_env!("PORTAL_SESSION_MODE")).map(Self::for_mode)
    }

    /// Whether a separate credential token must be present to count as
    /// signed in.
    #[must_use]
    pub fn requires_token(&self) -> bool {
        self.token_key.is_some()
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::for_mode(SessionMode::default())
    }
}

/// Parse a session mode name, case-insensitively. `None` means legacy.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownMode`] for unrecognized names.
pub fn parse_mode(raw: Option<&str>) -> Result<SessionMode, ConfigError> {
    let raw = raw.map_or("legacy", str::trim);
    match raw.to_ascii_lowercase().as_str() {
        "legacy" => Ok(SessionMode::Legacy),
        "token" => Ok(SessionMode::Token),
        _ => Err(ConfigError::UnknownMode(raw.to_owned())),
    }
}
