//! Signed-in session as persisted by the login flow.
//!
//! The login flow writes a JSON record (and, in token mode, a separate
//! credential) to browser `localStorage`. This module only reads it. Storage
//! sits behind [`SessionStorage`] so tests substitute [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! A record that is not valid JSON, or lacks a usable `id` or a `role` field,
//! is treated as no session at all. [`decode_session`] reports the failure so
//! callers can log it; [`StoredSession`] logs and degrades to `None`.
//!
//! Any `role` value other than `"USER"` reads as a hotel account, so an
//! unexpected role lands on the hotel dashboard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::config::GuardConfig;
use crate::routes::Role;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Identity and role of the signed-in account. Extra fields in the stored
/// record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_role")]
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn dashboard_path(&self) -> String {
        self.role.dashboard_path(&self.id)
    }
}

// Account ids are numeric in the backend but may be stored as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    };
    if id.trim().is_empty() {
        return Err(serde::de::Error::custom("empty session id"));
    }
    Ok(id)
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let role = serde_json::Value::deserialize(deserializer)?;
    if role.as_str() == Some(Role::User.as_str()) {
        Ok(Role::User)
    } else {
        Ok(Role::Hotel)
    }
}

/// Decode a stored session record. The literal `null` is no session.
///
/// # Errors
///
/// Returns [`SessionError::Malformed`] if `raw` is not a session record.
pub fn decode_session(raw: &str) -> Result<Option<Session>, SessionError> {
    Ok(serde_json::from_str::<Option<Session>>(raw)?)
}

/// Synchronous, read-only key-value lookup.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.set_item(key, value);
        self
    }

    pub fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_owned(), value.to_owned());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

/// Browser `localStorage`. Always empty outside the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }
}

/// Read-only view of the current session, injected into the guard.
pub trait SessionProvider {
    fn session(&self) -> Option<Session>;

    /// Separately stored credential, if the session mode uses one.
    fn token(&self) -> Option<String>;
}

/// [`SessionProvider`] backed by a [`SessionStorage`] and the configured keys.
#[derive(Debug, Clone)]
pub struct StoredSession<S> {
    storage: S,
    session_key: String,
    token_key: Option<String>,
}

impl<S: SessionStorage> StoredSession<S> {
    #[must_use]
    pub fn new(storage: S, config: &GuardConfig) -> Self {
        Self {
            storage,
            session_key: config.session_key.clone(),
            token_key: config.token_key.clone(),
        }
    }
}

impl<S: SessionStorage> SessionProvider for StoredSession<S> {
    fn session(&self) -> Option<Session> {
        let raw = self.storage.get_item(&self.session_key)?;
        match decode_session(&raw) {
            Ok(session) => session,
            Err(error) => {
                warn!(key = %self.session_key, %error, "ignoring malformed session record");
                None
            }
        }
    }

    fn token(&self) -> Option<String> {
        let key = self.token_key.as_deref()?;
        self.storage.get_item(key).filter(|token| !token.is_empty())
    }
}
