//! Session Store
//!
//! Process-wide authenticated-user state provided via Leptos context, backed
//! by localStorage. Single-writer contract: only `sign_in` and `sign_out`
//! mutate the session.

use leptos::prelude::*;

use crate::config::SESSION_STORAGE_KEY;
use crate::models::User;

/// App-wide session state, provided once by `App`
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session - read
    pub user: ReadSignal<Option<User>>,
    /// Current session - write (private; mutate via the methods below)
    set_user: WriteSignal<Option<User>>,
}

impl SessionContext {
    pub fn new(initial: Option<User>) -> Self {
        let (user, set_user) = signal(initial);
        Self { user, set_user }
    }

    /// Replace the session and persist it to localStorage
    pub fn sign_in(&self, user: User) {
        persist_user(&user);
        web_sys::console::log_1(&format!("[SESSION] signed in as {}", user.user_id).into());
        self.set_user.set(Some(user));
    }

    /// Clear the session and remove the localStorage entry
    pub fn sign_out(&self) {
        clear_stored_user();
        web_sys::console::log_1(&"[SESSION] signed out".into());
        self.set_user.set(None);
    }
}

/// Get the session context from any component under `App`
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session at startup. Missing, malformed, or partial
/// content is treated as an absent session.
pub fn load_stored_user() -> Option<User> {
    let raw = storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    decode_user(&raw)
}

fn persist_user(user: &User) {
    let Ok(json) = serde_json::to_string(user) else {
        return;
    };
    if let Some(storage) = storage() {
        let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
    }
}

fn clear_stored_user() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_session() {
        let user = decode_user(r#"{"user":"User","userId":"66f0a1"}"#).unwrap();
        assert_eq!(user.user, "User");
        assert_eq!(user.user_id, "66f0a1");
    }

    #[test]
    fn test_decode_malformed_is_absent() {
        assert!(decode_user("").is_none());
        assert!(decode_user("not json").is_none());
        assert!(decode_user("{\"user\":").is_none());
    }

    #[test]
    fn test_decode_partial_is_absent() {
        // no partial sessions: both fields required
        assert!(decode_user(r#"{"user":"User"}"#).is_none());
        assert!(decode_user(r#"{"userId":"66f0a1"}"#).is_none());
        assert!(decode_user("null").is_none());
    }
}
