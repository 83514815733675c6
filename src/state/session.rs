#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Login state: a bearer token paired with the user record it belongs to.
///
/// The transition rules keep both halves in lockstep — `adopt` sets them
/// together, `clear` drops them together. The one sanctioned exception is
/// `restored`, where a token can survive a user record that failed to
/// parse.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    /// Adopt a freshly issued token/user pair after login or register.
    pub fn adopt(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Rehydrate from raw storage values. The token is adopted as-is; the
    /// user entry must parse as JSON, and a malformed record is dropped
    /// while the token is kept, yielding an authenticated-but-anonymous
    /// session.
    #[must_use]
    pub fn restored(token: Option<String>, raw_user: Option<&str>) -> Self {
        let user = raw_user.and_then(|raw| serde_json::from_str(raw).ok());
        Self { token, user }
    }

    /// Drop both halves of the session.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Presence of a token is what gates the task view and task fetches.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
