//! Session & task controller.
//!
//! DESIGN
//! ======
//! One owned object holds all client state (session, task list, transient
//! UI flags) and mediates between three boundaries: the key-value store,
//! the remote API, and the view. Each operation performs at most one
//! network call, then applies its state transition. Every failure is
//! downgraded to a message in the appropriate error slot; nothing
//! propagates past the operation boundary and nothing is retried.
//!
//! Two asymmetries are deliberate: a malformed persisted user record is
//! dropped on restore while the token is kept, and delete applies only
//! after server confirmation while create applies the post-success
//! server echo.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::TodoApi;
use crate::net::types::{AuthSuccess, User};
use crate::state::session::SessionState;
use crate::state::tasks::TasksState;
use crate::state::ui::UiState;
use crate::store::{KeyValueStore, TOKEN_KEY, USER_KEY};

// Fixed per-operation fallback copy, used when the server response body
// carries no `error` message.
const REGISTER_FALLBACK: &str = "Inscription impossible. Réessaie.";
const LOGIN_FALLBACK: &str = "Connexion impossible. Réessaie.";
const FETCH_FALLBACK: &str = "Impossible de charger les tâches. Vérifie la connexion.";
const CREATE_FALLBACK: &str = "Impossible d'ajouter la tâche.";
const DELETE_FALLBACK: &str = "Impossible de supprimer la tâche.";

/// The session & task controller. Generic over the API and store seams so
/// tests can substitute a scripted API and an in-memory store.
pub struct Controller<A, S> {
    api: A,
    store: S,
    pub session: SessionState,
    pub tasks: TasksState,
    pub ui: UiState,
}

impl<A: TodoApi, S: KeyValueStore> Controller<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            session: SessionState::default(),
            tasks: TasksState::default(),
            ui: UiState::default(),
        }
    }

    // =========================================================================
    // SESSION LIFECYCLE
    // =========================================================================

    /// Rehydrate the session from storage. No network call.
    pub fn restore(&mut self) {
        let token = self.store.get(TOKEN_KEY);
        let raw_user = self.store.get(USER_KEY);
        self.session = SessionState::restored(token, raw_user.as_deref());
        if self.session.is_authenticated() {
            tracing::debug!("session restored from storage");
        }
    }

    /// Startup path: restore, then load tasks when a token was found.
    pub async fn bootstrap(&mut self) {
        self.restore();
        if let Some(token) = self.session.token.clone() {
            self.fetch_tasks(&token).await;
        }
    }

    /// Sign in with the email/password buffers.
    pub async fn login(&mut self) {
        self.ui.auth_error = None;
        self.ui.loading = true;
        let result = self
            .api
            .login(&self.ui.email, &self.ui.password)
            .await;
        match result {
            Ok(auth) => self.finish_auth(auth).await,
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.ui.auth_error = Some(err.surface(LOGIN_FALLBACK));
            }
        }
        self.ui.loading = false;
    }

    /// Create an account with the email/password/name buffers and sign in.
    pub async fn register(&mut self) {
        self.ui.auth_error = None;
        self.ui.loading = true;
        let result = self
            .api
            .register(&self.ui.email, &self.ui.password, &self.ui.name)
            .await;
        match result {
            Ok(auth) => {
                self.ui.name.clear();
                self.finish_auth(auth).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "register failed");
                self.ui.auth_error = Some(err.surface(REGISTER_FALLBACK));
            }
        }
        self.ui.loading = false;
    }

    /// Drop the session and the task list, memory and storage both.
    /// Synchronous; no network call.
    pub fn logout(&mut self) {
        self.session.clear();
        self.tasks.clear();
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        tracing::debug!("session cleared");
    }

    /// Shared success path for login/register: persist, adopt, clear the
    /// password buffer, then fetch tasks with the token from the response
    /// — not session state, which a racing reader could still see stale.
    async fn finish_auth(&mut self, auth: AuthSuccess) {
        let AuthSuccess { token, user } = auth;
        self.persist_session(&token, &user);
        self.session.adopt(token.clone(), user);
        self.ui.password.clear();
        self.fetch_tasks(&token).await;
    }

    /// Exactly one storage write per key. A failed write is logged and
    /// otherwise ignored: the in-memory session stays valid either way.
    fn persist_session(&mut self, token: &str, user: &User) {
        if let Err(err) = self.store.set(TOKEN_KEY, token) {
            tracing::warn!(error = %err, "failed to persist token");
        }
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(err) = self.store.set(USER_KEY, &raw) {
                    tracing::warn!(error = %err, "failed to persist user");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to serialize user"),
        }
    }

    // =========================================================================
    // TASK SYNCHRONIZATION
    // =========================================================================

    /// Replace the task list from the server. The token is an explicit
    /// parameter so the post-login fetch uses the freshly issued token.
    /// On failure the existing list is left intact.
    pub async fn fetch_tasks(&mut self, token: &str) {
        self.ui.task_error = None;
        match self.api.fetch_tasks(token).await {
            Ok(items) => self.tasks.replace(items),
            Err(err) => {
                tracing::warn!(error = %err, "task fetch failed");
                self.ui.task_error = Some(err.surface(FETCH_FALLBACK));
            }
        }
    }

    /// Create a task from the title buffer. A blank buffer is a complete
    /// no-op: no network call, no error-slot reset. On success the server
    /// echo is prepended and the buffer cleared; on failure the buffer is
    /// preserved so the user can retry.
    pub async fn add_task(&mut self) {
        let title = self.ui.new_task_title.trim().to_owned();
        if title.is_empty() {
            return;
        }
        self.ui.task_error = None;
        let Some(token) = self.session.token.clone() else {
            self.ui.task_error = Some(CREATE_FALLBACK.to_owned());
            return;
        };
        match self.api.create_task(&token, &title).await {
            Ok(task) => {
                self.tasks.prepend(task);
                self.ui.new_task_title.clear();
            }
            Err(err) => {
                tracing::warn!(error = %err, "task create failed");
                self.ui.task_error = Some(err.surface(CREATE_FALLBACK));
            }
        }
    }

    /// Delete a task by identifier. Not optimistic: the local entry is
    /// removed only after the server confirms.
    pub async fn delete_task(&mut self, id: &str) {
        self.ui.task_error = None;
        let Some(token) = self.session.token.clone() else {
            self.ui.task_error = Some(DELETE_FALLBACK.to_owned());
            return;
        };
        match self.api.delete_task(&token, id).await {
            Ok(()) => self.tasks.remove(id),
            Err(err) => {
                tracing::warn!(error = %err, "task delete failed");
                self.ui.task_error = Some(err.surface(DELETE_FALLBACK));
            }
        }
    }
}
