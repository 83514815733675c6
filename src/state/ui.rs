#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which auth form is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Transient view state: form buffers, the auth busy flag, and the two
/// error slots.
///
/// The error slots are independent because they surface from unrelated
/// operation classes and must not clobber each other. Each is reset at
/// the *start* of an operation of its class, never at success — a
/// successful attempt clears it implicitly through that reset.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub auth_mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub new_task_title: String,
    pub loading: bool,
    pub auth_error: Option<String>,
    pub task_error: Option<String>,
}

impl UiState {
    /// Toggle between the login and register forms. Switching clears any
    /// stale auth error so the fresh form starts clean.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.auth_error = None;
    }
}
