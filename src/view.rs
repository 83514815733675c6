//! Text rendering of controller state.
//!
//! The view is a pure function of state: no IO, no mutation. An
//! unauthenticated session renders the auth form view, an authenticated
//! one the task list, mirroring the web client's single-page layout.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt::Write;

use crate::state::session::SessionState;
use crate::state::tasks::TasksState;
use crate::state::ui::{AuthMode, UiState};

/// Render the whole client state as text.
#[must_use]
pub fn render(session: &SessionState, tasks: &TasksState, ui: &UiState) -> String {
    if session.is_authenticated() {
        render_tasks(session, tasks, ui)
    } else {
        render_auth_form(ui)
    }
}

fn render_auth_form(ui: &UiState) -> String {
    let mut out = String::new();
    let heading = match ui.auth_mode {
        AuthMode::Login => "Connexion",
        AuthMode::Register => "Inscription",
    };
    let _ = writeln!(out, "{heading}");
    if let Some(error) = &ui.auth_error {
        let _ = writeln!(out, "! {error}");
    }
    if ui.loading {
        let _ = writeln!(out, "Chargement...");
    }
    let hint = match ui.auth_mode {
        AuthMode::Login => "Pas de compte ? `cctodo register`",
        AuthMode::Register => "Déjà inscrit ? `cctodo login`",
    };
    let _ = writeln!(out, "{hint}");
    out
}

fn render_tasks(session: &SessionState, tasks: &TasksState, ui: &UiState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mes tâches");
    if let Some(user) = &session.user {
        let _ = writeln!(out, "Connecté en tant que {}", user.email);
    }
    if let Some(error) = &ui.task_error {
        let _ = writeln!(out, "! {error}");
    }
    if tasks.is_empty() {
        let _ = writeln!(out, "Aucune tâche pour l’instant.");
    } else {
        for task in &tasks.items {
            let _ = writeln!(out, "[{}] {}", task.id, task.title);
        }
    }
    out
}
