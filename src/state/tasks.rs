#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::Task;

/// The task list: one ordered sequence owned by the controller.
///
/// A fetch replaces the whole list with whatever order the server
/// returned; local mutations prepend on create and filter on delete so no
/// refetch is needed after each mutation.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
}

impl TasksState {
    /// Replace the entire list with a server snapshot.
    pub fn replace(&mut self, items: Vec<Task>) {
        self.items = items;
    }

    /// Place a newly created task first.
    pub fn prepend(&mut self, task: Task) {
        self.items.insert(0, task);
    }

    /// Remove the entry with the matching identifier, keeping the
    /// relative order of the rest. Unknown identifiers are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|task| task.id != id);
    }

    /// Drop everything (logout path — no server call involved).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
