//! REST plumbing for communicating with the todo server.

pub mod api;
pub mod types;
