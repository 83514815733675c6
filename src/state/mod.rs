//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `tasks`, `ui`) so each facet keeps
//! its own transition rules and tests. The structs are plain data; all IO
//! lives in the controller that owns them.

pub mod session;
pub mod tasks;
pub mod ui;
