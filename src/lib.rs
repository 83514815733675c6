//! # cctodo
//!
//! Command-line client for the Cloud Campus todo API. Replaces the React
//! single-page client with a Rust-native session & task controller plus a
//! thin CLI surface.
//!
//! This crate contains the client state models, the REST client, the
//! credential store, the controller tying the three together, and a pure
//! text rendering of controller state.

pub mod controller;
pub mod net;
pub mod state;
pub mod store;
pub mod view;
