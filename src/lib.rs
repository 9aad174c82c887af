//! Ad-hoc load generator for the lobby service.
//!
//! Creates synthetic user accounts over HTTP, logs each one in to obtain a
//! bearer token, persists per-worker batch files as JSON arrays, refreshes
//! tokens of an existing batch, and times authenticated GET requests against
//! a handful of fixed endpoints.

pub mod account;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod relogin;
pub mod timers;
