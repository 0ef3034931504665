//! Interactive IP geolocation tracker.
//!
//! Looks up IP addresses against an ip-api.com style endpoint, keeps the
//! results in an in-memory store for the session, and lets the user edit,
//! sort, chart and persist them through a numbered menu. The binary in
//! `main.rs` wires the pieces together; everything else lives here so the
//! integration tests can drive it directly.

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod shell;
pub mod store;
