//! Property management API server library.
//!
//! Exposes config, state, error handling, extractors, and routes so the
//! binary entrypoint and the integration tests share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
