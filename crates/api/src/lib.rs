//! Atelier portfolio HTTP server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, file
//! store, gallery manager) so integration tests and the binary entrypoint
//! can both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod files;
pub mod gallery;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
