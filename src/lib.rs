//! # Token Exchange Library
//!
//! Exchanges a basic-auth username/password pair for a bearer token (JWT)
//! issued by a configurable HTTP endpoint.
//!
//! Modules:
//! - `auth` — client builder, token request, cancellation context, errors
//! - `config` — optional YAML config file and settings resolution
//! - `app` — glue used by the `token-exchange` binary
//! - `utils` — logging setup, config loading, constants

pub mod app;
pub mod auth;
pub mod config;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::auth::{Client, ClientBuilder, ConfigError, Context, RequestError};
