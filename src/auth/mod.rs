/// Auth module
///
/// Builds a validated basic-auth client and exchanges its credentials for a token.

pub mod client;
pub mod context;
pub mod error;
pub mod request;

pub use client::{Client, ClientBuilder, DEFAULT_TRANSPORT_TIMEOUT};
pub use context::{CancelHandle, Context, ContextError};
pub use error::{ConfigError, Credential, InvalidUrl, RequestError};
