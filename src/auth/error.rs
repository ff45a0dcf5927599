use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which half of the basic-auth pair was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    Username,
    Password,
}

impl Credential {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Credential::Username => "username",
            Credential::Password => "password",
        }
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrl {
    #[error("not provided")]
    NotProvided,
    #[error("invalid control character {0:#04x} in URL")]
    ControlCharacter(u8),
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

/// Raised by `ClientBuilder::build` only.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid client opts: no {0} provided")]
    MissingCredential(Credential),
    #[error("invalid url: {0}")]
    InvalidUrl(#[source] InvalidUrl),
    #[error("unable to build default http client: {0}")]
    DefaultTransport(#[source] reqwest::Error),
}

impl From<InvalidUrl> for ConfigError {
    fn from(err: InvalidUrl) -> Self {
        ConfigError::InvalidUrl(err)
    }
}

/// Failure of a single token request. None of these are retried.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("unable to form request: {0}")]
    RequestFormationFailed(#[source] BoxError),
    #[error("failed to perform request: {0}")]
    TransportFailed(#[source] BoxError),
    #[error("request returned an unexpected status code of {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),
    #[error("malformed server data: {0}")]
    MalformedResponse(#[source] BoxError),
}

impl RequestError {
    /// Numeric status code for `UnexpectedStatus`, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::UnexpectedStatus(code) => Some(code.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn formation<E: Into<BoxError>>(err: E) -> Self {
        RequestError::RequestFormationFailed(err.into())
    }

    pub(crate) fn transport<E: Into<BoxError>>(err: E) -> Self {
        RequestError::TransportFailed(err.into())
    }

    pub(crate) fn malformed<E: Into<BoxError>>(err: E) -> Self {
        RequestError::MalformedResponse(err.into())
    }
}
