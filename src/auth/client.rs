use std::fmt;
use std::time::Duration;

use percent_encoding::{percent_encode, CONTROLS};
use reqwest::Url;

use crate::auth::error::{ConfigError, Credential, InvalidUrl};

pub const DEFAULT_TRANSPORT_TIMEOUT: Duration = Duration::from_secs(60);

/// Validated, immutable configuration owned by a `Client`.
#[derive(Clone)]
pub(crate) struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) transport: reqwest::Client,
    pub(crate) transport_timeout: Option<Duration>,
}

/// Collects client options. Setters may be called in any order; a later call
/// replaces an earlier value for the same field. Nothing is checked until `build`.
#[derive(Default, Clone)]
pub struct ClientBuilder {
    base_url: String,
    username: String,
    password: String,
    transport: Option<reqwest::Client>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("transport_timeout", &self.transport_timeout)
            .finish()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Use the given transport instead of the default one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(client);
        self
    }

    /// Validates the options and returns a ready client. No network I/O happens here.
    pub fn build(self) -> Result<Client, ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::MissingCredential(Credential::Username));
        }
        if self.password.is_empty() {
            return Err(ConfigError::MissingCredential(Credential::Password));
        }
        if self.base_url.is_empty() {
            return Err(InvalidUrl::NotProvided.into());
        }

        let cleaned = clean(&self.base_url);
        // the parser strips tabs and newlines and trims C0 controls instead of failing
        if let Some(&byte) = cleaned.iter().find(|b| b.is_ascii_control()) {
            return Err(InvalidUrl::ControlCharacter(byte).into());
        }

        // bytes above 0x7f go out as a single %XX each. The encoded string is
        // stored as-is, the parser's normalized form would append a trailing
        // slash to bare hosts
        let base_url = percent_encode(&cleaned, CONTROLS).to_string();
        Url::parse(&base_url).map_err(InvalidUrl::from)?;

        let (transport, transport_timeout) = match self.transport {
            Some(client) => (client, None),
            None => {
                let client = reqwest::Client::builder()
                    .timeout(DEFAULT_TRANSPORT_TIMEOUT)
                    .build()
                    .map_err(ConfigError::DefaultTransport)?;
                (client, Some(DEFAULT_TRANSPORT_TIMEOUT))
            }
        };

        Ok(Client {
            cfg: ClientConfig {
                base_url,
                username: self.username,
                password: self.password,
                transport,
                transport_timeout,
            },
        })
    }
}

/// Handle over a validated configuration. Exposes a single operation,
/// `request_token`, and never changes after construction.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) cfg: ClientConfig,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.cfg.base_url
    }

    pub fn username(&self) -> &str {
        &self.cfg.username
    }

    /// Timeout of the default transport; `None` when the transport was supplied by the caller.
    pub fn transport_timeout(&self) -> Option<Duration> {
        self.cfg.transport_timeout
    }
}

/// Some upstream configurators inject non-ASCII noise into otherwise usable
/// URLs. Every character is cut down to its low byte before parsing.
pub(crate) fn clean(raw: &str) -> Vec<u8> {
    raw.chars().map(|c| (u32::from(c) & 0xFF) as u8).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let builder = ClientBuilder::new().basic_auth("user", "hunter2");
        assert!(!format!("{:?}", builder).contains("hunter2"));

        let client = builder.service_url("http://provider.cluster.local").build().unwrap();
        assert!(!format!("{:?}", client).contains("hunter2"));
    }

    #[test]
    fn clean_keeps_ascii() {
        assert_eq!(clean("http://provider.cluster.local"), b"http://provider.cluster.local");
    }

    #[test]
    fn clean_truncates_to_low_byte() {
        // U+E0068 U+E0074 U+E0074 U+E0070 -> "http"
        assert_eq!(clean("\u{E0068}\u{E0074}\u{E0074}\u{E0070}"), b"http");
        // U+0168 -> 0x68
        assert_eq!(clean("\u{0168}"), b"h");
        // one byte per char, never a multi-byte sequence
        assert_eq!(clean("\u{00E9}\u{01E9}"), vec![0xE9, 0xE9]);
        assert_eq!(clean("\u{010A}\u{0100}"), vec![b'\n', 0]);
    }
}
