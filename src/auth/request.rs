use reqwest::{Request, StatusCode};
use serde::Deserialize;

use crate::auth::client::Client;
use crate::auth::context::Context;
use crate::auth::error::RequestError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

impl Client {
    /// Exchanges the stored basic-auth credentials for a token with a single
    /// `GET` against the base URL. The token is returned exactly as received.
    ///
    /// A context that is already cancelled or past its deadline fails before
    /// any request is sent; one that fires mid-flight aborts the transfer.
    pub async fn request_token(&self, ctx: &Context) -> Result<String, RequestError> {
        if let Some(err) = ctx.err() {
            return Err(RequestError::formation(err));
        }

        let request = self
            .cfg
            .transport
            .get(&self.cfg.base_url)
            .basic_auth(&self.cfg.username, Some(&self.cfg.password))
            .build()
            .map_err(RequestError::formation)?;

        tokio::select! {
            res = self.exchange(request) => res,
            err = ctx.done() => Err(RequestError::transport(err)),
        }
    }

    async fn exchange(&self, request: Request) -> Result<String, RequestError> {
        let response = self
            .cfg
            .transport
            .execute(request)
            .await
            .map_err(RequestError::transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            // drain before returning so the connection goes back to the pool
            let _ = response.bytes().await;
            return Err(RequestError::UnexpectedStatus(status));
        }

        let body = response.bytes().await.map_err(|err| {
            if err.is_timeout() {
                RequestError::transport(err)
            } else {
                RequestError::malformed(err)
            }
        })?;

        let payload: TokenResponse = serde_json::from_slice(&body).map_err(RequestError::malformed)?;
        Ok(payload.token)
    }
}
