use anyhow::Result;
use tracing::{debug, info};

use crate::auth::{CancelHandle, Client, Context};
use crate::config::settings::Settings;

/// Build a client from resolved settings and exchange its credentials for a token.
pub async fn run(settings: &Settings, ctx: &Context) -> Result<String> {
    let client = build_client(settings)?;

    info!("requesting token from {}", client.base_url());
    let token = client.request_token(ctx).await?;
    debug!("token received, {} bytes", token.len());

    Ok(token)
}

pub fn build_client(settings: &Settings) -> Result<Client> {
    let client = Client::builder()
        .basic_auth(&settings.username, &settings.password)
        .service_url(&settings.service_url)
        .build()?;
    Ok(client)
}

/// Context for a run: cancelled by the returned handle, bounded by the optional timeout.
pub fn run_context(settings: &Settings) -> (Context, CancelHandle) {
    let (ctx, handle) = Context::with_cancel();
    let ctx = match settings.timeout {
        Some(timeout) => ctx.with_timeout(timeout),
        None => ctx,
    };
    (ctx, handle)
}
