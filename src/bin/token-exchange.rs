use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use token_exchange::app;
use token_exchange::config::settings::{CliOverrides, Settings};
use token_exchange::utils::config_loader;
use token_exchange::utils::logging;
use token_exchange::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Username to log in with
    #[arg(long, env = "USERNAME", default_value = "")]
    username: String,
    /// Password to log in with
    #[arg(long, env = "PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
    /// Overrides the provider server for testing
    #[arg(long, env = "OVERRIDE_URL", default_value = "")]
    override_url: String,
    /// Optional YAML config file
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    /// Overall deadline for the token request
    #[arg(long, env = "TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String> {
    // -------------------------------
    // 1. Read args and optional config file
    // -------------------------------

    let args = Args::parse();
    let file_config = match &args.config {
        Some(path) => Some(
            config_loader::run(path)
                .await
                .with_context(|| format!("failed to load config {}", path))?,
        ),
        None => None,
    };

    let settings = Settings::resolve(
        CliOverrides {
            username: args.username,
            password: args.password,
            override_url: args.override_url,
            timeout_secs: args.timeout_secs,
            log_level: args.log_level.map(|level| level.as_str().to_string()),
        },
        file_config,
    );
    logging::init_logging(&settings.logging);

    // -------------------------------
    // 2. Cancel the request on Ctrl-C
    // -------------------------------

    let (ctx, cancel) = app::run_context(&settings);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling request");
            cancel.cancel();
        }
    });

    // -------------------------------
    // 3. Exchange credentials for a token
    // -------------------------------

    app::run(&settings, &ctx).await
}
