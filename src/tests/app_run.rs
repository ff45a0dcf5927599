#[cfg(test)]
mod test {
    use std::time::Duration;

    use httpmock::Method::GET;
    use httpmock::MockServer;

    use crate::app;
    use crate::auth::{ConfigError, ContextError, Credential, RequestError};
    use crate::config::settings::{CliOverrides, Settings};
    use crate::tests::common::basic_auth_header;

    fn settings_for(username: &str, password: &str, url: &str) -> Settings {
        Settings::resolve(
            CliOverrides {
                username: username.to_owned(),
                password: password.to_owned(),
                override_url: url.to_owned(),
                ..Default::default()
            },
            None,
        )
    }

    #[tokio::test]
    async fn run_returns_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/issue")
                    .header("authorization", basic_auth_header("alice", "s3cret"));
                then.status(200).body(r#"{"token":"jwt-value"}"#);
            })
            .await;

        let settings = settings_for("alice", "s3cret", &server.url("/issue"));
        let (ctx, _cancel) = app::run_context(&settings);

        let token = app::run(&settings, &ctx).await.unwrap();
        assert_eq!(token, "jwt-value");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn run_surfaces_config_errors() {
        let settings = settings_for("", "s3cret", "");
        let (ctx, _cancel) = app::run_context(&settings);

        let err = app::run(&settings, &ctx).await.unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().expect("config error");
        assert!(matches!(config_err, ConfigError::MissingCredential(Credential::Username)));
    }

    #[tokio::test]
    async fn run_surfaces_request_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(401);
            })
            .await;

        let settings = settings_for("alice", "wrong", &server.base_url());
        let (ctx, _cancel) = app::run_context(&settings);

        let err = app::run(&settings, &ctx).await.unwrap_err();
        let request_err = err.downcast_ref::<RequestError>().expect("request error");
        assert_eq!(request_err.status(), Some(401));
    }

    #[tokio::test]
    async fn run_context_applies_timeout() {
        let mut settings = settings_for("alice", "s3cret", "");
        settings.timeout = Some(Duration::from_millis(10));

        let (ctx, _cancel) = app::run_context(&settings);
        assert!(ctx.deadline().is_some());
        assert_eq!(ctx.done().await, ContextError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn run_context_is_cancelled_by_handle() {
        let settings = settings_for("alice", "s3cret", "");
        let (ctx, cancel) = app::run_context(&settings);
        assert!(ctx.deadline().is_none());

        cancel.cancel();
        assert_eq!(ctx.err(), Some(ContextError::Canceled));
    }
}
