use brawl_interactions::api::server;

#[cfg(not(feature = "lambda"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run_server().await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    server::init_tracing();

    // Configuration is read once during cold start; a missing variable
    // fails the whole function rather than individual invocations.
    let state = server::AppState::from_env()
        .map_err(|e| lambda_http::Error::from(e.to_string()))?;
    let app = server::create_app(state);

    // Run with the Lambda HTTP adapter
    lambda_http::run(app).await
}
