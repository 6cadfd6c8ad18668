// Lambda bootstrap entry point for the sentiment API function

use aws_config::BehaviorVersion;
use lambda_runtime::{Error, run, service_fn};
use tracing::info;

use sentiment_api::api::handler::function_handler;
use sentiment_api::clients::ComprehendProvider;
use sentiment_api::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    sentiment_api::setup_logging();

    let config = AppConfig::from_env();
    info!(language_code = %config.language_code, "Sentiment API Lambda starting");

    // One Comprehend client for the lifetime of the execution environment;
    // the provider call is stateless so reuse is safe.
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let provider = ComprehendProvider::new(&shared_config);

    run(service_fn(|event| {
        function_handler(&provider, &config, event)
    }))
    .await
}
