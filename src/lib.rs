/// Sentiment API - a Lambda function that classifies text sentiment using
/// Amazon Comprehend.
///
/// The function is triggered by a Lambda URL and expects a POST request with
/// a JSON body containing a `text` field. It delegates sentiment detection
/// to Comprehend and returns the sentiment label plus per-label confidence
/// scores as a JSON response.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Amazon Comprehend for sentiment detection
/// - Tokio for async runtime
///
/// The Comprehend dependency sits behind the [`clients::SentimentProvider`]
/// trait so tests can substitute a deterministic stub without touching the
/// handler logic.
///
/// # Example
///
/// ```no_run
/// use sentiment_api::api::handler::handle_request;
/// use sentiment_api::clients::ComprehendProvider;
/// use sentiment_api::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() {
///     // Set up structured logging
///     sentiment_api::setup_logging();
///
///     let config = AppConfig::from_env();
///     let shared_config =
///         aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
///     let provider = ComprehendProvider::new(&shared_config);
///
///     let event = serde_json::json!({ "body": r#"{"text":"I love this product"}"# });
///     let response = handle_request(&provider, &config, &event).await;
///     println!("{response}");
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
