//! Lambda handler for sentiment analysis requests.
//!
//! This module handles:
//! - Request body extraction and JSON decoding
//! - Input validation (non-empty `text`)
//! - Delegation to the sentiment provider
//! - Translation of results and errors into response envelopes

use super::helpers;
use crate::clients::SentimentProvider;
use crate::core::config::AppConfig;
use crate::core::models::AnalyzeRequest;
use crate::errors::SentimentError;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

pub use self::function_handler as handler;

/// Lambda handler for the sentiment API entrypoint.
///
/// Validates the request, calls the provider once, and always returns a
/// response envelope; provider failures are translated into a 500 rather
/// than propagated as an unhandled fault.
///
/// # Errors
///
/// Never returns `Err`: every failure mode maps to a 400 or 500 response
/// payload.
#[tracing::instrument(level = "info", skip(provider, config, event))]
pub async fn function_handler<P: SentimentProvider>(
    provider: &P,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(provider, config, &event.payload).await)
}

/// Core of the handler, separated from the Lambda event wrapper so tests
/// can drive it with a bare payload and a stub provider.
pub async fn handle_request<P: SentimentProvider + ?Sized>(
    provider: &P,
    config: &AppConfig,
    payload: &Value,
) -> Value {
    // ========================================================================
    // Extract and decode the request body
    // ========================================================================

    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let request: AnalyzeRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            error!("Request body is not a valid JSON object: {}", e);
            return helpers::message_response(400, &SentimentError::from(e).to_string());
        }
    };

    // ========================================================================
    // Validate the input text
    // ========================================================================

    if request.text.is_empty() {
        error!("Request contained no text to analyze");
        return helpers::message_response(400, &SentimentError::EmptyText.to_string());
    }

    // ========================================================================
    // Detect sentiment and format the response
    // ========================================================================

    match provider
        .detect_sentiment(&request.text, &config.language_code)
        .await
    {
        Ok(analysis) => {
            info!(sentiment = %analysis.sentiment, "Sentiment analysis succeeded");
            helpers::ok_analysis(&analysis)
        }
        Err(e) => {
            error!("Sentiment detection failed: {}", e);
            helpers::message_response(500, &e.to_string())
        }
    }
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::message_response(
            400,
            &SentimentError::InvalidInput("request has no body".to_string()).to_string(),
        ));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::message_response(
            400,
            &SentimentError::InvalidInput("request body is not a string".to_string()).to_string(),
        ));
    };

    Ok(body_str)
}
