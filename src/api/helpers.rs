//! Common helper functions for the API handler.
//!
//! This module provides the response envelope builders shared by the
//! success and error paths.

use serde_json::{Value, json};

use crate::core::models::SentimentAnalysis;

// ============================================================================
// Response Builders
// ============================================================================

/// Returns an error response whose body is the JSON encoding of `message`.
///
/// Error responses carry no headers, matching the API contract.
#[must_use]
pub fn message_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": Value::String(message.to_string()).to_string(),
    })
}

/// Returns a 200 OK response carrying the sentiment analysis result.
///
/// The body is a JSON object with exactly two fields, `Sentiment` and
/// `SentimentScore`, and the response carries the content-type and CORS
/// headers the API contract requires.
#[must_use]
pub fn ok_analysis(analysis: &SentimentAnalysis) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({
            "Sentiment": analysis.sentiment,
            "SentimentScore": analysis.sentiment_score,
        })
        .to_string(),
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
        },
    })
}
