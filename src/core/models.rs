use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentiment label used when the provider response omits one.
pub const UNKNOWN_SENTIMENT: &str = "UNKNOWN";

/// Decoded request body for a sentiment analysis call.
///
/// The `text` field defaults to empty when absent; the handler rejects empty
/// text with a 400 before calling the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// Result of a sentiment detection call.
///
/// Serializes with the exact field names the API contract requires:
/// `Sentiment` and `SentimentScore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Overall sentiment label (POSITIVE, NEGATIVE, NEUTRAL, MIXED or UNKNOWN).
    #[serde(rename = "Sentiment")]
    pub sentiment: String,

    /// Per-label confidence scores in [0,1]. Empty when the provider
    /// returned none.
    #[serde(rename = "SentimentScore", default)]
    pub sentiment_score: Map<String, Value>,
}

impl SentimentAnalysis {
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            sentiment: UNKNOWN_SENTIMENT.to_string(),
            sentiment_score: Map::new(),
        }
    }
}
