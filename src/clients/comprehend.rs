//! Amazon Comprehend client module
//!
//! Encapsulates the sentiment detection call behind the [`SentimentProvider`]
//! trait so the handler can be exercised against a stub in tests.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_comprehend::types::LanguageCode;
use serde_json::{Map, Value};
use tracing::info;

use crate::core::models::{SentimentAnalysis, UNKNOWN_SENTIMENT};
use crate::errors::SentimentError;

/// Abstract sentiment detection capability.
///
/// Takes the text to analyze and a language tag, returns the sentiment label
/// plus a per-label confidence mapping.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentAnalysis, SentimentError>;
}

/// Sentiment provider backed by Amazon Comprehend.
pub struct ComprehendProvider {
    client: aws_sdk_comprehend::Client,
}

impl ComprehendProvider {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_comprehend::Client::new(config),
        }
    }
}

#[async_trait]
impl SentimentProvider for ComprehendProvider {
    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentAnalysis, SentimentError> {
        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await?;

        let sentiment = output
            .sentiment()
            .map_or(UNKNOWN_SENTIMENT, |s| s.as_str())
            .to_string();

        let mut sentiment_score = Map::new();
        if let Some(score) = output.sentiment_score() {
            if let Some(v) = score.positive() {
                sentiment_score.insert("Positive".to_string(), Value::from(v));
            }
            if let Some(v) = score.negative() {
                sentiment_score.insert("Negative".to_string(), Value::from(v));
            }
            if let Some(v) = score.neutral() {
                sentiment_score.insert("Neutral".to_string(), Value::from(v));
            }
            if let Some(v) = score.mixed() {
                sentiment_score.insert("Mixed".to_string(), Value::from(v));
            }
        }

        info!(%sentiment, "Comprehend sentiment detected");

        Ok(SentimentAnalysis {
            sentiment,
            sentiment_score,
        })
    }
}
