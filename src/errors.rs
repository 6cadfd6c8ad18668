use aws_sdk_comprehend::error::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No text provided for sentiment analysis")]
    EmptyText,

    #[error("Error calling Comprehend: {0}")]
    Provider(String),
}

impl From<serde_json::Error> for SentimentError {
    fn from(error: serde_json::Error) -> Self {
        SentimentError::InvalidInput(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for SentimentError
where
    E: std::fmt::Display,
{
    fn from(error: SdkError<E, R>) -> Self {
        // Service errors carry the useful message; the outer SdkError only
        // describes which phase of the request failed.
        let message = match &error {
            SdkError::ServiceError(context) => context.err().to_string(),
            other => other.to_string(),
        };
        SentimentError::Provider(message)
    }
}
