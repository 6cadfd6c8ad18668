use std::env;

/// Default language tag passed to the sentiment provider.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Language tag forwarded to Comprehend with every request. Fixed per
    /// deployment; this is not multi-language support.
    pub language_code: String,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            language_code: env::var("SENTIMENT_LANGUAGE_CODE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE_CODE.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }
}
