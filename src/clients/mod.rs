//! Client modules for external API interactions

pub mod comprehend;

pub use comprehend::{ComprehendProvider, SentimentProvider};
