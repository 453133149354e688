use async_trait::async_trait;
use thiserror::Error;

/// Failures from the generative model provider.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    InvalidResponse(String),

    #[error("provider returned no text: {0}")]
    EmptyResponse(String),
}

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
