use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Groq API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShaderGenError {
    /// True for failures that come out of the completion call itself.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            ShaderGenError::Config(_) | ShaderGenError::Upstream { .. } | ShaderGenError::Transport(_)
        )
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShaderGenError::Config(_) => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for ShaderGenError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ShaderGenError::Transport(format!("request timed out: {}", e))
        } else {
            ShaderGenError::Transport(e.to_string())
        }
    }
}
