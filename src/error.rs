//! Error handling for tld-swap

use thiserror::Error;

/// Main error type for tld-swap
#[derive(Error, Debug, Clone)]
pub enum TldSwapError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Probe error for '{domain}': {message}")]
    Probe { domain: String, message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl TldSwapError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a probe error for a single candidate domain
    pub fn probe(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Probe {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Bare description of the failure, without the variant prefix
    pub fn detail(&self) -> &str {
        match self {
            Self::Config { message }
            | Self::Probe { message, .. }
            | Self::Io { message }
            | Self::Cli { message } => message,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
            Self::Probe { domain, message } => {
                format!("⚠️  Could not check domain '{}': {}", domain, message)
            }
            Self::Io { message } => {
                format!("❌ Output error: {}", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<std::io::Error> for TldSwapError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TldSwapError>;
