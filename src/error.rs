// src/error.rs
use thiserror::Error;

/// Failures raised by a [`Transport`](crate::powerdns::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http request returned an error: {0}")]
    Send(#[source] reqwest::Error),

    #[error("error while reading body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Used by non-reqwest transports.
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum PdnsError {
    #[error("{url} is not a valid url: {reason}")]
    Config { url: String, reason: String },

    #[error("PowerDNS API call has failed ({operation}): {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("PowerDNS API call has failed ({operation}): {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    #[error("PowerDNS API call has failed ({operation}): invalid response body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("PowerDNS API call has failed ({operation}): could not encode request body: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PdnsError {
    pub fn config(url: impl Into<String>, reason: impl ToString) -> Self {
        PdnsError::Config {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, PdnsError::Transport { .. })
    }

    pub fn is_api(&self) -> bool {
        matches!(self, PdnsError::Api { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, PdnsError::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, PdnsError::Encode { .. })
    }

    /// Operation that failed, `None` for configuration errors.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            PdnsError::Config { .. } => None,
            PdnsError::Transport { operation, .. }
            | PdnsError::Api { operation, .. }
            | PdnsError::Decode { operation, .. }
            | PdnsError::Encode { operation, .. } => Some(operation),
        }
    }
}

pub type Result<T> = std::result::Result<T, PdnsError>;
