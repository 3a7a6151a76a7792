// Errors from talking to the Sleeper API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SleeperError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl SleeperError {
    /// Whether the server answered with 404, or with `null` for a lookup.
    pub fn is_not_found(&self) -> bool {
        match self {
            SleeperError::NotFound { .. } => true,
            SleeperError::Status { status, .. } => *status == 404,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_detection() {
        assert!(SleeperError::NotFound { what: "user x".into() }.is_not_found());
        assert!(SleeperError::Status {
            url: "u".into(),
            status: 404
        }
        .is_not_found());
        assert!(!SleeperError::Status {
            url: "u".into(),
            status: 500
        }
        .is_not_found());
    }

    #[test]
    fn messages_name_the_url() {
        let err = SleeperError::Status {
            url: "https://api.sleeper.app/v1/draft/1".into(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "https://api.sleeper.app/v1/draft/1 returned HTTP 503"
        );
    }
}
