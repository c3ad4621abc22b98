use thiserror::Error;

/// Failure of a single request/response exchange.
///
/// The `Display` output is the bare message that the form handlers append to
/// their failure prefix, so it carries no "error:" decoration of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server answered outside the 2xx range.
    #[error("{status_text}")]
    Transport { status: u16, status_text: String },

    /// No HTTP response was produced (connection refused, DNS, CORS, ...).
    #[error("{message}")]
    Network { message: String },

    /// The response body could not be decoded as the expected JSON.
    #[error("{message}")]
    Decode { message: String },
}

impl ClientError {
    pub fn transport(status: reqwest::StatusCode) -> Self {
        ClientError::Transport {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}

// The request URL carries the query string, credentials included, so it is
// stripped before the message is kept.
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let is_decode = err.is_decode();
        let message = err.without_url().to_string();
        if is_decode {
            ClientError::Decode { message }
        } else {
            ClientError::Network { message }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_displays_status_text() {
        let err = ClientError::transport(reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad Request");
        assert!(err.is_transport());
        assert_eq!(
            err,
            ClientError::Transport {
                status: 400,
                status_text: "Bad Request".to_string(),
            }
        );
    }

    #[test]
    fn test_unregistered_status_has_empty_text() {
        let status = reqwest::StatusCode::from_u16(599).unwrap();
        assert_eq!(ClientError::transport(status).to_string(), "");
    }

    #[test]
    fn test_json_error_becomes_decode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = json_err.to_string();
        let err = ClientError::from(json_err);
        assert!(matches!(err, ClientError::Decode { .. }));
        assert_eq!(err.to_string(), expected);
    }
}
