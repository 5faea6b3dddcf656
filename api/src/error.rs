use thiserror::Error;

/// Failure of a single API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// The server refused the action for the current user (HTTP 403).
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_is_detected_from_status() {
        let err = ApiError::Status {
            status: 403,
            message: "nope".into(),
        };
        assert!(err.is_forbidden());
        assert_eq!(err.to_string(), "server returned 403: nope");
    }

    #[test]
    fn other_statuses_are_not_forbidden() {
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(!err.is_forbidden());

        let decode = serde_json::from_str::<u32>("x").unwrap_err();
        assert_eq!(ApiError::from(decode).status(), None);
    }
}
