//! Error Types

use thiserror::Error;

/// Transport-level failure from the HTTP client wrapper
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out after {after_ms}ms")]
    Timeout { after_ms: u32 },
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Lead service failure, flattened to a user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadsError {
    #[error("Failed to fetch leads")]
    FetchLeads,
    #[error("Failed to fetch lead")]
    FetchLead,
    #[error("Failed to search leads")]
    SearchLeads,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leads_error_messages() {
        assert_eq!(LeadsError::FetchLeads.to_string(), "Failed to fetch leads");
        assert_eq!(LeadsError::FetchLead.to_string(), "Failed to fetch lead");
        assert_eq!(LeadsError::SearchLeads.to_string(), "Failed to search leads");
    }

    #[test]
    fn test_api_error_status() {
        let err = ApiError::Status { status: 404, url: "/posts/999".into() };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404 from /posts/999");
        assert_eq!(ApiError::Timeout { after_ms: 10 }.status(), None);
    }
}
