//! Reachability result type.

use serde::Serialize;

/// Outcome of a single HEAD probe.
///
/// Purely informational: nothing here feeds the risk score or verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityResult {
    /// True for any 2xx or 3xx response
    pub is_reachable: bool,
    /// HTTP status code, or -1 when no response was received
    pub response_code: i32,
    /// `Content-Length` header value, or -1 when absent
    pub content_length: i64,
    /// `Last-Modified` as epoch milliseconds, or 0 when absent or unparsable
    pub last_modified: i64,
    pub server_info: Option<String>,
    pub redirect_location: Option<String>,
    pub is_redirect: bool,
    pub error: Option<String>,
}

impl ReachabilityResult {
    /// Result for a probe that never got a response.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_reachable: false,
            response_code: -1,
            content_length: -1,
            last_modified: 0,
            server_info: None,
            redirect_location: None,
            is_redirect: false,
            error: Some(error.into()),
        }
    }

    /// Short human-readable description of the status.
    pub fn status_description(&self) -> String {
        match self.response_code {
            200 => "OK - Page loaded successfully".to_string(),
            301 => "Moved Permanently".to_string(),
            302 => "Found - Temporary redirect".to_string(),
            403 => "Forbidden - Access denied".to_string(),
            404 => "Not Found - Page doesn't exist".to_string(),
            500 => "Internal Server Error".to_string(),
            503 => "Service Unavailable".to_string(),
            -1 => self
                .error
                .clone()
                .unwrap_or_else(|| "Network error".to_string()),
            code => format!("HTTP {code}"),
        }
    }

    pub fn is_successful(&self) -> bool {
        (200..=299).contains(&self.response_code)
    }

    pub fn is_redirection(&self) -> bool {
        (300..=399).contains(&self.response_code)
    }

    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.response_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.response_code)
    }
}
