use serde::Serialize;
use thiserror::Error;

/// Classified reason a weather query did not produce a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    ConnectionFailure,
    Timeout,
    RequestFailure,
    /// The endpoint answered but the payload was not a current-weather record
    /// (`cod` other than 200, or no `main`/`weather` data).
    UnexpectedPayload,
}

impl ErrorKind {
    /// Kind for an HTTP status that has a dedicated message, if any.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(ErrorKind::BadRequest),
            401 => Some(ErrorKind::Unauthorized),
            403 => Some(ErrorKind::Forbidden),
            404 => Some(ErrorKind::NotFound),
            429 => Some(ErrorKind::RateLimited),
            500..=599 => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    /// Short heading shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "400 Bad Request",
            ErrorKind::Unauthorized => "401 Unauthorized",
            ErrorKind::Forbidden => "403 Forbidden",
            ErrorKind::NotFound => "404 Not Found",
            ErrorKind::RateLimited => "429 Too Many Requests",
            ErrorKind::ServerError => "Server Error",
            ErrorKind::ConnectionFailure => "Connection Error",
            ErrorKind::Timeout => "Timeout Error",
            ErrorKind::RequestFailure => "Request Error",
            ErrorKind::UnexpectedPayload => "Unexpected Response",
        }
    }

    /// Fixed user-facing message. `RequestFailure` passes the underlying text through instead.
    pub fn fixed_message(&self) -> Option<&'static str> {
        match self {
            ErrorKind::BadRequest => Some("Invalid Input"),
            ErrorKind::Unauthorized => Some("Invalid API Key"),
            ErrorKind::Forbidden => Some("Access Denied"),
            ErrorKind::NotFound => Some("City not found"),
            ErrorKind::RateLimited => Some("API limit reached"),
            ErrorKind::ServerError => Some("Try again later"),
            ErrorKind::ConnectionFailure => Some("Check your internet"),
            ErrorKind::Timeout => Some("Server too slow"),
            ErrorKind::UnexpectedPayload => Some("Unexpected response"),
            ErrorKind::RequestFailure => None,
        }
    }

    /// True for failures where no usable HTTP response was obtained.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::ConnectionFailure | ErrorKind::Timeout | ErrorKind::RequestFailure
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A terminal failure of one weather query, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}: {}", .kind.title(), .message)]
pub struct QueryError {
    pub kind: ErrorKind,
    pub message: String,
}

impl QueryError {
    /// Error with the kind's fixed message.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.fixed_message().unwrap_or_default().to_string(),
        }
    }

    pub fn request_failure(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::RequestFailure,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(error: reqwest::Error) -> Self {
        // A connect-phase timeout reports both flags; it counts as a connection failure.
        if error.is_connect() {
            QueryError::new(ErrorKind::ConnectionFailure)
        } else if error.is_timeout() {
            QueryError::new(ErrorKind::Timeout)
        } else {
            // The URL carries the API key.
            QueryError::request_failure(error.without_url().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_statuses_map_to_kinds() {
        assert_eq!(ErrorKind::from_status(400), Some(ErrorKind::BadRequest));
        assert_eq!(ErrorKind::from_status(401), Some(ErrorKind::Unauthorized));
        assert_eq!(ErrorKind::from_status(403), Some(ErrorKind::Forbidden));
        assert_eq!(ErrorKind::from_status(404), Some(ErrorKind::NotFound));
        assert_eq!(ErrorKind::from_status(429), Some(ErrorKind::RateLimited));
    }

    #[test]
    fn whole_5xx_range_is_server_error() {
        for status in 500..=599 {
            assert_eq!(ErrorKind::from_status(status), Some(ErrorKind::ServerError));
        }
        assert_eq!(ErrorKind::from_status(600), None);
    }

    #[test]
    fn other_statuses_have_no_dedicated_kind() {
        for status in [200, 301, 402, 405, 418, 499] {
            assert_eq!(ErrorKind::from_status(status), None, "status {status}");
        }
    }

    #[test]
    fn new_uses_fixed_message() {
        let err = QueryError::new(ErrorKind::NotFound);
        assert_eq!(err.message, "City not found");
        assert_eq!(err.to_string(), "404 Not Found: City not found");
    }

    #[test]
    fn request_failure_passes_text_through() {
        let err = QueryError::request_failure("boom");
        assert_eq!(err.kind, ErrorKind::RequestFailure);
        assert_eq!(err.message, "boom");
        assert!(err.kind.is_transport());
        assert!(!ErrorKind::Unauthorized.is_transport());
    }
}
