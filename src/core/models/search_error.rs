use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Empty search term")]
    EmptySearchTerm,
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Transport(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            SearchError::Transport(format!("Failed to connect: {}", err))
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_error_displays_code() {
        assert_eq!(SearchError::HttpStatus(404).to_string(), "HTTP status 404");
    }

    #[test]
    fn test_serde_error_converts_to_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: SearchError = err.into();

        assert!(matches!(converted, SearchError::Decode(_)));
    }
}
