use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Transport(String),
    Status(u16, String),
    Decode(String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code, context) => {
                write!(f, "Request failed with status {}: {}", code, context)
            }
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
