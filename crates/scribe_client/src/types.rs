use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Transport-level failure before a response arrived.
    Network,
    Timeout,
    /// Non-2xx response status.
    HttpStatus(u16),
    /// 2xx response whose body carried an `error` field; the backend
    /// reports some failures this way and they count as rejections.
    Application,
    /// Body could not be decoded into the expected shape.
    Decode,
    InvalidUrl,
    /// Local runtime could not be brought up.
    Runtime,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network error"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            ApiErrorKind::Application => write!(f, "server error"),
            ApiErrorKind::Decode => write!(f, "decode error"),
            ApiErrorKind::InvalidUrl => write!(f, "invalid url"),
            ApiErrorKind::Runtime => write!(f, "runtime error"),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiErrorKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiErrorKind::Decode, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(ApiErrorKind::InvalidUrl, err.to_string());
    }
    ApiError::new(ApiErrorKind::Network, err.to_string())
}
