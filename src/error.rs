use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Coarse classification of an [`ApiError`], used by the retry policy and by
/// callers that only care about what kind of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AuthorizationFailure,
    OverloadFailure,
    GenericRequestFailure,
    InvalidArgument,
    NetworkFailure,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(
        "the server refused this request because it requires authorization; \
         try logging in and repeating the request\n\
         --Status Code   : {status}\n--Request to    : {url}\n--Response Body : {body}"
    )]
    Authorization {
        status: u16,
        url: String,
        body: String,
    },
    #[error(
        "the server closed the connection, probably because the request was too large \
         or the server is under heavy load; try sending less data at once\n\
         --Status Code   : {status}\n--Request to    : {url}\n--Response Body : {body}"
    )]
    Overload {
        status: u16,
        url: String,
        body: String,
    },
    #[error(
        "something went wrong with the request\n\
         --Status Code   : {status}\n--Request to    : {url}\n--Response Body : {body}"
    )]
    Request {
        status: u16,
        url: String,
        body: String,
    },
    #[error("login response carried no token\n--Request to    : {url}\n--Response Body : {body}")]
    MissingToken { url: String, body: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid API endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("network error while requesting {url}: {source}")]
    Network {
        url: String,
        source: Box<ureq::Error>,
    },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authorization { .. } => ErrorKind::AuthorizationFailure,
            Self::Overload { .. } => ErrorKind::OverloadFailure,
            Self::Request { .. } | Self::MissingToken { .. } => ErrorKind::GenericRequestFailure,
            Self::InvalidArgument(_) | Self::InvalidEndpoint { .. } => ErrorKind::InvalidArgument,
            Self::Network { .. } => ErrorKind::NetworkFailure,
        }
    }

    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::AuthorizationFailure
    }

    /// HTTP status code of the response that caused this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authorization { status, .. }
            | Self::Overload { status, .. }
            | Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the request that caused this error, if a request was made.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Authorization { url, .. }
            | Self::Overload { url, .. }
            | Self::Request { url, .. }
            | Self::MissingToken { url, .. }
            | Self::Network { url, .. } => Some(url),
            _ => None,
        }
    }

    pub(crate) fn network(url: &str, source: ureq::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            source: Box::new(source),
        }
    }
}
