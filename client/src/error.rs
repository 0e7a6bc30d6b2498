use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("limit must be > 0")]
    NegativeLimit,

    #[error("offset must be > 0")]
    NegativeOffset,

    #[error("Bad AccessToken")]
    Unauthorized,

    #[error("SearchServer fatal error")]
    ServerFatal,

    #[error("OrderFeld {0} invalid")]
    InvalidOrderField(String),

    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    #[error("cant unpack error json: {0}")]
    UnpackErrorBody(DecodeError),

    #[error("cant unpack result json: {0}")]
    UnpackResult(DecodeError),

    /// Carries the encoded query string that was sent.
    #[error("timeout for {0}")]
    Timeout(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl SearchError {
    /// True for errors raised before any request left the client.
    pub fn is_validation(&self) -> bool {
        matches!(self, SearchError::NegativeLimit | SearchError::NegativeOffset)
    }
}

/// Why a response body could not be decoded.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected end of JSON input")]
    UnexpectedEnd,

    #[error(transparent)]
    Malformed(serde_json::Error),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_eof() {
            DecodeError::UnexpectedEnd
        } else {
            DecodeError::Malformed(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
