mod error;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

pub use error::{DecodeError, Result, SearchError};
pub use usersearch_types::{ErrorBody, ErrorCode, SearchRequest, SearchResponse, User, MAX_LIMIT};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

const ACCESS_TOKEN_HEADER: &str = "AccessToken";

#[derive(Clone, Debug)]
pub struct SearchClient {
    http: reqwest::Client,
    access_token: String,
    base_url: String,
    timeout: Duration,
}

/// Coarse shape of a search server reply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum StatusClass {
    Unauthorized,
    ServerFault,
    BadRequest,
    Success,
    Other(u16),
}

impl From<StatusCode> for StatusClass {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => StatusClass::Unauthorized,
            StatusCode::BAD_REQUEST => StatusClass::BadRequest,
            StatusCode::OK => StatusClass::Success,
            s if s.is_server_error() => StatusClass::ServerFault,
            s => StatusClass::Other(s.as_u16()),
        }
    }
}

impl SearchClient {
    pub fn new(access_token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token,
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn find_users(&self, req: &SearchRequest) -> Result<SearchResponse> {
        validate(req)?;

        let request = self
            .http
            .get(&self.base_url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .query(&[
                ("limit", req.fetch_limit().to_string()),
                ("offset", req.offset.to_string()),
                ("order_by", req.order_by.to_string()),
                ("order_field", req.order_field.clone()),
                ("query", req.query.clone()),
            ])
            .timeout(self.timeout)
            .build()
            .map_err(|e| SearchError::Unknown(e.to_string()))?;

        let sent_query = request.url().query().unwrap_or_default().to_string();
        debug!(url = %request.url(), "send search request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| transport_error(e, &sent_query))?;

        let status = response.status();
        trace!(status = status.as_u16(), "search response received");

        match StatusClass::from(status) {
            StatusClass::Unauthorized => Err(SearchError::Unauthorized),
            StatusClass::ServerFault => Err(SearchError::ServerFatal),
            StatusClass::BadRequest => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| transport_error(e, &sent_query))?;
                let error_body: ErrorBody =
                    decode(&body).map_err(SearchError::UnpackErrorBody)?;
                match error_body.code() {
                    Some(ErrorCode::BadOrderField) => {
                        Err(SearchError::InvalidOrderField(req.order_field.clone()))
                    }
                    None => Err(SearchError::UnknownBadRequest(error_body.error)),
                }
            }
            StatusClass::Success => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| transport_error(e, &sent_query))?;
                let users: Vec<User> = decode(&body).map_err(SearchError::UnpackResult)?;
                Ok(paginate(users, req.capped_limit()))
            }
            StatusClass::Other(code) => Err(SearchError::Unknown(format!(
                "unexpected status code {}",
                code
            ))),
        }
    }

    /// Walks every page of `req` starting at its offset and returns the
    /// concatenated users in server order.
    pub async fn find_all_users(&self, req: &SearchRequest) -> Result<Vec<User>> {
        let mut req = req.clone();
        let mut users = Vec::new();

        loop {
            let page = self.find_users(&req).await?;
            let fetched = page.users.len();
            users.extend(page.users);

            if !page.next_page || fetched == 0 {
                break;
            }
            req.offset += fetched as i64;
            debug!(offset = req.offset, total = users.len(), "fetch next page");
        }

        Ok(users)
    }
}

fn validate(req: &SearchRequest) -> Result<()> {
    if req.limit < 0 {
        return Err(SearchError::NegativeLimit);
    }
    if req.offset < 0 {
        return Err(SearchError::NegativeOffset);
    }
    Ok(())
}

fn transport_error(err: reqwest::Error, sent_query: &str) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(sent_query.to_string())
    } else {
        SearchError::Unknown(err.to_string())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> std::result::Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError::from)
}

/// `users` holds one extra row when another page exists.
fn paginate(mut users: Vec<User>, limit: i64) -> SearchResponse {
    let next_page = users.len() as i64 == limit + 1;
    if next_page {
        users.truncate(limit as usize);
    }
    SearchResponse { users, next_page }
}
