use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Largest page the client exposes to callers. The server is always asked for
/// one row more than this so the extra row can flag a following page.
pub const MAX_LIMIT: i64 = 25;

pub const ORDER_BY_ASC: i64 = -1;
pub const ORDER_BY_AS_IS: i64 = 0;
pub const ORDER_BY_DESC: i64 = 1;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    pub query: String,
    pub order_field: String,
    pub order_by: i64,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_order_field(mut self, order_field: impl Into<String>) -> Self {
        self.order_field = order_field.into();
        self
    }

    pub fn with_order_by(mut self, order_by: i64) -> Self {
        self.order_by = order_by;
        self
    }

    /// Limit visible to the caller, capped at [`MAX_LIMIT`].
    pub fn capped_limit(&self) -> i64 {
        self.limit.min(MAX_LIMIT)
    }

    /// Limit actually sent upstream.
    pub fn fetch_limit(&self) -> i64 {
        self.capped_limit() + 1
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    pub next_page: bool,
}

/// Error payload returned by the search server alongside a 400.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorBody {
    /// Known code carried by this body, `None` when the server sent something
    /// the client does not recognise.
    pub fn code(&self) -> Option<ErrorCode> {
        match self.error.as_str() {
            "ErrorBadOrderField" => Some(ErrorCode::BadOrderField),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorCode {
    #[strum(serialize = "ErrorBadOrderField")]
    BadOrderField,
}
