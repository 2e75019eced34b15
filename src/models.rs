// src/models.rs
use serde::Serialize;
use serde_json::{Map, Value};

/// One fiscal-year income statement entry as returned by the upstream API.
///
/// Only `date`, `revenue` and `netIncome` are inspected; every other field is
/// passed through untouched.
pub type Record = Map<String, Value>;

pub const DATE_FIELD: &str = "date";
pub const REVENUE_FIELD: &str = "revenue";
pub const NET_INCOME_FIELD: &str = "netIncome";

/// Response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T: Serialize> {
    Success { data: T },
    Error { message: String },
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Success { data }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse::Error {
            message: message.into(),
        }
    }
}
