// src/services/query.rs
//! Filtering and sorting over cached income statements.
//!
//! Bounds are inclusive. Dates are compared as strings, which orders ISO-8601
//! calendar dates correctly.
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{Record, DATE_FIELD, NET_INCOME_FIELD, REVENUE_FIELD};

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("No data available. Fetch data first.")]
    NoData,
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending.
    pub fn from_param(raw: &str) -> Self {
        if raw == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
    pub min_net_income: Option<f64>,
    pub max_net_income: Option<f64>,
    pub sort_by: String,
    pub order: SortOrder,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            start_date: None,
            end_date: None,
            min_revenue: None,
            max_revenue: None,
            min_net_income: None,
            max_net_income: None,
            sort_by: DATE_FIELD.to_string(),
            order: SortOrder::Asc,
        }
    }
}

fn text_param(query: &HashMap<String, String>, name: &str) -> Option<String> {
    query.get(name).filter(|v| !v.is_empty()).cloned()
}

fn number_param(
    query: &HashMap<String, String>,
    name: &'static str,
) -> Result<Option<f64>, QueryError> {
    let Some(raw) = query.get(name).map(|v| v.trim()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(QueryError::InvalidParameter {
            name,
            value: raw.to_string(),
        }),
    }
}

impl FilterParams {
    /// Build parameters from a decoded query string. Empty values count as absent,
    /// except `sort_by` where an empty name is kept and later fails the field
    /// check. Unknown keys are ignored.
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, QueryError> {
        let defaults = FilterParams::default();
        Ok(FilterParams {
            start_date: text_param(query, "start_date"),
            end_date: text_param(query, "end_date"),
            min_revenue: number_param(query, "min_revenue")?,
            max_revenue: number_param(query, "max_revenue")?,
            min_net_income: number_param(query, "min_net_income")?,
            max_net_income: number_param(query, "max_net_income")?,
            sort_by: query.get("sort_by").cloned().unwrap_or(defaults.sort_by),
            order: query
                .get("order")
                .map(|o| SortOrder::from_param(o))
                .unwrap_or(defaults.order),
        })
    }

    /// Drop every numeric bound equal to zero. Legacy clients send `0` to mean
    /// "unbounded".
    pub fn without_zero_bounds(mut self) -> Self {
        for bound in [
            &mut self.min_revenue,
            &mut self.max_revenue,
            &mut self.min_net_income,
            &mut self.max_net_income,
        ] {
            if *bound == Some(0.0) {
                *bound = None;
            }
        }
        self
    }
}

fn in_range<T: PartialOrd + ?Sized>(value: Option<&T>, min: Option<&T>, max: Option<&T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    match value {
        Some(v) => min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m),
        None => false,
    }
}

fn number_field(record: &Record, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values used as sort keys.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

// Missing fields sort as 0.
fn sort_key<'a>(record: &'a Record, field: &str, zero: &'a Value) -> &'a Value {
    record.get(field).unwrap_or(zero)
}

/// Apply the date, revenue and net income bounds, then sort by `params.sort_by`.
pub fn filter_sort(records: &[Record], params: &FilterParams) -> Result<Vec<Record>, QueryError> {
    if records.is_empty() {
        return Err(QueryError::NoData);
    }

    let mut filtered: Vec<Record> = records
        .iter()
        .filter(|r| {
            in_range(
                r.get(DATE_FIELD).and_then(Value::as_str),
                params.start_date.as_deref(),
                params.end_date.as_deref(),
            )
        })
        .filter(|r| {
            in_range(
                number_field(r, REVENUE_FIELD).as_ref(),
                params.min_revenue.as_ref(),
                params.max_revenue.as_ref(),
            )
        })
        .filter(|r| {
            in_range(
                number_field(r, NET_INCOME_FIELD).as_ref(),
                params.min_net_income.as_ref(),
                params.max_net_income.as_ref(),
            )
        })
        .cloned()
        .collect();

    // Nothing survived: check the name against the input so a bogus field still fails.
    let known_field = if filtered.is_empty() {
        records.iter().any(|r| r.contains_key(&params.sort_by))
    } else {
        filtered.iter().any(|r| r.contains_key(&params.sort_by))
    };
    if !known_field {
        return Err(QueryError::InvalidSortField(params.sort_by.clone()));
    }

    let zero = Value::from(0);
    let field = params.sort_by.as_str();
    match params.order {
        SortOrder::Asc => filtered.sort_by(|a, b| {
            compare_values(sort_key(a, field, &zero), sort_key(b, field, &zero))
        }),
        SortOrder::Desc => filtered.sort_by(|a, b| {
            compare_values(sort_key(b, field, &zero), sort_key(a, field, &zero))
        }),
    }

    Ok(filtered)
}
