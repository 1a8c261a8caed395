//! Request-shape checks shared by the handlers.

use std::borrow::Cow;
use std::str::FromStr;

use actix_web::{HttpRequest, error::JsonPayloadError, error::PathError, error::QueryPayloadError, web};
use chrono::NaiveDate;
use tracing::debug;
use validator::ValidationError;

use crate::error::AppError;
use crate::model::attendance::AttendanceStatus;

pub const DATE_FORMAT_MESSAGE: &str = "Date must be in YYYY-MM-DD format";
pub const STATUS_MESSAGE: &str = "Status must be either Present or Absent";

/// Strict `YYYY-MM-DD` that also names a real calendar day.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    match parse_iso_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date").with_message(Cow::Borrowed(DATE_FORMAT_MESSAGE))),
    }
}

pub fn validate_status(value: &str) -> Result<(), ValidationError> {
    AttendanceStatus::from_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("status").with_message(Cow::Borrowed(STATUS_MESSAGE)))
}

/// Parse a date already accepted by [`validate_iso_date`].
pub fn require_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_iso_date(value).ok_or_else(|| AppError::validation(DATE_FORMAT_MESSAGE))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "Rejected JSON body");
        AppError::validation(format!("Invalid request body: {err}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "Rejected query string");
        AppError::validation(format!("Invalid query string: {err}")).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "Rejected path parameter");
        AppError::validation("ID must be a valid number").into()
    })
}
