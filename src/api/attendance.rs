use std::str::FromStr;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::validation::{STATUS_MESSAGE, require_date, validate_iso_date, validate_status};
use crate::error::AppError;
use crate::model::attendance::AttendanceStatus;
use crate::service::attendance::{self as ledger, AttendanceFilter};

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP001")]
    #[validate(length(min = 1, message = "Employee ID is required"))]
    pub employee_id: String,
    #[schema(example = "2024-06-01", format = "date")]
    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
    #[schema(example = "Present", value_type = AttendanceStatus)]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Only records of this employee
    #[param(example = "EMP001")]
    pub employee_id: Option<String>,
    /// Only records on this day (YYYY-MM-DD)
    #[param(example = "2024-06-01")]
    #[validate(custom(function = "validate_iso_date"))]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Only records on this day (YYYY-MM-DD)
    #[param(example = "2024-06-01")]
    #[validate(custom(function = "validate_iso_date"))]
    pub date: Option<String>,
}

/// An empty query value (`?date=`) filters nothing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn optional_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>, AppError> {
    value.map(require_date).transpose()
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Matching records, latest day first", body = [AttendanceRecord]),
        (status = 422, description = "Malformed date filter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<impl Responder, AppError> {
    let mut query = query.into_inner();
    query.date = present(query.date);
    query.validate()?;

    let filter = AttendanceFilter {
        date: optional_date(query.date.as_deref())?,
        employee_id: present(query.employee_id),
    };
    let records = ledger::list(pool.get_ref(), filter).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Attendance for one employee
#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee business identifier"),
        DateQuery
    ),
    responses(
        (status = 200, description = "Records of the employee, latest day first", body = [AttendanceRecord]),
        (status = 422, description = "Malformed date filter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<DateQuery>,
) -> Result<impl Responder, AppError> {
    let employee_id = path.into_inner();
    let mut query = query.into_inner();
    query.date = present(query.date);
    query.validate()?;

    let date = optional_date(query.date.as_deref())?;
    let records = ledger::list_by_employee(pool.get_ref(), &employee_id, date).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Attendance statistics
#[utoipa::path(
    get,
    path = "/api/attendance/stats/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee business identifier")
    ),
    responses(
        (status = 200, description = "Day counts; all zero when nothing is recorded", body = AttendanceStats),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn attendance_stats(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let employee_id = path.into_inner();

    let stats = ledger::stats(pool.get_ref(), &employee_id).await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded or overwritten", body = AttendanceRecord),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Not Found",
            "message": "Employee not found"
        })),
        (status = 422, description = "Invalid payload", body = Object, example = json!({
            "error": "Validation Error",
            "message": "Date must be in YYYY-MM-DD format",
            "messages": ["Date must be in YYYY-MM-DD format"]
        })),
        (status = 500, description = "Failed to mark attendance", body = Object, example = json!({
            "error": "Internal Server Error",
            "message": "Failed to mark attendance"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<impl Responder, AppError> {
    let mut payload = payload.into_inner();
    payload.employee_id = payload.employee_id.trim().to_string();
    payload.validate()?;

    let date = require_date(&payload.date)?;
    let status = AttendanceStatus::from_str(&payload.status)
        .map_err(|_| AppError::validation(STATUS_MESSAGE))?;

    let record = ledger::mark(pool.get_ref(), &payload.employee_id, date, status).await?;

    Ok(HttpResponse::Created().json(record))
}
