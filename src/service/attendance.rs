//! Attendance ledger.
//!
//! One record exists per (employee, date). Marking the same day again
//! overwrites the status of that record instead of adding a second one; the
//! unique index on `attendance (employee_id, date)` is what actually holds the
//! invariant when two writers race, and the loser gets a storage failure.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;
use crate::model::attendance::{AttendanceRecord, AttendanceStats, AttendanceStatus};
use crate::utils::db_utils::SqlFilter;

const RECORD_SELECT: &str = r#"
    SELECT a.id, a.employee_id, e.full_name, a.date, a.status, a.created_at
    FROM attendance a
    LEFT JOIN employees e ON e.employee_id = a.employee_id
"#;

/// Optional exact-match filters for [`list`].
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
}

fn mark_failed(e: sqlx::Error) -> AppError {
    error!(error = %e, "Failed to mark attendance");
    AppError::storage("Failed to mark attendance")
}

fn fetch_failed(e: sqlx::Error) -> AppError {
    error!(error = %e, "Failed to fetch attendance");
    AppError::storage("Failed to fetch attendance")
}

/// Insert the day's record, or overwrite its status when one exists. Yields
/// no row when the employee is unknown.
const UPSERT: &str = r#"
    INSERT INTO attendance (employee_id, date, status)
    SELECT employee_id, ?, ? FROM employees WHERE employee_id = ?
    ON CONFLICT (employee_id, date) DO UPDATE SET status = excluded.status
    RETURNING id
"#;

/// Upsert the status for `(employee_id, date)`.
///
/// The write is the first statement of the transaction, so it takes the write
/// lock up front instead of upgrading a read. The read-back shares the
/// transaction; any early return drops it and rolls back.
#[instrument(name = "attendance_mark", skip(pool))]
pub async fn mark(
    pool: &SqlitePool,
    employee_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<AttendanceRecord, AppError> {
    let mut tx = pool.begin().await.map_err(mark_failed)?;

    let id: Option<i64> = sqlx::query_scalar(UPSERT)
        .bind(date)
        .bind(status)
        .bind(employee_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(mark_failed)?;

    let Some(id) = id else {
        info!("Employee not found");
        return Err(AppError::not_found("Employee not found"));
    };
    debug!(id, "Attendance row written");

    let sql = format!("{RECORD_SELECT} WHERE a.id = ?");
    let record = sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(mark_failed)?;

    tx.commit().await.map_err(mark_failed)?;

    info!(id, "Attendance marked");
    Ok(record)
}

/// Records matching `filter`, latest day first and, within a day, latest
/// created first.
pub async fn list(
    pool: &SqlitePool,
    filter: AttendanceFilter,
) -> Result<Vec<AttendanceRecord>, AppError> {
    let mut conditions = SqlFilter::new();
    conditions
        .push_opt("a.employee_id = ?", filter.employee_id)
        .push_opt("a.date = ?", filter.date);

    let sql = format!(
        "{RECORD_SELECT} {} ORDER BY a.date DESC, a.created_at DESC, a.id DESC",
        conditions.where_clause()
    );
    debug!(sql = %sql, "Fetching attendance");

    conditions
        .bind_all(sqlx::query_as::<_, AttendanceRecord>(&sql))
        .fetch_all(pool)
        .await
        .map_err(fetch_failed)
}

/// Records for one employee, latest day first.
pub async fn list_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<AttendanceRecord>, AppError> {
    let mut conditions = SqlFilter::new();
    conditions
        .push("a.employee_id = ?", employee_id.into())
        .push_opt("a.date = ?", date);

    let sql = format!(
        "{RECORD_SELECT} {} ORDER BY a.date DESC",
        conditions.where_clause()
    );
    debug!(sql = %sql, "Fetching attendance for employee");

    conditions
        .bind_all(sqlx::query_as::<_, AttendanceRecord>(&sql))
        .fetch_all(pool)
        .await
        .map_err(fetch_failed)
}

/// Day counts for `employee_id`. Unknown employees simply have no days.
pub async fn stats(pool: &SqlitePool, employee_id: &str) -> Result<AttendanceStats, AppError> {
    sqlx::query_as::<_, AttendanceStats>(
        r#"
        SELECT
            COUNT(*) AS total_days,
            COALESCE(SUM(CASE WHEN status = 'Present' THEN 1 ELSE 0 END), 0) AS present_days,
            COALESCE(SUM(CASE WHEN status = 'Absent' THEN 1 ELSE 0 END), 0) AS absent_days
        FROM attendance
        WHERE employee_id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!(error = %e, employee_id, "Failed to fetch attendance stats");
        AppError::storage("Failed to fetch stats")
    })
}
