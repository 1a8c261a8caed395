//! Employee directory: registration, listing and removal.

use sqlx::SqlitePool;
use tracing::{error, info, instrument};

use crate::error::AppError;
use crate::model::employee::{Employee, NewEmployee};

pub const DUPLICATE_EMPLOYEE_ID: &str = "An employee with this Employee ID already exists";
pub const DUPLICATE_EMAIL: &str = "An employee with this email already exists";

/// Insert a new employee and return the stored row.
#[instrument(name = "employee_create", skip(pool, new), fields(employee_id = %new.employee_id))]
pub async fn create(pool: &SqlitePool, new: &NewEmployee) -> Result<Employee, AppError> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        RETURNING id, employee_id, full_name, email, department, created_at
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.department)
    .fetch_one(pool)
    .await
    .map_err(classify_insert_error)?;

    info!(id = employee.id, "Employee created");
    Ok(employee)
}

/// Tell a duplicate business id or email apart from any other failure.
fn classify_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        let message = db_err.message();
        if message.contains("UNIQUE constraint failed") {
            if message.contains("employees.employee_id") {
                return AppError::conflict(DUPLICATE_EMPLOYEE_ID);
            }
            if message.contains("employees.email") {
                return AppError::conflict(DUPLICATE_EMAIL);
            }
        }
    }

    error!(error = %e, "Failed to create employee");
    AppError::storage("Failed to add employee")
}

/// All employees, newest first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, AppError> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, employee_id, full_name, email, department, created_at
        FROM employees
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch employees");
        AppError::storage("Failed to fetch employees")
    })
}

/// Remove an employee by surrogate id; attendance rows go with it.
#[instrument(name = "employee_delete", skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query(r#"DELETE FROM employees WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to delete employee");
            AppError::storage("Failed to delete employee")
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Employee not found"));
    }

    info!("Employee deleted");
    Ok(())
}
