use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;
use crate::model::employee::NewEmployee;
use crate::service::employee as directory;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001")]
    #[validate(length(min = 1, message = "Employee ID cannot be empty"))]
    pub employee_id: String,
    #[schema(example = "Jane Doe")]
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,
    #[schema(example = "jane@company.com", format = "email")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[schema(example = "Engineering")]
    #[validate(length(min = 1, message = "Department cannot be empty"))]
    pub department: String,
}

impl CreateEmployee {
    /// Trim every field and lowercase the email.
    fn normalized(self) -> Self {
        Self {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            department: self.department.trim().to_string(),
        }
    }
}

impl From<CreateEmployee> for NewEmployee {
    fn from(value: CreateEmployee) -> Self {
        NewEmployee {
            employee_id: value.employee_id,
            full_name: value.full_name,
            email: value.email,
            department: value.department,
        }
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = [Employee]),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Internal Server Error",
            "message": "Failed to fetch employees"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let employees = directory::list(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 409, description = "Duplicate employee ID or email", body = Object, example = json!({
            "error": "Conflict",
            "message": "An employee with this Employee ID already exists"
        })),
        (status = 422, description = "Invalid payload", body = Object, example = json!({
            "error": "Validation Error",
            "message": "Invalid email format",
            "messages": ["Invalid email format"]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, AppError> {
    let payload = payload.into_inner().normalized();
    payload.validate()?;

    let employee = directory::create(pool.get_ref(), &payload.into()).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Numeric employee record id")
    ),
    responses(
        (status = 204, description = "Employee and its attendance deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Not Found",
            "message": "Employee not found"
        })),
        (status = 422, description = "Id is not a number"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let id = path.into_inner();

    directory::delete(pool.get_ref(), id).await?;

    Ok(HttpResponse::NoContent().finish())
}
