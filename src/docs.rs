use crate::api::attendance::MarkAttendance;
use crate::api::employee::CreateEmployee;
use crate::api::health::HealthResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStats, AttendanceStatus};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small **Human Resource Management** backend covering two things:

- **Employees**: register, list and remove employees. Employee IDs and emails are unique.
- **Attendance**: mark an employee Present or Absent for a day. Marking the same day
  again overwrites the earlier status, so there is never more than one record per
  employee and date. Per-employee day counts are available from the stats endpoint.

Removing an employee removes their whole attendance history.

### Errors
Every failure is a JSON object with an `error` label and a displayable `message`;
validation failures also carry the full `messages` list.

---
Built with **Rust**, **Actix Web**, **SQLx** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::employee_attendance,
        crate::api::attendance::attendance_stats,
        crate::api::attendance::mark_attendance
    ),
    components(
        schemas(
            HealthResponse,
            Employee,
            CreateEmployee,
            AttendanceRecord,
            AttendanceStats,
            AttendanceStatus,
            MarkAttendance
        )
    ),
    tags(
        (name = "Health", description = "Liveness of the service and its store"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
