use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Stored verbatim; matching is case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
    ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Attendance row joined with the owning employee's name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "full_name": "Jane Doe",
        "date": "2024-06-01",
        "status": "Present",
        "created_at": "2024-06-01T09:30:00.000Z"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    /// Null when the owning employee row is gone
    #[schema(example = "Jane Doe", nullable = true)]
    pub full_name: Option<String>,

    #[schema(example = "2024-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(
        example = "2024-06-01T09:30:00.000Z",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceStats {
    #[schema(example = 20)]
    pub total_days: i64,
    #[schema(example = 18)]
    pub present_days: i64,
    #[schema(example = 2)]
    pub absent_days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert_eq!(AttendanceStatus::from_str("Present"), Ok(AttendanceStatus::Present));
        assert_eq!(AttendanceStatus::from_str("Absent"), Ok(AttendanceStatus::Absent));
        assert!(AttendanceStatus::from_str("present").is_err());
        assert!(AttendanceStatus::from_str("ABSENT").is_err());
    }

    #[test]
    fn record_serializes_date_as_plain_iso_day() {
        let record = AttendanceRecord {
            id: 7,
            employee_id: "EMP001".into(),
            full_name: None,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: AttendanceStatus::Absent,
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["status"], "Absent");
        assert!(value["full_name"].is_null());
    }
}
