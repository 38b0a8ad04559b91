use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Create payload. The server assigns the row id; `employee_id` is the
/// externally visible identifier and is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Mark payload. The server upserts on `(employee_id, date)`, so marking the
/// same pair again overwrites rather than duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAttendanceSummary {
    pub present: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub not_marked_today: i64,
    #[serde(default)]
    pub departments: Vec<DepartmentCount>,
}

/// The single normalized error shape every gateway failure collapses into.
/// Callers only ever surface `message`; `code` distinguishes transport
/// failures from undecodable payloads in tests and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "UNKNOWN".to_string(),
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn serialize_mark_attendance_payload() {
        let payload = MarkAttendance {
            employee_id: "EMP-1".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["employee_id"], serde_json::json!("EMP-1"));
        assert_eq!(value["date"], serde_json::json!("2024-01-10"));
        assert_eq!(value["status"], serde_json::json!("Present"));
    }

    #[test]
    fn deserialize_attendance_record_with_capitalized_status() {
        let raw = r#"{"id": 7, "employee_id": "EMP-2", "date": "2024-01-09", "status": "Absent"}"#;
        let record: AttendanceRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    }

    #[test]
    fn deserialize_employee_tolerates_missing_row_id() {
        let raw = r#"{
            "employee_id": "EMP-1",
            "full_name": "Priya Sharma",
            "email": "priya@company.com",
            "department": "Engineering"
        }"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(employee.id, 0);
        assert_eq!(employee.department, "Engineering");
    }

    #[test]
    fn deserialize_dashboard_summary_with_departments() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "total_employees": 5,
            "present_today": 3,
            "absent_today": 1,
            "not_marked_today": 1,
            "departments": [
                { "department": "Engineering", "count": 3 },
                { "department": "Design", "count": 2 }
            ]
        }))
        .unwrap();
        assert_eq!(
            summary.present_today + summary.absent_today + summary.not_marked_today,
            summary.total_employees
        );
        let department_total: i64 = summary.departments.iter().map(|d| d.count).sum();
        assert_eq!(department_total, summary.total_employees);
    }

    #[test]
    fn api_error_display_and_string_conversion_match_message() {
        let error = ApiError::request_failed("Email already in use");
        assert_eq!(format!("{}", error), "Email already in use");
        assert_eq!(error.code, "REQUEST_FAILED");

        let raw: String = ApiError::unknown("bad payload").into();
        assert_eq!(raw, "bad payload");
    }
}
