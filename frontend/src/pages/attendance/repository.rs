use std::collections::HashMap;

use futures::future::join_all;

use crate::api::{
    ApiClient, ApiError, AttendanceRecord, Employee, EmployeeAttendanceSummary, MarkAttendance,
};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn fetch_records(api: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.list_attendance(None).await
}

pub async fn mark(api: &ApiClient, payload: &MarkAttendance) -> Result<AttendanceRecord, ApiError> {
    api.mark_attendance(payload).await
}

/// One summary request per employee, fired concurrently. A failed summary
/// leaves its cell blank rather than failing the whole board, so failures
/// are logged and skipped.
pub async fn fetch_summaries(
    api: &ApiClient,
    employees: &[Employee],
) -> HashMap<String, EmployeeAttendanceSummary> {
    let results = join_all(employees.iter().map(|employee| async move {
        let result = api.attendance_summary(&employee.employee_id).await;
        (employee.employee_id.clone(), result)
    }))
    .await;

    let mut summaries = HashMap::new();
    for (employee_id, result) in results {
        match result {
            Ok(summary) => {
                summaries.insert(employee_id, summary);
            }
            Err(err) => {
                log::warn!("summary fetch failed for {}: {}", employee_id, err);
            }
        }
    }
    summaries
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn employee(employee_id: &str) -> Employee {
        Employee {
            id: 0,
            employee_id: employee_id.into(),
            full_name: "Priya Sharma".into(),
            email: "priya@company.com".into(),
            department: "Engineering".into(),
        }
    }

    #[tokio::test]
    async fn summaries_are_keyed_by_employee_and_skip_failures() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/summary/EMP-1");
            then.status(200).json_body(json!({ "present": 4, "total": 5 }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/summary/EMP-2");
            then.status(500).body("boom");
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/summary/EMP-3");
            then.status(200).json_body(json!({ "present": 2, "total": 2 }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let roster = [employee("EMP-1"), employee("EMP-2"), employee("EMP-3")];

        let summaries = fetch_summaries(&client, &roster).await;

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries["EMP-1"].present, 4);
        assert_eq!(summaries["EMP-3"].total, 2);
        // The failed cell is simply absent; the caller renders it blank.
        assert!(!summaries.contains_key("EMP-2"));
    }

    #[tokio::test]
    async fn an_empty_roster_yields_an_empty_map_without_requests() {
        let server = MockServer::start_async().await;
        let any_summary = server.mock(|when, then| {
            when.method(GET).path_contains("/api/attendance/summary/");
            then.status(200).json_body(json!({ "present": 0, "total": 0 }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let summaries = fetch_summaries(&client, &[]).await;

        assert!(summaries.is_empty());
        any_summary.assert_hits_async(0).await;
    }
}
