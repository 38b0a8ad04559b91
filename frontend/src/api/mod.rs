mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    ApiError, AttendanceRecord, AttendanceStatus, DashboardSummary, DepartmentCount, Employee,
    EmployeeAttendanceSummary, MarkAttendance, NewEmployee,
};
