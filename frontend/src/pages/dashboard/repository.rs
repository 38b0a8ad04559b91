use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, AttendanceRecord, DashboardSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardSummary,
    pub today_records: Vec<AttendanceRecord>,
}

/// One synchronized load for the overview page: the summary plus today's
/// records. Either failure fails the whole load; the panel offers a retry.
pub async fn fetch_overview(api: &ApiClient, today: NaiveDate) -> Result<DashboardData, ApiError> {
    let stats = api.dashboard_summary().await?;
    let today_records = api.list_attendance(Some(today)).await?;
    Ok(DashboardData {
        stats,
        today_records,
    })
}
