use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{
    ApiError, AttendanceRecord, DashboardSummary, Employee, EmployeeAttendanceSummary,
    MarkAttendance, NewEmployee,
};
use crate::config;

const REQUEST_TIMEOUT_SECS: u64 = 15;
const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Thin client over the attendance REST API. One method per endpoint; every
/// failure, transport or HTTP, comes back as the normalized `ApiError`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from runtime config. Tests
    /// point this at a local mock server.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    async fn base_url(&self) -> String {
        match &self.base_url {
            Some(base_url) => base_url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.base_url().await;
        let response = send(self.client.get(format!("{}/api/employees/", base_url))).await?;
        decode(response).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        let base_url = self.base_url().await;
        let response = send(
            self.client
                .post(format!("{}/api/employees/", base_url))
                .json(payload),
        )
        .await?;
        decode(response).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let base_url = self.base_url().await;
        let response = send(
            self.client
                .delete(format!("{}/api/employees/{}", base_url, employee_id)),
        )
        .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub async fn list_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.base_url().await;
        let mut request = self.client.get(format!("{}/api/attendance/", base_url));
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        let response = send(request).await?;
        decode(response).await
    }

    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let base_url = self.base_url().await;
        let response = send(
            self.client
                .post(format!("{}/api/attendance/", base_url))
                .json(payload),
        )
        .await?;
        decode(response).await
    }

    pub async fn attendance_summary(
        &self,
        employee_id: &str,
    ) -> Result<EmployeeAttendanceSummary, ApiError> {
        let base_url = self.base_url().await;
        let response = send(self.client.get(format!(
            "{}/api/attendance/summary/{}",
            base_url, employee_id
        )))
        .await?;
        decode(response).await
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let base_url = self.base_url().await;
        let response = send(self.client.get(format!("{}/api/dashboard/", base_url))).await?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    // The builder-level timeout is native-only; `send` races the request
    // against a timer instead.
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|err| ApiError::request_failed(transport_message(&err)))
}

#[cfg(target_arch = "wasm32")]
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    use futures::future::{select, Either};

    let request = Box::pin(request.send());
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(
        (REQUEST_TIMEOUT_SECS * 1_000) as u32,
    ));
    match select(request, timeout).await {
        Either::Left((result, _)) => {
            result.map_err(|err| ApiError::request_failed(transport_message(&err)))
        }
        Either::Right(_) => Err(ApiError::request_failed("Request timed out")),
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json()
            .await
            .map_err(|err| ApiError::unknown(transport_message(&err)))
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<Value>().await.ok();
    let message = body
        .as_ref()
        .and_then(extract_error_message)
        .unwrap_or_else(|| fallback_status_message(status));
    ApiError::request_failed(message)
}

/// Probes the error body shapes the server actually sends: `detail`
/// (FastAPI convention) first, then `message`.
fn extract_error_message(body: &Value) -> Option<String> {
    for key in ["detail", "message"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn fallback_status_message(status: StatusCode) -> String {
    format!("Request failed with status {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_detail_over_message() {
        let body = json!({ "detail": "Email already in use", "message": "ignored" });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Email already in use")
        );
    }

    #[test]
    fn error_message_falls_back_to_message_key() {
        let body = json!({ "message": "Duplicate employee id" });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Duplicate employee id")
        );
    }

    #[test]
    fn blank_and_non_string_error_fields_are_ignored() {
        assert_eq!(extract_error_message(&json!({ "detail": "   " })), None);
        assert_eq!(extract_error_message(&json!({ "detail": 42 })), None);
        assert_eq!(extract_error_message(&json!({ "other": "nope" })), None);
        assert_eq!(extract_error_message(&json!([1, 2, 3])), None);
    }

    #[test]
    fn status_fallback_includes_the_status_line() {
        assert_eq!(
            fallback_status_message(StatusCode::INTERNAL_SERVER_ERROR),
            "Request failed with status 500 Internal Server Error"
        );
    }
}
