use crate::api::{ApiClient, ApiError, Employee, NewEmployee};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn create_employee(api: &ApiClient, payload: &NewEmployee) -> Result<Employee, ApiError> {
    api.create_employee(payload).await
}

pub async fn delete_employee(api: &ApiClient, employee_id: &str) -> Result<(), ApiError> {
    api.delete_employee(employee_id).await
}
