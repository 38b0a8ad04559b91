pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod not_found;
