mod panel;
pub mod repository;
pub mod utils;
mod view_model;

pub use panel::DashboardPage;
