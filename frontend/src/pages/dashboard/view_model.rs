use leptos::*;

use super::repository::{self, DashboardData};
use crate::api::{ApiClient, ApiError};
use crate::utils::time::today;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub overview: Resource<u64, Result<DashboardData, ApiError>>,
    reload: RwSignal<u64>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let reload = create_rw_signal(0u64);
        let overview = create_resource(
            move || reload.get(),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_overview(&api, today()).await }
            },
        );
        Self { overview, reload }
    }

    pub fn refetch(&self) {
        self.reload.update(|n| *n += 1);
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    if let Some(existing) = use_context::<DashboardViewModel>() {
        return existing;
    }
    let view_model = DashboardViewModel::new();
    provide_context(view_model);
    view_model
}
