pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;
pub mod validation;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Route, Router, Routes};

use components::layout::AppLayout;
use components::toast::ToastHost;
use pages::attendance::AttendancePage;
use pages::dashboard::DashboardPage;
use pages::employees::EmployeesPage;
use pages::not_found::NotFoundPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(api::ApiClient::new());
    state::toast::provide_toasts();

    view! {
        <Router>
            <AppLayout>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/employees" view=EmployeesPage/>
                    <Route path="/attendance" view=AttendancePage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </AppLayout>
            <ToastHost/>
        </Router>
    }
}
