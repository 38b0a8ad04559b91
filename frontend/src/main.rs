#[cfg(target_arch = "wasm32")]
fn main() {
    use hrms_lite_frontend::{config, App};
    use leptos::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting HRMS Lite");

    wasm_bindgen_futures::spawn_local(async {
        config::init().await;
        mount_to_body(|| view! { <App/> });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The app only mounts in the browser; host builds exist for the test
    // suite.
}
