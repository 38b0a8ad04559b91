use leptos::*;

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full rounded-lg border border-red-400 bg-white px-3 py-2 text-sm text-zinc-900 focus:outline-none focus:ring-2 focus:ring-red-300"
    } else {
        "w-full rounded-lg border border-zinc-300 bg-white px-3 py-2 text-sm text-zinc-900 focus:outline-none focus:ring-2 focus:ring-brand-300"
    }
}

#[component]
pub fn FieldLabel(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-zinc-700 mb-1">{text}</label>
    }
}

/// Field-level validation message. Renders nothing while the field is clean.
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="mt-1 text-xs text-red-600">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_error_renders_only_when_present() {
        let html = render_to_string(|| {
            let error = Signal::derive(|| Some("Enter a valid email address".to_string()));
            view! { <FieldError error=error/> }
        });
        assert!(html.contains("Enter a valid email address"));

        let html = render_to_string(|| {
            let error = Signal::derive(|| None::<String>);
            view! { <FieldError error=error/> }
        });
        assert!(!html.contains("text-red-600"));
    }
}
