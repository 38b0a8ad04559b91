use leptos::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] text: String) -> impl IntoView {
    let text = if text.is_empty() {
        "Loading...".to_string()
    } else {
        text
    };
    view! {
        <div class="flex items-center justify-center gap-3 py-12 text-zinc-500">
            <span class="h-5 w-5 animate-spin rounded-full border-2 border-zinc-300 border-t-brand-600" aria-hidden="true"></span>
            <span class="text-sm">{text}</span>
        </div>
    }
}
