use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found – HRMS Lite"/>
        <div class="text-center py-24">
            <p class="text-6xl font-bold text-zinc-300">"404"</p>
            <h1 class="mt-4 text-xl font-semibold text-zinc-900">"Page not found"</h1>
            <p class="mt-2 text-sm text-zinc-500">"The page you are looking for does not exist."</p>
            <A href="/" class="mt-6 inline-flex items-center rounded-lg bg-brand-600 px-4 py-2 text-sm font-semibold text-white hover:bg-brand-700">
                "Back to dashboard"
            </A>
        </div>
    }
}
