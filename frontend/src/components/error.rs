use leptos::*;

/// Inline failure panel for background list loads. The last good data stays
/// in the synchronizer; this replaces the list area with a retry affordance.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-xl space-y-2 my-2">
            <div class="font-semibold">"Something went wrong"</div>
            <p class="text-sm">{move || message.get()}</p>
            {on_retry.map(|on_retry| view! {
                <button
                    type="button"
                    class="text-sm font-semibold underline hover:no-underline"
                    on:click=move |_| on_retry.call(())
                >
                    "Try again"
                </button>
            })}
        </div>
    }
}
