use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
    #[prop(optional, into)] action: Option<View>,
) -> impl IntoView {
    let description = (!description.is_empty()).then_some(description);
    view! {
        <div class="text-center py-12 px-4 rounded-xl border-2 border-dashed border-zinc-200 bg-zinc-50">
            <svg class="mx-auto h-12 w-12 text-zinc-400" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M9 13h6m-3-3v6m-9 1V7a2 2 0 012-2h6l2 2h6a2 2 0 012 2v8a2 2 0 01-2 2H5a2 2 0 01-2-2z" />
            </svg>
            <h3 class="mt-2 text-sm font-semibold text-zinc-900">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-zinc-500">{desc}</p>
            })}
            {action.map(|action| view! {
                <div class="mt-4">{action}</div>
            })}
        </div>
    }
}
