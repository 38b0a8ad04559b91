use leptos::*;

use crate::state::toast::{use_toasts, Toast, ToastKind};

/// Fixed top-right stack of notifications. Clicking a toast dismisses it;
/// on the web each toast also dismisses itself after a few seconds.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let list = toasts.list();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || list.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "rounded-lg border border-emerald-200 bg-emerald-50 text-emerald-800 px-4 py-3 text-sm shadow cursor-pointer",
                        ToastKind::Error => "rounded-lg border border-red-200 bg-red-50 text-red-700 px-4 py-3 text-sm shadow cursor-pointer",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
