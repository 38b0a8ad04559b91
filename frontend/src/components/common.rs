use leptos::*;

use crate::api::AttendanceStatus;

/// Attendance status pill. `None` means nothing was marked for the day.
#[component]
pub fn StatusBadge(#[prop(into)] status: MaybeSignal<Option<AttendanceStatus>>) -> impl IntoView {
    view! {
        {move || match status.get() {
            Some(AttendanceStatus::Present) => view! {
                <span class="inline-flex items-center rounded-full bg-emerald-50 text-emerald-700 px-2.5 py-0.5 text-xs font-semibold">
                    "Present"
                </span>
            }
            .into_view(),
            Some(AttendanceStatus::Absent) => view! {
                <span class="inline-flex items-center rounded-full bg-red-50 text-red-600 px-2.5 py-0.5 text-xs font-semibold">
                    "Absent"
                </span>
            }
            .into_view(),
            None => view! {
                <span class="text-xs text-zinc-400 italic">"Not marked"</span>
            }
            .into_view(),
        }}
    }
}
