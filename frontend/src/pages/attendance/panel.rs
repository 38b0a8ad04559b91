use leptos::*;
use leptos_meta::Title;

use super::view_model::{use_attendance_view_model, AttendanceViewModel};
use crate::api::{AttendanceStatus, Employee};
use crate::components::common::StatusBadge;
use crate::components::empty_state::EmptyState;
use crate::components::error::ErrorMessage;
use crate::components::forms::{input_class, FieldError, FieldLabel};
use crate::components::loading::LoadingSpinner;
use crate::state::sync::SyncPhase;
use crate::utils::time::{format_short_date, today_string};

#[component]
pub fn AttendancePage() -> impl IntoView {
    let view_model = use_attendance_view_model();

    view! {
        <Title text="Attendance – HRMS Lite"/>
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-zinc-900">"Attendance"</h1>
                <p class="text-sm text-zinc-500">"Mark and review attendance records"</p>
            </div>
            <MarkForm view_model=view_model/>
            <TodayBoard view_model=view_model/>
            <RecordsList view_model=view_model/>
        </div>
    }
}

#[component]
fn MarkForm(view_model: AttendanceViewModel) -> impl IntoView {
    let form = view_model.form;
    let errors = view_model.errors;
    let submitting = view_model.submitting;
    let employees = view_model.employees;

    let employee_error = Signal::derive(move || {
        errors.with(|errors| errors.get("employee_id").map(str::to_string))
    });
    let date_error =
        Signal::derive(move || errors.with(|errors| errors.get("date").map(str::to_string)));

    view! {
        <form
            class="bg-white rounded-xl border border-zinc-200 p-5 grid grid-cols-1 sm:grid-cols-3 gap-4"
            on:submit=move |ev| {
                ev.prevent_default();
                view_model.submit();
            }
        >
            <div>
                <FieldLabel text="Employee"/>
                <select
                    class=move || input_class(employee_error.get().is_some())
                    prop:value=move || form.employee_id.get()
                    on:change=move |ev| {
                        form.employee_id.set(event_target_value(&ev));
                        view_model.edit_field("employee_id");
                    }
                >
                    <option value="">"Select an employee"</option>
                    {move || employees
                        .items()
                        .into_iter()
                        .map(|employee| view! {
                            <option value=employee.employee_id.clone()>
                                {format!("{} ({})", employee.full_name, employee.employee_id)}
                            </option>
                        })
                        .collect_view()}
                </select>
                <FieldError error=employee_error/>
            </div>
            <div>
                <FieldLabel text="Date"/>
                <input
                    type="date"
                    class=move || input_class(date_error.get().is_some())
                    max=today_string()
                    prop:value=move || form.date.get()
                    on:input=move |ev| {
                        form.date.set(event_target_value(&ev));
                        view_model.edit_field("date");
                    }
                />
                <FieldError error=date_error/>
            </div>
            <div>
                <FieldLabel text="Status"/>
                <select
                    class=input_class(false)
                    prop:value=move || form.status.get().as_str().to_string()
                    on:change=move |ev| {
                        let status = if event_target_value(&ev) == "Absent" {
                            AttendanceStatus::Absent
                        } else {
                            AttendanceStatus::Present
                        };
                        form.status.set(status);
                    }
                >
                    <option value="Present">"Present"</option>
                    <option value="Absent">"Absent"</option>
                </select>
            </div>
            <div class="sm:col-span-3 flex justify-end">
                <button
                    type="submit"
                    class="inline-flex items-center rounded-lg bg-brand-600 px-4 py-2 text-sm font-semibold text-white hover:bg-brand-700 disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Saving..." } else { "Save Attendance" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn TodayBoard(view_model: AttendanceViewModel) -> impl IntoView {
    let state = view_model.employees.signal();

    view! {
        <div class="bg-white rounded-xl border border-zinc-200 overflow-hidden">
            <div class="px-5 py-4 border-b border-zinc-100">
                <h2 class="text-base font-semibold text-zinc-900">"Today"</h2>
            </div>
            {move || state.with(|state| match state.phase() {
                SyncPhase::Idle | SyncPhase::Loading => {
                    view! { <LoadingSpinner text="Loading employees..."/> }.into_view()
                }
                SyncPhase::Failed(message) => view! {
                    <div class="p-4">
                        <ErrorMessage
                            message=message.clone()
                            on_retry=Callback::new(move |_| view_model.load())
                        />
                    </div>
                }
                .into_view(),
                SyncPhase::Loaded => {
                    if state.items().is_empty() {
                        view! {
                            <div class="p-4">
                                <EmptyState
                                    title="No employees yet"
                                    description="Add employees before marking attendance"
                                />
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <TodayBoardRows
                                employees=state.items().to_vec()
                                view_model=view_model
                            />
                        }
                        .into_view()
                    }
                }
            })}
        </div>
    }
}

#[component]
fn TodayBoardRows(employees: Vec<Employee>, view_model: AttendanceViewModel) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-zinc-200">
            <thead class="bg-zinc-50">
                <tr>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Employee"</th>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Today"</th>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Present / Total"</th>
                    <th class="px-4 py-3"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-zinc-100">
                {employees
                    .into_iter()
                    .map(|employee| {
                        let employee_id = employee.employee_id.clone();
                        let status_id = employee_id.clone();
                        let summary_id = employee_id.clone();
                        let busy_id = employee_id.clone();
                        let present_id = employee_id.clone();
                        let absent_id = employee_id;

                        let busy = Signal::derive(move || view_model.is_marking(&busy_id));
                        view! {
                            <tr>
                                <td class="px-4 py-3">
                                    <div class="text-sm font-medium text-zinc-900">{employee.full_name.clone()}</div>
                                    <div class="text-xs text-zinc-400">{employee.employee_id.clone()}</div>
                                </td>
                                <td class="px-4 py-3">
                                    <StatusBadge status=Signal::derive(move || {
                                        view_model.today_status_for(&status_id)
                                    })/>
                                </td>
                                <td class="px-4 py-3 text-sm text-zinc-600">
                                    {move || view_model
                                        .summary_for(&summary_id)
                                        .map(|summary| format!("{} / {}", summary.present, summary.total))
                                        .unwrap_or_else(|| "—".to_string())}
                                </td>
                                <td class="px-4 py-3 text-right space-x-2">
                                    <button
                                        type="button"
                                        class="rounded-lg bg-emerald-50 px-3 py-1.5 text-xs font-semibold text-emerald-700 hover:bg-emerald-100 disabled:opacity-50"
                                        disabled=move || busy.get()
                                        on:click=move |_| view_model
                                            .quick_mark(present_id.clone(), AttendanceStatus::Present)
                                    >
                                        "Present"
                                    </button>
                                    <button
                                        type="button"
                                        class="rounded-lg bg-red-50 px-3 py-1.5 text-xs font-semibold text-red-600 hover:bg-red-100 disabled:opacity-50"
                                        disabled=move || busy.get()
                                        on:click=move |_| view_model
                                            .quick_mark(absent_id.clone(), AttendanceStatus::Absent)
                                    >
                                        "Absent"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn RecordsList(view_model: AttendanceViewModel) -> impl IntoView {
    let state = view_model.records.signal();
    let employees = view_model.employees;
    let filter_employee = view_model.filter_employee;
    let filter_date = view_model.filter_date;

    view! {
        <div class="bg-white rounded-xl border border-zinc-200 overflow-hidden">
            <div class="px-5 py-4 border-b border-zinc-100 flex flex-wrap items-center gap-3">
                <h2 class="text-base font-semibold text-zinc-900 mr-auto">"All Records"</h2>
                <select
                    class="rounded-lg border border-zinc-300 bg-white px-3 py-1.5 text-sm text-zinc-700"
                    prop:value=move || filter_employee.get()
                    on:change=move |ev| filter_employee.set(event_target_value(&ev))
                >
                    <option value="">"All employees"</option>
                    {move || employees
                        .items()
                        .into_iter()
                        .map(|employee| view! {
                            <option value=employee.employee_id.clone()>
                                {employee.full_name.clone()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <input
                    type="date"
                    class="rounded-lg border border-zinc-300 bg-white px-3 py-1.5 text-sm text-zinc-700"
                    prop:value=move || filter_date.get()
                    on:input=move |ev| filter_date.set(event_target_value(&ev))
                />
                <Show when=move || view_model.has_filters()>
                    <button
                        type="button"
                        class="text-sm font-medium text-brand-600 hover:text-brand-700"
                        on:click=move |_| view_model.clear_filters()
                    >
                        "Clear filters"
                    </button>
                </Show>
            </div>
            {move || state.with(|state| match state.phase() {
                SyncPhase::Idle | SyncPhase::Loading => {
                    view! { <LoadingSpinner text="Loading records..."/> }.into_view()
                }
                SyncPhase::Failed(message) => view! {
                    <div class="p-4">
                        <ErrorMessage
                            message=message.clone()
                            on_retry=Callback::new(move |_| view_model.load())
                        />
                    </div>
                }
                .into_view(),
                SyncPhase::Loaded => {
                    let filtered = view_model.filtered_records();
                    if filtered.is_empty() {
                        view! {
                            <div class="p-4">
                                <EmptyState title="No records found"/>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <table class="min-w-full divide-y divide-zinc-200">
                                <thead class="bg-zinc-50">
                                    <tr>
                                        <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Employee"</th>
                                        <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Date"</th>
                                        <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-zinc-100">
                                    {filtered
                                        .into_iter()
                                        .map(|record| view! {
                                            <tr>
                                                <td class="px-4 py-3 text-sm font-medium text-zinc-700">{record.employee_id.clone()}</td>
                                                <td class="px-4 py-3 text-sm text-zinc-500">{format_short_date(record.date)}</td>
                                                <td class="px-4 py-3"><StatusBadge status=Some(record.status)/></td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view()
                    }
                }
            })}
        </div>
    }
}
