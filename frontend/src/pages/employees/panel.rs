use leptos::*;
use leptos_meta::Title;

use super::view_model::{use_employees_view_model, EmployeesViewModel};
use crate::api::Employee;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::ErrorMessage;
use crate::components::forms::{input_class, FieldError, FieldLabel};
use crate::components::loading::LoadingSpinner;
use crate::state::sync::SyncPhase;
use crate::validation::DEPARTMENTS;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let view_model = use_employees_view_model();
    let state = view_model.employees.signal();
    let search = view_model.search;
    let show_form = view_model.show_form;

    let count_label = move || {
        state.with(|state| {
            if state.is_loading() {
                "Loading...".to_string()
            } else {
                format!("{} total", state.items().len())
            }
        })
    };

    let delete_message = move || {
        view_model
            .to_delete
            .get()
            .map(|employee| {
                format!(
                    "This will permanently delete {} ({}) and all their attendance records. There's no undo.",
                    employee.full_name, employee.employee_id
                )
            })
            .unwrap_or_default()
    };

    view! {
        <Title text="Employees – HRMS Lite"/>
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-zinc-900">"Employees"</h1>
                    <p class="text-sm text-zinc-500">{count_label}</p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center rounded-lg bg-brand-600 px-4 py-2 text-sm font-semibold text-white hover:bg-brand-700"
                    on:click=move |_| {
                        if show_form.get_untracked() {
                            view_model.close_form();
                        } else {
                            view_model.open_form();
                        }
                    }
                >
                    {move || if show_form.get() { "Close" } else { "Add Employee" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <EmployeeCreateForm view_model=view_model/>
            </Show>

            <input
                type="search"
                class=input_class(false)
                placeholder="Search by name, ID, email or department"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="bg-white rounded-xl border border-zinc-200 overflow-hidden">
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
                        let filtered = view_model.filtered();
                        if filtered.is_empty() {
                            let searching = !search.get_untracked().trim().is_empty();
                            let (title, description) = if searching {
                                ("No matches found", "Try a different search term")
                            } else {
                                ("No employees yet", "Add your first employee to get started")
                            };
                            view! {
                                <div class="p-4">
                                    <EmptyState title=title description=description/>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! { <EmployeeTable employees=filtered view_model=view_model/> }
                                .into_view()
                        }
                    }
                })}
            </div>
        </div>

        <ConfirmDialog
            is_open=Signal::derive(move || view_model.to_delete.get().is_some())
            title="Delete employee?"
            message=Signal::derive(delete_message)
            confirm_label="Delete"
            destructive=true
            busy=Signal::derive(move || view_model.deleting.get())
            on_confirm=Callback::new(move |_| view_model.confirm_delete())
            on_cancel=Callback::new(move |_| view_model.cancel_delete())
        />
    }
}

#[component]
fn EmployeeCreateForm(view_model: EmployeesViewModel) -> impl IntoView {
    let form = view_model.form;
    let errors = view_model.errors;
    let submitting = view_model.submitting;

    let error_for = move |field: &'static str| {
        Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
    };
    let employee_id_error = error_for("employee_id");
    let full_name_error = error_for("full_name");
    let email_error = error_for("email");
    let department_error = error_for("department");

    view! {
        <form
            class="bg-white rounded-xl border border-zinc-200 p-5 grid grid-cols-1 sm:grid-cols-2 gap-4"
            on:submit=move |ev| {
                ev.prevent_default();
                view_model.submit();
            }
        >
            <div>
                <FieldLabel text="Employee ID"/>
                <input
                    type="text"
                    class=move || input_class(employee_id_error.get().is_some())
                    placeholder="EMP-001"
                    prop:value=move || form.employee_id.get()
                    on:input=move |ev| {
                        form.employee_id.set(event_target_value(&ev));
                        view_model.edit_field("employee_id");
                    }
                />
                <FieldError error=employee_id_error/>
            </div>
            <div>
                <FieldLabel text="Full Name"/>
                <input
                    type="text"
                    class=move || input_class(full_name_error.get().is_some())
                    placeholder="Priya Sharma"
                    prop:value=move || form.full_name.get()
                    on:input=move |ev| {
                        form.full_name.set(event_target_value(&ev));
                        view_model.edit_field("full_name");
                    }
                />
                <FieldError error=full_name_error/>
            </div>
            <div>
                <FieldLabel text="Email"/>
                <input
                    type="email"
                    class=move || input_class(email_error.get().is_some())
                    placeholder="priya@company.com"
                    prop:value=move || form.email.get()
                    on:input=move |ev| {
                        form.email.set(event_target_value(&ev));
                        view_model.edit_field("email");
                    }
                />
                <FieldError error=email_error/>
            </div>
            <div>
                <FieldLabel text="Department"/>
                <select
                    class=move || input_class(department_error.get().is_some())
                    prop:value=move || form.department.get()
                    on:change=move |ev| {
                        form.department.set(event_target_value(&ev));
                        view_model.edit_field("department");
                    }
                >
                    <option value="">"Pick a department"</option>
                    {DEPARTMENTS
                        .iter()
                        .map(|department| view! {
                            <option value=*department>{*department}</option>
                        })
                        .collect_view()}
                </select>
                <FieldError error=department_error/>
            </div>
            <div class="sm:col-span-2 flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center rounded-lg bg-zinc-100 px-4 py-2 text-sm font-semibold text-zinc-700 hover:bg-zinc-200"
                    on:click=move |_| view_model.close_form()
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="inline-flex items-center rounded-lg bg-brand-600 px-4 py-2 text-sm font-semibold text-white hover:bg-brand-700 disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Saving..." } else { "Save Employee" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn EmployeeTable(employees: Vec<Employee>, view_model: EmployeesViewModel) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-zinc-200">
            <thead class="bg-zinc-50">
                <tr>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"ID"</th>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Name"</th>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Email"</th>
                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-zinc-500">"Department"</th>
                    <th class="px-4 py-3"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-zinc-100">
                {employees
                    .into_iter()
                    .map(|employee| {
                        let for_delete = employee.clone();
                        view! {
                            <tr>
                                <td class="px-4 py-3 text-sm font-medium text-zinc-700">{employee.employee_id.clone()}</td>
                                <td class="px-4 py-3 text-sm text-zinc-900">{employee.full_name.clone()}</td>
                                <td class="px-4 py-3 text-sm text-zinc-500">{employee.email.clone()}</td>
                                <td class="px-4 py-3 text-sm text-zinc-500">{employee.department.clone()}</td>
                                <td class="px-4 py-3 text-right">
                                    <button
                                        type="button"
                                        class="text-sm font-medium text-red-600 hover:text-red-700"
                                        on:click=move |_| view_model.request_delete(for_delete.clone())
                                    >
                                        "Delete"
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
