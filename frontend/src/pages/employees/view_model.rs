use leptos::*;

use super::repository;
use super::utils::filter_employees;
use crate::api::{ApiClient, Employee, NewEmployee};
use crate::state::sync::SyncedCollection;
use crate::state::toast::{use_toasts, Toasts};
use crate::validation::{validate_employee, EmployeeForm, FieldErrors};

#[derive(Clone, Copy)]
pub struct EmployeeFormSignals {
    pub employee_id: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub department: RwSignal<String>,
}

impl EmployeeFormSignals {
    fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
        }
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
    }

    fn snapshot(&self) -> EmployeeForm {
        EmployeeForm {
            employee_id: self.employee_id.get_untracked(),
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    api: StoredValue<ApiClient>,
    toasts: Toasts,
    pub employees: SyncedCollection<Employee>,
    pub search: RwSignal<String>,
    pub show_form: RwSignal<bool>,
    pub form: EmployeeFormSignals,
    pub errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
    pub to_delete: RwSignal<Option<Employee>>,
    pub deleting: RwSignal<bool>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let view_model = Self {
            api: store_value(use_context::<ApiClient>().unwrap_or_default()),
            toasts: use_toasts(),
            employees: SyncedCollection::new(),
            search: create_rw_signal(String::new()),
            show_form: create_rw_signal(false),
            form: EmployeeFormSignals::new(),
            errors: create_rw_signal(FieldErrors::new()),
            submitting: create_rw_signal(false),
            to_delete: create_rw_signal(None),
            deleting: create_rw_signal(false),
        };
        create_effect(move |_| {
            view_model.load();
        });
        view_model
    }

    pub fn load(&self) {
        let api = self.api.get_value();
        let employees = self.employees;
        spawn_local(async move {
            employees.refresh(repository::fetch_employees(&api)).await;
        });
    }

    pub fn open_form(&self) {
        self.form.reset();
        self.errors.set(FieldErrors::new());
        self.show_form.set(true);
    }

    pub fn close_form(&self) {
        self.show_form.set(false);
    }

    /// Editing a field clears that field's error only.
    pub fn edit_field(&self, field: &'static str) {
        self.errors.update(|errors| errors.clear(field));
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let mut form = self.form.snapshot();
        form.employee_id = form.employee_id.trim().to_string();

        let errors = validate_employee(&form);
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        self.submitting.set(true);

        let view_model = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let payload = NewEmployee {
                employee_id: form.employee_id.clone(),
                full_name: form.full_name.clone(),
                email: form.email.clone(),
                department: form.department.clone(),
            };
            match repository::create_employee(&api, &payload).await {
                Ok(_) => {
                    view_model
                        .toasts
                        .success(format!("{} added successfully", form.full_name));
                    view_model.form.reset();
                    view_model.show_form.set(false);
                    view_model.load();
                }
                Err(err) => view_model.toasts.error(err.message),
            }
            view_model.submitting.set(false);
        });
    }

    pub fn request_delete(&self, employee: Employee) {
        self.to_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        if self.deleting.get_untracked() {
            return;
        }
        self.to_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.deleting.get_untracked() {
            return;
        }
        let Some(employee) = self.to_delete.get_untracked() else {
            return;
        };
        self.deleting.set(true);

        let view_model = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            match repository::delete_employee(&api, &employee.employee_id).await {
                Ok(()) => {
                    view_model.toasts.success("Employee removed");
                    view_model.to_delete.set(None);
                    view_model.load();
                }
                Err(err) => view_model.toasts.error(err.message),
            }
            view_model.deleting.set(false);
        });
    }

    /// Roster after the search filter, for the table body.
    pub fn filtered(&self) -> Vec<Employee> {
        let query = self.search.get();
        self.employees
            .signal()
            .with(|state| filter_employees(state.items(), &query))
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    if let Some(existing) = use_context::<EmployeesViewModel>() {
        return existing;
    }
    let view_model = EmployeesViewModel::new();
    provide_context(view_model);
    view_model
}
