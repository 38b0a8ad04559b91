use std::collections::HashMap;

use leptos::*;

use super::repository;
use super::utils::{employee_filter, filter_records, today_status};
use crate::api::{
    ApiClient, AttendanceRecord, AttendanceStatus, Employee, EmployeeAttendanceSummary,
    MarkAttendance,
};
use crate::state::busy::BusyKeys;
use crate::state::sync::{Generation, SyncedCollection};
use crate::state::toast::{use_toasts, Toasts};
use crate::utils::time::{parse_date, today};
use crate::validation::{validate_attendance, AttendanceForm, FieldErrors};

#[derive(Clone, Copy)]
pub struct AttendanceFormSignals {
    pub employee_id: RwSignal<String>,
    pub date: RwSignal<String>,
    pub status: RwSignal<AttendanceStatus>,
}

impl AttendanceFormSignals {
    fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(crate::utils::time::today_string()),
            status: create_rw_signal(AttendanceStatus::Present),
        }
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.date.set(crate::utils::time::today_string());
        self.status.set(AttendanceStatus::Present);
    }

    fn snapshot(&self) -> AttendanceForm {
        AttendanceForm {
            employee_id: self.employee_id.get_untracked(),
            date: self.date.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    api: StoredValue<ApiClient>,
    toasts: Toasts,
    pub employees: SyncedCollection<Employee>,
    pub records: SyncedCollection<AttendanceRecord>,
    pub summaries: RwSignal<HashMap<String, EmployeeAttendanceSummary>>,
    summaries_generation: StoredValue<Generation>,
    pub marking: RwSignal<BusyKeys>,
    pub form: AttendanceFormSignals,
    pub errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
    pub filter_employee: RwSignal<String>,
    pub filter_date: RwSignal<String>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let view_model = Self {
            api: store_value(use_context::<ApiClient>().unwrap_or_default()),
            toasts: use_toasts(),
            employees: SyncedCollection::new(),
            records: SyncedCollection::new(),
            summaries: create_rw_signal(HashMap::new()),
            summaries_generation: store_value(Generation::default()),
            marking: create_rw_signal(BusyKeys::new()),
            form: AttendanceFormSignals::new(),
            errors: create_rw_signal(FieldErrors::new()),
            submitting: create_rw_signal(false),
            filter_employee: create_rw_signal(String::new()),
            filter_date: create_rw_signal(String::new()),
        };
        create_effect(move |_| {
            view_model.load();
        });
        view_model
    }

    pub fn load(&self) {
        let view_model = *self;
        spawn_local(async move {
            view_model.reload().await;
        });
    }

    async fn reload(&self) {
        let api = self.api.get_value();
        self.employees
            .refresh(repository::fetch_employees(&api))
            .await;
        self.records.refresh(repository::fetch_records(&api)).await;

        // The summary batch bypasses SyncState, so it carries its own token:
        // of two overlapping reloads, only the newer batch may land.
        let token = self
            .summaries_generation
            .try_update_value(|generation| generation.begin())
            .unwrap_or_default();
        let roster = self.employees.items_untracked();
        let summaries = repository::fetch_summaries(&api, &roster).await;
        let current = self
            .summaries_generation
            .try_get_value()
            .map(|generation| generation.is_current(token))
            .unwrap_or(false);
        if current {
            self.summaries.set(summaries);
        } else {
            log::debug!("dropping superseded summary batch (token {})", token);
        }
    }

    /// Editing a field clears that field's error only.
    pub fn edit_field(&self, field: &'static str) {
        self.errors.update(|errors| errors.clear(field));
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let form = self.form.snapshot();

        let mut errors = validate_attendance(&form);
        let date = parse_date(&form.date);
        if errors.get("date").is_none() && date.is_none() {
            errors.insert("date", "Enter a valid date");
        }
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        self.submitting.set(true);

        let view_model = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let payload = MarkAttendance {
                employee_id: form.employee_id,
                date: date.unwrap_or_else(today),
                status: form.status,
            };
            match repository::mark(&api, &payload).await {
                Ok(_) => {
                    view_model.toasts.success("Attendance saved");
                    view_model.form.reset();
                    view_model.reload().await;
                }
                Err(err) => view_model.toasts.error(err.message),
            }
            view_model.submitting.set(false);
        });
    }

    /// Marks today's status for one employee directly from the board. A
    /// second click on the same employee while one mark is in flight is
    /// ignored; other employees mark concurrently.
    pub fn quick_mark(&self, employee_id: String, status: AttendanceStatus) {
        let started = self
            .marking
            .try_update(|busy| busy.try_begin(&employee_id))
            .unwrap_or(false);
        if !started {
            return;
        }

        let view_model = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let payload = MarkAttendance {
                employee_id: employee_id.clone(),
                date: today(),
                status,
            };
            match repository::mark(&api, &payload).await {
                Ok(_) => {
                    view_model.toasts.success(format!("Marked {}", status));
                    view_model.reload().await;
                }
                Err(err) => view_model.toasts.error(err.message),
            }
            view_model
                .marking
                .update(|busy| busy.finish(&employee_id));
        });
    }

    pub fn is_marking(&self, employee_id: &str) -> bool {
        self.marking.with(|busy| busy.is_busy(employee_id))
    }

    pub fn today_status_for(&self, employee_id: &str) -> Option<AttendanceStatus> {
        self.records
            .signal()
            .with(|state| today_status(state.items(), employee_id, today()))
    }

    pub fn summary_for(&self, employee_id: &str) -> Option<EmployeeAttendanceSummary> {
        self.summaries
            .with(|summaries| summaries.get(employee_id).copied())
    }

    /// Records after the employee and date filters, for the history table.
    pub fn filtered_records(&self) -> Vec<AttendanceRecord> {
        let selection = self.filter_employee.get();
        let date = parse_date(&self.filter_date.get());
        self.records.signal().with(|state| {
            filter_records(state.items(), employee_filter(&selection), date)
        })
    }

    pub fn has_filters(&self) -> bool {
        !self.filter_employee.get().is_empty() || !self.filter_date.get().is_empty()
    }

    pub fn clear_filters(&self) {
        self.filter_employee.set(String::new());
        self.filter_date.set(String::new());
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    if let Some(existing) = use_context::<AttendanceViewModel>() {
        return existing;
    }
    let view_model = AttendanceViewModel::new();
    provide_context(view_model);
    view_model
}
