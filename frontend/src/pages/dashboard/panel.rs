use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::repository::DashboardData;
use super::utils::{attendance_rate, department_width_pct, rate_tone_class};
use super::view_model::use_dashboard_view_model;
use crate::components::cards::{StatCard, StatTone};
use crate::components::common::StatusBadge;
use crate::components::empty_state::EmptyState;
use crate::components::error::ErrorMessage;
use crate::components::loading::LoadingSpinner;
use crate::utils::time::{format_long_date, today};

const TODAY_LIST_CAP: usize = 10;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let view_model = use_dashboard_view_model();
    let overview = view_model.overview;

    view! {
        <Title text="Dashboard – HRMS Lite"/>
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-zinc-900">"Dashboard"</h1>
                <p class="text-sm text-zinc-500">{format_long_date(today())}</p>
            </div>
            {move || match overview.get() {
                None => view! { <LoadingSpinner text="Loading dashboard..."/> }.into_view(),
                Some(Err(err)) => view! {
                    <ErrorMessage
                        message=err.message
                        on_retry=Callback::new(move |_| view_model.refetch())
                    />
                }
                .into_view(),
                Some(Ok(data)) => view! { <Overview data=data/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Overview(data: DashboardData) -> impl IntoView {
    let stats = data.stats;
    let rate = attendance_rate(stats.present_today, stats.total_employees);
    let headcount = stats.total_employees;
    let today_records: Vec<_> = data.today_records.into_iter().take(TODAY_LIST_CAP).collect();
    let has_records = !today_records.is_empty();

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
            <StatCard label="Total Employees" value=stats.total_employees.to_string()/>
            <StatCard
                label="Present Today"
                value=stats.present_today.to_string()
                tone=StatTone::Green
            />
            <StatCard
                label="Absent Today"
                value=stats.absent_today.to_string()
                tone=StatTone::Red
            />
            <StatCard
                label="Not Marked"
                value=stats.not_marked_today.to_string()
                tone=StatTone::Amber
            />
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 bg-white rounded-xl border border-zinc-200 p-5 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-base font-semibold text-zinc-900">"Today's Attendance"</h2>
                    <span class=format!("text-sm font-semibold {}", rate_tone_class(rate))>
                        {format!("{}% attendance", rate)}
                    </span>
                </div>
                {if has_records {
                    view! {
                        <ul class="divide-y divide-zinc-100">
                            {today_records
                                .into_iter()
                                .map(|record| view! {
                                    <li class="flex items-center justify-between py-2.5">
                                        <span class="text-sm font-medium text-zinc-700">
                                            {record.employee_id.clone()}
                                        </span>
                                        <StatusBadge status=Some(record.status)/>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                } else {
                    view! {
                        <EmptyState
                            title="No records found"
                            description="Nobody has been marked yet today"
                            action=view! {
                                <A href="/attendance" class="inline-flex items-center rounded-lg bg-brand-600 px-4 py-2 text-sm font-semibold text-white hover:bg-brand-700">
                                    "Mark attendance"
                                </A>
                            }.into_view()
                        />
                    }
                    .into_view()
                }}
            </div>

            <div class="space-y-6">
                <div class="bg-white rounded-xl border border-zinc-200 p-5 space-y-3">
                    <h2 class="text-base font-semibold text-zinc-900">"Departments"</h2>
                    {if stats.departments.is_empty() {
                        view! { <p class="text-sm text-zinc-400">"No departments yet"</p> }.into_view()
                    } else {
                        stats
                            .departments
                            .iter()
                            .map(|dept| {
                                let width = department_width_pct(dept.count, headcount);
                                view! {
                                    <div class="space-y-1">
                                        <div class="flex items-center justify-between text-sm">
                                            <span class="text-zinc-600">{dept.department.clone()}</span>
                                            <span class="text-zinc-400">{dept.count}</span>
                                        </div>
                                        <div class="h-1.5 rounded-full bg-zinc-100">
                                            <div
                                                class="h-1.5 rounded-full bg-brand-500"
                                                style=format!("width: {:.1}%", width)
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="bg-white rounded-xl border border-zinc-200 p-5 space-y-2">
                    <h2 class="text-base font-semibold text-zinc-900">"Quick Actions"</h2>
                    <A href="/employees" class="block text-sm font-medium text-brand-600 hover:text-brand-700">
                        "Manage employees"
                    </A>
                    <A href="/attendance" class="block text-sm font-medium text-brand-600 hover:text-brand-700">
                        "Mark attendance"
                    </A>
                </div>
            </div>
        </div>
    }
}
