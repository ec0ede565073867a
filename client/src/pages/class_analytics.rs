//! Class performance charts for school admins and staff.
//!
//! SYSTEM CONTEXT
//! ==============
//! School admins pick from every class; staff pick from the classes assigned
//! to them. Statistics arrive pre-aggregated from the backend.

#[cfg(test)]
#[path = "class_analytics_test.rs"]
mod class_analytics_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::charts::BarChart;
use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::net::error::ApiError;
use crate::net::types::{AnalyticsFilters, ClassPerformance};
use crate::state::analytics::{AnalyticsState, FilterKind};
use crate::state::session::Segment;
use crate::util::chart::{format_percent, format_score};

/// Scores are percentages.
pub(crate) const SCORE_MAX: f64 = 100.0;

/// `(labels, values)` for the per-subject average chart.
#[must_use]
pub fn subject_average_series(perf: &ClassPerformance) -> (Vec<String>, Vec<f64>) {
    perf.subject_averages.iter().map(|s| (s.subject.clone(), s.average)).unzip()
}

/// `(labels, counts)` for a grade distribution, in backend order.
#[must_use]
pub fn grade_series(grades: &[crate::net::types::GradeCount]) -> (Vec<String>, Vec<f64>) {
    grades.iter().map(|g| (g.grade.clone(), f64::from(g.count))).unzip()
}

/// Class `(id, name)` options visible to `segment`.
async fn class_options(segment: Segment) -> Result<Vec<(i64, String)>, ApiError> {
    if segment == Segment::Staff {
        let classes = crate::net::api::fetch_staff_classes().await?;
        Ok(classes.into_iter().map(|c| (c.id, c.name)).collect())
    } else {
        let classes = crate::net::api::list_all_classes(segment).await?;
        Ok(classes.into_iter().map(|c| (c.id, c.name)).collect())
    }
}

#[component]
pub fn ClassAnalyticsPage(segment: Segment) -> impl IntoView {
    let state = RwSignal::new(AnalyticsState::<ClassPerformance>::default());
    let options = RwSignal::new(Vec::<(i64, String)>::new());
    let filters = RwSignal::new(AnalyticsFilters::default());
    let setup_error = RwSignal::new(None::<String>);

    let preselected = use_query_map().with_untracked(|q| q.get("class"));
    if let Some(raw) = preselected {
        state.update(|s| s.select_raw(&raw));
    }

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let loaded = async {
                let classes = class_options(segment).await?;
                let available = crate::net::api::fetch_analytics_filters(segment).await?;
                Ok::<_, ApiError>((classes, available))
            };
            match loaded.await {
                Ok((classes, available)) => {
                    if state.get_untracked().target.is_none()
                        && let Some((first, _)) = classes.first()
                    {
                        state.update(|s| s.select(Some(*first)));
                    }
                    options.set(classes);
                    filters.set(available);
                }
                Err(e) => setup_error.set(Some(e.user_message())),
            }
        });
    });

    Effect::new(move || {
        if !state.with(AnalyticsState::needs_fetch) {
            return;
        }
        let mut issued = None;
        state.update(|s| issued = s.begin_load());
        let Some(request) = issued else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_class_performance(segment, request.target, &request.filter).await;
            state.update(|s| s.finish(&request, result.map_err(|e| e.user_message())));
        });
    });

    let title = if segment == Segment::Staff { "Class Analytics" } else { "Class Performance" };

    view! {
        <Layout segment title>
            <Show when=move || setup_error.get().is_some()>
                <p class="banner banner--error">{move || setup_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="analytics__filters">
                <label class="field">
                    <span class="field__label">"Class"</span>
                    <select
                        class="field__input"
                        prop:value=move || state.get().target.map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| state.update(|s| s.select_raw(&event_target_value(&ev)))
                    >
                        <option value="">"Select a class"</option>
                        {move || {
                            options
                                .get()
                                .into_iter()
                                .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <FilterSelect kind=FilterKind::Term choices=Signal::derive(move || filters.get().terms) state/>
                <FilterSelect kind=FilterKind::Exam choices=Signal::derive(move || filters.get().exams) state/>
            </div>
            {move || {
                let current = state.get();
                if let Some(message) = current.error {
                    return view! { <p class="banner banner--error">{message}</p> }.into_any();
                }
                if current.loading {
                    return view! { <p>"Loading analytics..."</p> }.into_any();
                }
                let Some(perf) = current.data else {
                    return view! { <p class="analytics__empty">"Choose a class to see its performance."</p> }
                        .into_any();
                };
                let (subject_labels, subject_values) = subject_average_series(&perf);
                let (grade_labels, grade_values) = grade_series(&perf.grade_distribution);
                view! {
                    <div class="stat-grid">
                        <StatCard label="Students" value=Signal::stored(perf.student_count.to_string())/>
                        <StatCard label="Average" value=Signal::stored(format_score(perf.average))/>
                        <StatCard label="Highest" value=Signal::stored(format_score(perf.highest))/>
                        <StatCard label="Lowest" value=Signal::stored(format_score(perf.lowest))/>
                        <StatCard label="Pass rate" value=Signal::stored(format_percent(perf.pass_rate))/>
                    </div>
                    <div class="chart-grid">
                        <BarChart
                            title="Average by subject"
                            labels=subject_labels
                            values=subject_values
                            max=SCORE_MAX
                        />
                        <BarChart title="Grade distribution" labels=grade_labels values=grade_values/>
                    </div>
                    <h2>"Top students"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Student"</th>
                                <th>"Average"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {perf
                                .top_students
                                .into_iter()
                                .enumerate()
                                .map(|(i, s)| {
                                    view! {
                                        <tr>
                                            <td>{i + 1}</td>
                                            <td>{s.name}</td>
                                            <td>{format_score(s.average)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </Layout>
    }
}

/// Term or exam select driving an `AnalyticsState`.
#[component]
pub(crate) fn FilterSelect<T>(
    kind: FilterKind,
    #[prop(into)] choices: Signal<Vec<String>>,
    state: RwSignal<AnalyticsState<T>>,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{kind.label()}</span>
            <select
                class="field__input"
                prop:value=move || state.with(|s| s.filter_value(kind).to_owned())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_filter(kind, value));
                }
            >
                <option value="">{kind.any_label()}</option>
                {move || {
                    choices
                        .get()
                        .into_iter()
                        .map(|choice| {
                            let value = choice.clone();
                            view! { <option value=value>{choice}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
