//! Subject performance across classes, for school admins.

#[cfg(test)]
#[path = "subject_analytics_test.rs"]
mod subject_analytics_test;

use leptos::prelude::*;

use super::class_analytics::{FilterSelect, SCORE_MAX, grade_series};
use crate::components::charts::{BarChart, LineChart};
use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::net::error::ApiError;
use crate::net::types::{AnalyticsFilters, SubjectPerformance};
use crate::state::analytics::{AnalyticsState, FilterKind};
use crate::state::session::Segment;
use crate::util::chart::{format_percent, format_score};

/// `(labels, values)` for the per-class average chart.
#[must_use]
pub fn class_average_series(perf: &SubjectPerformance) -> (Vec<String>, Vec<f64>) {
    perf.class_averages.iter().map(|c| (c.class_name.clone(), c.average)).unzip()
}

/// `(labels, values)` for the term-over-term trend line.
#[must_use]
pub fn trend_series(perf: &SubjectPerformance) -> (Vec<String>, Vec<f64>) {
    perf.trend.iter().map(|p| (p.label.clone(), p.average)).unzip()
}

#[component]
pub fn SubjectAnalyticsPage() -> impl IntoView {
    let segment = Segment::School;
    let state = RwSignal::new(AnalyticsState::<SubjectPerformance>::default());
    let options = RwSignal::new(Vec::<(i64, String)>::new());
    let filters = RwSignal::new(AnalyticsFilters::default());
    let setup_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let loaded = async {
                let subjects = crate::net::api::list_all_subjects(segment).await?;
                let available = crate::net::api::fetch_analytics_filters(segment).await?;
                Ok::<_, ApiError>((subjects, available))
            };
            match loaded.await {
                Ok((subjects, available)) => {
                    if let Some(first) = subjects.first() {
                        state.update(|s| s.select(Some(first.id)));
                    }
                    options.set(subjects.into_iter().map(|s| (s.id, s.name)).collect());
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
            let result = crate::net::api::fetch_subject_performance(segment, request.target, &request.filter).await;
            state.update(|s| s.finish(&request, result.map_err(|e| e.user_message())));
        });
    });

    view! {
        <Layout segment title="Subject Performance">
            <Show when=move || setup_error.get().is_some()>
                <p class="banner banner--error">{move || setup_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="analytics__filters">
                <label class="field">
                    <span class="field__label">"Subject"</span>
                    <select
                        class="field__input"
                        prop:value=move || state.get().target.map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| state.update(|s| s.select_raw(&event_target_value(&ev)))
                    >
                        <option value="">"Select a subject"</option>
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
                    return view! { <p class="analytics__empty">"Choose a subject to see its performance."</p> }
                        .into_any();
                };
                let (class_labels, class_values) = class_average_series(&perf);
                let (trend_labels, trend_values) = trend_series(&perf);
                let (grade_labels, grade_values) = grade_series(&perf.grade_distribution);
                view! {
                    <div class="stat-grid">
                        <StatCard label="Average" value=Signal::stored(format_score(perf.average))/>
                        <StatCard label="Highest" value=Signal::stored(format_score(perf.highest))/>
                        <StatCard label="Lowest" value=Signal::stored(format_score(perf.lowest))/>
                        <StatCard label="Pass rate" value=Signal::stored(format_percent(perf.pass_rate))/>
                    </div>
                    <div class="chart-grid">
                        <BarChart title="Average by class" labels=class_labels values=class_values max=SCORE_MAX/>
                        <LineChart title="Trend" labels=trend_labels values=trend_values max=SCORE_MAX/>
                        <BarChart title="Grade distribution" labels=grade_labels values=grade_values/>
                    </div>
                }
                    .into_any()
            }}
        </Layout>
    }
}
