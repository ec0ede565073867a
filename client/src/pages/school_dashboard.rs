//! School portal home: profile and headline counts.

use leptos::prelude::*;

use super::load_once;
use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::net::types::{School, SchoolSummary};
use crate::state::session::Segment;

#[component]
pub fn SchoolDashboardPage() -> impl IntoView {
    let profile = RwSignal::new(None::<School>);
    let summary = RwSignal::new(None::<SchoolSummary>);
    let error = RwSignal::new(None::<String>);

    load_once(profile, error, crate::net::api::fetch_school_profile);
    load_once(summary, error, crate::net::api::fetch_school_summary);

    view! {
        <Layout segment=Segment::School title="Dashboard">
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                profile
                    .get()
                    .map(|school| {
                        view! {
                            <div class="school-card">
                                <h2>{school.name}</h2>
                                <p>{school.email}</p>
                                {school.code.map(|code| view! { <p class="school-card__code">"School code: " {code}</p> })}
                            </div>
                        }
                    })
            }}
            <div class="stat-grid">
                <StatCard label="Students" value={count(summary, |s| s.students)}/>
                <StatCard label="Staff" value={count(summary, |s| s.staff)}/>
                <StatCard label="Classes" value={count(summary, |s| s.classes)}/>
                <StatCard label="Subjects" value={count(summary, |s| s.subjects)}/>
            </div>
            <div class="quick-links">
                <a class="btn" href="/school/subjects">"Manage subjects"</a>
                <a class="btn" href="/school/classes">"Manage classes"</a>
                <a class="btn" href="/school/staff">"Manage staff"</a>
                <a class="btn" href="/school/fees">"Fee instructions"</a>
            </div>
        </Layout>
    }
}

fn count(summary: RwSignal<Option<SchoolSummary>>, pick: fn(&SchoolSummary) -> u64) -> Signal<String> {
    Signal::derive(move || summary.get().map_or_else(|| "–".to_owned(), |s| pick(&s).to_string()))
}
