//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RequireSegment;
use crate::pages::{
    class_analytics::ClassAnalyticsPage, classes::ClassesPage, fees::FeesPage, landing::LandingPage, login::LoginPage,
    parent_portal::ParentPortalPage, register::RegisterPage, school_dashboard::SchoolDashboardPage,
    staff::StaffPage, staff_portal::StaffPortalPage, students::StudentsPage, subject_analytics::SubjectAnalyticsPage,
    subjects::SubjectsPage,
};
use crate::state::session::{Segment, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. Sessions are
/// restored from `localStorage` once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    Effect::new(move || {
        session.set(SessionState::restore());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/schoolhub.css"/>
        <Title text="SchoolHub"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=(StaticSegment("school"), StaticSegment("register")) view=RegisterPage/>
                <Route
                    path=(StaticSegment("school"), StaticSegment("login"))
                    view=|| view! { <LoginPage segment=Segment::School/> }
                />
                <Route
                    path=(StaticSegment("staff"), StaticSegment("login"))
                    view=|| view! { <LoginPage segment=Segment::Staff/> }
                />
                <Route
                    path=(StaticSegment("parent"), StaticSegment("login"))
                    view=|| view! { <LoginPage segment=Segment::Parent/> }
                />

                <Route path=StaticSegment("school") view=|| school(SchoolDashboardPage)/>
                <Route path=(StaticSegment("school"), StaticSegment("subjects")) view=|| school(SubjectsPage)/>
                <Route path=(StaticSegment("school"), StaticSegment("classes")) view=|| school(ClassesPage)/>
                <Route path=(StaticSegment("school"), StaticSegment("staff")) view=|| school(StaffPage)/>
                <Route path=(StaticSegment("school"), StaticSegment("students")) view=|| school(StudentsPage)/>
                <Route path=(StaticSegment("school"), StaticSegment("fees")) view=|| school(FeesPage)/>
                <Route
                    path=(StaticSegment("school"), StaticSegment("analytics"), StaticSegment("classes"))
                    view=|| view! {
                        <RequireSegment segment=Segment::School>
                            <ClassAnalyticsPage segment=Segment::School/>
                        </RequireSegment>
                    }
                />
                <Route
                    path=(StaticSegment("school"), StaticSegment("analytics"), StaticSegment("subjects"))
                    view=|| school(SubjectAnalyticsPage)
                />

                <Route
                    path=StaticSegment("staff")
                    view=|| view! {
                        <RequireSegment segment=Segment::Staff>
                            <StaffPortalPage/>
                        </RequireSegment>
                    }
                />
                <Route
                    path=(StaticSegment("staff"), StaticSegment("analytics"))
                    view=|| view! {
                        <RequireSegment segment=Segment::Staff>
                            <ClassAnalyticsPage segment=Segment::Staff/>
                        </RequireSegment>
                    }
                />

                <Route
                    path=StaticSegment("parent")
                    view=|| view! {
                        <RequireSegment segment=Segment::Parent>
                            <ParentPortalPage/>
                        </RequireSegment>
                    }
                />
            </Routes>
        </Router>
    }
}

/// Wrap a school-portal page in the school guard.
fn school<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <RequireSegment segment=Segment::School>
            {page()}
        </RequireSegment>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to home"</a>
        </div>
    }
}
