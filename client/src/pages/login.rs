//! Email + password login shared by the school, staff, and parent portals.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::banner::FieldError;
use crate::net::error::ApiError;
use crate::state::session::{Segment, SessionState};
use crate::util::auth::install_authed_redirect;
use crate::util::validation::{FormErrors, validate_login};

/// Heading and subtitle for a segment's login card.
#[must_use]
pub fn login_copy(segment: Segment) -> (&'static str, &'static str) {
    match segment {
        Segment::School => ("School Login", "Manage subjects, classes, staff, and fees."),
        Segment::Staff => ("Staff Login", "See your classes and their performance."),
        Segment::Parent => ("Parent Login", "Follow your children and fee instructions."),
    }
}

/// Login failures are reported without distinguishing unknown accounts.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized | ApiError::NotFound => "Invalid email or password.".to_owned(),
        ApiError::Validation { message } if message.to_ascii_lowercase().contains("credential") => {
            "Invalid email or password.".to_owned()
        }
        other => other.user_message(),
    }
}

#[component]
pub fn LoginPage(segment: Segment) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_authed_redirect(session, segment, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        info.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(segment, &request.email, &request.password).await {
                    Ok(_) => {
                        session.set(SessionState::restore());
                        navigate(segment.home_path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(Some(login_error_message(&e)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, &navigate);
    };

    let (title, subtitle) = login_copy(segment);
    let others: Vec<Segment> = Segment::ALL.into_iter().filter(|s| *s != segment).collect();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <p class="login-card__subtitle">{subtitle}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError errors field="email"/>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError errors field="password"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
                {(segment == Segment::School)
                    .then(|| {
                        view! {
                            <p class="login-card__footer">
                                "New school? " <a href="/school/register">"Register here"</a>
                            </p>
                        }
                    })}
                <div class="login-divider"></div>
                <p class="login-card__alternates">
                    {others
                        .into_iter()
                        .map(|other| {
                            view! {
                                <a class="login-card__alternate" href=other.login_path()>
                                    {format!("{} login", other.label())}
                                </a>
                            }
                        })
                        .collect_view()}
                </p>
            </div>
        </div>
    }
}
