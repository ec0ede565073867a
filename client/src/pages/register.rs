//! Public school registration.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::banner::{BannerView, FieldError};
use crate::state::banner::Banner;
use crate::util::validation::{FormErrors, NAME_MAX_LEN, RegistrationForm, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let banner = RwSignal::new(None::<Banner>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_registration(&form.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        banner.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_school(&payload).await {
                    Ok(school) => {
                        log::info!("registered school {}", school.id);
                        banner.set(Some(Banner::success(format!("{} is registered. Redirecting to login...", school.name))));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1200)).await;
                        navigate("/school/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        banner.set(Some(Banner::from_api(&e)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Register your school"</h1>
                <p class="login-card__subtitle">"Create the school account used by administrators."</p>
                <BannerView banner/>
                <form class="form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"School name"</span>
                        <input
                            class="field__input"
                            type="text"
                            maxlength=NAME_MAX_LEN
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors field="name"/>
                    </label>
                    <div class="form__row">
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                class="field__input"
                                type="email"
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                            <FieldError errors field="email"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Phone"</span>
                            <input
                                class="field__input"
                                type="tel"
                                prop:value=move || form.get().phone
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                            <FieldError errors field="phone"/>
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">"Address"</span>
                        <textarea
                            class="field__input"
                            rows="2"
                            prop:value=move || form.get().address
                            on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                        ></textarea>
                        <FieldError errors field="address"/>
                    </label>
                    <div class="form__row">
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <input
                                class="field__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.get().password
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <FieldError errors field="password"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Confirm password"</span>
                            <input
                                class="field__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.get().confirm_password
                                on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                            />
                            <FieldError errors field="confirm_password"/>
                        </label>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? " <a href="/school/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
