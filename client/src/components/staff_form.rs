//! Create/edit dialog for staff members.

use leptos::prelude::*;

use crate::components::banner::FieldError;
use crate::net::types::{Staff, StaffRole};
use crate::util::validation::{FormErrors, PERSON_NAME_MAX_LEN, StaffForm, validate_staff};

#[component]
pub fn StaffFormModal(
    initial: Option<Staff>,
    on_saved: Callback<Staff>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = initial.as_ref().map(|s| s.id);
    let form = RwSignal::new(initial.as_ref().map(StaffForm::from).unwrap_or_default());
    let errors = RwSignal::new(FormErrors::default());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_staff(&form.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        server_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::api::update_staff(id, &payload).await,
                None => crate::net::api::create_staff(&payload).await,
            };
            busy.set(false);
            match result {
                Ok(staff) => on_saved.run(staff),
                Err(e) => server_error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, editing_id, on_saved);
    };

    let close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing_id.is_some() { "Edit Staff" } else { "New Staff" }}</h2>
                <form class="form" on:submit=on_submit>
                    <div class="form__row">
                        <label class="field">
                            <span class="field__label">"First name"</span>
                            <input
                                class="field__input"
                                type="text"
                                maxlength=PERSON_NAME_MAX_LEN
                                prop:value=move || form.get().first_name
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                            <FieldError errors field="first_name"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Last name"</span>
                            <input
                                class="field__input"
                                type="text"
                                maxlength=PERSON_NAME_MAX_LEN
                                prop:value=move || form.get().last_name
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                            <FieldError errors field="last_name"/>
                        </label>
                    </div>
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
                    <div class="form__row">
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
                        <label class="field">
                            <span class="field__label">"Role"</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().role.as_str()
                                on:change=move |ev| {
                                    form.update(|f| f.role = StaffRole::from_value(&event_target_value(&ev)));
                                }
                            >
                                {StaffRole::ALL
                                    .into_iter()
                                    .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_active
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        <span>"Active"</span>
                    </label>
                    <Show when=move || server_error.get().is_some()>
                        <p class="form__error">{move || server_error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close() disabled=move || busy.get()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
