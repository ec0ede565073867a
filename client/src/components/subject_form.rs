//! Create/edit dialog for subjects.

use leptos::prelude::*;

use crate::components::banner::FieldError;
use crate::net::types::Subject;
use crate::util::validation::{CODE_MAX_LEN, FormErrors, NAME_MAX_LEN, SubjectForm, validate_subject};

/// Subject form dialog. `initial` switches it from create to edit.
#[component]
pub fn SubjectFormModal(
    initial: Option<Subject>,
    on_saved: Callback<Subject>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = initial.as_ref().map(|s| s.id);
    let form = RwSignal::new(initial.as_ref().map(SubjectForm::from).unwrap_or_else(|| SubjectForm {
        is_active: true,
        ..SubjectForm::default()
    }));
    let errors = RwSignal::new(FormErrors::default());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_subject(&form.get_untracked()) {
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
                Some(id) => crate::net::api::update_subject(id, &payload).await,
                None => crate::net::api::create_subject(&payload).await,
            };
            busy.set(false);
            match result {
                Ok(subject) => on_saved.run(subject),
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
                <h2>{if editing_id.is_some() { "Edit Subject" } else { "New Subject" }}</h2>
                <form class="form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            maxlength=NAME_MAX_LEN
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors field="name"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Code"</span>
                        <input
                            class="field__input field__input--code"
                            type="text"
                            maxlength=CODE_MAX_LEN
                            prop:value=move || form.get().code
                            on:input=move |ev| form.update(|f| f.code = event_target_value(&ev).to_ascii_uppercase())
                        />
                        <FieldError errors field="code"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                        <FieldError errors field="description"/>
                    </label>
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
