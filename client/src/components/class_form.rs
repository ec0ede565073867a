//! Create/edit dialog for classes.

use leptos::prelude::*;

use crate::components::banner::FieldError;
use crate::net::types::{ClassRoom, Staff};
use crate::util::validation::{
    CAPACITY_MAX, CAPACITY_MIN, CODE_MAX_LEN, ClassForm, FormErrors, NAME_MAX_LEN, validate_class,
};

/// Class form dialog. `teachers` feeds the class-teacher select.
#[component]
pub fn ClassFormModal(
    initial: Option<ClassRoom>,
    #[prop(into)] teachers: Signal<Vec<Staff>>,
    on_saved: Callback<ClassRoom>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = initial.as_ref().map(|c| c.id);
    let form = RwSignal::new(initial.as_ref().map(ClassForm::from).unwrap_or_default());
    let errors = RwSignal::new(FormErrors::default());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_class(&form.get_untracked()) {
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
                Some(id) => crate::net::api::update_class(id, &payload).await,
                None => crate::net::api::create_class(&payload).await,
            };
            busy.set(false);
            match result {
                Ok(class) => on_saved.run(class),
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
                <h2>{if editing_id.is_some() { "Edit Class" } else { "New Class" }}</h2>
                <form class="form" on:submit=on_submit>
                    <div class="form__row">
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
                    </div>
                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <textarea
                            class="field__input"
                            rows="2"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                        <FieldError errors field="description"/>
                    </label>
                    <div class="form__row">
                        <label class="field">
                            <span class="field__label">"Capacity"</span>
                            <input
                                class="field__input"
                                type="number"
                                min=CAPACITY_MIN
                                max=CAPACITY_MAX
                                prop:value=move || form.get().capacity
                                on:input=move |ev| form.update(|f| f.capacity = event_target_value(&ev))
                            />
                            <FieldError errors field="capacity"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Class teacher"</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().class_teacher
                                on:change=move |ev| form.update(|f| f.class_teacher = event_target_value(&ev))
                            >
                                <option value="">"Unassigned"</option>
                                {move || {
                                    teachers
                                        .get()
                                        .into_iter()
                                        .map(|t| view! { <option value=t.id.to_string()>{t.full_name()}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <FieldError errors field="class_teacher"/>
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
