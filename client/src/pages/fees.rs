//! School fee-payment instructions with a live markdown preview.

use leptos::prelude::*;

use crate::components::banner::{BannerView, FieldError};
use crate::components::layout::Layout;
use crate::net::types::FeeInstructions;
use crate::state::banner::Banner;
use crate::state::session::Segment;
use crate::util::markdown::render_markdown_html;
use crate::util::validation::{FeeForm, FormErrors, INSTRUCTIONS_MAX_LEN, NAME_MAX_LEN, validate_fee_instructions};

#[component]
pub fn FeesPage() -> impl IntoView {
    let form = RwSignal::new(FeeForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let banner = RwSignal::new(None::<Banner>);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let updated_at = RwSignal::new(None::<String>);

    let apply = move |fees: &FeeInstructions| {
        form.set(FeeForm::from(fees));
        updated_at.set(fees.updated_at.clone());
    };

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_fee_instructions(Segment::School).await {
                Ok(fees) => apply(&fees),
                // A school that never saved instructions starts from an empty form.
                Err(crate::net::error::ApiError::NotFound) => {}
                Err(e) => banner.set(Some(Banner::from_api(&e))),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_fee_instructions(&form.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        banner.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::update_fee_instructions(&payload).await {
                Ok(fees) => {
                    apply(&fees);
                    banner.set(Some(Banner::success("Fee instructions saved. Parents will see them right away.")));
                }
                Err(e) => banner.set(Some(Banner::from_api(&e))),
            }
            busy.set(false);
        });
    };

    let remaining = move || {
        let used = form.with(|f| f.instructions.chars().count());
        format!("{} characters left", INSTRUCTIONS_MAX_LEN.saturating_sub(used))
    };

    view! {
        <Layout segment=Segment::School title="Fee Instructions">
            <BannerView banner/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading fee instructions..."</p> }>
                <div class="fees">
                    <form class="form fees__form" on:submit=on_submit>
                        <label class="field">
                            <span class="field__label">"Bank name"</span>
                            <input
                                class="field__input"
                                type="text"
                                maxlength=NAME_MAX_LEN
                                prop:value=move || form.get().bank_name
                                on:input=move |ev| form.update(|f| f.bank_name = event_target_value(&ev))
                            />
                            <FieldError errors field="bank_name"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Account name"</span>
                            <input
                                class="field__input"
                                type="text"
                                maxlength=NAME_MAX_LEN
                                prop:value=move || form.get().account_name
                                on:input=move |ev| form.update(|f| f.account_name = event_target_value(&ev))
                            />
                            <FieldError errors field="account_name"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Account number"</span>
                            <input
                                class="field__input table__mono"
                                type="text"
                                inputmode="numeric"
                                prop:value=move || form.get().account_number
                                on:input=move |ev| form.update(|f| f.account_number = event_target_value(&ev))
                            />
                            <FieldError errors field="account_number"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Instructions (Markdown)"</span>
                            <textarea
                                class="field__input"
                                rows="10"
                                prop:value=move || form.get().instructions
                                on:input=move |ev| form.update(|f| f.instructions = event_target_value(&ev))
                            ></textarea>
                            <span class="field__hint">{remaining}</span>
                            <FieldError errors field="instructions"/>
                        </label>
                        <div class="form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Saving..." } else { "Save" }}
                            </button>
                            {move || updated_at.get().map(|at| view! { <span class="field__hint">"Last updated " {at}</span> })}
                        </div>
                    </form>
                    <aside class="fees__preview">
                        <h2>"What parents see"</h2>
                        <dl class="fees__account">
                            <dt>"Bank"</dt>
                            <dd>{move || form.get().bank_name}</dd>
                            <dt>"Account name"</dt>
                            <dd>{move || form.get().account_name}</dd>
                            <dt>"Account number"</dt>
                            <dd class="table__mono">{move || form.get().account_number}</dd>
                        </dl>
                        <div class="markdown" inner_html=move || render_markdown_html(&form.get().instructions)></div>
                    </aside>
                </div>
            </Show>
        </Layout>
    }
}
