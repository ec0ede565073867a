//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Confirm/cancel dialog. Escape and backdrop clicks cancel unless `busy`.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Delete")] confirm_label: &'static str,
) -> impl IntoView {
    let cancel = move || {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div
                class="dialog dialog--confirm"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        cancel();
                    }
                }
            >
                <h2>{title}</h2>
                <p class="dialog__message">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel() disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Working..." } else { confirm_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
