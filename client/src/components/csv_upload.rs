//! Bulk CSV import for subjects and classes.
//!
//! The backend parses the file and reports per-row failures; rows that pass
//! are created even when others fail.

#[cfg(test)]
#[path = "csv_upload_test.rs"]
mod csv_upload_test;

use leptos::prelude::*;

use crate::net::api::Resource;
use crate::net::types::{CsvRowError, CsvUploadResult};
use crate::state::banner::Banner;

/// Largest file accepted before upload.
pub const MAX_CSV_BYTES: f64 = 1024.0 * 1024.0;

/// Reject files that are obviously not a CSV or are too large to send.
///
/// # Errors
///
/// Returns the message to show next to the file picker.
pub fn check_csv_file(name: &str, size_bytes: f64) -> Result<(), String> {
    if !name.to_ascii_lowercase().ends_with(".csv") {
        return Err("Choose a .csv file.".to_owned());
    }
    if size_bytes <= 0.0 {
        return Err("The selected file is empty.".to_owned());
    }
    if size_bytes > MAX_CSV_BYTES {
        return Err("CSV files must be 1 MB or smaller.".to_owned());
    }
    Ok(())
}

/// One-line outcome of an import.
#[must_use]
pub fn summarize_upload(result: &CsvUploadResult) -> Banner {
    let created = result.created;
    let noun = if created == 1 { "row" } else { "rows" };
    if result.errors.is_empty() {
        Banner::success(format!("Imported {created} {noun}."))
    } else {
        Banner::error(format!("Imported {created} {noun}; {} rejected.", result.errors.len()))
    }
}

/// File picker + upload button. `on_done` fires after any rows were created.
#[component]
pub fn CsvUpload(resource: Resource, on_done: Callback<()>, #[prop(optional)] hint: Option<&'static str>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);
    let outcome = RwSignal::new(None::<Banner>);
    let row_errors = RwSignal::new(Vec::<CsvRowError>::new());

    let on_upload = move |_| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = input_ref.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0))
            else {
                outcome.set(Some(Banner::error("Choose a CSV file first.")));
                return;
            };
            if let Err(message) = check_csv_file(&file.name(), file.size()) {
                outcome.set(Some(Banner::error(message)));
                return;
            }
            busy.set(true);
            outcome.set(None);
            row_errors.set(Vec::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_csv(resource, &file).await {
                    Ok(result) => {
                        outcome.set(Some(summarize_upload(&result)));
                        if result.created > 0 {
                            on_done.run(());
                        }
                        row_errors.set(result.errors);
                    }
                    Err(e) => outcome.set(Some(Banner::from_api(&e))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (resource, on_done, input_ref);
    };

    view! {
        <div class="csv-upload">
            <input class="csv-upload__input" type="file" accept=".csv,text/csv" node_ref=input_ref/>
            <button class="btn" on:click=on_upload disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Upload CSV" }}
            </button>
            {hint.map(|h| view! { <span class="csv-upload__hint">{h}</span> })}
            {move || {
                outcome.get().map(|b| view! { <p class=b.kind.css_class()>{b.message}</p> })
            }}
            <Show when=move || !row_errors.get().is_empty()>
                <ul class="csv-upload__errors">
                    {move || {
                        row_errors
                            .get()
                            .into_iter()
                            .map(|e| view! { <li>{format!("Row {}: {}", e.row, e.message)}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
