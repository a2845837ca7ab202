//! Metadata Panel Component
//!
//! Renders the selected sample's demographic record into `#sample-metadata`,
//! one "key: value" line per field. The region is fully replaced on every
//! selection change; a lookup miss renders nothing and warns on the console.

use leptos::*;

use crate::model::{Dataset, MetadataRecord};

/// One "key: value" line per metadata field, in the record's field order
pub fn panel_lines(record: &MetadataRecord) -> Vec<String> {
    record
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect()
}

/// Demographic info panel for the selected sample
#[component]
pub fn MetadataPanel(
    dataset: Signal<Option<Dataset>>,
    selected: Signal<Option<String>>,
) -> impl IntoView {
    let lines = create_memo(move |_| {
        dataset.with(|dataset| {
            let dataset = dataset.as_ref()?;
            let id = selected.get()?;

            match dataset.metadata(&id) {
                Some(record) => Some(panel_lines(record)),
                None => {
                    web_sys::console::warn_1(
                        &format!("No metadata record for sample '{}'", id).into(),
                    );
                    None
                }
            }
        })
        .unwrap_or_default()
    });

    view! {
        <div class="panel">
            <h3 class="panel-title">"Demographic Info"</h3>
            <div id="sample-metadata">
                {move || {
                    lines.get()
                        .into_iter()
                        .map(|line| view! { <h5>{line}</h5> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
