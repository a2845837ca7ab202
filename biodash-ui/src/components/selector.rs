//! Sample Selector Component
//!
//! The `#selDataset` dropdown. Populated from `names` in document order; a
//! change emits the chosen identifier back to the controller, which is the
//! only thing that holds selection state.

use leptos::*;

/// Dropdown bound to the sample identifiers
#[component]
pub fn SampleSelector(
    names: Signal<Vec<String>>,
    selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="well">
            <h5>"Test Subject ID No.:"</h5>
            <select
                id="selDataset"
                on:change=move |ev| on_select.call(event_target_value(&ev))
                prop:value=move || selected.get().unwrap_or_default()
            >
                {move || {
                    names.get()
                        .into_iter()
                        .map(|name| view! {
                            <option value=name.clone()>{name}</option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
