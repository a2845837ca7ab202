//! App Root Component
//!
//! The dashboard controller: fetches the dataset once on mount, populates the
//! sample selector, defaults to the first name, and threads
//! `(selected, dataset)` into all four views through signals. A selection
//! change updates the one selection signal and every view re-renders.
//!
//! A fetch failure is reported on the browser console and the dashboard stays
//! unpopulated; there is no retry.

use leptos::*;

use crate::api;
use crate::components::{BarChart, BubbleChart, GaugeChart, MetadataPanel, SampleSelector};
use crate::model::Dataset;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let dataset = create_rw_signal(None::<Dataset>);
    let selected = create_rw_signal(None::<String>);

    // One fetch at startup; rendering waits behind its completion
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_dataset().await {
                Ok(data) => {
                    selected.set(data.names.first().cloned());
                    dataset.set(Some(data));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dataset: {}", e).into(),
                    );
                }
            }
        });
    });

    let names = Signal::derive(move || {
        dataset.with(|d| d.as_ref().map(|d| d.names.clone()).unwrap_or_default())
    });

    view! {
        <div class="container">
            <header class="jumbotron">
                <h1>"Belly Button Biodiversity Dashboard"</h1>
                <p>"Use the interactive charts below to explore the dataset"</p>
            </header>

            <div class="row">
                <aside class="sidebar">
                    <SampleSelector
                        names=names
                        selected=selected.read_only().into()
                        on_select=move |id: String| selected.set(Some(id))
                    />
                    <MetadataPanel
                        dataset=dataset.read_only().into()
                        selected=selected.read_only().into()
                    />
                    <GaugeChart
                        dataset=dataset.read_only().into()
                        selected=selected.read_only().into()
                    />
                </aside>

                <section class="charts">
                    <BarChart
                        dataset=dataset.read_only().into()
                        selected=selected.read_only().into()
                    />
                    <BubbleChart
                        dataset=dataset.read_only().into()
                        selected=selected.read_only().into()
                    />
                </section>
            </div>
        </div>
    }
}
