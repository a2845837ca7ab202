//! Bar Chart Component
//!
//! Horizontal bar chart of the ten most abundant OTUs in the selected sample,
//! drawn on HTML5 Canvas in the `#bar` region.
//!
//! Preparation takes the first ten entries of the (descending-sorted) sample
//! sequences and reverses them; with bars stacked bottom-up that puts the
//! largest value at the top. Hovering a bar row shows its OTU label.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{Dataset, SampleRecord};

const WIDTH: u32 = 700;
const HEIGHT: u32 = 400;

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 30.0;

const BAR_COLOR: &str = "#1f77b4";

/// One bar of the prepared chart
#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub otu_id: u32,
    pub value: f64,
    pub label: String,
}

impl BarRow {
    /// Category label shown on the y axis
    pub fn category(&self) -> String {
        format!("OTU {}", self.otu_id)
    }
}

/// First ten entries of each sequence (all of them when fewer), reversed.
///
/// Index 0 is the smallest of the kept values and draws at the bottom; the
/// last row is the sample's most abundant OTU and draws at the top.
pub fn top_ten_reversed(sample: &SampleRecord) -> Vec<BarRow> {
    let mut rows: Vec<BarRow> = sample
        .otu_ids
        .iter()
        .zip(&sample.sample_values)
        .zip(&sample.otu_labels)
        .take(10)
        .map(|((&otu_id, &value), label)| BarRow {
            otu_id,
            value,
            label: label.clone(),
        })
        .collect();
    rows.reverse();
    rows
}

/// Which row a canvas y coordinate falls on, if any
fn row_at(y: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let chart_height = HEIGHT as f64 - MARGIN_TOP - MARGIN_BOTTOM;
    let band = chart_height / count as f64;

    let from_top = (y - MARGIN_TOP) / band;
    if from_top < 0.0 || from_top >= count as f64 {
        return None;
    }
    // Rows are stacked bottom-up
    Some(count - 1 - from_top as usize)
}

/// Horizontal top-10 bar chart for the selected sample
#[component]
pub fn BarChart(
    dataset: Signal<Option<Dataset>>,
    selected: Signal<Option<String>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hover, set_hover) = create_signal(None::<String>);

    let rows = create_memo(move |_| {
        dataset.with(|dataset| {
            let dataset = dataset.as_ref()?;
            let id = selected.get()?;

            match dataset.sample(&id) {
                Some(sample) => Some(top_ten_reversed(sample)),
                None => {
                    web_sys::console::warn_1(
                        &format!("No sample record for sample '{}'", id).into(),
                    );
                    None
                }
            }
        })
        .unwrap_or_default()
    });

    // Redraw whenever the prepared rows change
    create_effect(move |_| {
        let rows = rows.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &rows);
        }
    });

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let label = rows.with(|rows| {
            row_at(ev.offset_y() as f64, rows.len()).map(|i| rows[i].label.clone())
        });
        set_hover.set(label);
    };

    view! {
        <div id="bar" class="panel">
            <canvas
                node_ref=canvas_ref
                width=WIDTH
                height=HEIGHT
                on:mousemove=on_mousemove
                on:mouseleave=move |_| set_hover.set(None)
            />
            <div class="hover-label">
                {move || hover.get().unwrap_or_default()}
            </div>
        </div>
    }
}

/// Paint the prepared rows. The canvas is cleared first, so re-rendering with
/// the same rows replaces the chart in place.
fn draw_bar_chart(canvas: &HtmlCanvasElement, rows: &[BarRow]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&"#444444".into());
    ctx.set_font("bold 16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("Top 10 OTUs Present", width / 2.0, 28.0);

    if rows.is_empty() {
        return;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let band = chart_height / rows.len() as f64;
    let bar_height = band * 0.8;

    let max_value = rows.iter().fold(0.0_f64, |max, row| max.max(row.value));
    if max_value <= 0.0 {
        return;
    }

    for (i, row) in rows.iter().enumerate() {
        // Row 0 sits at the bottom of the chart area
        let y_top = MARGIN_TOP + (rows.len() - 1 - i) as f64 * band + (band - bar_height) / 2.0;
        let bar_width = (row.value / max_value) * chart_width;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(MARGIN_LEFT, y_top, bar_width, bar_height);

        // Category label
        ctx.set_fill_style(&"#444444".into());
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("right");
        let _ = ctx.fill_text(
            &row.category(),
            MARGIN_LEFT - 8.0,
            y_top + bar_height / 2.0 + 4.0,
        );
    }

    // X axis baseline
    ctx.set_stroke_style(&"#cccccc".into());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(MARGIN_LEFT, height - MARGIN_BOTTOM);
    ctx.line_to(width - MARGIN_RIGHT, height - MARGIN_BOTTOM);
    ctx.stroke();

    // X axis ticks (5 intervals)
    ctx.set_fill_style(&"#666666".into());
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    for i in 0..=5 {
        let value = max_value * i as f64 / 5.0;
        let x = MARGIN_LEFT + chart_width * i as f64 / 5.0;
        let _ = ctx.fill_text(&format!("{:.0}", value), x, height - MARGIN_BOTTOM + 16.0);
    }
}
