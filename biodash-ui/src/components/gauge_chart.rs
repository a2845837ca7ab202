//! Gauge Chart Component
//!
//! Washing-frequency gauge for the selected sample, drawn on HTML5 Canvas in
//! the `#gauge` region. A 0-10 semicircular dial with ticks every 2, ten
//! color-graded background bands, a black needle, and the numeric value
//! printed unchanged below the dial. Values outside [0, 10] keep their printed
//! value; only the needle sweep is pinned to the dial ends.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{render_number, Dataset};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 400;

const DIAL_MIN: f64 = 0.0;
const DIAL_MAX: f64 = 10.0;

/// The ten background bands: range start, range end, rgba fill
pub const GAUGE_BANDS: [(f64, f64, &str); 10] = [
    (0.0, 1.0, "rgba(255, 255, 255, 0)"),
    (1.0, 2.0, "rgba(232, 226, 202, .5)"),
    (2.0, 3.0, "rgba(210, 206, 145, .5)"),
    (3.0, 4.0, "rgba(202, 209, 95, .5)"),
    (4.0, 5.0, "rgba(184, 205, 68, .5)"),
    (5.0, 6.0, "rgba(170, 202, 42, .5)"),
    (6.0, 7.0, "rgba(142, 178, 35, .5)"),
    (7.0, 8.0, "rgba(110, 154, 22, .5)"),
    (8.0, 9.0, "rgba(50, 143, 10, .5)"),
    (9.0, 10.0, "rgba(14, 127, 0, .5)"),
];

/// Needle angle in radians for a dial value.
///
/// The dial is the upper semicircle: value 0 points left (pi), value 10
/// points right (0). Out-of-range values pin to the dial ends.
pub fn needle_angle(value: f64) -> f64 {
    let pinned = value.clamp(DIAL_MIN, DIAL_MAX);
    std::f64::consts::PI * (1.0 - pinned / DIAL_MAX)
}

/// The printed gauge value: never clamped, rendered the way the raw document
/// reads its numbers
pub fn display_value(value: f64) -> String {
    render_number(Some(value))
}

/// Washing-frequency gauge for the selected sample
#[component]
pub fn GaugeChart(
    dataset: Signal<Option<Dataset>>,
    selected: Signal<Option<String>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let wfreq = create_memo(move |_| {
        dataset.with(|dataset| {
            let dataset = dataset.as_ref()?;
            let id = selected.get()?;

            let record = match dataset.metadata(&id) {
                Some(record) => record,
                None => {
                    web_sys::console::warn_1(
                        &format!("No metadata record for sample '{}'", id).into(),
                    );
                    return None;
                }
            };

            match record.wfreq {
                Some(value) => Some(value),
                None => {
                    web_sys::console::warn_1(
                        &format!("Sample '{}' has no washing frequency", id).into(),
                    );
                    None
                }
            }
        })
    });

    create_effect(move |_| {
        let value = wfreq.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_gauge(&canvas, value);
        }
    });

    view! {
        <div id="gauge" class="panel">
            <canvas node_ref=canvas_ref width=WIDTH height=HEIGHT />
        </div>
    }
}

/// Paint the gauge; `None` leaves the region cleared
fn draw_gauge(canvas: &HtmlCanvasElement, value: Option<f64>) {
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

    let value = match value {
        Some(value) => value,
        None => return,
    };

    let cx = width / 2.0;
    let cy = 260.0;
    let radius = 140.0;

    // Title
    ctx.set_fill_style(&"#000000".into());
    ctx.set_text_align("center");
    ctx.set_font("bold 16px sans-serif");
    let _ = ctx.fill_text("Belly Button Washing Frequency", cx, 48.0);
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("Scrubs per Week", cx, 70.0);

    // Background bands, innermost edge at 60% radius so they read as a ring
    for (lo, hi, color) in GAUGE_BANDS {
        let a0 = needle_angle(lo);
        let a1 = needle_angle(hi);

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        // Canvas angles run clockwise with y down; math angles negate
        let _ = ctx.arc(cx, cy, radius, -a0, -a1);
        let _ = ctx.arc_with_anticlockwise(cx, cy, radius * 0.6, -a1, -a0, true);
        ctx.close_path();
        ctx.fill();
    }

    // Dial outline
    ctx.set_stroke_style(&"#999999".into());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, -std::f64::consts::PI, 0.0);
    ctx.stroke();

    // Tick labels every 2
    ctx.set_fill_style(&"#333333".into());
    ctx.set_font("13px sans-serif");
    let mut tick = DIAL_MIN;
    while tick <= DIAL_MAX {
        let angle = needle_angle(tick);
        let x = cx + (radius + 18.0) * angle.cos();
        let y = cy - (radius + 18.0) * angle.sin();
        let _ = ctx.fill_text(&format!("{:.0}", tick), x, y + 4.0);
        tick += 2.0;
    }

    // Needle, pinned to the dial ends when the value is out of range
    let angle = needle_angle(value);
    let tip_x = cx + radius * 0.85 * angle.cos();
    let tip_y = cy - radius * 0.85 * angle.sin();

    ctx.set_stroke_style(&"#000000".into());
    ctx.set_line_width(4.0);
    ctx.begin_path();
    ctx.move_to(cx, cy);
    ctx.line_to(tip_x, tip_y);
    ctx.stroke();

    ctx.set_fill_style(&"#000000".into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, 6.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();

    // Printed value, unclamped
    ctx.set_font("bold 28px sans-serif");
    let _ = ctx.fill_text(&display_value(value), cx, cy + 50.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_needle_angle_sweep() {
        assert_eq!(needle_angle(0.0), PI);
        assert_eq!(needle_angle(10.0), 0.0);
        assert!((needle_angle(5.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_needle_pins_out_of_range() {
        assert_eq!(needle_angle(-3.0), PI);
        assert_eq!(needle_angle(12.0), 0.0);
    }

    #[test]
    fn test_display_value_is_never_clamped() {
        assert_eq!(display_value(2.0), "2");
        assert_eq!(display_value(6.5), "6.5");
        assert_eq!(display_value(12.0), "12");
        assert_eq!(display_value(-1.0), "-1");
    }

    #[test]
    fn test_bands_cover_the_dial() {
        assert_eq!(GAUGE_BANDS.len(), 10);
        assert_eq!(GAUGE_BANDS[0].0, 0.0);
        assert_eq!(GAUGE_BANDS[9].1, 10.0);

        // Contiguous, step 1
        for pair in GAUGE_BANDS.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
