//! Bubble Chart Component
//!
//! One marker per OTU in the selected sample, drawn on HTML5 Canvas in the
//! `#bubble` region. No truncation: every OTU is plotted, x = OTU id,
//! y = sample value, marker diameter = sample value, color mapped from the
//! OTU id through the Earth colorscale. Hover shows the nearest marker only.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{Dataset, SampleRecord};

const WIDTH: u32 = 900;
const HEIGHT: u32 = 450;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// The fixed Earth colorscale stops: position along [0, 1] and RGB color
pub const EARTH_STOPS: [(f64, (u8, u8, u8)); 6] = [
    (0.0, (0, 0, 130)),
    (0.1, (0, 180, 180)),
    (0.2, (40, 210, 40)),
    (0.4, (230, 230, 50)),
    (0.6, (120, 70, 20)),
    (1.0, (255, 255, 255)),
];

/// One marker of the prepared chart
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub otu_id: u32,
    pub value: f64,
    /// Marker diameter in pixels
    pub size: f64,
    pub color: (u8, u8, u8),
    pub label: String,
}

/// Interpolate the Earth colorscale at `t` (clamped to [0, 1])
pub fn earth_color(t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);

    for pair in EARTH_STOPS.windows(2) {
        let (p0, c0) = pair[0];
        let (p1, c1) = pair[1];
        if t <= p1 {
            let f = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };
            return (
                lerp(c0.0, c1.0, f),
                lerp(c0.1, c1.1, f),
                lerp(c0.2, c1.2, f),
            );
        }
    }

    EARTH_STOPS[EARTH_STOPS.len() - 1].1
}

fn lerp(a: u8, b: u8, f: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * f).round() as u8
}

/// One marker per OTU, colors normalized over the sample's own id range
pub fn markers(sample: &SampleRecord) -> Vec<Marker> {
    let min_id = sample.otu_ids.iter().min().copied().unwrap_or(0) as f64;
    let max_id = sample.otu_ids.iter().max().copied().unwrap_or(0) as f64;
    let id_span = max_id - min_id;

    sample
        .otu_ids
        .iter()
        .zip(&sample.sample_values)
        .zip(&sample.otu_labels)
        .map(|((&otu_id, &value), label)| {
            let t = if id_span > 0.0 {
                (otu_id as f64 - min_id) / id_span
            } else {
                0.5
            };
            Marker {
                otu_id,
                value,
                size: value,
                color: earth_color(t),
                label: label.clone(),
            }
        })
        .collect()
}

fn css_rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({},{},{})", r, g, b)
}

/// All-OTU bubble chart for the selected sample
#[component]
pub fn BubbleChart(
    dataset: Signal<Option<Dataset>>,
    selected: Signal<Option<String>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hover, set_hover) = create_signal(None::<String>);

    // Marker pixel centers from the last draw, for nearest-point hover
    let positions = store_value(Vec::<(f64, f64, String)>::new());

    let prepared = create_memo(move |_| {
        dataset.with(|dataset| {
            let dataset = dataset.as_ref()?;
            let id = selected.get()?;

            match dataset.sample(&id) {
                Some(sample) => Some(markers(sample)),
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

    create_effect(move |_| {
        let markers = prepared.get();
        if let Some(canvas) = canvas_ref.get() {
            positions.set_value(draw_bubble_chart(&canvas, &markers));
        }
    });

    // Hover mode "closest": the nearest marker wins, regardless of radius
    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.offset_x() as f64, ev.offset_y() as f64);

        let nearest = positions.with_value(|positions| {
            positions
                .iter()
                .min_by(|a, b| {
                    let da = (a.0 - x).powi(2) + (a.1 - y).powi(2);
                    let db = (b.0 - x).powi(2) + (b.1 - y).powi(2);
                    da.total_cmp(&db)
                })
                .map(|p| p.2.clone())
        });
        set_hover.set(nearest);
    };

    view! {
        <div id="bubble" class="panel">
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

/// Paint the markers; returns their pixel centers for hover lookup
fn draw_bubble_chart(canvas: &HtmlCanvasElement, markers: &[Marker]) -> Vec<(f64, f64, String)> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return Vec::new(),
        },
        _ => return Vec::new(),
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
    let _ = ctx.fill_text("Bacteria Per Sample", width / 2.0, 28.0);

    // X axis title
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text("OTU ID", width / 2.0, height - 8.0);

    if markers.is_empty() {
        return Vec::new();
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let min_x = markers.iter().map(|m| m.otu_id).min().unwrap_or(0) as f64;
    let max_x = markers.iter().map(|m| m.otu_id).max().unwrap_or(0) as f64;
    let x_span = if max_x > min_x { max_x - min_x } else { 1.0 };

    let max_y = markers.iter().fold(0.0_f64, |max, m| max.max(m.value));
    let y_span = if max_y > 0.0 { max_y * 1.1 } else { 1.0 };

    // Axis lines
    ctx.set_stroke_style(&"#cccccc".into());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(MARGIN_LEFT, MARGIN_TOP);
    ctx.line_to(MARGIN_LEFT, height - MARGIN_BOTTOM);
    ctx.line_to(width - MARGIN_RIGHT, height - MARGIN_BOTTOM);
    ctx.stroke();

    // Tick labels
    ctx.set_fill_style(&"#666666".into());
    ctx.set_font("11px sans-serif");
    for i in 0..=5 {
        let f = i as f64 / 5.0;

        ctx.set_text_align("center");
        let x_value = min_x + f * x_span;
        let x = MARGIN_LEFT + f * chart_width;
        let _ = ctx.fill_text(&format!("{:.0}", x_value), x, height - MARGIN_BOTTOM + 16.0);

        ctx.set_text_align("right");
        let y_value = f * y_span;
        let y = height - MARGIN_BOTTOM - f * chart_height;
        let _ = ctx.fill_text(&format!("{:.0}", y_value), MARGIN_LEFT - 8.0, y + 4.0);
    }

    // Markers
    let mut positions = Vec::with_capacity(markers.len());
    for marker in markers {
        let x = MARGIN_LEFT + ((marker.otu_id as f64 - min_x) / x_span) * chart_width;
        let y = height - MARGIN_BOTTOM - (marker.value / y_span) * chart_height;
        let radius = (marker.size / 2.0).max(1.0);

        ctx.set_fill_style(&css_rgb(marker.color).into());
        ctx.set_global_alpha(0.8);
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        ctx.set_global_alpha(1.0);

        positions.push((x, y, marker.label.clone()));
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SampleRecord {
        SampleRecord {
            id: "940".to_string(),
            otu_ids: vec![100, 300, 500],
            otu_labels: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            sample_values: vec![30.0, 20.0, 10.0],
        }
    }

    #[test]
    fn test_one_marker_per_otu() {
        let markers = markers(&sample());
        assert_eq!(markers.len(), 3);

        // No truncation even past ten
        let big = SampleRecord {
            id: "940".to_string(),
            otu_ids: (0..25).collect(),
            otu_labels: (0..25).map(|i| i.to_string()).collect(),
            sample_values: (0..25).map(|i| i as f64).collect(),
        };
        assert_eq!(super::markers(&big).len(), 25);
    }

    #[test]
    fn test_marker_fields() {
        let markers = markers(&sample());
        assert_eq!(markers[0].otu_id, 100);
        assert_eq!(markers[0].value, 30.0);
        assert_eq!(markers[0].size, 30.0);
        assert_eq!(markers[0].label, "a");
    }

    #[test]
    fn test_colors_span_the_id_range() {
        let markers = markers(&sample());
        // min id sits at the bottom of the scale, max id at the top
        assert_eq!(markers[0].color, earth_color(0.0));
        assert_eq!(markers[2].color, earth_color(1.0));
        assert_eq!(markers[1].color, earth_color(0.5));
    }

    #[test]
    fn test_earth_color_stops() {
        assert_eq!(earth_color(0.0), (0, 0, 130));
        assert_eq!(earth_color(0.1), (0, 180, 180));
        assert_eq!(earth_color(0.2), (40, 210, 40));
        assert_eq!(earth_color(0.4), (230, 230, 50));
        assert_eq!(earth_color(0.6), (120, 70, 20));
        assert_eq!(earth_color(1.0), (255, 255, 255));
    }

    #[test]
    fn test_earth_color_interpolates_between_stops() {
        // Halfway between (0.0, rgb(0,0,130)) and (0.1, rgb(0,180,180))
        assert_eq!(earth_color(0.05), (0, 90, 155));
        // Clamped outside [0, 1]
        assert_eq!(earth_color(-1.0), (0, 0, 130));
        assert_eq!(earth_color(2.0), (255, 255, 255));
    }

    #[test]
    fn test_single_otu_uses_scale_midpoint() {
        let one = SampleRecord {
            id: "940".to_string(),
            otu_ids: vec![42],
            otu_labels: vec!["only".to_string()],
            sample_values: vec![7.0],
        };
        assert_eq!(markers(&one)[0].color, earth_color(0.5));
    }
}
