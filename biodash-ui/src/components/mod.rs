//! UI Components
//!
//! One component per display region, plus the dropdown selector that drives
//! them. Each view is a pure function of `(selected id, dataset)`: the chart
//! components prepare their data through testable helpers, then paint the
//! result onto a canvas.

pub mod bar_chart;
pub mod bubble_chart;
pub mod gauge_chart;
pub mod metadata_panel;
pub mod selector;

pub use bar_chart::BarChart;
pub use bubble_chart::BubbleChart;
pub use gauge_chart::GaugeChart;
pub use metadata_panel::MetadataPanel;
pub use selector::SampleSelector;

#[cfg(test)]
mod tests {
    //! End-to-end preparation pipeline over a minimal document:
    //! parse, look up, and prepare every view for the one sample.

    use crate::components::{bar_chart, bubble_chart, gauge_chart, metadata_panel};
    use crate::model::Dataset;

    const DOCUMENT: &str = r#"{
        "names": ["940"],
        "metadata": [
            {"id": "940", "ethnicity": "Caucasian", "gender": "F", "age": 24.0,
             "location": "Beaufort/NC", "bbtype": "I", "wfreq": 2}
        ],
        "samples": [
            {"id": "940", "otu_ids": [1, 2], "otu_labels": ["a", "b"],
             "sample_values": [5, 3]}
        ]
    }"#;

    #[test]
    fn test_selecting_the_sample_drives_all_four_views() {
        let dataset: Dataset = serde_json::from_str(DOCUMENT).unwrap();
        let sample = dataset.sample("940").unwrap();
        let metadata = dataset.metadata("940").unwrap();

        // Bar chart: two bars, reversed so id 2 comes before id 1
        let rows = bar_chart::top_ten_reversed(sample);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].otu_id, 2);
        assert_eq!(rows[1].otu_id, 1);

        // Bubble chart: one marker per OTU
        let markers = bubble_chart::markers(sample);
        assert_eq!(markers.len(), 2);

        // Gauge: washing frequency passed through unchanged
        assert_eq!(metadata.wfreq, Some(2.0));
        assert_eq!(gauge_chart::display_value(2.0), "2");

        // Metadata panel: one line per field
        let lines = metadata_panel::panel_lines(metadata);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "id: 940");
    }

    #[test]
    fn test_preparation_is_idempotent() {
        let dataset: Dataset = serde_json::from_str(DOCUMENT).unwrap();
        let sample = dataset.sample("940").unwrap();
        let metadata = dataset.metadata("940").unwrap();

        assert_eq!(
            bar_chart::top_ten_reversed(sample),
            bar_chart::top_ten_reversed(sample)
        );
        assert_eq!(
            bubble_chart::markers(sample),
            bubble_chart::markers(sample)
        );
        assert_eq!(
            metadata_panel::panel_lines(metadata),
            metadata_panel::panel_lines(metadata)
        );
    }
}
