//! Dashboard Data Model
//!
//! The dashboard's own view of the sample document. The shapes mirror the
//! server's, redeclared here so the UI crate stands alone.
//!
//! Identifier types are loose in the source document (`metadata[].id` is a
//! JSON number, `names[]` and `samples[].id` are strings); everything is
//! normalized to `String` at deserialization so lookups compare exactly.

use serde::{Deserialize, Deserializer};

/// The full sample document, fetched once and held for the page session
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Dataset {
    /// Sample identifiers, in dropdown order
    pub names: Vec<String>,
    /// Demographic metadata, one record per sample
    pub metadata: Vec<MetadataRecord>,
    /// OTU measurements, one record per sample
    pub samples: Vec<SampleRecord>,
}

impl Dataset {
    /// Look up the metadata record for a sample id (first match)
    pub fn metadata(&self, id: &str) -> Option<&MetadataRecord> {
        self.metadata.iter().find(|record| record.id == id)
    }

    /// Look up the sample record for a sample id (first match)
    pub fn sample(&self, id: &str) -> Option<&SampleRecord> {
        self.samples.iter().find(|record| record.id == id)
    }
}

/// OTU measurements for one sample.
///
/// `otu_ids`, `otu_labels` and `sample_values` are positionally aligned.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SampleRecord {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub otu_ids: Vec<u32>,
    pub otu_labels: Vec<String>,
    pub sample_values: Vec<f64>,
}

/// Demographic metadata for one sample.
///
/// Washing frequency is a named field; the panel renders all fields in
/// declaration order, which matches the source schema.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetadataRecord {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub ethnicity: Option<String>,
    pub gender: Option<String>,
    pub age: Option<f64>,
    pub location: Option<String>,
    pub bbtype: Option<String>,
    /// Belly button washing frequency, scrubs per week
    pub wfreq: Option<f64>,
}

impl MetadataRecord {
    /// All fields as `(key, rendered value)` pairs, in declaration order.
    ///
    /// Absent values render as `null`, the way the raw document reads.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("ethnicity", render_text(&self.ethnicity)),
            ("gender", render_text(&self.gender)),
            ("age", render_number(self.age)),
            ("location", render_text(&self.location)),
            ("bbtype", render_text(&self.bbtype)),
            ("wfreq", render_number(self.wfreq)),
        ]
    }
}

fn render_text(value: &Option<String>) -> String {
    match value {
        Some(text) => text.clone(),
        None => "null".to_string(),
    }
}

/// Render a number the way the raw document reads: integral values without a
/// trailing `.0`, absent values as `null`.
pub fn render_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "null".to_string(),
    }
}

/// Accept a sample id as either a JSON string or a JSON integer
fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}
