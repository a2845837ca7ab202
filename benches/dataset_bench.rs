//! Benchmarks for Biodash dataset handling
//!
//! Run with: cargo bench

use biodash::dataset::{Dataset, DatasetSource, DatasetStore};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::path::PathBuf;

/// Build a document body with `count` samples, each carrying `otus` OTUs
fn build_document(count: usize, otus: usize) -> String {
    let names: Vec<String> = (0..count).map(|i| format!("\"{}\"", 900 + i)).collect();

    let metadata: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id": {}, "ethnicity": "Caucasian", "gender": "F", "age": 24.0,
                 "location": "Beaufort/NC", "bbtype": "I", "wfreq": {}}}"#,
                900 + i,
                i % 10
            )
        })
        .collect();

    let samples: Vec<String> = (0..count)
        .map(|i| {
            let ids: Vec<String> = (0..otus).map(|o| o.to_string()).collect();
            let labels: Vec<String> = (0..otus).map(|o| format!("\"Bacteria;{}\"", o)).collect();
            let values: Vec<String> = (0..otus).map(|o| (otus - o).to_string()).collect();
            format!(
                r#"{{"id": "{}", "otu_ids": [{}], "otu_labels": [{}], "sample_values": [{}]}}"#,
                900 + i,
                ids.join(","),
                labels.join(","),
                values.join(",")
            )
        })
        .collect();

    format!(
        r#"{{"names": [{}], "metadata": [{}], "samples": [{}]}}"#,
        names.join(","),
        metadata.join(","),
        samples.join(",")
    )
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 500] {
        let body = build_document(size, 30);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("parse_{}", size), |b| {
            b.iter(|| {
                let dataset: Dataset = serde_json::from_str(black_box(&body)).unwrap();
                dataset
            })
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [10, 100, 500] {
        let body = build_document(size, 30);
        let dataset: Dataset = serde_json::from_str(&body).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("validate_{}", size), |b| {
            b.iter(|| black_box(&dataset).validate())
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let body = build_document(500, 30);
    let dataset: Dataset = serde_json::from_str(&body).unwrap();
    let last_id = dataset.names.last().unwrap().clone();

    group.bench_function("sample_first", |b| {
        b.iter(|| dataset.sample(black_box("900")))
    });

    group.bench_function("sample_last", |b| {
        b.iter(|| dataset.sample(black_box(&last_id)))
    });

    group.bench_function("metadata_miss", |b| {
        b.iter(|| dataset.metadata(black_box("no-such-sample")))
    });

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    let body = build_document(100, 30);

    group.bench_function("from_json_100", |b| {
        b.iter(|| {
            DatasetStore::from_json(
                black_box(&body),
                DatasetSource::File(PathBuf::from("bench")),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_validate, bench_lookup, bench_store);
criterion_main!(benches);
