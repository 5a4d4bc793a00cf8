//! Benchmarks for chatlens parsing and analytics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- android`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analytics::AnalyticsEngine;
use chatlens::output::{to_csv, to_json, to_text};
use chatlens::{Filter, Insights, TranscriptParser};

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dmitri"];

fn generate_android_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = SENDERS[i % SENDERS.len()];
        let day = (i / 1440) % 28 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        let body = match i % 10 {
            0 => "<Media omitted>".to_string(),
            1 => format!("see https://example.com/{} 😂", i),
            2 => format!("first line {}\nsecond line", i),
            _ => format!("pizza tonight at the usual place? message number {}", i),
        };
        lines.push(format!(
            "{:02}/03/2024, {:02}:{:02} - {}: {}",
            day, hour, minute, sender, body
        ));
    }
    lines.join("\n")
}

fn generate_ios_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = SENDERS[i % SENDERS.len()];
        let day = (i / 720) % 28 + 1;
        let hour = (i / 60) % 12 + 1;
        let meridiem = if (i / 720) % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "[3/{}/24, {}:{:02}:00 {}] {}: Message number {} 🎉",
            day,
            hour,
            i % 60,
            meridiem,
            sender,
            i
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_android_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("android_parsing");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_android_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let collection = parser.parse_str(black_box(txt)).unwrap();
                black_box(collection)
            });
        });
    }
    group.finish();
}

fn bench_ios_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ios_parsing");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_ios_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let collection = parser.parse_str(black_box(txt)).unwrap();
                black_box(collection)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Analytics Benchmarks
// =============================================================================

fn bench_wordcloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("wordcloud");
    let engine = AnalyticsEngine::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let collection = chatlens::parse(&generate_android_txt(size)).unwrap();
        let view = collection.view(&Filter::Overall).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &view, |b, view| {
            b.iter(|| black_box(engine.create_wordcloud(black_box(view))));
        });
    }
    group.finish();
}

fn bench_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap");
    let engine = AnalyticsEngine::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let collection = chatlens::parse(&generate_android_txt(size)).unwrap();
        let view = collection.view(&Filter::Overall).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &view, |b, view| {
            b.iter(|| black_box(engine.activity_heatmap(black_box(view))));
        });
    }
    group.finish();
}

fn bench_participant_report(c: &mut Criterion) {
    let collection = chatlens::parse(&generate_android_txt(10_000)).unwrap();
    let insights = Insights::new(&collection);
    let filter = Filter::participant("Bob");

    c.bench_function("participant_report_10000", |b| {
        b.iter(|| black_box(insights.report(black_box(&filter)).unwrap()));
    });
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let collection = chatlens::parse(&generate_android_txt(10_000)).unwrap();
    let report = Insights::new(&collection).report(&Filter::Overall).unwrap();

    group.bench_function("text", |b| b.iter(|| black_box(to_text(&report, 10))));
    group.bench_function("json", |b| b.iter(|| black_box(to_json(&report).unwrap())));
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&collection).unwrap())));
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = TranscriptParser::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_android_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // Full pipeline: parse -> report -> render
                let collection = parser.parse_str(black_box(txt)).unwrap();
                let report = Insights::new(&collection).report(&Filter::Overall).unwrap();
                black_box(to_text(&report, 10))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_android_parsing,
    bench_ios_parsing,
    bench_wordcloud,
    bench_heatmap,
    bench_participant_report,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
