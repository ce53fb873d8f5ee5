//! Benchmarks for repdf analysis and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates marker text with the given number of sections.
fn create_test_text(sections: usize) -> String {
    let mut text = String::from("# Benchmark Document\n\n");
    for i in 0..sections {
        text.push_str(&format!("## Section {}\n\n", i + 1));
        text.push_str(
            "This paragraph carries **bold** words and enough plain text to wrap \
             across several lines of a justified page body.\n\n",
        );
        text.push_str("Steps:\n1. Collect input\n2. Analyze structure\n\n3. Render output\n\n");
        text.push_str("NOTES\n\n");
    }
    text
}

/// Benchmark input format detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = b"%PDF-1.5\n%\xe2\xe3\xcf\xd3\n";
    let text_data = b"Plain text input, not a PDF at all";

    c.bench_function("detect_pdf", |b| {
        b.iter(|| repdf::detect_format_from_bytes(black_box(pdf_data)).unwrap());
    });

    c.bench_function("detect_text", |b| {
        b.iter(|| repdf::detect_format_from_bytes(black_box(text_data)).unwrap());
    });
}

/// Benchmark structure analysis at various sizes.
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for sections in [1, 10, 100].iter() {
        let text = create_test_text(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| repdf::analyze(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the structure summary.
fn bench_serialize(c: &mut Criterion) {
    let map = repdf::analyze(&create_test_text(50)).unwrap();

    c.bench_function("serialize_50_sections", |b| {
        b.iter(|| repdf::render::serialize(black_box(&map)));
    });
}

/// Benchmark layout, pagination and PDF encoding.
fn bench_render_pdf(c: &mut Criterion) {
    let options = repdf::RenderOptions::default();
    let mut group = c.benchmark_group("render_pdf");

    for sections in [1, 20].iter() {
        let text = create_test_text(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| repdf::render_pdf(black_box(&text), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_analyze,
    bench_serialize,
    bench_render_pdf,
);
criterion_main!(benches);
