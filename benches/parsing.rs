//! Criterion benchmarks for the value type parsers.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use value_objects::{DataUri, MediaTypeParameters, PortNumber, SemVer};

/// Benchmark: SemVer::parse with varying version shapes
fn bench_semver_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("semver_parse");

    let test_cases = [
        ("core", "1.0.0"),
        ("large_numbers", "18446744073709551615.4294967296.65536"),
        ("pre_release", "1.0.0-alpha.beta.1"),
        ("build", "1.0.0+20130313144700"),
        ("full", "1.0.0-x.7.z.92+exp.sha.5114f85"),
    ];

    for (name, version) in test_cases {
        group.throughput(Throughput::Bytes(version.len() as u64));
        group.bench_with_input(BenchmarkId::new("version", name), &version, |b, version| {
            b.iter(|| SemVer::parse(black_box(version)));
        });
    }

    group.finish();
}

/// Benchmark: DataUri::parse with varying headers and payload sizes
fn bench_data_uri_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_uri_parse");

    let long_payload = format!("data:text/plain,{}", "the+data%3a1%2C2".repeat(64));
    let test_cases = [
        ("minimal", "data:,".to_string()),
        ("media_type", "data:text/plain,hello".to_string()),
        (
            "parameters",
            "data:text/plain;charset=UTF-8;page=21,the+data%3a1%2C2".to_string(),
        ),
        ("base64", "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAE=".to_string()),
        ("long_payload", long_payload),
    ];

    for (name, uri) in &test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), uri, |b, uri| {
            b.iter(|| DataUri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: Serialization back to text
fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    let version = SemVer::parse("1.0.0-x.7.z.92+exp.sha.5114f85").expect("valid test version");
    group.bench_function("semver", |b| {
        b.iter(|| black_box(&version).to_string());
    });

    let parameters: MediaTypeParameters = [("charset", "UTF-8"), ("page", "21")]
        .into_iter()
        .collect();
    let uri = DataUri::from_parts(
        Some("text/plain".to_string()),
        parameters,
        false,
        "the data:1,2 ".repeat(32),
    );
    group.bench_function("data_uri", |b| {
        b.iter(|| black_box(&uri).to_string());
    });

    group.finish();
}

/// Benchmark: Bounded number parsing from text
fn bench_port_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("port_number");

    for input in ["0", "8080", "65535", "65536", "http"] {
        group.bench_with_input(BenchmarkId::new("from_str", input), &input, |b, input| {
            b.iter(|| black_box(input).parse::<PortNumber>());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_semver_parse,
    bench_data_uri_parse,
    bench_display,
    bench_port_number,
);
criterion_main!(benches);
