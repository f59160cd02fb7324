use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phoneplan::ENGINE;

/// A mixed bag of inputs: international, national, decorated, vanity and
/// short, so the numbers reflect typical traffic rather than a best case.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("(650) 253-0000", "US"),
        ("+44 1234 567890", "GB"),
        ("01234 567890", "GB"),
        ("02 3661 8300", "IT"),
        ("8 (495) 123-45-67", "RU"),
        ("03 331 6005 ext 3456", "NZ"),
        ("1-800-FLOWERS", "US"),
        ("+800 1234 5678", "ZZ"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                let _ = ENGINE.parse(black_box(number), black_box(region));
            }
        })
    });

    group.bench_function("parse_and_keep_raw_input()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                let _ = ENGINE.parse_and_keep_raw_input(black_box(number), black_box(region));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
