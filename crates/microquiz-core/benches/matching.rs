use criterion::{black_box, criterion_group, criterion_main, Criterion};

use microquiz_core::answer::is_correct;

fn bench_is_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_correct");
    let options: Vec<String> = ["Paris", "London", "Berlin", "Madrid"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    group.bench_function("direct_match", |b| {
        b.iter(|| is_correct(black_box("  PARIS "), black_box("Paris"), None))
    });

    group.bench_function("wrong_option", |b| {
        b.iter(|| is_correct(black_box("berlin"), black_box("Paris"), Some(&options)))
    });

    group.bench_function("cyrillic", |b| {
        b.iter(|| is_correct(black_box(" Москва "), black_box("москва"), None))
    });

    group.finish();
}

criterion_group!(benches, bench_is_correct);
criterion_main!(benches);
