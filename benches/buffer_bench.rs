use linepad::buffer::{resolve, Coordinate, TextBuffer};
use linepad::search::search;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {} with some searchable content", i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_resolve(c: &mut Criterion) {
    let text = sample_text(1000);
    let mut group = c.benchmark_group("coordinate_resolve");
    group.bench_function("last_line", |b| {
        b.iter(|| resolve(black_box(&text), Coordinate::new(999, 10)).unwrap());
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let text = sample_text(1000);
    let mut group = c.benchmark_group("literal_search");
    group.bench_function("all_matches", |b| {
        b.iter(|| search(black_box(&text), "searchable").count());
    });
    group.finish();
}

fn bench_insert_with_history(c: &mut Criterion) {
    let text = sample_text(200);
    let mut group = c.benchmark_group("text_buffer_insert");
    group.bench_function("insert_then_undo", |b| {
        b.iter_batched(
            || TextBuffer::from_str(&text),
            |mut buffer| {
                for i in 0..64 {
                    buffer.insert(Coordinate::new(i, 0), "x").unwrap();
                }
                while buffer.undo() {}
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_search, bench_insert_with_history);
criterion_main!(benches);
