use calc_expr::ExprBuilder;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A long keystroke stream with nested brackets and some rejected keys
fn keystrokes(n: usize) -> Vec<&'static str> {
    const PATTERN: [&str; 12] = ["(", "12", "+", "+", "(", "3.5", ")", "*", "7", ")", "-", "4"];
    PATTERN.iter().copied().cycle().take(n).collect()
}

fn bench_add(c: &mut Criterion) {
    let keys = keystrokes(10_000);
    c.bench_function("add 10k keystrokes", |b| {
        b.iter(|| {
            let mut builder = ExprBuilder::new();
            for key in &keys {
                builder.add(black_box(key));
            }
            builder
        })
    });
}

fn bench_set(c: &mut Criterion) {
    let text = keystrokes(10_000).join(" ");
    c.bench_function("set 10k tokens", |b| {
        b.iter(|| {
            let mut builder = ExprBuilder::new();
            builder.set(Some(black_box(text.as_str())));
            builder
        })
    });
}

fn bench_finalize(c: &mut Criterion) {
    let mut builder = ExprBuilder::new();
    for _ in 0..2_000 {
        builder.add("(").add("1").add("+");
    }
    c.bench_function("finalize 2k open brackets", |b| {
        b.iter(|| black_box(&builder).to_finalized_string())
    });
}

criterion_group!(benches, bench_add, bench_set, bench_finalize);
criterion_main!(benches);
