//! Submit-path benchmarks for the session store.
//!
//! Run with: `cargo bench -p chemistry --bench session_submit`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chemistry::{ChemistrySessions, FormInput, IdentityGenerator};

/// Builds a pattern of `lines` reaction lines.
fn synthetic_pattern(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("({}, {}) + ({}, {}) -> bond\n", i % 256, i % 7, (i + 1) % 256, i % 5))
        .collect()
}

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_submit");
    for lines in [1_usize, 100, 10_000] {
        let pattern = synthetic_pattern(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &pattern, |b, pattern| {
            let mut sessions = ChemistrySessions::default();
            let id = sessions.begin();
            b.iter(|| {
                let input = FormInput::new(4, 4, pattern.as_str());
                let out = sessions
                    .submit(id, black_box(input), &IdentityGenerator)
                    .map(|o| o.generated_text.len());
                black_box(out)
            });
        });
    }
    group.finish();
}

fn bench_many_sessions(c: &mut Criterion) {
    c.bench_function("begin_submit_end_1000_sessions", |b| {
        b.iter(|| {
            let mut sessions = ChemistrySessions::default();
            for _ in 0..1000 {
                let id = sessions.begin();
                let _ = sessions.submit(id, FormInput::new(1, 2, "A+B"), &IdentityGenerator);
                sessions.end(id);
            }
            black_box(sessions.len())
        });
    });
}

criterion_group!(benches, bench_submit, bench_many_sessions);
criterion_main!(benches);
