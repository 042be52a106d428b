use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hindsight_core::{ChartInstance, PointerEvent, PointerKind, Question};

fn build_instance(n: usize) -> ChartInstance {
    let data: Vec<(i32, f64)> = (0..n)
        .map(|i| (1900 + i as i32, 40.0 + (i as f64 * 0.2).cos() * 5.0))
        .collect();
    ChartInstance::new("bench", Question::new(data), 1024, 400).expect("valid question")
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_sweep");
    for &n in &[100usize, 1_000usize] {
        group.bench_function(format!("years_{n}"), |b| {
            b.iter(|| {
                let mut inst = build_instance(n);
                let width = inst.layout().plot_width();
                let mut x = width * 0.5;
                while x < width {
                    let outcome = inst.pointer(PointerEvent::new(PointerKind::Drag, x, 120.0));
                    black_box(outcome);
                    x += 2.0;
                }
                black_box(inst.completed());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pointer_sweep);
criterion_main!(benches);
