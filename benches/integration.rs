use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dopri54::{Dopri54, HarmonicOscillator, Tolerances};

fn bench_oscillator_full_interval(c: &mut Criterion) {
    let sys = HarmonicOscillator::new(1.0);
    let y0 = [1.0, 0.0];

    c.bench_function("oscillator_0_to_100", |b| {
        b.iter(|| {
            let tol = Tolerances::new(1e-8, 1e-9);
            let mut solver = Dopri54::new(tol);
            solver
                .integrate(&sys, 0.0, black_box(&y0), 100.0, 0.1)
                .unwrap()
        })
    });
}

fn bench_oscillator_full_interval_trace(c: &mut Criterion) {
    let sys = HarmonicOscillator::new(1.0);
    let y0 = [1.0, 0.0];

    c.bench_function("oscillator_0_to_100_trace", |b| {
        b.iter(|| {
            let tol = Tolerances::new(1e-8, 1e-9);
            let mut solver = Dopri54::new(tol);
            solver
                .integrate_with_trace(&sys, 0.0, black_box(&y0), 100.0, 0.1)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_oscillator_full_interval,
    bench_oscillator_full_interval_trace
);
criterion_main!(benches);
