//! Kernel throughput benches. The editor sweeps every visible node thumbnail
//! per edit, so the per-call cost of the scalar kernels is worth watching.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glaze_core::easing::EaseKind;
use glaze_core::remap::{smootherstep, smoothstep};
use glaze_core::shaping::gain;

fn bench_remap(c: &mut Criterion) {
    let mut group = c.benchmark_group("remap");

    group.bench_function("smootherstep_sweep_1024", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..1024 {
                let t = i as f32 / 1023.0;
                acc += smootherstep(black_box(0.2), black_box(0.8), black_box(t));
            }
            acc
        })
    });

    group.bench_function("smoothstep_sweep_1024", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..1024 {
                let t = i as f32 / 1023.0;
                acc += smoothstep(black_box(0.2), black_box(0.8), black_box(t));
            }
            acc
        })
    });

    group.finish();
}

fn bench_shaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("shaping");

    group.bench_function("ease_cubic_in_out_sweep_1024", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..1024 {
                let x = i as f32 / 1023.0;
                acc += EaseKind::CubicInOut.apply(black_box(x));
            }
            acc
        })
    });

    group.bench_function("gain_sweep_1024", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..1024 {
                let x = i as f32 / 1023.0;
                acc += gain(black_box(x), black_box(0.7));
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(benches, bench_remap, bench_shaping);
criterion_main!(benches);
