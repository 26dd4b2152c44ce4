// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_timing::{Debounce, TimerQueue};

// Deterministic spread of deadlines without pulling in an RNG.
fn scattered_deadlines(n: usize) -> Vec<u64> {
    let mut x: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x % 10_000
        })
        .collect()
}

fn bench_schedule_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue");
    for &n in &[64usize, 1_024, 16_384] {
        let deadlines = scattered_deadlines(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("schedule_drain_n{}", n), |b| {
            b.iter_batched(
                TimerQueue::<usize>::new,
                |mut q| {
                    for (i, &d) in deadlines.iter().enumerate() {
                        let _ = q.schedule(d, i);
                    }
                    let mut fired = 0;
                    while let Some(e) = q.pop_due(u64::MAX) {
                        fired += e.payload & 1;
                    }
                    black_box(fired);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_cancel_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue_cancel");
    for &n in &[1_024usize, 16_384] {
        let deadlines = scattered_deadlines(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("cancel_half_n{}", n), |b| {
            b.iter_batched(
                TimerQueue::<usize>::new,
                |mut q| {
                    let ids: Vec<_> = deadlines
                        .iter()
                        .enumerate()
                        .map(|(i, &d)| q.schedule(d, i))
                        .collect();
                    for id in ids.iter().step_by(2) {
                        let _ = q.cancel(*id);
                    }
                    let mut count = 0;
                    while q.pop_due(u64::MAX).is_some() {
                        count += 1;
                    }
                    black_box(count);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_debounce_rearm(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce");
    let n = 10_000u64;
    group.throughput(Throughput::Elements(n));
    group.bench_function("rearm_burst", |b| {
        b.iter(|| {
            let mut q = TimerQueue::new();
            let mut d = Debounce::new(200);
            for t in 0..n {
                let _ = d.rearm(&mut q, t * 3, ());
            }
            black_box(q.next_deadline());
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_schedule_drain,
    bench_cancel_heavy,
    bench_debounce_rearm,
);
criterion_main!(benches);
