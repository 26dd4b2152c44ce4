// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_popover::{
    ClickTarget, ListenerRegistry, Popover, PopoverConfig, PopoverPart, TriggerBox, TriggerType,
};

fn mounted(config: PopoverConfig) -> (Popover, ListenerRegistry) {
    let mut document = ListenerRegistry::new();
    let mut popover = Popover::new(config);
    popover.mount(TriggerBox::new(120.0, 32.0), &mut document, 0);
    (popover, document)
}

fn bench_hover_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("popover_hover");
    for &n in &[256usize, 4_096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pointer_storm_n{}", n), |b| {
            b.iter_batched(
                || mounted(PopoverConfig::default()),
                |(mut popover, _document)| {
                    let mut now = 0;
                    for i in 0..n {
                        let part = match i % 3 {
                            0 => Some(PopoverPart::Trigger),
                            1 => None,
                            _ => Some(PopoverPart::Panel),
                        };
                        popover.update_hover(part, now);
                        now += 37;
                        popover.advance(now);
                    }
                    popover.advance(now + 1_000);
                    black_box(popover.style());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_click_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("popover_click");
    let n = 1_000u64;
    group.throughput(Throughput::Elements(n));
    group.bench_function("toggle_and_dismiss", |b| {
        b.iter_batched(
            || mounted(PopoverConfig::default().trigger_type(TriggerType::Click)),
            |(mut popover, _document)| {
                for i in 0..n {
                    let now = i * 150;
                    let target = if i % 2 == 0 {
                        ClickTarget::Trigger
                    } else {
                        ClickTarget::Outside
                    };
                    black_box(popover.dispatch_click(target, now));
                    popover.advance(now + 100);
                }
                black_box(popover.state());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_hover_storm, bench_click_toggle);
criterion_main!(benches);
