// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-mode popover driven by a scripted pointer.
//!
//! The pointer enters the trigger, crosses the gap to the panel, and finally leaves.
//! Transitions are also logged through `tracing` at debug level.
//!
//! Run:
//! - `cargo run -p understory_examples --example popover_hover`

use kurbo::Rect;
use understory_popover::{
    AlignmentMode, ListenerRegistry, Popover, PopoverConfig, PopoverPart, TriggerBox,
    VisibilityState,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let mut document = ListenerRegistry::new();
    let config = PopoverConfig::default().alignment(AlignmentMode::Right);
    let mut popover = Popover::new(config);
    let trigger = TriggerBox::from_rect(Rect::new(10.0, 10.0, 130.0, 42.0));
    popover.mount(trigger, &mut document, 0);

    // (time, part under the pointer)
    let script = [
        (0, Some(PopoverPart::Trigger)),
        (400, None),
        (480, Some(PopoverPart::Panel)),
        (1_200, None),
    ];

    let mut now = 0;
    for (at, part) in script {
        // Let the clock run up to the next pointer event.
        while let Some(deadline) = popover.next_deadline().filter(|d| *d <= at) {
            popover.advance(deadline);
            now = deadline;
            println!("t={now:>5}ms  {:?}  {:?}", popover.state(), popover.style());
        }
        now = now.max(at);
        popover.update_hover(part, now);
        println!("t={now:>5}ms  pointer over {part:?}");
    }
    while let Some(deadline) = popover.next_deadline() {
        popover.advance(deadline);
        println!("t={deadline:>5}ms  {:?}", popover.state());
    }

    assert_eq!(popover.state(), VisibilityState::Hidden);
    popover.unmount(&mut document);
}
