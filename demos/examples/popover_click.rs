// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-mode popover with outside-click dismissal.
//!
//! Shows that clicks on the trigger and panel stop propagation, while a click elsewhere reaches
//! the document listener and closes the panel.
//!
//! Run:
//! - `cargo run -p understory_examples --example popover_click`

use std::cell::RefCell;
use std::rc::Rc;

use understory_popover::{
    AlignmentMode, ClickTarget, ListenerRegistry, Popover, PopoverConfig, Propagation,
    TriggerBox, TriggerType, VisibilityState,
};

fn main() {
    let mut document = ListenerRegistry::new();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);

    let config = PopoverConfig::default()
        .trigger_type(TriggerType::Click)
        .alignment(AlignmentMode::Top)
        .content_width(320.0);
    let mut popover =
        Popover::new(config).with_on_visible_change(move |v| sink.borrow_mut().push(v));
    popover.mount(TriggerBox::new(96.0, 28.0), &mut document, 0);
    println!("== Mounted ==\n  listeners bound: {}", document.len());

    let clicks = [
        (0, ClickTarget::Trigger),
        (150, ClickTarget::Panel),
        (300, ClickTarget::Outside),
    ];
    for (now, target) in clicks {
        let propagation = popover.dispatch_click(target, now);
        popover.advance(now + 100);
        println!(
            "== Click {:?} at {}ms ==\n  propagation: {:?}\n  state: {:?}",
            target,
            now,
            propagation,
            popover.state()
        );
        if target != ClickTarget::Outside {
            assert_eq!(propagation, Propagation::Stop);
        }
    }

    let style = popover.style();
    println!("== Final style ==\n  {:?}", style);
    assert_eq!(popover.state(), VisibilityState::Hidden);
    assert_eq!(*changes.borrow(), [true, false]);

    popover.unmount(&mut document);
    assert!(document.is_empty());
}
