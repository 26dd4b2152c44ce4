// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled popover: the caller owns visibility.
//!
//! Internal interactions only request a change through the callback. The caller records the
//! request and feeds it back as the external signal on its next "render".
//!
//! Run:
//! - `cargo run -p understory_examples --example popover_controlled`

use std::cell::Cell;
use std::rc::Rc;

use understory_popover::{
    ClickTarget, ControlMode, ListenerRegistry, Popover, PopoverConfig, TriggerBox, TriggerType,
    VisibilityState,
};

fn main() {
    let mut document = ListenerRegistry::new();
    let requested = Rc::new(Cell::new(false));
    let sink = Rc::clone(&requested);

    let config = PopoverConfig::default().trigger_type(TriggerType::Click);
    let mut popover = Popover::new(config).with_on_visible_change(move |v| sink.set(v));
    popover.set_external_visible(Some(false), 0);
    popover.mount(TriggerBox::new(64.0, 24.0), &mut document, 0);
    assert_eq!(popover.control_mode(), ControlMode::Controlled);

    // The click only asks; nothing moves yet.
    popover.dispatch_click(ClickTarget::Trigger, 10);
    println!(
        "== After click ==\n  requested: {}\n  state: {:?}",
        requested.get(),
        popover.state()
    );
    assert_eq!(popover.state(), VisibilityState::Hidden);

    // Next render: the caller accepts the request.
    popover.set_external_visible(Some(requested.get()), 20);
    popover.advance(120);
    println!("== After render ==\n  state: {:?}", popover.state());
    assert_eq!(popover.state(), VisibilityState::Visible);

    // An outside click requests a close; the caller declines by keeping the signal.
    popover.dispatch_click(ClickTarget::Outside, 200);
    popover.set_external_visible(Some(true), 210);
    popover.advance(400);
    println!(
        "== Declined close ==\n  requested: {}\n  state: {:?}",
        requested.get(),
        popover.state()
    );
    assert!(!requested.get());
    assert_eq!(popover.state(), VisibilityState::Visible);

    popover.unmount(&mut document);
}
