// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ItemState;
use crate::{CommonResult, DEBUG_ACTION_LIST, EventPropagation, InputEvent, ResolvedContext,
            ok};

/// What the caller's select handler did with the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The handler took care of everything. The container's post-select hook is
    /// skipped, eg: a menu stays open.
    Handled,
    /// The container's post-select hook runs next.
    NotHandled,
}

/// Caller supplied select handler. It receives the originating event.
pub type SelectHandler = Box<dyn FnMut(&InputEvent) -> CommonResult<SelectOutcome> + Send>;

/// Routes one input event through the select gate.
///
/// ```text
/// event ──► select action? ──no──► Propagate
///                │yes
///                ▼
///      disabled or inactive? ──yes──► Propagate (handler not called)
///                │no
///                ▼
///        handler(event)? ──Handled──► Consumed
///                │NotHandled / no handler
///                ▼
///       after_select hook? ──yes──► ConsumedRender
///                │no
///                ▼
///             Consumed
/// ```
///
/// Errors from the handler are not caught, and the hook does not run when the handler
/// fails.
pub fn dispatch_select(
    event: &InputEvent,
    state: &ItemState,
    context: &ResolvedContext,
    handler: Option<&mut SelectHandler>,
) -> CommonResult<EventPropagation> {
    if !event.is_select_action() {
        return ok!(EventPropagation::Propagate);
    }

    if state.is_select_blocked() {
        DEBUG_ACTION_LIST.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Select suppressed",
                event = %event,
                disabled = state.disabled,
                inactive = state.is_inactive(),
            );
        });
        return ok!(EventPropagation::Propagate);
    }

    let outcome = match handler {
        Some(handler) => handler(event)?,
        None => SelectOutcome::NotHandled,
    };

    if outcome == SelectOutcome::Handled {
        return ok!(EventPropagation::Consumed);
    }

    match &context.after_select {
        Some(after_select) => {
            after_select();
            ok!(EventPropagation::ConsumedRender)
        }
        None => ok!(EventPropagation::Consumed),
    }
}
