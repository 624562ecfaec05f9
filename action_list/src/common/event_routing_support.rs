// Copyright (c) 2022-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Tells the caller whether an input event was consumed by an item. If it was, it also
/// says whether the enclosing container ran its post-select hook (eg: closed an open
/// menu) and so needs a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventPropagation {
    /// The select action ran and the container's post-select hook ran after it.
    ConsumedRender,
    /// The select action ran and nothing else needs to happen.
    Consumed,
    /// Not a select action, or the item is disabled or inactive.
    Propagate,
}

impl EventPropagation {
    #[must_use]
    pub fn is_consumed(self) -> bool { !matches!(self, Self::Propagate) }
}
