// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Disabled, inactive and active states of an item, the attribute bag they produce,
//! and the gate in front of the caller's select handler.

// Attach sources.
pub mod item_attributes;
pub mod item_state;
pub mod select_dispatch;

// Re-export.
pub use item_attributes::*;
pub use item_state::*;
pub use select_dispatch::*;
