// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structural slot matching. A slot is a named region (leading visual, trailing
//! visual, inline or block description) that is filled by the first child whose
//! [`crate::ComponentKind`] and props match a [`SlotSpec`].

// Attach sources.
pub mod slot_matcher;
pub mod slot_spec;

// Re-export.
pub use slot_matcher::*;
pub use slot_spec::*;
