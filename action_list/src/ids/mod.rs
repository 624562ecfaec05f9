// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stable item ids and the ids derived from them. The label, the two description
//! regions and the inactive warning are all wired to the item through `aria-*`
//! attributes that refer to these ids.

// Attach sources.
pub mod friendly_random_id;
pub mod id_allocator;
pub mod identifier_set;

// Re-export.
pub use friendly_random_id::*;
pub use id_allocator::*;
pub use identifier_set::*;
