// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action_list_item;
pub mod item_wrapper;

// Re-export.
pub use action_list_item::*;
pub use item_wrapper::*;
