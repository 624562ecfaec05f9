// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action_list_error;
pub mod decl_macros;
pub mod event_routing_support;
pub mod input_event;
pub mod sizes;

// Re-export.
pub use action_list_error::*;
pub use event_routing_support::*;
pub use input_event::*;
pub use sizes::*;
