// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_alist
//!
//! Library half of the `alist` binary. It loads a [`r3bl_action_list::ListConfig`],
//! composes every item with a shared [`r3bl_action_list::IdAllocator`], and renders the
//! result as markup or JSON. It can also push one input event through an item's select
//! gate and report what happened.
//!
//! ```text
//! alist --file menu.json
//! alist --file menu.json --format json
//! alist --file menu.json --select delete --event enter
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod commands;

// Re-export.
pub use clap_config::*;
pub use commands::*;
