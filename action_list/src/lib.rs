// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_action_list
//!
//! Composition engine for a single accessible action list item. Given a declarative
//! tree of child [`Node`]s and the ambient list, group and container scopes, it
//! produces one structured list item: an attribute bag (role, tab index, `aria-*`,
//! `data-*`) and an ordered content tree that a rendering layer can walk.
//!
//! ```text
//! children ──► match_slots ──► (slots, remaining) ─────────────────────┐
//!                                                                      ▼
//! scopes ──► resolve_context ──► infer_role ──► derive_attributes ──► compose_content
//!                                                   ▲                  │
//! key + id ──► IdAllocator ──► IdentifierSet ───────┘                  ▼
//!                                                               ComposedItem
//! ```
//!
//! Everything here is a pure function of its inputs for one composition pass. The only
//! state that survives across passes is the [`IdAllocator`], which keeps generated ids
//! stable for a given [`ItemKey`].
//!
//! # Example
//!
//! ```
//! use r3bl_action_list::{ActionListItem, AmbientScopes, ContainerKind, ContainerScope,
//!                        IdAllocator, ListScope, Node, SelectionVariant};
//!
//! let list = ListScope::default().with_selection_variant(SelectionVariant::Single);
//! let container = ContainerScope::new(ContainerKind::ActionMenu);
//! let scopes = AmbientScopes::default().with_list(&list).with_container(&container);
//!
//! let item = ActionListItem::new("copy", vec![
//!     Node::leading_visual(vec![Node::icon("copy")]),
//!     Node::text("Copy link"),
//! ]);
//!
//! let mut ids = IdAllocator::default();
//! let composed = item.compose(&scopes, &mut ids);
//! assert_eq!(composed.attributes.role.map(|it| it.to_string()).as_deref(),
//!            Some("menuitemradio"));
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Module scoped switch for the `tracing::debug!` output of the composition pipeline.
pub const DEBUG_ACTION_LIST: bool = true;

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod config;
pub mod context;
pub mod ids;
pub mod interaction;
pub mod item;
pub mod layout;
pub mod log;
pub mod node;
pub mod role;
pub mod slots;

// Re-export.
pub use common::*;
pub use config::*;
pub use context::*;
pub use ids::*;
pub use interaction::*;
pub use item::*;
pub use layout::*;
pub use log::*;
pub use node::*;
pub use role::*;
pub use slots::*;
