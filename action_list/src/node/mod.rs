// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Declarative node tree. The same types describe the children an item is given and
//! the content tree that composition produces, so the output of one pass can be fed to
//! a renderer or printed with [`Node::pretty_print`].

// Attach sources.
pub mod node_tree;
pub mod pretty_print;

// Re-export.
pub use node_tree::*;
