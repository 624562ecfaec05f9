// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient configuration for items. Instead of being looked up implicitly, the list,
//! group and container scopes are threaded through composition as [`AmbientScopes`]
//! and read once per pass by [`resolve_context`].

// Attach sources.
pub mod context_resolver;
pub mod scopes;

// Re-export.
pub use context_resolver::*;
pub use scopes::*;
