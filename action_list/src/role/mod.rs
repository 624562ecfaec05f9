// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod aria_role;
pub mod role_inferencer;

// Re-export.
pub use aria_role::*;
pub use role_inferencer::*;
