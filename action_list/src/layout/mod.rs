// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where each piece of an item's content goes. [`plan_layout`] makes every decision
//! from the slots and the inactive state, and [`compose_content`] turns the plan into
//! an ordered node tree.

// Attach sources.
pub mod layout_composer;
pub mod selection_indicator;
pub mod visual_hints;

// Re-export.
pub use layout_composer::*;
pub use selection_indicator::*;
pub use visual_hints::*;
