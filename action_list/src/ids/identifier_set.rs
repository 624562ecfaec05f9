// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use super::ItemId;

/// All the ids one item needs, derived from its [`ItemId`]. Deriving is pure, so the
/// same base id always produces the same set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentifierSet {
    pub item_id: String,
    pub label_id: String,
    pub inline_description_id: String,
    pub block_description_id: String,
    /// Only present when an inactive item is shown inside a container, which is the
    /// only case where the warning row renders.
    pub inactive_warning_id: Option<String>,
}

impl IdentifierSet {
    #[must_use]
    pub fn derive(item_id: &ItemId, needs_warning: bool) -> Self {
        let id = item_id.as_str();
        Self {
            item_id: id.to_string(),
            label_id: format!("{id}--label"),
            inline_description_id: format!("{id}--inline-description"),
            block_description_id: format!("{id}--block-description"),
            inactive_warning_id: needs_warning.then(|| format!("{id}--warning-message")),
        }
    }
}
