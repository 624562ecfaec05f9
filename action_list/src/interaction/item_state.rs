// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::ContainerKind;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr,
    Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemVariant {
    #[default]
    Default,
    Danger,
}

/// Caller supplied state of one item. The composition pipeline only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemState {
    pub variant: ItemVariant,
    pub disabled: bool,
    /// Explains why the item can't be used right now. A non-empty text makes the item
    /// inactive: it stays focusable but ignores select actions.
    pub inactive_text: Option<String>,
    pub active: bool,
    pub selected: Option<bool>,
}

impl ItemState {
    #[must_use]
    pub fn with_variant(mut self, variant: ItemVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_inactive_text(mut self, text: impl Into<String>) -> Self {
        self.inactive_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.inactive_text.as_deref().is_some_and(|it| !it.is_empty())
    }

    /// Outside of a container the inactive state is shown with an indicator icon and a
    /// tooltip.
    #[must_use]
    pub fn show_inactive_indicator(&self, container_kind: Option<ContainerKind>) -> bool {
        self.is_inactive() && container_kind.is_none()
    }

    /// Inside a container the inactive state is shown with an inline warning row.
    #[must_use]
    pub fn show_inactive_warning(&self, container_kind: Option<ContainerKind>) -> bool {
        self.is_inactive() && container_kind.is_some()
    }

    #[must_use]
    pub fn is_select_blocked(&self) -> bool { self.disabled || self.is_inactive() }
}
