// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

use crate::{ItemState, ItemVariant, ListVariant, ResolvedContext};

/// Which color family a theme should use for the item. Only the decision is made here,
/// the actual colors belong to the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemTone {
    Default,
    Danger,
    Inactive,
    Disabled,
}

/// Where an item sits relative to its siblings. Used to suppress the divider line.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemPosition {
    #[default]
    First,
    /// Directly after a divider or a group heading.
    AfterDivider,
    AfterItem,
}

/// Non-structural presentation decisions for a theme to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VisualHints {
    pub tone: ItemTone,
    /// Hover and press feedback. Off for disabled and inactive items.
    pub hover_enabled: bool,
    /// Inset lists keep a margin around each item.
    pub inset: bool,
    pub active_marker: bool,
    /// Draws a divider line above the item.
    pub divider: bool,
}

impl VisualHints {
    /// Disabled wins over inactive, which wins over the danger variant.
    #[must_use]
    pub fn derive(
        state: &ItemState,
        context: &ResolvedContext,
        position: ItemPosition,
    ) -> Self {
        let inactive = state.is_inactive();
        let tone = if state.disabled {
            ItemTone::Disabled
        } else if inactive {
            ItemTone::Inactive
        } else if state.variant == ItemVariant::Danger {
            ItemTone::Danger
        } else {
            ItemTone::Default
        };

        Self {
            tone,
            hover_enabled: !state.disabled && !inactive,
            inset: context.list_variant == ListVariant::Inset,
            active_marker: state.active,
            divider: context.show_dividers && position == ItemPosition::AfterItem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, None, ItemVariant::Default, ItemTone::Default)]
    #[test_case(false, None, ItemVariant::Danger, ItemTone::Danger)]
    #[test_case(false, Some("Offline"), ItemVariant::Danger, ItemTone::Inactive)]
    #[test_case(true, Some("Offline"), ItemVariant::Danger, ItemTone::Disabled)]
    #[test_case(true, None, ItemVariant::Default, ItemTone::Disabled)]
    fn test_tone_precedence(
        disabled: bool,
        inactive_text: Option<&str>,
        variant: ItemVariant,
        expected: ItemTone,
    ) {
        let state = ItemState {
            variant,
            disabled,
            inactive_text: inactive_text.map(str::to_string),
            ..Default::default()
        };
        let hints = VisualHints::derive(&state, &ResolvedContext::default(), ItemPosition::First);
        assert_eq!(hints.tone, expected);
        assert_eq!(hints.hover_enabled, expected == ItemTone::Default || expected == ItemTone::Danger);
    }

    #[test_case(true, ItemPosition::First, false)]
    #[test_case(true, ItemPosition::AfterDivider, false)]
    #[test_case(true, ItemPosition::AfterItem, true)]
    #[test_case(false, ItemPosition::AfterItem, false)]
    fn test_divider_suppression(show_dividers: bool, position: ItemPosition, expected: bool) {
        let context = ResolvedContext {
            show_dividers,
            ..Default::default()
        };
        let hints = VisualHints::derive(&ItemState::default(), &context, position);
        assert_eq!(hints.divider, expected);
    }

    #[test]
    fn test_inset_and_active_marker() {
        let full = ResolvedContext {
            list_variant: ListVariant::Full,
            ..Default::default()
        };
        let state = ItemState::default().with_active(true);
        let hints = VisualHints::derive(&state, &full, ItemPosition::First);
        assert!(!hints.inset);
        assert!(hints.active_marker);
        assert!(VisualHints::derive(&state, &ResolvedContext::default(), ItemPosition::First).inset);
    }
}
