// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

use crate::{ComponentKind, Element, Node, SelectionVariant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SelectionIndicatorKind {
    /// Single selection. Only the check mark of the selected item is visible.
    Check,
    /// Multiple selection. Every item shows a box, checked or not.
    Checkbox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionIndicator {
    pub kind: SelectionIndicatorKind,
    pub checked: bool,
}

/// Decides which selection glyph renders in front of an item.
///
/// | selection variant | glyph                           |
/// | :---------------- | :------------------------------ |
/// | `single`          | check, shown when selected      |
/// | `multiple`        | checkbox, checked when selected |
/// | none              | nothing                         |
///
/// An item marked as selected in a list that has no selection variant renders nothing,
/// and a warning is traced.
#[must_use]
pub fn selection_indicator(
    selection_variant: Option<SelectionVariant>,
    selected: Option<bool>,
) -> Option<SelectionIndicator> {
    let checked = selected == Some(true);
    match selection_variant {
        Some(SelectionVariant::Single) => Some(SelectionIndicator {
            kind: SelectionIndicatorKind::Check,
            checked,
        }),
        Some(SelectionVariant::Multiple) => Some(SelectionIndicator {
            kind: SelectionIndicatorKind::Checkbox,
            checked,
        }),
        None => {
            if checked {
                tracing::warn!(
                    message = "Item is selected but its list has no selection variant, \
                               set one on the list or the group"
                );
            }
            None
        }
    }
}

impl SelectionIndicator {
    #[must_use]
    pub fn to_node(&self) -> Node {
        Element::new(ComponentKind::SelectionIndicator)
            .with_attribute("kind", self.kind.as_ref())
            .with_attribute("checked", self.checked.to_string())
            .into()
    }
}
