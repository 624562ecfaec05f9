// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::AriaRole;
use crate::{ContainerKind, SelectionVariant};

/// Infers an item's role from the overlay it is in, the role of its list, and the
/// effective selection variant.
///
/// | container     | list role | selection  | role               |
/// | :------------ | :-------- | :--------- | :----------------- |
/// | `ActionMenu`  | any       | `single`   | `menuitemradio`    |
/// | `ActionMenu`  | any       | `multiple` | `menuitemcheckbox` |
/// | `ActionMenu`  | any       | none       | `menuitem`         |
/// | `SelectPanel` | `listbox` | any        | `option`           |
/// | `SelectPanel` | `listbox` | none       | none               |
/// | anything else |           |            | none               |
///
/// No role means the attribute is left off and native semantics apply.
#[must_use]
pub fn infer_role(
    container_kind: Option<ContainerKind>,
    list_role: Option<AriaRole>,
    selection_variant: Option<SelectionVariant>,
) -> Option<AriaRole> {
    match (container_kind, list_role) {
        (Some(ContainerKind::ActionMenu), _) => Some(match selection_variant {
            Some(SelectionVariant::Single) => AriaRole::MenuItemRadio,
            Some(SelectionVariant::Multiple) => AriaRole::MenuItemCheckbox,
            None => AriaRole::MenuItem,
        }),
        (Some(ContainerKind::SelectPanel), Some(AriaRole::ListBox)) => {
            selection_variant.map(|_| AriaRole::ListOption)
        }
        _ => None,
    }
}

/// A role the caller set explicitly always wins over the inferred one.
#[must_use]
pub fn effective_role(
    explicit: Option<AriaRole>,
    inferred: Option<AriaRole>,
) -> Option<AriaRole> {
    explicit.or(inferred)
}
