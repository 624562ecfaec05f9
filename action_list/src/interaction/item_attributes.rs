/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ItemState, ItemVariant};
use crate::{AriaRole, IdentifierSet, InlineVec, ResolvedContext, SelectionAttribute,
            SlotName, Slots, effective_role, infer_role};

/// The attribute a container uses to expose `selected`, and its value. The value is
/// `None` when the caller never said whether the item is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionAttr {
    pub attribute: SelectionAttribute,
    pub value: Option<bool>,
}

/// Attribute bag of the list item element (or of the wrapper, when one is used).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemAttributes {
    pub id: String,
    pub role: Option<AriaRole>,
    /// `None` means the item is not in the tab order.
    pub tab_index: Option<i32>,
    pub aria_disabled: bool,
    pub data_inactive: bool,
    pub aria_labelledby: String,
    pub aria_describedby: Option<String>,
    pub selection_attr: Option<SelectionAttr>,
    pub data_variant: Option<ItemVariant>,
}

/// Derives the attribute bag from the item state, the resolved context, the derived
/// ids, and the slots that were found in the children.
///
/// - `tab_index` is dropped for disabled items and for items showing the inactive
///   indicator. An inactive item inside a container stays focusable.
/// - `aria-labelledby` always names the label, and the inline description too when
///   there is one.
/// - `aria-describedby` names the block description and the inactive warning, whichever
///   exist. It is omitted when neither does.
#[must_use]
pub fn derive_attributes(
    state: &ItemState,
    context: &ResolvedContext,
    ids: &IdentifierSet,
    slots: &Slots,
    explicit_role: Option<AriaRole>,
) -> ItemAttributes {
    let inferred = infer_role(
        context.container_kind,
        context.list_role,
        context.selection_variant,
    );

    let tab_index = if state.disabled
        || state.show_inactive_indicator(context.container_kind)
    {
        None
    } else {
        Some(0)
    };

    let aria_labelledby = if slots.contains(SlotName::InlineDescription) {
        format!("{} {}", ids.label_id, ids.inline_description_id)
    } else {
        ids.label_id.clone()
    };

    let aria_describedby = {
        let mut acc: InlineVec<&str> = InlineVec::new();
        if slots.contains(SlotName::BlockDescription) {
            acc.push(&ids.block_description_id);
        }
        if let Some(warning_id) = &ids.inactive_warning_id {
            acc.push(warning_id);
        }
        (!acc.is_empty()).then(|| acc.join(" "))
    };

    let selection_attr = context
        .selection_attribute
        .map(|attribute| SelectionAttr {
            attribute,
            value: state.selected,
        });

    ItemAttributes {
        id: ids.item_id.clone(),
        role: effective_role(explicit_role, inferred),
        tab_index,
        aria_disabled: state.disabled,
        data_inactive: state.is_inactive(),
        aria_labelledby,
        aria_describedby,
        selection_attr,
        data_variant: (state.variant == ItemVariant::Danger).then_some(state.variant),
    }
}

impl ItemAttributes {
    /// Flattens the bag into markup attributes. Attributes that don't apply are left
    /// out rather than written with an empty value.
    #[must_use]
    pub fn to_attribute_map(&self) -> BTreeMap<String, String> {
        let mut acc = BTreeMap::new();
        acc.insert("id".to_string(), self.id.clone());
        if let Some(role) = self.role {
            acc.insert("role".to_string(), role.to_string());
        }
        if let Some(tab_index) = self.tab_index {
            acc.insert("tabindex".to_string(), tab_index.to_string());
        }
        if self.aria_disabled {
            acc.insert("aria-disabled".to_string(), "true".to_string());
        }
        if self.data_inactive {
            acc.insert("data-inactive".to_string(), "true".to_string());
        }
        acc.insert("aria-labelledby".to_string(), self.aria_labelledby.clone());
        if let Some(describedby) = &self.aria_describedby {
            acc.insert("aria-describedby".to_string(), describedby.clone());
        }
        if let Some(SelectionAttr {
            attribute,
            value: Some(value),
        }) = self.selection_attr
        {
            acc.insert(attribute.to_string(), value.to_string());
        }
        if let Some(variant) = self.data_variant {
            acc.insert("data-variant".to_string(), variant.to_string());
        }
        acc
    }
}
