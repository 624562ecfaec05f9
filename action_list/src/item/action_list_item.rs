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

use std::fmt::{Debug, Formatter, Result};

use serde::{Deserialize, Serialize};

use super::{ItemWrapper, NoWrapper};
use crate::{AmbientScopes, AriaRole, CommonResult, ComponentKind, ContentParts,
            DEBUG_ACTION_LIST, Element, EventPropagation, IdAllocator, IdentifierSet,
            InputEvent, ItemAttributes, ItemKey, ItemPosition, ItemState, ItemVariant,
            LayoutPlan, Node, SelectHandler, SelectOutcome, SlotRegistry, VisualHints,
            compose_content, derive_attributes, dispatch_select, match_slots,
            plan_layout, resolve_context, selection_indicator};

/// Everything a caller can set on an item, apart from its children and its select
/// handler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemProps {
    #[serde(flatten)]
    pub state: ItemState,
    /// Overrides the generated id.
    pub id: Option<String>,
    /// Overrides the inferred role.
    pub role: Option<AriaRole>,
    /// Assigned by the list that owns the item, not by the caller.
    #[serde(skip)]
    pub position: ItemPosition,
}

/// One item of an action list, before composition.
///
/// The `key` identifies the item across composition passes, see [`IdAllocator`]. The
/// `children` are free form: visuals and descriptions are picked out of them by
/// [`match_slots`], the rest becomes the label.
pub struct ActionListItem {
    pub key: ItemKey,
    pub props: ItemProps,
    pub children: Vec<Node>,
    pub on_select: Option<SelectHandler>,
}

impl Debug for ActionListItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ActionListItem")
            .field("key", &self.key)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("on_select", &self.on_select.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// What an item exposes to its nested descendants (eg: a description reads its id
/// from here).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemScope {
    pub variant: ItemVariant,
    pub disabled: bool,
    pub inactive: bool,
    pub inline_description_id: String,
    pub block_description_id: String,
}

/// Output of one composition pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComposedItem {
    pub attributes: ItemAttributes,
    /// The list item element, with the content tree inside it.
    pub root: Node,
    pub hints: VisualHints,
    pub scope: ItemScope,
    pub ids: IdentifierSet,
    pub layout: LayoutPlan,
}

impl ActionListItem {
    #[must_use]
    pub fn new(key: impl Into<ItemKey>, children: Vec<Node>) -> Self {
        Self {
            key: key.into(),
            props: ItemProps::default(),
            children,
            on_select: None,
        }
    }

    #[must_use]
    pub fn with_props(mut self, props: ItemProps) -> Self {
        self.props = props;
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: ItemState) -> Self {
        self.props.state = state;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: AriaRole) -> Self {
        self.props.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: ItemPosition) -> Self {
        self.props.position = position;
        self
    }

    #[must_use]
    pub fn with_on_select(
        mut self,
        handler: impl FnMut(&InputEvent) -> CommonResult<SelectOutcome> + Send + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Same as [`ActionListItem::compose_with_wrapper`] with [`NoWrapper`].
    pub fn compose(
        &self,
        scopes: &AmbientScopes<'_>,
        ids: &mut IdAllocator,
    ) -> ComposedItem {
        self.compose_with_wrapper(scopes, ids, &NoWrapper)
    }

    /// Runs one composition pass.
    ///
    /// ```text
    /// children ──► match_slots ──► slots + label
    /// scopes   ──► resolve_context
    /// key      ──► IdAllocator ──► IdentifierSet
    ///                 │
    ///                 ▼
    ///   derive_attributes + plan_layout ──► compose_content ──► li (+ wrapper)
    /// ```
    ///
    /// This never fails. The only state it touches is `ids`, which caches the
    /// generated id for [`ActionListItem::key`].
    pub fn compose_with_wrapper(
        &self,
        scopes: &AmbientScopes<'_>,
        ids: &mut IdAllocator,
        wrapper: &dyn ItemWrapper,
    ) -> ComposedItem {
        let state = &self.props.state;
        let matched = match_slots(&self.children, &SlotRegistry::action_list_item());
        let context = resolve_context(scopes);

        let show_indicator = state.show_inactive_indicator(context.container_kind);
        let show_warning = state.show_inactive_warning(context.container_kind);

        let item_id = ids.item_id(self.props.id.as_deref(), &self.key);
        let identifier_set = IdentifierSet::derive(&item_id, show_warning);

        let attributes = derive_attributes(
            state,
            &context,
            &identifier_set,
            &matched.slots,
            self.props.role,
        );

        let layout = plan_layout(&matched.slots, show_indicator, show_warning);
        let content = compose_content(&layout, ContentParts {
            slots: &matched.slots,
            label: &matched.remaining,
            ids: &identifier_set,
            inactive_text: state.inactive_text.as_deref(),
            selection: selection_indicator(context.selection_variant, state.selected),
        });

        let list_item = Element::new(ComponentKind::ListItem);
        let root = if wrapper.is_identity() {
            list_item
                .with_attributes(attributes.to_attribute_map())
                .with_children(content)
        } else {
            let mut shell = list_item;
            if attributes.role.is_some() {
                shell = shell.with_attribute("role", AriaRole::RoleNone.as_ref());
            }
            if let Some(variant) = attributes.data_variant {
                shell = shell.with_attribute("data-variant", variant.as_ref());
            }
            shell.with_child(wrapper.wrap(content, &attributes))
        };

        DEBUG_ACTION_LIST.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Composed item",
                key = %self.key,
                id = %item_id,
                role = ?attributes.role,
                slots = ?matched.slots.names().collect::<Vec<_>>(),
            );
        });

        ComposedItem {
            hints: VisualHints::derive(state, &context, self.props.position),
            scope: ItemScope {
                variant: state.variant,
                disabled: state.disabled,
                inactive: state.is_inactive(),
                inline_description_id: identifier_set.inline_description_id.clone(),
                block_description_id: identifier_set.block_description_id.clone(),
            },
            root: root.into(),
            attributes,
            ids: identifier_set,
            layout,
        }
    }

    /// Routes an input event to the select handler, see [`dispatch_select`]. Errors
    /// returned by the handler are passed through unchanged.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        scopes: &AmbientScopes<'_>,
    ) -> CommonResult<EventPropagation> {
        let context = resolve_context(scopes);
        dispatch_select(event, &self.props.state, &context, self.on_select.as_mut())
    }
}
