// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter};

use crate::{ComponentKind, DescriptionVariant, InlineVec, Node, NodeProps};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum SlotName {
    LeadingVisual,
    TrailingVisual,
    BlockDescription,
    InlineDescription,
}

/// Predicate over the props of a structurally matching element.
pub type PropsPredicate = fn(&NodeProps) -> bool;

/// How to recognize one slot among an item's children.
#[derive(Clone, Copy, Debug)]
pub struct SlotSpec {
    pub name: SlotName,
    pub match_by: ComponentKind,
    pub predicate: Option<PropsPredicate>,
}

impl SlotSpec {
    #[must_use]
    pub fn new(name: SlotName, match_by: ComponentKind) -> Self {
        Self {
            name,
            match_by,
            predicate: None,
        }
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: PropsPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Text and fragments never match.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        let Some(element) = node.as_element() else {
            return false;
        };
        element.kind == self.match_by
            && self
                .predicate
                .is_none_or(|predicate| predicate(&element.props))
    }
}

fn is_block_description(props: &NodeProps) -> bool {
    props.variant_is(DescriptionVariant::Block.as_ref())
}

fn is_inline_description(props: &NodeProps) -> bool { !is_block_description(props) }

/// A fixed, ordered set of [`SlotSpec`]s for one kind of item.
#[derive(Clone, Debug, Default)]
pub struct SlotRegistry {
    specs: InlineVec<SlotSpec>,
}

impl SlotRegistry {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with(mut self, spec: SlotSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// The registry used by [`crate::ActionListItem`]. Block and inline descriptions are
    /// told apart by the `variant` prop, so the two specs never match the same child.
    #[must_use]
    pub fn action_list_item() -> Self {
        Self::new()
            .with(SlotSpec::new(SlotName::LeadingVisual, ComponentKind::LeadingVisual))
            .with(SlotSpec::new(SlotName::TrailingVisual, ComponentKind::TrailingVisual))
            .with(
                SlotSpec::new(SlotName::BlockDescription, ComponentKind::Description)
                    .with_predicate(is_block_description),
            )
            .with(
                SlotSpec::new(SlotName::InlineDescription, ComponentKind::Description)
                    .with_predicate(is_inline_description),
            )
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotSpec> { self.specs.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.specs.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.specs.is_empty() }
}
