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

use super::{SlotName, SlotRegistry};
use crate::{DEBUG_ACTION_LIST, Node, flatten_fragments};

/// Slot name to matched node. At most one node per name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slots {
    map: BTreeMap<SlotName, Node>,
}

impl Slots {
    #[must_use]
    pub fn get(&self, name: SlotName) -> Option<&Node> { self.map.get(&name) }

    #[must_use]
    pub fn contains(&self, name: SlotName) -> bool { self.map.contains_key(&name) }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = SlotName> + '_ { self.map.keys().copied() }

    fn insert(&mut self, name: SlotName, node: Node) { self.map.insert(name, node); }
}

/// Result of [`match_slots`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotMatch {
    pub slots: Slots,
    /// Children that did not fill a slot, in document order. They become the label.
    pub remaining: Vec<Node>,
}

/// Partitions `children` into slots and remaining content.
///
/// Each spec in `registry` scans the (fragment flattened) children independently, in
/// document order, and takes the first child that matches it. A child taken by one spec
/// is still visible to the others. Any child that was not taken by some spec ends up in
/// [`SlotMatch::remaining`], including a second match for a slot that is already filled.
/// That is a permissive "first wins" rule, it is not reported as an error.
#[must_use]
pub fn match_slots(children: &[Node], registry: &SlotRegistry) -> SlotMatch {
    let flat = flatten_fragments(children);
    let mut consumed = vec![false; flat.len()];
    let mut slots = Slots::default();

    for spec in registry.iter() {
        if slots.contains(spec.name) {
            continue;
        }

        let mut candidates = flat
            .iter()
            .enumerate()
            .filter(|(_, node)| spec.matches(node));

        let Some((index, node)) = candidates.next() else {
            continue;
        };

        consumed[index] = true;
        slots.insert(spec.name, (*node).clone());

        let ignored = candidates.count();
        if ignored > 0 {
            DEBUG_ACTION_LIST.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Slot already filled, extra matches stay in the label",
                    slot = %spec.name,
                    ignored = ignored,
                );
            });
        }
    }

    let remaining = flat
        .into_iter()
        .zip(consumed)
        .filter(|(_, is_consumed)| !is_consumed)
        .map(|(node, _)| node.clone())
        .collect();

    SlotMatch { slots, remaining }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ComponentKind, Element, SlotSpec};

    fn registry() -> SlotRegistry { SlotRegistry::action_list_item() }

    #[test]
    fn test_no_children() {
        let result = match_slots(&[], &registry());
        assert!(result.slots.is_empty());
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn test_all_slots_and_label() {
        let children = vec![
            Node::text("Rename"),
            Node::leading_visual(vec![Node::icon("pencil")]),
            Node::trailing_visual(vec![Node::text("⌘R")]),
            Node::inline_description("file"),
            Node::block_description("Renames the file on disk"),
        ];

        let result = match_slots(&children, &registry());

        assert_eq!(result.slots.len(), 4);
        assert_eq!(result.slots.get(SlotName::LeadingVisual), Some(&children[1]));
        assert_eq!(result.slots.get(SlotName::TrailingVisual), Some(&children[2]));
        assert_eq!(result.slots.get(SlotName::InlineDescription), Some(&children[3]));
        assert_eq!(result.slots.get(SlotName::BlockDescription), Some(&children[4]));
        assert_eq!(result.remaining, vec![Node::text("Rename")]);
    }

    #[test]
    fn test_first_match_wins_and_extras_stay_in_remaining() {
        let first = Node::leading_visual(vec![Node::icon("one")]);
        let second = Node::leading_visual(vec![Node::icon("two")]);
        let children = vec![
            Node::text("Label"),
            first.clone(),
            second.clone(),
        ];

        let result = match_slots(&children, &registry());

        assert_eq!(result.slots.get(SlotName::LeadingVisual), Some(&first));
        assert_eq!(result.remaining, vec![Node::text("Label"), second]);
    }

    #[test]
    fn test_missing_slots_are_absent() {
        let children = vec![Node::text("Only a label")];
        let result = match_slots(&children, &registry());
        assert!(result.slots.get(SlotName::LeadingVisual).is_none());
        assert!(result.slots.get(SlotName::BlockDescription).is_none());
        assert_eq!(result.remaining, children);
    }

    #[test]
    fn test_slots_inside_fragments_are_found() {
        let visual = Node::trailing_visual(vec![Node::text("3")]);
        let children = vec![Node::fragment(vec![Node::text("Inbox"), visual.clone()])];

        let result = match_slots(&children, &registry());

        assert_eq!(result.slots.get(SlotName::TrailingVisual), Some(&visual));
        assert_eq!(result.remaining, vec![Node::text("Inbox")]);
    }

    #[test]
    fn test_nested_slot_components_are_not_matched() {
        let nested = Node::element(ComponentKind::Span, vec![Node::leading_visual(vec![])]);
        let result = match_slots(std::slice::from_ref(&nested), &registry());
        assert!(result.slots.is_empty());
        assert_eq!(result.remaining, vec![nested]);
    }

    #[test]
    fn test_one_child_can_fill_two_overlapping_specs() {
        let registry = SlotRegistry::new()
            .with(SlotSpec::new(SlotName::InlineDescription, ComponentKind::Description))
            .with(SlotSpec::new(SlotName::BlockDescription, ComponentKind::Description));
        let description: Node = Element::new(ComponentKind::Description).into();

        let result = match_slots(std::slice::from_ref(&description), &registry);

        assert_eq!(result.slots.len(), 2);
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn test_duplicate_spec_names_keep_the_first_spec() {
        let registry = SlotRegistry::new()
            .with(SlotSpec::new(SlotName::LeadingVisual, ComponentKind::LeadingVisual))
            .with(SlotSpec::new(SlotName::LeadingVisual, ComponentKind::Icon));
        let children = vec![Node::icon("x"), Node::leading_visual(vec![])];

        let result = match_slots(&children, &registry);

        assert_eq!(result.slots.get(SlotName::LeadingVisual), Some(&children[1]));
        assert_eq!(result.remaining, vec![Node::icon("x")]);
    }
}
