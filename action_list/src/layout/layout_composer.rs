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

use serde::Serialize;

use super::SelectionIndicator;
use crate::{ComponentKind, Element, IdentifierSet, Node, SlotName, Slots};

/// Name of the icon drawn inside the inactive indicator.
pub const INACTIVE_INDICATOR_ICON: &str = "alert";

/// What renders at the leading or trailing visual position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualPlacement {
    /// The matched visual slot.
    Slot,
    /// The inactive indicator, in place of whatever the slot held.
    InactiveIndicator,
    Empty,
}

impl VisualPlacement {
    #[must_use]
    pub fn renders(self) -> bool { self != Self::Empty }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LabelStyle {
    /// Fill the available width. Off when an inline description sits next to it.
    pub grow: bool,
    /// Bold, when any description is present.
    pub emphasized: bool,
    /// Keep a gap below the label for the block description.
    pub block_gap: bool,
}

/// Every layout decision for one item.
///
/// ```text
/// li
/// ├── selection indicator
/// ├── leading position
/// └── divider container
///     ├── trailing region               (only if trailing position renders)
///     │   ├── inline description region (only if inline description)
///     │   │   ├── label
///     │   │   └── inline description
///     │   └── trailing position
///     ├── inactive warning              (only inside a container)
///     └── block description
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    pub leading: VisualPlacement,
    pub trailing: VisualPlacement,
    pub trailing_region: bool,
    pub inline_description_region: bool,
    pub label: LabelStyle,
    pub inactive_warning: bool,
    pub block_description: bool,
}

/// The inactive indicator takes the leading position when there is a leading visual to
/// replace. Otherwise it goes to the trailing position, so the label text stays aligned
/// with its siblings.
///
/// | show indicator | leading visual | leading   | trailing        |
/// | :------------- | :------------- | :-------- | :-------------- |
/// | no             | any            | slot      | slot            |
/// | yes            | present        | indicator | slot            |
/// | yes            | absent         | empty     | indicator       |
#[must_use]
pub fn plan_layout(
    slots: &Slots,
    show_inactive_indicator: bool,
    show_inactive_warning: bool,
) -> LayoutPlan {
    let has_leading = slots.contains(SlotName::LeadingVisual);
    let has_trailing = slots.contains(SlotName::TrailingVisual);
    let has_inline = slots.contains(SlotName::InlineDescription);
    let has_block = slots.contains(SlotName::BlockDescription);

    let leading = match (show_inactive_indicator, has_leading) {
        (true, true) => VisualPlacement::InactiveIndicator,
        (false, true) => VisualPlacement::Slot,
        (_, false) => VisualPlacement::Empty,
    };

    let trailing = if show_inactive_indicator && !has_leading {
        VisualPlacement::InactiveIndicator
    } else if has_trailing {
        VisualPlacement::Slot
    } else {
        VisualPlacement::Empty
    };

    LayoutPlan {
        leading,
        trailing,
        trailing_region: trailing.renders(),
        inline_description_region: has_inline,
        label: LabelStyle {
            grow: !has_inline,
            emphasized: has_inline || has_block,
            block_gap: has_block,
        },
        inactive_warning: show_inactive_warning,
        block_description: has_block,
    }
}

/// Everything [`compose_content`] places into the tree.
#[derive(Clone, Copy, Debug)]
pub struct ContentParts<'a> {
    pub slots: &'a Slots,
    /// Children that did not fill a slot. They make up the label.
    pub label: &'a [Node],
    pub ids: &'a IdentifierSet,
    pub inactive_text: Option<&'a str>,
    pub selection: Option<SelectionIndicator>,
}

/// Builds the ordered content of the item from a [`LayoutPlan`]. The result goes into
/// the list item element, or into the wrapper when there is one.
#[must_use]
pub fn compose_content(plan: &LayoutPlan, parts: ContentParts<'_>) -> Vec<Node> {
    let mut acc = Vec::with_capacity(3);

    if let Some(selection) = parts.selection {
        acc.push(selection.to_node());
    }

    if let Some(leading) = render_position(
        plan.leading,
        parts.slots.get(SlotName::LeadingVisual),
        ComponentKind::LeadingVisual,
        &parts,
    ) {
        acc.push(leading);
    }

    acc.push(divider_container(plan, &parts));
    acc
}

fn divider_container(plan: &LayoutPlan, parts: &ContentParts<'_>) -> Node {
    let mut label_region = vec![label(plan.label, parts)];
    if let Some(inline) = parts.slots.get(SlotName::InlineDescription) {
        label_region.push(with_id(inline, &parts.ids.inline_description_id));
    }
    let label_region = wrap_if(
        plan.inline_description_region,
        ComponentKind::InlineDescriptionRegion,
        label_region,
    );

    let mut trailing_region = label_region;
    if let Some(trailing) = render_position(
        plan.trailing,
        parts.slots.get(SlotName::TrailingVisual),
        ComponentKind::TrailingVisual,
        parts,
    ) {
        trailing_region.push(trailing);
    }
    let mut acc =
        wrap_if(plan.trailing_region, ComponentKind::TrailingRegion, trailing_region);

    if plan.inactive_warning
        && let Some(warning_id) = &parts.ids.inactive_warning_id
    {
        acc.push(
            Element::new(ComponentKind::InactiveWarning)
                .with_id(warning_id.as_str())
                .with_child(Node::text(parts.inactive_text.unwrap_or_default()))
                .into(),
        );
    }

    if plan.block_description
        && let Some(block) = parts.slots.get(SlotName::BlockDescription)
    {
        acc.push(with_id(block, &parts.ids.block_description_id));
    }

    Node::element(ComponentKind::DividerContainer, acc)
}

fn label(style: LabelStyle, parts: &ContentParts<'_>) -> Node {
    let mut element = Element::new(ComponentKind::Label)
        .with_id(parts.ids.label_id.as_str())
        .with_children(parts.label.to_vec());
    if style.grow {
        element = element.with_attribute("data-grow", "true");
    }
    if style.emphasized {
        element = element.with_attribute("data-emphasis", "true");
    }
    if style.block_gap {
        element = element.with_attribute("data-block-gap", "true");
    }
    element.into()
}

fn render_position(
    placement: VisualPlacement,
    slot: Option<&Node>,
    visual_kind: ComponentKind,
    parts: &ContentParts<'_>,
) -> Option<Node> {
    match placement {
        VisualPlacement::Slot => slot.cloned(),
        VisualPlacement::InactiveIndicator => Some(inactive_indicator(
            parts.inactive_text.unwrap_or_default(),
            &parts.ids.label_id,
            visual_kind,
        )),
        VisualPlacement::Empty => None,
    }
}

/// A tooltip carrying the inactive text, wrapping a button that shows an alert icon in
/// the given visual position. The button is labelled by the item label.
#[must_use]
pub fn inactive_indicator(text: &str, label_id: &str, visual_kind: ComponentKind) -> Node {
    let button = Element::new(ComponentKind::InactiveIndicator)
        .with_attribute("aria-labelledby", label_id)
        .with_child(Node::element(visual_kind, vec![Node::icon(
            INACTIVE_INDICATOR_ICON,
        )]));

    Element::new(ComponentKind::Tooltip)
        .with_attribute("text", text)
        .with_child(button.into())
        .into()
}

fn with_id(node: &Node, id: &str) -> Node {
    let mut node = node.clone();
    if let Some(element) = node.as_element_mut() {
        element.props.id = Some(id.to_string());
    }
    node
}

/// Wraps `children` in an element of `kind` when `condition` holds, otherwise passes
/// them through unchanged.
fn wrap_if(condition: bool, kind: ComponentKind, children: Vec<Node>) -> Vec<Node> {
    if condition {
        vec![Node::element(kind, children)]
    } else {
        children
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{ItemId, SelectionIndicatorKind, SlotRegistry, match_slots};

    fn slots_of(children: &[Node]) -> Slots {
        match_slots(children, &SlotRegistry::action_list_item()).slots
    }

    fn visuals(leading: bool, trailing: bool) -> Slots {
        let mut children = vec![];
        if leading {
            children.push(Node::leading_visual(vec![Node::icon("file")]));
        }
        if trailing {
            children.push(Node::trailing_visual(vec![Node::text("⌘K")]));
        }
        slots_of(&children)
    }

    #[test_case(false, false, false, VisualPlacement::Empty, VisualPlacement::Empty)]
    #[test_case(false, true, false, VisualPlacement::Slot, VisualPlacement::Empty)]
    #[test_case(false, true, true, VisualPlacement::Slot, VisualPlacement::Slot)]
    #[test_case(true, true, false, VisualPlacement::InactiveIndicator, VisualPlacement::Empty)]
    #[test_case(true, true, true, VisualPlacement::InactiveIndicator, VisualPlacement::Slot)]
    #[test_case(true, false, false, VisualPlacement::Empty, VisualPlacement::InactiveIndicator)]
    #[test_case(true, false, true, VisualPlacement::Empty, VisualPlacement::InactiveIndicator)]
    fn test_visual_placement(
        show_indicator: bool,
        leading: bool,
        trailing: bool,
        expected_leading: VisualPlacement,
        expected_trailing: VisualPlacement,
    ) {
        let plan = plan_layout(&visuals(leading, trailing), show_indicator, false);
        assert_eq!(plan.leading, expected_leading);
        assert_eq!(plan.trailing, expected_trailing);
        assert_eq!(plan.trailing_region, expected_trailing.renders());
    }

    #[test]
    fn test_indicator_never_renders_twice() {
        for leading in [false, true] {
            for trailing in [false, true] {
                let plan = plan_layout(&visuals(leading, trailing), true, false);
                let count = [plan.leading, plan.trailing]
                    .iter()
                    .filter(|it| **it == VisualPlacement::InactiveIndicator)
                    .count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn test_label_style() {
        let none = plan_layout(&Slots::default(), false, false);
        assert_eq!(none.label, LabelStyle {
            grow: true,
            emphasized: false,
            block_gap: false,
        });

        let inline = plan_layout(&slots_of(&[Node::inline_description("x")]), false, false);
        assert!(inline.inline_description_region);
        assert_eq!(inline.label, LabelStyle {
            grow: false,
            emphasized: true,
            block_gap: false,
        });

        let block = plan_layout(&slots_of(&[Node::block_description("x")]), false, false);
        assert!(!block.inline_description_region);
        assert_eq!(block.label, LabelStyle {
            grow: true,
            emphasized: true,
            block_gap: true,
        });
    }

    #[test]
    fn test_compose_plain_label() {
        let ids = IdentifierSet::derive(&ItemId::from("i"), false);
        let slots = Slots::default();
        let label = [Node::text("Copy")];
        let plan = plan_layout(&slots, false, false);

        let content = compose_content(&plan, ContentParts {
            slots: &slots,
            label: &label,
            ids: &ids,
            inactive_text: None,
            selection: None,
        });

        let rendered: String = content.iter().map(Node::pretty_print).collect();
        let expected = "\
<ActionList.Item--DividerContainer>
  <ActionList.Item--Label id=\"i--label\" data-grow=\"true\">
    Copy
  </ActionList.Item--Label>
</ActionList.Item--DividerContainer>
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_compose_everything() {
        let children = [
            Node::text("Rename"),
            Node::leading_visual(vec![Node::icon("pencil")]),
            Node::trailing_visual(vec![Node::text("F2")]),
            Node::inline_description("file"),
            Node::block_description("On disk"),
        ];
        let matched = match_slots(&children, &SlotRegistry::action_list_item());
        let ids = IdentifierSet::derive(&ItemId::from("i"), false);
        let plan = plan_layout(&matched.slots, false, false);

        let content = compose_content(&plan, ContentParts {
            slots: &matched.slots,
            label: &matched.remaining,
            ids: &ids,
            inactive_text: None,
            selection: Some(SelectionIndicator {
                kind: SelectionIndicatorKind::Check,
                checked: true,
            }),
        });

        let rendered: String = content.iter().map(Node::pretty_print).collect();
        let expected = "\
<ActionList.Selection checked=\"true\" kind=\"check\"/>
<ActionList.LeadingVisual>
  <Icon name=\"pencil\"/>
</ActionList.LeadingVisual>
<ActionList.Item--DividerContainer>
  <ActionList.Item--TrailingRegion>
    <ActionList.Item--InlineDescriptionRegion>
      <ActionList.Item--Label id=\"i--label\" data-block-gap=\"true\" data-emphasis=\"true\">
        Rename
      </ActionList.Item--Label>
      <ActionList.Description id=\"i--inline-description\" variant=\"inline\">
        file
      </ActionList.Description>
    </ActionList.Item--InlineDescriptionRegion>
    <ActionList.TrailingVisual>
      F2
    </ActionList.TrailingVisual>
  </ActionList.Item--TrailingRegion>
  <ActionList.Description id=\"i--block-description\" variant=\"block\">
    On disk
  </ActionList.Description>
</ActionList.Item--DividerContainer>
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_compose_inactive_indicator_trailing() {
        let ids = IdentifierSet::derive(&ItemId::from("i"), false);
        let slots = Slots::default();
        let label = [Node::text("Sync")];
        let plan = plan_layout(&slots, true, false);

        let content = compose_content(&plan, ContentParts {
            slots: &slots,
            label: &label,
            ids: &ids,
            inactive_text: Some("Offline"),
            selection: None,
        });

        let rendered: String = content.iter().map(Node::pretty_print).collect();
        let expected = "\
<ActionList.Item--DividerContainer>
  <ActionList.Item--TrailingRegion>
    <ActionList.Item--Label id=\"i--label\" data-grow=\"true\">
      Sync
    </ActionList.Item--Label>
    <Tooltip text=\"Offline\">
      <ActionList.InactiveIndicator aria-labelledby=\"i--label\">
        <ActionList.TrailingVisual>
          <Icon name=\"alert\"/>
        </ActionList.TrailingVisual>
      </ActionList.InactiveIndicator>
    </Tooltip>
  </ActionList.Item--TrailingRegion>
</ActionList.Item--DividerContainer>
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_compose_inactive_warning_row() {
        let ids = IdentifierSet::derive(&ItemId::from("i"), true);
        let slots = Slots::default();
        let label = [Node::text("Sync")];
        let plan = plan_layout(&slots, false, true);

        let content = compose_content(&plan, ContentParts {
            slots: &slots,
            label: &label,
            ids: &ids,
            inactive_text: Some("Offline"),
            selection: None,
        });

        let container = content.last().unwrap();
        let warning = container.find(ComponentKind::InactiveWarning).unwrap();
        assert_eq!(warning.props.id.as_deref(), Some("i--warning-message"));
        assert_eq!(Node::from(warning.clone()).text_content(), "Offline");
        assert!(container.find(ComponentKind::Tooltip).is_none());
    }
}
