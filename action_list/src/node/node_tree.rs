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

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Identity of an element in the node tree. Slot matching compares this, and never
/// inspects the element's children.
///
/// The `strum` names are what [`crate::Node::pretty_print`] emits as tag names.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
    EnumString,
)]
pub enum ComponentKind {
    // Slot components that callers put into an item.
    #[strum(serialize = "ActionList.LeadingVisual")]
    LeadingVisual,
    #[strum(serialize = "ActionList.TrailingVisual")]
    TrailingVisual,
    #[strum(serialize = "ActionList.Description")]
    Description,

    // Plain content.
    #[strum(serialize = "Icon")]
    Icon,
    #[strum(serialize = "span")]
    Span,
    #[strum(serialize = "a")]
    Link,

    // Produced by composition.
    #[strum(serialize = "li")]
    ListItem,
    #[strum(serialize = "ActionList.Selection")]
    SelectionIndicator,
    #[strum(serialize = "Tooltip")]
    Tooltip,
    #[strum(serialize = "ActionList.InactiveIndicator")]
    InactiveIndicator,
    #[strum(serialize = "ActionList.Item--DividerContainer")]
    DividerContainer,
    #[strum(serialize = "ActionList.Item--TrailingRegion")]
    TrailingRegion,
    #[strum(serialize = "ActionList.Item--InlineDescriptionRegion")]
    InlineDescriptionRegion,
    #[strum(serialize = "ActionList.Item--Label")]
    Label,
    #[strum(serialize = "ActionList.Item--InactiveWarning")]
    InactiveWarning,
}

/// The `variant` prop of a [`ComponentKind::Description`]. Anything that is not
/// `block` is treated as inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DescriptionVariant {
    #[default]
    Inline,
    Block,
}

/// Properties of an element that predicates can look at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Everything else (`aria-*`, `data-*`, icon names). Sorted, so output is stable.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl NodeProps {
    #[must_use]
    pub fn variant_is(&self, expected: &str) -> bool {
        self.variant.as_deref() == Some(expected)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ComponentKind,
    #[serde(default)]
    pub props: NodeProps,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A node in a declarative tree. Fragments are transparent: they are flattened into
/// their parent's child list before slot matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Text { value: String },
    Element(Element),
    Fragment { children: Vec<Node> },
}

impl Element {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            props: NodeProps::default(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.props.variant = Some(variant.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.props.attributes.extend(attributes);
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self { Node::Element(element) }
}

impl Node {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn fragment(children: Vec<Node>) -> Self { Node::Fragment { children } }

    #[must_use]
    pub fn element(kind: ComponentKind, children: Vec<Node>) -> Self {
        Element::new(kind).with_children(children).into()
    }

    #[must_use]
    pub fn leading_visual(children: Vec<Node>) -> Self {
        Self::element(ComponentKind::LeadingVisual, children)
    }

    #[must_use]
    pub fn trailing_visual(children: Vec<Node>) -> Self {
        Self::element(ComponentKind::TrailingVisual, children)
    }

    #[must_use]
    pub fn description(variant: DescriptionVariant, children: Vec<Node>) -> Self {
        Element::new(ComponentKind::Description)
            .with_variant(variant.as_ref())
            .with_children(children)
            .into()
    }

    #[must_use]
    pub fn inline_description(text: impl Into<String>) -> Self {
        Self::description(DescriptionVariant::Inline, vec![Node::text(text)])
    }

    #[must_use]
    pub fn block_description(text: impl Into<String>) -> Self {
        Self::description(DescriptionVariant::Block, vec![Node::text(text)])
    }

    #[must_use]
    pub fn icon(name: impl Into<String>) -> Self {
        Element::new(ComponentKind::Icon)
            .with_attribute("name", name)
            .into()
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } | Node::Fragment { .. } => None,
        }
    }

    #[must_use]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } | Node::Fragment { .. } => None,
        }
    }

    #[must_use]
    pub fn component_kind(&self) -> Option<ComponentKind> {
        self.as_element().map(|it| it.kind)
    }

    /// Children of an element or a fragment. Text has none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment { children } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Depth first search for the first element of the given kind, including `self`.
    #[must_use]
    pub fn find(&self, kind: ComponentKind) -> Option<&Element> {
        if let Some(element) = self.as_element()
            && element.kind == kind
        {
            return Some(element);
        }
        self.children().iter().find_map(|child| child.find(kind))
    }

    /// Concatenated text of this subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut acc = String::new();
        self.collect_text(&mut acc);
        acc
    }

    fn collect_text(&self, acc: &mut String) {
        match self {
            Node::Text { value } => acc.push_str(value),
            Node::Element(Element { children, .. }) | Node::Fragment { children } => {
                for child in children {
                    child.collect_text(acc);
                }
            }
        }
    }
}

/// Expands fragments (recursively) so that their children take their place.
#[must_use]
pub fn flatten_fragments(children: &[Node]) -> Vec<&Node> {
    let mut acc = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Fragment { children } => acc.extend(flatten_fragments(children)),
            Node::Text { .. } | Node::Element(_) => acc.push(child),
        }
    }
    acc
}
