// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use crate::{ComponentKind, Element, ItemAttributes, Node};

/// Lets a caller put the item content inside a different interactive element, eg: a
/// link. When a non identity wrapper is used, the wrapper carries the item attributes
/// and the outer list element is reduced to a presentational shell.
pub trait ItemWrapper {
    fn wrap(&self, children: Vec<Node>, attributes: &ItemAttributes) -> Node;

    /// The identity wrapper leaves the attributes on the list element.
    fn is_identity(&self) -> bool { false }
}

/// Default. Children go straight into the list element.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoWrapper;

impl ItemWrapper for NoWrapper {
    fn wrap(&self, children: Vec<Node>, _attributes: &ItemAttributes) -> Node {
        Node::fragment(children)
    }

    fn is_identity(&self) -> bool { true }
}

/// Wraps the content in an element of the given kind, with fixed attributes of its own
/// plus the item attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementWrapper {
    pub kind: ComponentKind,
    pub attributes: BTreeMap<String, String>,
}

impl ElementWrapper {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn link(href: impl Into<String>) -> Self {
        Self::new(ComponentKind::Link).with_attribute("href", href)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl ItemWrapper for ElementWrapper {
    fn wrap(&self, children: Vec<Node>, attributes: &ItemAttributes) -> Node {
        Element::new(self.kind)
            .with_attributes(self.attributes.clone())
            .with_attributes(attributes.to_attribute_map())
            .with_children(children)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> ItemAttributes {
        ItemAttributes {
            id: "i".into(),
            role: None,
            tab_index: Some(0),
            aria_disabled: false,
            data_inactive: false,
            aria_labelledby: "i--label".into(),
            aria_describedby: None,
            selection_attr: None,
            data_variant: None,
        }
    }

    #[test]
    fn test_no_wrapper_is_transparent() {
        let node = NoWrapper.wrap(vec![Node::text("a"), Node::text("b")], &attributes());
        assert!(NoWrapper.is_identity());
        assert_eq!(node.to_string(), "a\nb\n");
    }

    #[test]
    fn test_link_wrapper_carries_attributes() {
        let wrapper = ElementWrapper::link("/settings");
        assert!(!wrapper.is_identity());

        let node = wrapper.wrap(vec![Node::text("Settings")], &attributes());
        let element = node.as_element().unwrap();
        assert_eq!(element.kind, ComponentKind::Link);
        assert_eq!(element.props.attributes.get("href").map(String::as_str), Some("/settings"));
        assert_eq!(element.props.attributes.get("tabindex").map(String::as_str), Some("0"));
        assert_eq!(
            element.props.attributes.get("aria-labelledby").map(String::as_str),
            Some("i--label")
        );
    }
}
