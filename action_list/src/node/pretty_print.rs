// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Indented markup rendering of a [`Node`] tree, for tests and the `alist` CLI. Text
//! and attribute values are escaped, so caller supplied strings (labels, inactive text)
//! can't break the markup.

use std::fmt::{Display, Formatter, Result, Write as _};

use super::{Element, Node};

const INDENT: &str = "  ";

impl Node {
    /// Same as `to_string()`.
    #[must_use]
    pub fn pretty_print(&self) -> String { self.to_string() }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write_node(self, 0, f) }
}

fn write_node(node: &Node, depth: usize, f: &mut Formatter<'_>) -> Result {
    match node {
        Node::Text { value } => {
            f.write_str(&INDENT.repeat(depth))?;
            write_escaped(f, value, Escape::Text)?;
            writeln!(f)
        }
        Node::Fragment { children } => {
            for child in children {
                write_node(child, depth, f)?;
            }
            Ok(())
        }
        Node::Element(element) => write_element(element, depth, f),
    }
}

fn write_element(element: &Element, depth: usize, f: &mut Formatter<'_>) -> Result {
    let indent = INDENT.repeat(depth);
    let tag = element.kind.as_ref();

    write!(f, "{indent}<{tag}")?;
    if let Some(id) = &element.props.id {
        write_attribute(f, "id", id)?;
    }
    if let Some(variant) = &element.props.variant {
        write_attribute(f, "variant", variant)?;
    }
    for (name, value) in &element.props.attributes {
        write_attribute(f, name, value)?;
    }

    if element.children.is_empty() {
        return writeln!(f, "/>");
    }

    writeln!(f, ">")?;
    for child in &element.children {
        write_node(child, depth + 1, f)?;
    }
    writeln!(f, "{indent}</{tag}>")
}

fn write_attribute(f: &mut Formatter<'_>, name: &str, value: &str) -> Result {
    write!(f, " {name}=\"")?;
    write_escaped(f, value, Escape::Attribute)?;
    f.write_char('"')
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Escape {
    Text,
    /// Quotes are escaped too, values are always double quoted.
    Attribute,
}

fn write_escaped(f: &mut Formatter<'_>, value: &str, escape: Escape) -> Result {
    for ch in value.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if escape == Escape::Attribute => f.write_str("&quot;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ComponentKind;

    #[test]
    fn test_pretty_print_nested() {
        let node: Node = Element::new(ComponentKind::ListItem)
            .with_id("item-1")
            .with_attribute("role", "menuitem")
            .with_attribute("aria-labelledby", "item-1--label")
            .with_children(vec![
                Node::leading_visual(vec![Node::icon("copy")]),
                Node::fragment(vec![Node::text("Copy link")]),
            ])
            .into();

        let expected = "\
<li id=\"item-1\" aria-labelledby=\"item-1--label\" role=\"menuitem\">
  <ActionList.LeadingVisual>
    <Icon name=\"copy\"/>
  </ActionList.LeadingVisual>
  Copy link
</li>
";
        assert_eq!(node.pretty_print(), expected);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let node: Node = Element::new(ComponentKind::Tooltip)
            .with_attribute("text", r#"Say "hi" <b> & go"#)
            .with_child(Node::text(r#"a < b && "c" > d"#))
            .into();

        let expected = "\
<Tooltip text=\"Say &quot;hi&quot; &lt;b&gt; &amp; go\">
  a &lt; b &amp;&amp; \"c\" &gt; d
</Tooltip>
";
        assert_eq!(node.pretty_print(), expected);
    }

    #[test]
    fn test_pretty_print_variant() {
        let node = Node::block_description("Details");
        assert_eq!(
            node.to_string(),
            "<ActionList.Description variant=\"block\">\n  Details\n</ActionList.Description>\n"
        );
    }
}
