//! Render tree nodes.

use crate::config::SingleItem;
use crate::nav::icon::Icon;

/// A node of the nav render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Component(Component),
}

/// A plain HTML element produced by the nav itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// External collaborators, identified by their prop shape only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Search { route_prefix: String },
    AppearanceSwitch,
    SingleItemLink(SingleItem),
    GroupMenu(GroupMenu),
    Icon(Icon),
    MobileNav,
}

/// Props of a dropdown group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMenu {
    pub label: GroupLabel,
    pub items: Vec<SingleItem>,
    /// Highlighted entry; `None` when nothing is selected.
    pub active_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupLabel {
    Text(String),
    Icon(Icon),
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a section only when it is present.
    pub fn maybe_child(mut self, child: Option<Node>) -> Self {
        self.children.extend(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// All nodes of the subtree in document order, `self` first.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Self::Element(element) = node {
                stack.extend(element.children.iter().rev());
            }
        }
        out
    }

    /// First element in document order carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .filter_map(Node::as_element)
            .find(|element| element.has_class(class))
    }

    /// All collaborator components of the subtree in document order.
    pub fn components(&self) -> Vec<&Component> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Self::Component(component) => Some(component),
                _ => None,
            })
            .collect()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_document_order() {
        let tree = Node::from(
            Element::new("div")
                .child(Element::new("span").child(Node::text("a")))
                .child(Node::text("b")),
        );
        let texts: Vec<_> = tree
            .descendants()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["a", "b"]);
    }

    #[test]
    fn test_maybe_child() {
        let element = Element::new("div")
            .maybe_child(None)
            .maybe_child(Some(Node::text("x")));
        assert_eq!(element.children, vec![Node::text("x")]);
    }

    #[test]
    fn test_has_class() {
        let element = Element::new("div").class("container has-sidebar");
        assert!(element.has_class("has-sidebar"));
        assert!(!element.has_class("sidebar"));
    }
}
