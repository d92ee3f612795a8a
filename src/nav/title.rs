//! Brand title.

use crate::render::{Element, Node};

/// The site title as a link to the home page.
pub fn render_title(title: &str) -> Node {
    Element::new("div")
        .class("nav-bar-title")
        .child(
            Element::new("a")
                .attr("href", "/")
                .class("flex items-center")
                .child(Element::new("span").child(Node::text(title))),
        )
        .into()
}
