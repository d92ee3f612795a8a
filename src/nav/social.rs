//! Social links.

use crate::config::SocialLink;
use crate::render::{Component, Element, Node};

/// Render one external link per entry with a registered icon.
///
/// Entries whose icon is not in the registry are skipped.
pub fn render_social_links(links: &[SocialLink]) -> Node {
    let anchors = links.iter().filter_map(|link| {
        let icon = link.icon.icon()?;
        Some(Node::from(
            Element::new("a")
                .attr("href", link.link.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("aria-label", icon.label())
                .child(Component::Icon(icon)),
        ))
    });

    Element::new("div")
        .class("social-links")
        .child(Element::new("div").class("social-links-icons").children(anchors))
        .into()
}
