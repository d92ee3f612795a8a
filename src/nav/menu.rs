//! Menu entries.

use crate::config::NavItem;
use crate::render::{Component, Element, GroupLabel, GroupMenu, Node};

/// Render menu entries in their configured order.
///
/// The container is emitted even when empty so the bar keeps its layout.
pub fn render_menu(items: &[NavItem]) -> Node {
    Element::new("div")
        .class("menu")
        .children(items.iter().map(render_item))
        .into()
}

fn render_item(item: &NavItem) -> Node {
    match item {
        NavItem::Single(single) => Component::SingleItemLink(single.clone()).into(),
        NavItem::Group(group) => Element::new("div")
            .class("nav-menu-group-wrapper")
            .child(Component::GroupMenu(GroupMenu {
                label: GroupLabel::Text(group.text.clone()),
                items: group.items.clone(),
                active_index: None,
            }))
            .into(),
    }
}
