//! Language switcher.

use super::icon::Icon;
use super::resolve::TranslationMenu;
use crate::render::{Component, Element, GroupLabel, GroupMenu, Node};

/// Render the language group, or nothing without a translation menu.
pub fn render_translations(menu: Option<&TranslationMenu>) -> Option<Node> {
    let menu = menu?;

    let group = Component::GroupMenu(GroupMenu {
        label: GroupLabel::Icon(Icon::Translator),
        items: menu.items.clone(),
        active_index: menu.active_index,
    });

    Some(
        Element::new("div")
            .class("translations")
            .child(Element::new("div").class("nav-menu-group-wrapper").child(group))
            .into(),
    )
}
