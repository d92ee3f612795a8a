//! HTML serialization of the render tree.

use crate::config::SingleItem;
use crate::nav::icon::Icon;
use crate::utils::html::{escape, escape_attr, is_void_element};

use super::{Component, GroupLabel, GroupMenu, Node};

/// Markup for collaborator components.
///
/// The defaults emit lightweight placeholders that a client-side island
/// runtime can hydrate; a host shell overrides whichever it renders itself.
pub trait Slots {
    fn search(&self, route_prefix: &str, out: &mut String) {
        out.push_str(r#"<div class="search-island" data-island="search" data-route-prefix=""#);
        out.push_str(&escape_attr(route_prefix));
        out.push_str(r#""></div>"#);
    }

    fn appearance_switch(&self, out: &mut String) {
        out.push_str(
            r#"<button class="appearance-switch" data-island="appearance-switch" type="button" aria-label="Toggle dark mode"></button>"#,
        );
    }

    fn mobile_nav(&self, out: &mut String) {
        out.push_str(r#"<div class="mini-nav" data-island="mobile-nav"></div>"#);
    }

    fn single_item_link(&self, item: &SingleItem, out: &mut String) {
        push_link(out, "nav-link", &item.link, &item.text);
    }

    fn group_menu(&self, group: &GroupMenu, out: &mut String) {
        // -1 marks "no active entry" for the client-side dropdown
        let active = group
            .active_index
            .map_or_else(|| "-1".to_string(), |index| index.to_string());

        out.push_str(r#"<div class="nav-menu-group" data-active-index=""#);
        out.push_str(&active);
        out.push_str(r#""><button class="nav-menu-group-button" type="button""#);
        match &group.label {
            GroupLabel::Text(text) => {
                out.push('>');
                out.push_str(&escape(text));
            }
            GroupLabel::Icon(icon) => {
                out.push_str(r#" aria-label=""#);
                out.push_str(icon.label());
                out.push_str(r#"">"#);
                out.push_str(icon.svg());
            }
        }
        out.push_str(r#"</button><div class="nav-menu-group-content">"#);
        for (index, item) in group.items.iter().enumerate() {
            let class = if group.active_index == Some(index) {
                "nav-menu-group-item active"
            } else {
                "nav-menu-group-item"
            };
            push_link(out, class, &item.link, &item.text);
        }
        out.push_str("</div></div>");
    }

    fn icon(&self, icon: Icon, out: &mut String) {
        out.push_str(icon.svg());
    }
}

/// Placeholder markup for every collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSlots;

impl Slots for PlaceholderSlots {}

fn push_link(out: &mut String, class: &str, href: &str, text: &str) {
    out.push_str(r#"<a class=""#);
    out.push_str(class);
    out.push_str(r#"" href=""#);
    out.push_str(&escape_attr(href));
    out.push_str(r#"">"#);
    out.push_str(&escape(text));
    out.push_str("</a>");
}

/// Serializes a render tree into an HTML string.
pub struct HtmlWriter<S = PlaceholderSlots> {
    slots: S,
    out: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::with_slots(PlaceholderSlots)
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slots> HtmlWriter<S> {
    pub fn with_slots(slots: S) -> Self {
        Self {
            slots,
            out: String::new(),
        }
    }

    pub fn write(&mut self, node: &Node) -> &mut Self {
        match node {
            Node::Text(text) => self.out.push_str(&escape(text)),
            Node::Component(component) => self.write_component(component),
            Node::Element(element) => {
                self.out.push('<');
                self.out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    self.out.push(' ');
                    self.out.push_str(name);
                    self.out.push_str("=\"");
                    self.out.push_str(&escape_attr(value));
                    self.out.push('"');
                }
                self.out.push('>');

                if is_void_element(element.tag) {
                    return self;
                }

                for child in &element.children {
                    self.write(child);
                }
                self.out.push_str("</");
                self.out.push_str(element.tag);
                self.out.push('>');
            }
        }
        self
    }

    fn write_component(&mut self, component: &Component) {
        let out = &mut self.out;
        match component {
            Component::Search { route_prefix } => self.slots.search(route_prefix, out),
            Component::AppearanceSwitch => self.slots.appearance_switch(out),
            Component::SingleItemLink(item) => self.slots.single_item_link(item, out),
            Component::GroupMenu(group) => self.slots.group_menu(group, out),
            Component::Icon(icon) => self.slots.icon(*icon, out),
            Component::MobileNav => self.slots.mobile_nav(out),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Render a tree with placeholder collaborators.
pub fn to_html(node: &Node) -> String {
    let mut writer = HtmlWriter::new();
    writer.write(node);
    writer.finish()
}
