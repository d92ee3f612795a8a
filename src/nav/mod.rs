//! Top navigation bar composition.
//!
//! ```text
//! SiteConfig ─┐
//!             ├─► NavModel::resolve ─► render_model ─► Node
//! LocaleData ─┘
//! ```
//!
//! Section order inside the bar is fixed:
//!
//! | # | Section      | Present when                       |
//! |---|--------------|------------------------------------|
//! | 1 | title        | always                             |
//! | 2 | search       | always                             |
//! | 3 | menu         | always (possibly empty)            |
//! | 4 | translations | more than one locale               |
//! | 5 | appearance   | `site.appearance` is not `false`   |
//! | 6 | social links | at least one social link           |
//! | 7 | mobile nav   | always (hidden by CSS breakpoints) |
//!
//! Rendering is a pure function of its inputs and never fails.

pub mod icon;
mod menu;
mod resolve;
mod social;
mod title;
mod translation;

pub use menu::render_menu;
pub use resolve::{NavModel, TranslationMenu, fallback_title, resolve_title};
pub use social::render_social_links;
pub use title::render_title;
pub use translation::render_translations;

use crate::page::{LocaleSiteData, PageData};
use crate::render::{Component, Element, Node};

/// Resolve and render the nav bar for one page.
pub fn render_nav(page: &PageData<'_>, locale: &LocaleSiteData) -> Node {
    render_model(&NavModel::resolve(page, locale))
}

/// Render an already resolved view model.
pub fn render_model(model: &NavModel) -> Node {
    let container_class = if model.has_sidebar {
        "nav-container has-sidebar"
    } else {
        "nav-container"
    };

    let content = Element::new("div")
        .class("nav-content")
        .child(render_search(&model.route_prefix))
        .child(render_menu(&model.menu_items))
        .maybe_child(if model.has_multi_language {
            render_translations(model.translation_menu.as_ref())
        } else {
            None
        })
        .maybe_child(model.has_appearance_switch.then(render_appearance))
        .maybe_child(
            model
                .has_social_links
                .then(|| render_social_links(&model.social_links)),
        )
        .child(Element::new("div").class("mobile-nav").child(Component::MobileNav));

    Element::new("header")
        .class("nav")
        .child(
            Element::new("div").class("nav-bar").child(
                Element::new("div")
                    .class(container_class)
                    .child(render_title(&model.title))
                    .child(content),
            ),
        )
        .into()
}

fn render_search(route_prefix: &str) -> Node {
    Element::new("div")
        .class("search")
        .child(Component::Search {
            route_prefix: route_prefix.to_string(),
        })
        .into()
}

fn render_appearance() -> Node {
    Element::new("div")
        .class("appearance")
        .child(Component::AppearanceSwitch)
        .into()
}
