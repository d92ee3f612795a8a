//! Render tree and HTML output.
//!
//! ```text
//! NavModel ──► Node tree ──► HtmlWriter<Slots> ──► String
//!              (node.rs)      (html.rs)
//! ```
//!
//! Collaborator widgets (search, appearance switch, menu links and groups,
//! mobile nav) are opaque `Component` nodes; the `Slots` trait decides
//! their markup.

mod html;
mod node;

pub use html::{HtmlWriter, PlaceholderSlots, Slots, to_html};
pub use node::{Component, Element, GroupLabel, GroupMenu, Node};
