//! Icon registry.
//!
//! A closed set: supporting a new social icon means adding a variant here
//! and a key in `SocialIcon`.

use crate::config::SocialIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Translator,
}

const GITHUB_SVG: &str = r#"<svg viewBox="0 0 16 16" width="20" height="20" fill="currentColor" aria-hidden="true"><path d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z"/></svg>"#;

const TRANSLATOR_SVG: &str = r#"<svg viewBox="0 0 24 24" width="18" height="18" fill="currentColor" aria-hidden="true"><path d="M12.87 15.07l-2.54-2.51.03-.03A17.52 17.52 0 0014.07 6H17V4h-7V2H8v2H1v1.99h11.17C11.5 7.92 10.44 9.75 9 11.35 8.07 10.32 7.3 9.19 6.69 8h-2c.73 1.63 1.73 3.17 2.98 4.56l-5.09 5.02L4 19l5-5 3.11 3.11.76-2.04zM18.5 10h-2L12 22h2l1.12-3h4.75L21 22h2l-4.5-12zm-2.62 7l1.62-4.33L19.12 17h-3.24z"/></svg>"#;

impl Icon {
    /// Inline SVG markup.
    pub const fn svg(&self) -> &'static str {
        match self {
            Self::Github => GITHUB_SVG,
            Self::Translator => TRANSLATOR_SVG,
        }
    }

    /// Accessible name for icon-only links and buttons.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Translator => "Change language",
        }
    }
}

impl SocialIcon {
    /// Registry lookup; `None` for unsupported keys.
    pub const fn icon(&self) -> Option<Icon> {
        match self {
            Self::Github => Some(Icon::Github),
            Self::Unsupported(_) => None,
        }
    }
}
