//! Social link entries.

use serde::{Deserialize, Serialize};

/// `{ icon = "github", link = "https://github.com/..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Icon key of a social link.
///
/// Keys outside the registry are kept as `Unsupported` so that the link can
/// be skipped at render time instead of failing the whole config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialIcon {
    Github,
    Unsupported(String),
}

impl SocialIcon {
    pub fn key(&self) -> &str {
        match self {
            Self::Github => "github",
            Self::Unsupported(key) => key,
        }
    }

    #[inline]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl From<String> for SocialIcon {
    fn from(key: String) -> Self {
        match key.as_str() {
            "github" => Self::Github,
            _ => Self::Unsupported(key),
        }
    }
}

impl From<SocialIcon> for String {
    fn from(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::Unsupported(key) => key,
            known => known.key().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Links {
        social_links: Vec<SocialLink>,
    }

    #[test]
    fn test_known_and_unknown_keys() {
        let links: Links = toml::from_str(
            r#"social_links = [
    { icon = "github", link = "https://github.com/island" },
    { icon = "myspace", link = "https://myspace.com/island" },
]"#,
        )
        .unwrap();
        assert_eq!(links.social_links[0].icon, SocialIcon::Github);
        assert_eq!(
            links.social_links[1].icon,
            SocialIcon::Unsupported("myspace".into())
        );
        assert!(!links.social_links[1].icon.is_supported());
    }

    #[test]
    fn test_key_is_case_sensitive() {
        assert_eq!(
            SocialIcon::from("GitHub".to_string()),
            SocialIcon::Unsupported("GitHub".into())
        );
    }

    #[test]
    fn test_serializes_back_to_key() {
        let json = serde_json::to_string(&SocialIcon::Github).unwrap();
        assert_eq!(json, "\"github\"");
        let json = serde_json::to_string(&SocialIcon::Unsupported("x".into())).unwrap();
        assert_eq!(json, "\"x\"");
    }
}
