//! `[theme.blog]` configuration.
//!
//! Blog-specific theme options: avatar shape and the social media link map
//! shown on the blogger card.
//!
//! # Example
//!
//! ```toml
//! [theme.blog]
//! round_avatar = true
//!
//! [theme.blog.medias]
//! GitHub = "https://github.com/alice"
//! Email = "mailto:alice@example.com"
//! ```

use crate::config::types::FieldPath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Media platforms the external theme knows how to render.
///
/// Keys outside this set are silently dropped by the theme, so they are
/// rejected here instead.
pub const KNOWN_MEDIA_PLATFORMS: &[&str] = &[
    "Baidu",
    "Bitbucket",
    "Dingding",
    "Discord",
    "Dribbble",
    "Email",
    "Evernote",
    "Facebook",
    "Flipboard",
    "Gitee",
    "GitHub",
    "Gitlab",
    "Gmail",
    "Instagram",
    "Lines",
    "Linkedin",
    "Pinterest",
    "Pocket",
    "QQ",
    "Qzone",
    "Reddit",
    "Rss",
    "Steam",
    "Twitter",
    "Wechat",
    "Weibo",
    "Whatsapp",
    "Youtube",
    "Zhihu",
];

/// Blog options for the theme's blogger card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogOptionsConfig {
    /// Render the avatar with rounded clipping.
    pub round_avatar: bool,

    /// Social media links keyed by platform name, in display order.
    ///
    /// Values are usually URLs, but some platforms (e.g. Wechat) take an
    /// account id the theme renders as a QR code.
    pub medias: IndexMap<String, String>,
}

impl Default for BlogOptionsConfig {
    fn default() -> Self {
        Self {
            round_avatar: true,
            medias: IndexMap::new(),
        }
    }
}

/// Field paths for diagnostics.
pub struct BlogOptionsFields {
    pub round_avatar: FieldPath,
    pub medias: FieldPath,
}

impl BlogOptionsConfig {
    pub const FIELDS: BlogOptionsFields = BlogOptionsFields {
        round_avatar: FieldPath::new("theme.blog.round_avatar"),
        medias: FieldPath::new("theme.blog.medias"),
    };

    /// Validate blog options.
    ///
    /// # Checks
    /// - every media platform name is one the theme renders
    /// - every media value is non-empty
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for (platform, value) in &self.medias {
            if !KNOWN_MEDIA_PLATFORMS.contains(&platform.as_str()) {
                diag.error_with_hint(
                    Self::FIELDS.medias,
                    format!("unknown platform \"{platform}\""),
                    format!("recognized platforms: {}", KNOWN_MEDIA_PLATFORMS.join(", ")),
                );
            }
            if value.is_empty() {
                diag.error(
                    Self::FIELDS.medias,
                    format!("platform \"{platform}\" has an empty link"),
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_blog_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.blog.round_avatar);
        assert!(config.theme.blog.medias.is_empty());
    }

    #[test]
    fn test_medias_preserve_order() {
        let config = test_parse_config(
            r#"[theme.blog.medias]
QQ = "http://wpa.qq.com/msgrd?v=3&uin=1&site=qq&menu=yes"
Gitee = "https://gitee.com/alice"
Email = "mailto:alice@example.com"
GitHub = "https://github.com/alice"
"#,
        );
        let keys: Vec<_> = config.theme.blog.medias.keys().cloned().collect();
        assert_eq!(keys, vec!["QQ", "Gitee", "Email", "GitHub"]);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let config = test_parse_config(
            r#"[theme.blog.medias]
Myspace = "https://example.com"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.blog.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("Myspace"));
        assert!(
            diag.errors()[0]
                .hint
                .as_deref()
                .is_some_and(|h| h.contains("GitHub"))
        );
    }

    #[test]
    fn test_non_url_platform_value_accepted() {
        // Wechat takes an account id, not a URL
        let config = test_parse_config(
            r#"[theme.blog.medias]
Wechat = "alice-wx"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.blog.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_duplicate_platform_key_fails_parse() {
        // TOML itself rejects duplicate keys, so the map can never hold two
        // entries for one platform
        let result: Result<BlogOptionsConfig, _> = toml::from_str(
            "[medias]\nGitHub = \"https://github.com/a\"\nGitHub = \"https://github.com/b\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_media_value_rejected() {
        let config = test_parse_config(
            r#"[theme.blog.medias]
GitHub = ""
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.blog.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
