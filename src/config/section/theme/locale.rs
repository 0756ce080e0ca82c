//! `[theme.locales.<prefix>]` configuration.
//!
//! Locale-scoped theme fragments: footer and the blogger card text. Navbar
//! and sidebar live in their own top-level sections and are joined in by
//! locale key at emission time.

use crate::config::types::FieldPath;
use crate::config::util::is_site_absolute;
use serde::{Deserialize, Serialize};

/// Theme options for one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLocaleConfig {
    /// Footer content (raw HTML string, passed through unmodified).
    pub footer: String,

    /// Whether the footer is rendered.
    pub display_footer: bool,

    /// Blogger card text for this locale.
    pub blog: BlogLocaleConfig,
}

impl Default for ThemeLocaleConfig {
    fn default() -> Self {
        Self {
            footer: String::new(),
            display_footer: true,
            blog: BlogLocaleConfig::default(),
        }
    }
}

/// Per-locale blogger card text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogLocaleConfig {
    /// Short description shown under the avatar.
    pub description: String,

    /// Intro page link (site-absolute), opened when the avatar is clicked.
    pub intro: String,
}

/// Field paths for diagnostics.
pub struct ThemeLocaleFields {
    pub locales: FieldPath,
    pub intro: FieldPath,
}

impl ThemeLocaleConfig {
    pub const FIELDS: ThemeLocaleFields = ThemeLocaleFields {
        locales: FieldPath::new("theme.locales"),
        intro: FieldPath::new("theme.locales.<prefix>.blog.intro"),
    };

    /// Validate one locale fragment.
    ///
    /// # Checks
    /// - `blog.intro`, when set, must be site-absolute
    pub fn validate(&self, prefix: &str, diag: &mut crate::config::ConfigDiagnostics) {
        if !self.blog.intro.is_empty() && !is_site_absolute(&self.blog.intro) {
            diag.error_with_hint(
                Self::FIELDS.intro,
                format!(
                    "locale \"{prefix}\": intro \"{}\" must start with '/'",
                    self.blog.intro
                ),
                "use a site-absolute page link, e.g. \"/intro.html\"",
            );
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
    fn test_locale_defaults() {
        let locale = ThemeLocaleConfig::default();
        assert!(locale.display_footer);
        assert!(locale.footer.is_empty());
    }

    #[test]
    fn test_locale_parses_footer_html() {
        let config = test_parse_config(
            r#"[theme.locales."/"]
footer = "<a href='https://example.com/'>registration</a>"
display_footer = true

[theme.locales."/".blog]
description = "Java, Go, Rust"
intro = "/intro.html"
"#,
        );
        let locale = &config.theme.locales["/"];
        assert!(locale.footer.contains("<a href="));
        assert_eq!(locale.blog.intro, "/intro.html");
    }

    #[test]
    fn test_relative_intro_rejected() {
        let locale = ThemeLocaleConfig {
            blog: BlogLocaleConfig {
                description: String::new(),
                intro: "intro.html".into(),
            },
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        locale.validate("/", &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_empty_intro_accepted() {
        let locale = ThemeLocaleConfig::default();
        let mut diag = ConfigDiagnostics::new();
        locale.validate("/", &mut diag);
        assert!(diag.is_empty());
    }
}
