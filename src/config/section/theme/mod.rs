//! `[theme]` section configuration.
//!
//! Options consumed by the external theme package: author metadata, icon
//! namespace, displayed page metadata fields, blog settings, per-locale
//! fragments, and plugin toggles.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! hostname = "https://example.com"
//! icon_assets = "iconfont"
//! logo = "/avatar.jpeg"
//! repo = "alice/blog"
//! docs_dir = "docs"
//! page_info = ["Author", "Original", "Date", "Category", "Tag", "ReadingTime"]
//!
//! [theme.author]
//! name = "alice"
//! url = "https://example.com"
//! ```

mod blog;
mod locale;
mod plugins;

pub use blog::{BlogOptionsConfig, KNOWN_MEDIA_PLATFORMS};
pub use locale::{BlogLocaleConfig, ThemeLocaleConfig};
pub use plugins::{
    BlogPluginConfig, MdEnhanceConfig, PluginsConfig, PresentationConfig, PresentationPlugin,
};

use crate::config::types::FieldPath;
use crate::config::util::is_site_absolute;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Canonical site hostname, used by the theme for SEO and feeds.
    pub hostname: String,

    /// Author identity shown in page metadata.
    pub author: AuthorConfig,

    /// Icon asset namespace (e.g. "iconfont", "fontawesome").
    pub icon_assets: String,

    /// Logo / avatar path (site-absolute).
    pub logo: Option<String>,

    /// Repository shorthand ("owner/repo") or full URL.
    pub repo: Option<String>,

    /// Directory holding the documentation sources, for edit links.
    pub docs_dir: String,

    /// Page metadata fields, in display order.
    pub page_info: Vec<PageInfoField>,

    /// Blog options (avatar shape, social media links).
    pub blog: BlogOptionsConfig,

    /// Per-locale theme fragments, keyed by URL prefix.
    pub locales: IndexMap<String, ThemeLocaleConfig>,

    /// Plugin settings.
    pub plugins: PluginsConfig,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            author: AuthorConfig::default(),
            icon_assets: "iconfont".into(),
            logo: None,
            repo: None,
            docs_dir: "docs".into(),
            page_info: PageInfoField::DEFAULT.to_vec(),
            blog: BlogOptionsConfig::default(),
            locales: IndexMap::new(),
            plugins: PluginsConfig::default(),
        }
    }
}

/// Author identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Display name.
    pub name: String,

    /// Homepage URL.
    pub url: Option<String>,
}

/// Page metadata fields the theme can display.
///
/// A closed set: unrecognized tokens fail deserialization with a TOML error
/// pointing at the offending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageInfoField {
    Author,
    Original,
    Date,
    Category,
    Tag,
    ReadingTime,
    Word,
    PageView,
}

impl PageInfoField {
    /// Default display order.
    pub const DEFAULT: &[Self] = &[
        Self::Author,
        Self::Original,
        Self::Date,
        Self::Category,
        Self::Tag,
        Self::ReadingTime,
    ];
}

/// Field paths for diagnostics.
pub struct ThemeSectionFields {
    pub hostname: FieldPath,
    pub author_url: FieldPath,
    pub logo: FieldPath,
}

impl ThemeSectionConfig {
    pub const FIELDS: ThemeSectionFields = ThemeSectionFields {
        hostname: FieldPath::new("theme.hostname"),
        author_url: FieldPath::new("theme.author.url"),
        logo: FieldPath::new("theme.logo"),
    };

    /// Validate the `[theme]` section.
    ///
    /// # Checks
    /// - `hostname` must be set and parse as an http(s) URL with a host
    /// - `author.url`, when set, must parse the same way
    /// - `logo`, when set, must be site-absolute
    /// - blog options and each locale fragment pass their own checks
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.hostname.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.hostname,
                "hostname is not configured",
                "set theme.hostname, e.g.: \"https://example.com\"",
            );
        } else {
            validate_http_url(Self::FIELDS.hostname, &self.hostname, diag);
        }

        if let Some(url) = &self.author.url {
            validate_http_url(Self::FIELDS.author_url, url, diag);
        }

        if let Some(logo) = &self.logo
            && !is_site_absolute(logo)
        {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("\"{logo}\" must start with '/'"),
                "the logo path is resolved against the site root, e.g. \"/avatar.jpeg\"",
            );
        }

        self.blog.validate(diag);

        for (prefix, locale) in &self.locales {
            locale.validate(prefix, diag);
        }
    }
}

/// URL format check using url crate for strict validation.
fn validate_http_url(field: FieldPath, url_str: &str, diag: &mut crate::config::ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
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
    fn test_theme_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.icon_assets, "iconfont");
        assert_eq!(config.theme.docs_dir, "docs");
        assert_eq!(config.theme.page_info, PageInfoField::DEFAULT);
        assert!(config.theme.logo.is_none());
    }

    #[test]
    fn test_theme_parses_full_section() {
        let config = test_parse_config(
            r#"[theme]
hostname = "http://example.com"
icon_assets = "iconfont"
logo = "/avatar.jpeg"
repo = "alice/blog"
docs_dir = "docs"
page_info = ["Author", "Original", "Date", "Category", "Tag", "ReadingTime"]

[theme.author]
name = "alice"
url = "http://example.com"
"#,
        );
        assert_eq!(config.theme.hostname, "http://example.com");
        assert_eq!(config.theme.author.name, "alice");
        assert_eq!(config.theme.repo.as_deref(), Some("alice/blog"));
        assert_eq!(config.theme.page_info.len(), 6);
    }

    #[test]
    fn test_unknown_page_info_token_rejected() {
        let result: Result<ThemeSectionConfig, _> =
            toml::from_str("page_info = [\"Author\", \"Mood\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_hostname_rejected() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "theme.hostname")
        );
    }

    #[test]
    fn test_bad_hostname_scheme_rejected() {
        let mut config = test_parse_config("");
        config.theme.hostname = "ftp://example.com".into();

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("scheme 'ftp'"))
        );
    }

    #[test]
    fn test_relative_logo_rejected() {
        let mut config = test_parse_config("");
        config.theme.hostname = "https://example.com".into();
        config.theme.logo = Some("avatar.jpeg".into());

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "theme.logo")
        );
    }
}
