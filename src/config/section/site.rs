//! `[site]` section configuration.
//!
//! Top-level options the external framework reads directly: base path,
//! dev-server port, and the per-locale language/title/description map.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base = "/"
//! port = 8099
//!
//! [site.locales."/"]
//! lang = "zh-CN"
//! title = "My Blog"
//! description = "My blog homepage"
//!
//! [site.locales."/en/"]
//! lang = "en-US"
//! title = "My Blog"
//! description = "My blog page"
//! ```

use crate::config::types::FieldPath;
use crate::config::util::is_locale_prefix;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Site section configuration.
///
/// Locale insertion order is preserved and carried through to emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base URL path the site is deployed under.
    pub base: String,

    /// Dev-server port the external framework listens on.
    pub port: u16,

    /// Locale map keyed by URL prefix (e.g. "/", "/en/").
    pub locales: IndexMap<String, SiteLocaleConfig>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            base: "/".into(),
            port: 8080,
            locales: IndexMap::new(),
        }
    }
}

/// Per-locale site metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLocaleConfig {
    /// Language tag (e.g. "zh-CN", "en-US").
    pub lang: String,

    /// Site title for this locale.
    pub title: String,

    /// Site description for this locale.
    pub description: String,
}

/// Field paths for diagnostics.
pub struct SiteSectionFields {
    pub base: FieldPath,
    pub port: FieldPath,
    pub locales: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteSectionFields = SiteSectionFields {
        base: FieldPath::new("site.base"),
        port: FieldPath::new("site.port"),
        locales: FieldPath::new("site.locales"),
    };

    /// Validate the `[site]` section.
    ///
    /// # Checks
    /// - `base` must start and end with `/`
    /// - at least one locale must be declared
    /// - every locale key must be a URL prefix (starts and ends with `/`)
    /// - every locale must declare a non-empty `lang`
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if !is_locale_prefix(&self.base) {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("\"{}\" must start and end with '/'", self.base),
                "use \"/\" for root deployments or \"/blog/\" for subpaths",
            );
        }

        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "no locales declared",
                "declare at least [site.locales.\"/\"] with lang, title, description",
            );
        }

        for (prefix, locale) in &self.locales {
            if !is_locale_prefix(prefix) {
                diag.error_with_hint(
                    Self::FIELDS.locales,
                    format!("locale key \"{prefix}\" must start and end with '/'"),
                    "use keys like \"/\" or \"/en/\"",
                );
            }
            if locale.lang.is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.locales,
                    format!("locale \"{prefix}\" has no lang"),
                    "set a language tag, e.g. lang = \"en-US\"",
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
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.site.port, 8080);
    }

    #[test]
    fn test_site_locales_preserve_order() {
        let config = test_parse_config(
            r#"[site.locales."/"]
lang = "zh-CN"
title = "Blog"
description = "Home"

[site.locales."/en/"]
lang = "en-US"
title = "Blog"
description = "Home"
"#,
        );
        let keys: Vec<_> = config.site.locales.keys().cloned().collect();
        assert_eq!(keys, vec!["/", "/en/"]);
        assert_eq!(config.site.locales["/"].lang, "zh-CN");
        assert_eq!(config.site.locales["/en/"].lang, "en-US");
    }

    #[test]
    fn test_site_validate_bad_base() {
        let mut config = test_parse_config("");
        config.site.base = "blog/".into();

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.base")
        );
    }

    #[test]
    fn test_site_validate_bad_locale_key() {
        let config = test_parse_config(
            r#"[site.locales."/en"]
lang = "en-US"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_site_validate_empty_locales() {
        let config = SiteSectionConfig::default();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("no locales"))
        );
    }
}
