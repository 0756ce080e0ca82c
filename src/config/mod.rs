//! Blog configuration management for `hope.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── theme/     # [theme] and sub-sections
//! │   └── nav        # [navbar] and [sidebar]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                         |
//! |-----------------|-------------------------------------------------|
//! | `[site]`        | Base path, port, per-locale lang/title/description |
//! | `[theme]`       | Theme options (author, logo, page_info, blog)   |
//! | `[theme.locales]` | Per-locale footer and blogger card text       |
//! | `[theme.plugins]` | Blog excerpt toggle, presentation plugins     |
//! | `[navbar]`      | Per-locale ordered navbar entries               |
//! | `[sidebar]`     | Per-locale sidebar entries or keywords          |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    AuthorConfig, NavbarEntry, NavbarSectionConfig, PageInfoField, SidebarConfig,
    SidebarSectionConfig, SiteLocaleConfig, SiteSectionConfig, ThemeLocaleConfig,
    ThemeSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hope.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site configuration (base, port, locales)
    pub site: SiteSectionConfig,

    /// Theme configuration (author, logo, blog, locales, plugins)
    pub theme: ThemeSectionConfig,

    /// Per-locale navbar entry lists
    pub navbar: NavbarSectionConfig,

    /// Per-locale sidebar settings
    pub sidebar: SidebarSectionConfig,
}

impl BlogConfig {
    /// Load configuration, searching upward from cwd for the config file.
    ///
    /// Reports unknown fields and collects all validation errors before
    /// returning.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            log!(
                "error";
                "Config file '{}' not found. Run 'hopeconf init' to create one.",
                config_name.display()
            );
            std::process::exit(1);
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (hope.toml) since it's always at the blog root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration tree.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        // Validate each section
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        section::nav::validate_navbar(&self.navbar, &mut diag);
        section::nav::validate_sidebar(&self.sidebar, &mut diag);

        // Cross-section checks span the locale maps
        self.validate_locale_agreement(&mut diag);

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Check that every locale-keyed map agrees with `[site.locales]`.
    ///
    /// The external framework resolves all of these by key at render time;
    /// a dangling or missing key silently produces a broken or
    /// default-rendered page, so it is an error here.
    fn validate_locale_agreement(&self, diag: &mut ConfigDiagnostics) {
        // theme.locales must match site.locales exactly
        for prefix in self.theme.locales.keys() {
            if !self.site.locales.contains_key(prefix) {
                diag.error_with_hint(
                    ThemeLocaleConfig::FIELDS.locales,
                    format!("locale \"{prefix}\" is not declared in [site.locales]"),
                    format!("declare [site.locales.\"{prefix}\"] or remove the theme locale"),
                );
            }
        }
        for prefix in self.site.locales.keys() {
            if !self.theme.locales.contains_key(prefix) {
                diag.error_with_hint(
                    ThemeLocaleConfig::FIELDS.locales,
                    format!("locale \"{prefix}\" has no [theme.locales.\"{prefix}\"] entry"),
                    "every site locale needs a matching theme locale",
                );
            }
        }

        // every locale needs a navbar; navbar keys must not dangle
        for prefix in self.navbar.keys() {
            if !self.site.locales.contains_key(prefix) {
                diag.error(
                    section::nav::NAVBAR_FIELD,
                    format!("navbar locale \"{prefix}\" is not declared in [site.locales]"),
                );
            }
        }
        for prefix in self.site.locales.keys() {
            if !self.navbar.contains_key(prefix) {
                diag.error_with_hint(
                    section::nav::NAVBAR_FIELD,
                    format!("locale \"{prefix}\" has no navbar"),
                    format!("add [[navbar.\"{prefix}\"]] entries"),
                );
            }
        }

        // sidebar is optional per locale, but keys must not dangle
        for prefix in self.sidebar.keys() {
            if !self.site.locales.contains_key(prefix) {
                diag.error(
                    section::nav::SIDEBAR_FIELD,
                    format!("sidebar locale \"{prefix}\" is not declared in [site.locales]"),
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML fragment.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BlogConfig {
    let (parsed, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A complete two-locale config that passes validation, used across tests.
/// Mirrors the layout `hopeconf init` scaffolds.
#[cfg(test)]
pub fn test_full_config() -> BlogConfig {
    test_parse_config(
        r#"[site]
base = "/"
port = 8099

[site.locales."/"]
lang = "zh-CN"
title = "My Blog"
description = "My blog homepage"

[site.locales."/en/"]
lang = "en-US"
title = "My Blog"
description = "My blog page"

[theme]
hostname = "https://example.com"
logo = "/avatar.jpeg"
repo = "alice/blog"

[theme.author]
name = "alice"
url = "https://example.com"

[theme.blog.medias]
GitHub = "https://github.com/alice"
Email = "mailto:alice@example.com"

[theme.locales."/"]
footer = "<a href='https://example.com/'>about</a>"

[theme.locales."/".blog]
description = "Java, Go, Rust"
intro = "/intro.html"

[theme.locales."/en/"]
footer = "<a href='https://example.com/'>about</a>"

[theme.locales."/en/".blog]
description = "Java, Go, Rust"
intro = "/en/intro.html"

[theme.plugins.md_enhance.presentation]
plugins = ["highlight", "math", "search", "notes", "zoom"]

[[navbar."/"]]
text = "Home"
icon = "blog"
link = "/"

[[navbar."/"]]
text = "Projects"
icon = "home"
link = "/home"

[[navbar."/en/"]]
text = "Home"
icon = "blog"
link = "/en/"

[sidebar]
"/" = "structure"
"/en/" = "structure"
"#,
    )
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<BlogConfig, _> = toml::from_str("[site\nbase = \"/\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_validates() {
        let config = test_full_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_locale_agreement_exact_match() {
        // The {"/", "/en/"} scenario: theme locales must contain exactly
        // the site locale keys, no more, no fewer.
        let config = test_full_config();
        let site_keys: Vec<_> = config.site.locales.keys().collect();
        let theme_keys: Vec<_> = config.theme.locales.keys().collect();
        assert_eq!(site_keys, vec!["/", "/en/"]);
        assert_eq!(site_keys, theme_keys);
    }

    #[test]
    fn test_dangling_theme_locale_rejected() {
        let mut config = test_full_config();
        config
            .theme
            .locales
            .insert("/fr/".into(), ThemeLocaleConfig::default());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("/fr/"));
    }

    #[test]
    fn test_missing_theme_locale_rejected() {
        let mut config = test_full_config();
        config.theme.locales.shift_remove("/en/");

        let mut diag = ConfigDiagnostics::new();
        config.validate_locale_agreement(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("no [theme.locales.\"/en/\"]"))
        );
    }

    #[test]
    fn test_missing_navbar_rejected() {
        let mut config = test_full_config();
        config.navbar.shift_remove("/en/");

        let mut diag = ConfigDiagnostics::new();
        config.validate_locale_agreement(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("\"/en/\" has no navbar"))
        );
    }

    #[test]
    fn test_dangling_sidebar_locale_rejected() {
        let mut config = test_full_config();
        config
            .sidebar
            .insert("/de/".into(), SidebarConfig::Entries(Vec::new()));

        let mut diag = ConfigDiagnostics::new();
        config.validate_locale_agreement(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("sidebar locale \"/de/\""))
        );
    }

    #[test]
    fn test_missing_sidebar_accepted() {
        let mut config = test_full_config();
        config.sidebar.shift_remove("/en/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nbase = \"/\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = BlogConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.base, "/");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nbase = \"/\"\nport = 8099";
        let (_, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_all_errors_collected_at_once() {
        let mut config = test_full_config();
        config.site.base = "bad".into();
        config.theme.hostname = "not a url".into();
        config.navbar.get_mut("/").unwrap()[0].link = "home".into();

        let err = config.validate().unwrap_err();
        let diag = err.downcast::<ConfigError>().unwrap();
        let ConfigError::Diagnostics(diag) = diag else {
            panic!("expected diagnostics");
        };
        assert!(diag.len() >= 3);
    }
}
