//! `[theme.plugins]` configuration.
//!
//! Plugin toggles passed through to the theme: the blog plugin's excerpt
//! switch and the markdown-enhancement presentation plugin list.
//!
//! # Example
//!
//! ```toml
//! [theme.plugins.blog]
//! excerpt = false
//!
//! [theme.plugins.md_enhance.presentation]
//! plugins = ["highlight", "math", "search", "notes", "zoom"]
//! ```

use serde::{Deserialize, Serialize};

/// Plugin settings section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Blog plugin settings.
    pub blog: BlogPluginConfig,

    /// Markdown enhancement settings.
    pub md_enhance: MdEnhanceConfig,
}

/// Blog plugin settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPluginConfig {
    /// Auto-generate article excerpts.
    pub excerpt: bool,
}

/// Markdown enhancement plugin settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MdEnhanceConfig {
    /// Presentation (reveal.js) settings.
    pub presentation: PresentationConfig,
}

/// Presentation settings: which reveal.js plugins to load, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Ordered plugin list.
    pub plugins: Vec<PresentationPlugin>,
}

/// Reveal.js plugins the markdown enhancer can load.
///
/// A closed set: unrecognized names fail deserialization with a TOML error
/// pointing at the offending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationPlugin {
    Highlight,
    Math,
    Search,
    Notes,
    Zoom,
    Anything,
    Audio,
    Chalkboard,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_plugins_defaults() {
        let config = test_parse_config("");
        assert!(!config.theme.plugins.blog.excerpt);
        assert!(config.theme.plugins.md_enhance.presentation.plugins.is_empty());
    }

    #[test]
    fn test_presentation_plugins_ordered() {
        let config = test_parse_config(
            r#"[theme.plugins.md_enhance.presentation]
plugins = ["highlight", "math", "search", "notes", "zoom"]
"#,
        );
        assert_eq!(
            config.theme.plugins.md_enhance.presentation.plugins,
            vec![
                PresentationPlugin::Highlight,
                PresentationPlugin::Math,
                PresentationPlugin::Search,
                PresentationPlugin::Notes,
                PresentationPlugin::Zoom,
            ]
        );
    }

    #[test]
    fn test_unknown_presentation_plugin_rejected() {
        let result: Result<PresentationConfig, _> =
            toml::from_str("plugins = [\"highlight\", \"sparkles\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_excerpt_toggle() {
        let config = test_parse_config("[theme.plugins.blog]\nexcerpt = true\n");
        assert!(config.theme.plugins.blog.excerpt);
    }
}
