//! `[navbar]` and `[sidebar]` section configuration.
//!
//! Ordered navigation structures, keyed by locale URL prefix. Entry order
//! is significant: it controls rendered order in the external theme.
//!
//! # Example
//!
//! ```toml
//! [[navbar."/"]]
//! text = "Home"
//! icon = "blog"
//! link = "/"
//!
//! [[navbar."/"]]
//! text = "Projects"
//! icon = "home"
//! link = "/home"
//!
//! [sidebar]
//! "/" = "structure"
//!
//! [[sidebar."/en/"]]
//! text = "Intro"
//! link = "/en/intro.html"
//! ```

use crate::config::types::FieldPath;
use crate::config::util::is_site_absolute;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field path for navbar diagnostics.
pub const NAVBAR_FIELD: FieldPath = FieldPath::new("navbar");

/// Field path for sidebar diagnostics.
pub const SIDEBAR_FIELD: FieldPath = FieldPath::new("sidebar");

/// Per-locale navbar entry lists, keyed by URL prefix.
pub type NavbarSectionConfig = IndexMap<String, Vec<NavbarEntry>>;

/// Per-locale sidebar settings, keyed by URL prefix.
pub type SidebarSectionConfig = IndexMap<String, SidebarConfig>;

/// A single navbar entry: display text, optional icon, link target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarEntry {
    /// Display text.
    pub text: String,

    /// Icon name resolved against the theme's icon asset namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Link target (site-absolute).
    pub link: String,
}

/// Sidebar configuration for one locale.
///
/// Either the `"structure"`/`"heading"` keyword (the theme derives the
/// sidebar itself) or an explicit ordered entry list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarConfig {
    Keyword(SidebarKeyword),
    Entries(Vec<SidebarEntry>),
}

/// Sidebar auto-generation keywords recognized by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarKeyword {
    /// Derive the sidebar from the directory structure.
    Structure,
    /// Derive the sidebar from page headings.
    Heading,
}

/// A single sidebar entry, possibly with nested children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarEntry {
    /// Display text.
    pub text: String,

    /// Icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Link target (site-absolute). Optional for pure group headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Path prefix prepended to child links by the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Nested entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarEntry>,
}

/// Validate navbar entry lists.
///
/// # Checks
/// - every entry has non-empty display text
/// - every entry link is non-empty and starts with `/`
pub fn validate_navbar(navbar: &NavbarSectionConfig, diag: &mut crate::config::ConfigDiagnostics) {
    for (prefix, entries) in navbar {
        for (i, entry) in entries.iter().enumerate() {
            if entry.text.is_empty() {
                diag.error(
                    NAVBAR_FIELD,
                    format!("entry {i} in \"{prefix}\" has no text"),
                );
            }
            if !is_site_absolute(&entry.link) {
                diag.error_with_hint(
                    NAVBAR_FIELD,
                    format!(
                        "entry {i} in \"{prefix}\": link \"{}\" must start with '/'",
                        entry.link
                    ),
                    "navbar links are site-absolute, e.g. \"/home\"",
                );
            }
        }
    }
}

/// Validate sidebar configuration.
///
/// # Checks
/// - explicit entries have either a link or children
/// - entry links, when present, start with `/`
pub fn validate_sidebar(
    sidebar: &SidebarSectionConfig,
    diag: &mut crate::config::ConfigDiagnostics,
) {
    for (prefix, config) in sidebar {
        let SidebarConfig::Entries(entries) = config else {
            continue;
        };
        validate_sidebar_entries(prefix, entries, diag);
    }
}

fn validate_sidebar_entries(
    prefix: &str,
    entries: &[SidebarEntry],
    diag: &mut crate::config::ConfigDiagnostics,
) {
    for (i, entry) in entries.iter().enumerate() {
        if entry.link.is_none() && entry.children.is_empty() {
            diag.error_with_hint(
                SIDEBAR_FIELD,
                format!("entry {i} in \"{prefix}\" has neither link nor children"),
                "set a link target or nest child entries",
            );
        }
        if let Some(link) = &entry.link
            && !is_site_absolute(link)
        {
            diag.error_with_hint(
                SIDEBAR_FIELD,
                format!("entry {i} in \"{prefix}\": link \"{link}\" must start with '/'"),
                "sidebar links are site-absolute, e.g. \"/en/intro.html\"",
            );
        }
        validate_sidebar_entries(prefix, &entry.children, diag);
    }
}

// ============================================================================
// Tests
// ============================================================================
