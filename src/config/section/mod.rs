//! Configuration section definitions.
//!
//! Each module corresponds to a section in `hope.toml`:
//!
//! | Module     | TOML Section           | Purpose                           |
//! |------------|------------------------|-----------------------------------|
//! | `site`     | `[site]`               | Base path, port, locale map       |
//! | `theme`    | `[theme]`              | Theme options, plugins, locales   |
//! | `nav`      | `[navbar]`/`[sidebar]` | Ordered navigation structures     |

pub mod nav;
pub mod site;
pub mod theme;

// Re-export section configs
pub use nav::{
    NavbarEntry, NavbarSectionConfig, SidebarConfig, SidebarEntry, SidebarKeyword,
    SidebarSectionConfig,
};
pub use site::{SiteLocaleConfig, SiteSectionConfig};
pub use theme::{
    AuthorConfig, BlogOptionsConfig, PageInfoField, PluginsConfig, ThemeLocaleConfig,
    ThemeSectionConfig,
};
