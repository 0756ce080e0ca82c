//! External-schema composition.
//!
//! Builds the exact nested record the external framework consumes: the
//! `defineUserConfig` shape at the top level with the `hopeTheme` options
//! object under `theme`. Field names and nesting here are the consumer
//! contract and must not drift; camelCase names are produced at this
//! boundary only and never appear in the TOML schema.
//!
//! Composition is pure and deterministic: map iteration follows `hope.toml`
//! declaration order end to end, so composing the same config twice yields
//! identical output.

use crate::config::{BlogConfig, SidebarConfig};
use serde_json::{Map, Value, json};

/// Compose the configuration tree into the external consumer record.
pub fn compose(config: &BlogConfig) -> Value {
    let mut root = Map::new();

    root.insert("base".into(), json!(config.site.base));
    root.insert("locales".into(), site_locales(config));
    root.insert("port".into(), json!(config.site.port));
    root.insert("theme".into(), theme(config));

    Value::Object(root)
}

/// Serialize a composed record, pretty or compact.
pub fn to_json_string(value: &Value, pretty: bool) -> String {
    if pretty {
        // to_string_pretty on a Value cannot fail
        serde_json::to_string_pretty(value).unwrap_or_default()
    } else {
        value.to_string()
    }
}

/// `locales`: URL prefix → {lang, title, description}.
fn site_locales(config: &BlogConfig) -> Value {
    let mut locales = Map::new();
    for (prefix, locale) in &config.site.locales {
        locales.insert(
            prefix.clone(),
            json!({
                "lang": locale.lang,
                "title": locale.title,
                "description": locale.description,
            }),
        );
    }
    Value::Object(locales)
}

/// The `hopeTheme` options object.
fn theme(config: &BlogConfig) -> Value {
    let t = &config.theme;
    let mut theme = Map::new();

    theme.insert("hostname".into(), json!(t.hostname));

    let mut author = Map::new();
    author.insert("name".into(), json!(t.author.name));
    if let Some(url) = &t.author.url {
        author.insert("url".into(), json!(url));
    }
    theme.insert("author".into(), Value::Object(author));
    theme.insert("iconAssets".into(), json!(t.icon_assets));
    if let Some(logo) = &t.logo {
        theme.insert("logo".into(), json!(logo));
    }
    if let Some(repo) = &t.repo {
        theme.insert("repo".into(), json!(repo));
    }
    theme.insert("docsDir".into(), json!(t.docs_dir));
    theme.insert("pageInfo".into(), json!(t.page_info));
    theme.insert(
        "blog".into(),
        json!({
            "roundAvatar": t.blog.round_avatar,
            "medias": t.blog.medias,
        }),
    );
    theme.insert("locales".into(), theme_locales(config));
    theme.insert("plugins".into(), plugins(config));

    Value::Object(theme)
}

/// `theme.locales`: per-prefix fragment with navbar/sidebar joined in by key.
fn theme_locales(config: &BlogConfig) -> Value {
    let mut locales = Map::new();

    for (prefix, locale) in &config.theme.locales {
        let mut fragment = Map::new();

        if let Some(entries) = config.navbar.get(prefix) {
            fragment.insert("navbar".into(), json!(entries));
        }
        if let Some(sidebar) = config.sidebar.get(prefix) {
            fragment.insert("sidebar".into(), sidebar_value(sidebar));
        }
        fragment.insert("footer".into(), json!(locale.footer));
        fragment.insert("displayFooter".into(), json!(locale.display_footer));
        fragment.insert(
            "blog".into(),
            json!({
                "description": locale.blog.description,
                "intro": locale.blog.intro,
            }),
        );

        locales.insert(prefix.clone(), Value::Object(fragment));
    }

    Value::Object(locales)
}

fn sidebar_value(sidebar: &SidebarConfig) -> Value {
    match sidebar {
        SidebarConfig::Keyword(keyword) => json!(keyword),
        SidebarConfig::Entries(entries) => json!(entries),
    }
}

/// `theme.plugins`: blog excerpt toggle and mdEnhance presentation plugins.
fn plugins(config: &BlogConfig) -> Value {
    let p = &config.theme.plugins;
    json!({
        "blog": {
            "excerpt": p.blog.excerpt,
        },
        "mdEnhance": {
            "presentation": {
                "plugins": p.md_enhance.presentation.plugins,
            },
        },
    })
}

// ============================================================================
// Tests
// ============================================================================
