//! Blog configuration scaffolding.
//!
//! Creates a commented `hope.toml` with a two-locale layout ready to edit.

use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Generate hope.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        "# hopeconf configuration file (v{})\n{}",
        env!("CARGO_PKG_VERSION"),
        TEMPLATE
    )
}

const TEMPLATE: &str = r#"
[site]
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
# icon namespace used by navbar/sidebar icons
icon_assets = "iconfont"
logo = "/avatar.jpeg"
# repository shorthand ("owner/repo") or full URL
repo = "owner/blog"
docs_dir = "docs"
page_info = ["Author", "Original", "Date", "Category", "Tag", "ReadingTime"]

[theme.author]
name = "author"
url = "https://example.com"

[theme.blog]
round_avatar = true

[theme.blog.medias]
GitHub = "https://github.com/owner"
Email = "mailto:author@example.com"

[theme.locales."/"]
footer = "<a href='https://example.com/'>about</a>"
display_footer = true

[theme.locales."/".blog]
description = "What this blog is about"
intro = "/intro.html"

[theme.locales."/en/"]
footer = "<a href='https://example.com/'>about</a>"
display_footer = true

[theme.locales."/en/".blog]
description = "What this blog is about"
intro = "/en/intro.html"

[theme.plugins.blog]
excerpt = false

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

[[navbar."/en/"]]
text = "Projects"
icon = "home"
link = "/en/home"

# sidebar per locale: "structure", "heading", or explicit entry lists
[sidebar]
"/" = "structure"
"/en/" = "structure"
"#;

/// Create a new blog configuration
///
/// Writes the template to `<target>/<config_name>`. Refuses to overwrite
/// an existing config file. If `dry_run` is true, only prints the template
/// to stdout.
pub fn new_config(config_name: &Path, name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    write_config(&root, config_name)?;

    log!("init"; "Blog configuration initialized at {}", root.join(config_name).display());
    Ok(())
}

/// Write the default configuration file, creating the target directory.
fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    let path: PathBuf = root.join(config_name);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
