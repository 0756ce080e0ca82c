//! `check` command: load and validate the configuration tree.

use crate::config::BlogConfig;
use crate::{debug, log};
use anyhow::Result;
use std::path::Path;

/// Load the config, run all validation, and print a summary.
///
/// Validation errors surface through `BlogConfig::load` as collected
/// diagnostics; reaching the summary means the tree is clean.
pub fn run_check(config_name: &Path) -> Result<()> {
    let config = BlogConfig::load(config_name)?;

    debug!("check"; "config file: {}", config.config_path.display());

    let navbar_entries: usize = config.navbar.values().map(Vec::len).sum();
    log!(
        "check";
        "ok: {} locale{}, {} navbar entr{}, {} media link{}",
        config.site.locales.len(),
        if config.site.locales.len() == 1 { "" } else { "s" },
        navbar_entries,
        if navbar_entries == 1 { "y" } else { "ies" },
        config.theme.blog.medias.len(),
        if config.theme.blog.medias.len() == 1 { "" } else { "s" },
    );

    Ok(())
}
