//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that a string is a well-formed locale URL prefix.
///
/// The external framework keys locales by URL prefix, and every prefix
/// must start and end with a slash (`"/"`, `"/en/"`).
///
/// # Examples
/// ```ignore
/// is_locale_prefix("/")      -> true
/// is_locale_prefix("/en/")   -> true
/// is_locale_prefix("/en")    -> false
/// is_locale_prefix("en/")    -> false
/// is_locale_prefix("")       -> false
/// ```
pub fn is_locale_prefix(prefix: &str) -> bool {
    prefix.starts_with('/') && prefix.ends_with('/')
}

/// Check that a string is a site-absolute link (non-empty, starts with `/`).
pub fn is_site_absolute(link: &str) -> bool {
    link.starts_with('/')
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/docs/posts/  ← cwd
/// /home/user/blog/hope.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
