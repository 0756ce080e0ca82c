//! `emit` command: compose and write the external configuration record.

use crate::config::BlogConfig;
use crate::emit::{compose, to_json_string};
use crate::log;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Validate the config, compose the consumer record, and write it out.
pub fn run_emit(config_name: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let config = BlogConfig::load(config_name)?;

    let value = compose(&config);
    let mut serialized = to_json_string(&value, pretty);

    match output {
        Some(path) => {
            serialized.push('\n');
            fs::write(path, serialized)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("emit"; "wrote {}", path.display());
        }
        None => {
            println!("{serialized}");
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_writes_parseable_json() {
        let config = crate::config::test_full_config();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let value = compose(&config);
        fs::write(&path, to_json_string(&value, true)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_emit_compact_and_pretty_agree() {
        let config = crate::config::test_full_config();
        let value = compose(&config);

        let compact: serde_json::Value =
            serde_json::from_str(&to_json_string(&value, false)).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&to_json_string(&value, true)).unwrap();
        assert_eq!(compact, pretty);
    }
}
