//! Configuration file generation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `config` as TOML to `output`
pub fn write_config(config: &CliConfig, output: &Path) -> Result<()> {
    let rendered = config.to_toml()?;
    let template = format!("# onsei configuration\n\n{rendered}");

    fs::write(output, template)
        .with_context(|| format!("Failed to write to {}", output.display()))?;

    log::info!("Configuration written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_written_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("onsei.toml");

        let mut config = CliConfig::default();
        config.analysis.include_katakana_nouns = true;
        config.performance.worker_threads = 4;
        write_config(&config, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# onsei configuration"));
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_unwritable_destination() {
        let err = write_config(
            &CliConfig::default(),
            Path::new("/nonexistent/dir/onsei.toml"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
