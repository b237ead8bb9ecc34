//! Init-config command implementation.
//!
//! Writes a default `postt.toml`, listing every themable class with its
//! default SGR code so it can be edited in place.

use std::path::PathBuf;

use posti_lex::TokenKind;
use posti_render::Theme;

use crate::commands::common::error_messages;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{PosttError, Result};

/// Arguments for the init-config command.
#[derive(Debug, Clone, Default)]
pub struct InitConfigArgs {
    /// Where to write the file (default: `./postt.toml`).
    pub path: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Default configuration with the full default palette spelled out.
pub fn default_config() -> Config {
    let theme = Theme::default();
    let entries = TokenKind::ALL
        .iter()
        .filter_map(|kind| theme.code(*kind).map(|code| (kind.name().to_string(), code.to_string())))
        .collect();

    Config {
        theme: entries,
        ..Config::default()
    }
}

/// Run the init-config command.
pub fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let path = if path.is_dir() { path.join(CONFIG_FILE_NAME) } else { path };

    if path.exists() && !args.force {
        return Err(PosttError::Validation(format!(
            "{}: {}",
            error_messages::OUTPUT_FILE_EXISTS,
            path.display()
        )));
    }

    default_config().save_to_path(&path)?;
    tracing::info!("Created file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_lists_palette() {
        let config = default_config();
        assert_eq!(config.theme.get("keyword").map(String::as_str), Some("95"));
        assert!(!config.theme.contains_key("plain"));
        assert_eq!(config.theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_init_config_writes_loadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("postt.toml");

        run_init_config(InitConfigArgs {
            path: Some(path.clone()),
            force: false,
        })
        .unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded, default_config());
    }

    #[test]
    fn test_init_config_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        run_init_config(InitConfigArgs {
            path: Some(temp_dir.path().to_path_buf()),
            force: false,
        })
        .unwrap();
        assert!(temp_dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_init_config_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("postt.toml");
        std::fs::write(&path, "format = \"ansi\"\n").unwrap();

        let args = InitConfigArgs {
            path: Some(path.clone()),
            force: false,
        };
        assert!(run_init_config(args.clone()).is_err());
        assert_eq!(Config::load_from_path(&path).unwrap().format, posti_render::OutputFormat::Ansi);

        run_init_config(InitConfigArgs { force: true, ..args }).unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), default_config());
    }
}
