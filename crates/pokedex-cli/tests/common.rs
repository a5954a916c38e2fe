//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config directory plus a `pokedex` command pointed at it.
pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Run pokedex with this fixture's config and a clean environment
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pokedex").expect("Failed to find pokedex binary");
        cmd.env("POKEDEX_CONFIG", &self.config_path)
            .env_remove("POKEDEX_API_BASE")
            .env_remove("POKEDEX_CATALOG_SIZE")
            .env_remove("NO_COLOR");
        cmd
    }

    /// Same as [`command`](Self::command), aimed at `api_base`
    pub fn command_against(&self, api_base: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--api-base").arg(api_base);
        cmd
    }
}
