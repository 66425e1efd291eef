use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG: &str = "products.json";
pub const DEFAULT_MAPPING: &str = "progress.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub mapping_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            mapping_path: PathBuf::from(DEFAULT_MAPPING),
        }
    }
}

impl Config {
    /// 設定を読み込む（ホームディレクトリ不明・ファイルなしはデフォルト）
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("{}、デフォルト設定を使用します", e);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "設定ファイルを読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("catalog-image").join("config.json"))
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = path;
        self.save()
    }

    pub fn set_mapping_path(&mut self, path: PathBuf) -> Result<()> {
        self.mapping_path = path;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog_path, PathBuf::from("products.json"));
        assert_eq!(config.mapping_path, PathBuf::from("progress.txt"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"catalog_path": "data/catalog.json"}"#).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.mapping_path, PathBuf::from(DEFAULT_MAPPING));
    }

    #[test]
    fn test_indent_key_is_ignored() {
        let config: Config = serde_json::from_str(r#"{"indent": 2, "mapping_path": "rows.json"}"#).unwrap();
        assert_eq!(config.mapping_path, PathBuf::from("rows.json"));

        let saved = serde_json::to_value(&config).unwrap();
        assert!(saved.get("indent").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            catalog_path: PathBuf::from("shop/products.json"),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.catalog_path, PathBuf::from("shop/products.json"));
        assert_eq!(loaded.mapping_path, PathBuf::from(DEFAULT_MAPPING));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(loaded.catalog_path, PathBuf::from(DEFAULT_CATALOG));
    }
}
