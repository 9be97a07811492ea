//! zhnum 配置模块
//!
//! 统一的配置管理，从 ~/.config/zhnum/config.toml 加载
//! （可用 ZHNUM_CONFIG 环境变量指定其他路径）

use crate::error::{NumeralError, NumeralResult};
use crate::numeral::ScannerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// zhnum 完整配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZhnumConfig {
    /// 扫描器配置
    pub scanner: ScannerConfig,
}

impl ZhnumConfig {
    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load() -> NumeralResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> NumeralResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, &path.display().to_string())?;

        tracing::info!(
            "加载配置成功: {:?} (mode={:?}, boundary_space={})",
            path,
            config.scanner.mode,
            config.scanner.boundary_space
        );
        Ok(config)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> NumeralResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> NumeralResult<Self> {
        toml::from_str(content).map_err(|e| {
            tracing::warn!("配置解析失败: {} - {}", origin, e);
            NumeralError::ConfigParse {
                path: origin.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// 保存配置文件
    pub fn save_to(&self, path: &Path) -> NumeralResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| NumeralError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 保存到默认路径
    pub fn save(&self) -> NumeralResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 获取配置文件路径
    pub fn config_path() -> NumeralResult<PathBuf> {
        if let Ok(path) = std::env::var("ZHNUM_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir().ok_or(NumeralError::ConfigDirUnavailable)?;
        Ok(config_dir.join("zhnum").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::ScanMode;

    #[test]
    fn test_from_toml_str() {
        let config = ZhnumConfig::from_toml_str(
            r#"
            [scanner]
            mode = "raw"
            boundary_space = false
            "#,
        )
        .unwrap();

        assert_eq!(config.scanner.mode, ScanMode::Raw);
        assert!(!config.scanner.boundary_space);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ZhnumConfig::from_toml_str("").unwrap(), ZhnumConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ZhnumConfig::from_toml_str("[scanner]\nmode = \"fast\"").unwrap_err();
        assert!(matches!(err, NumeralError::ConfigParse { .. }));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ZhnumConfig::default();
        config.scanner.boundary_space = false;
        config.save_to(&path).unwrap();

        assert_eq!(ZhnumConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ZhnumConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, NumeralError::Io(_)));
    }
}
