//! 扫描器配置

use serde::{Deserialize, Serialize};

/// 扫描模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// 转换所有数字串
    #[default]
    Convert,
    /// 原样返回，不做转换
    Raw,
}

/// 扫描器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// 扫描模式
    pub mode: ScanMode,

    /// 中文数字与阿拉伯数字相接处是否插入空格（"1000萬800" → "10000000 800"）
    pub boundary_space: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::Convert,
            boundary_space: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert_eq!(config.mode, ScanMode::Convert);
        assert!(config.boundary_space);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ScannerConfig = toml::from_str("mode = \"raw\"").unwrap();
        assert_eq!(config.mode, ScanMode::Raw);
        assert!(config.boundary_space);
    }
}
