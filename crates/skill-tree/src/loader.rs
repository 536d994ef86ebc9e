//! 技能配置加载器
//!
//! 从 JSON/YAML 文本或文件加载有序的技能记录列表。
//! 加载器只负责解析，图完整性校验由 `SkillGraphStore` 完成。

use std::path::Path;

use tracing::info;

use crate::error::{Result, SkillTreeError};
use crate::models::SkillDefinition;

/// 支持的配置格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// 根据文件扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(extension) => extension.parse(),
            None => Err(SkillTreeError::UnsupportedFormat(format!(
                "{} (无扩展名)",
                path.display()
            ))),
        }
    }
}

impl std::str::FromStr for CatalogFormat {
    type Err = SkillTreeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SkillTreeError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// 技能配置加载器
pub struct SkillTreeLoader;

impl SkillTreeLoader {
    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Vec<SkillDefinition>> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 YAML 字符串解析
    ///
    /// YAML 更适合人工编写技能树。
    pub fn from_yaml(yaml: &str) -> Result<Vec<SkillDefinition>> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn parse(content: &str, format: CatalogFormat) -> Result<Vec<SkillDefinition>> {
        match format {
            CatalogFormat::Json => Self::from_json(content),
            CatalogFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// 从文件加载，格式由扩展名决定
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<SkillDefinition>> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let definitions = Self::parse(&content, format)?;

        info!(
            path = %path.display(),
            skill_count = definitions.len(),
            ?format,
            "技能配置已读取"
        );
        Ok(definitions)
    }

    pub fn to_json(definitions: &[SkillDefinition]) -> Result<String> {
        Ok(serde_json::to_string_pretty(definitions)?)
    }

    pub fn to_yaml(definitions: &[SkillDefinition]) -> Result<String> {
        Ok(serde_yaml::to_string(definitions)?)
    }

    pub fn serialize(definitions: &[SkillDefinition], format: CatalogFormat) -> Result<String> {
        match format {
            CatalogFormat::Json => Self::to_json(definitions),
            CatalogFormat::Yaml => Self::to_yaml(definitions),
        }
    }
}
