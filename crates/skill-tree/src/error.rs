//! 技能树错误类型
//!
//! 区分两类错误：运行期引用了不存在的技能（集成缺陷），
//! 以及加载期配置不合法（缺少根节点、悬空边等，必须中止初始化）。
//! 对 Locked/Completed 技能的激活不是错误，而是空操作。

use thiserror::Error;

use crate::models::SkillId;

/// 技能树错误类型
#[derive(Debug, Error)]
pub enum SkillTreeError {
    // === 运行期错误 ===
    #[error("技能不存在: {0}")]
    NotFound(SkillId),

    #[error("未知的技能状态: {0}")]
    InvalidStatus(String),

    // === 配置错误 ===
    #[error("技能树配置错误: {0}")]
    Configuration(String),

    // === 加载错误 ===
    #[error("读取技能配置失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML 解析错误: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("不支持的配置格式: {0}")]
    UnsupportedFormat(String),
}

/// 技能树 Result 类型别名
pub type Result<T> = std::result::Result<T, SkillTreeError>;

impl SkillTreeError {
    /// 缺少根节点
    pub fn missing_root(root_id: SkillId) -> Self {
        Self::Configuration(format!("缺少根技能: id={}", root_id))
    }

    /// 悬空边：target 不存在
    pub fn dangling_edge(source: SkillId, target: SkillId) -> Self {
        Self::Configuration(format!(
            "悬空的前置关系: source={}, target={}",
            source, target
        ))
    }

    /// 是否为加载期错误（配置本身或其来源有问题）
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::NotFound(_) | Self::InvalidStatus(_))
    }

    /// 获取错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "SKILL_NOT_FOUND",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
        }
    }
}
