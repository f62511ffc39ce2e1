//! 工具规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RsVersionsError, RsvResult};

/// 默认版本模板：捕获组1前加 "v"
pub const DEFAULT_VERSION_TEMPLATE: &str = "v\\1";

/// 单个工具的版本提取规则
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolSpec {
    /// 工具名称（报告中 <dt> 的内容，表内唯一）
    pub name: String,
    /// 版本输出文件名（相对输入目录）
    #[serde(rename = "file", alias = "source_file")]
    pub source_file: String,
    /// 版本正则，捕获组1为版本号
    pub pattern: String,
    /// 版本模板，支持 \1 或 $1，缺省为 "v\1"
    #[serde(rename = "version", default, skip_serializing_if = "Option::is_none")]
    pub version_template: Option<String>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, source_file: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_file: source_file.into(),
            pattern: pattern.into(),
            version_template: None,
        }
    }

    /// 实际生效的版本模板
    pub fn effective_template(&self) -> &str {
        self.version_template
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_VERSION_TEMPLATE)
    }
}

impl fmt::Display for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {} /{}/", self.name, self.source_file, self.pattern)
    }
}

/// 有序工具表（声明顺序即报告输出顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ToolTable {
    pub specs: Vec<ToolSpec>,
}

impl ToolTable {
    pub fn new(specs: Vec<ToolSpec>) -> Self {
        Self { specs }
    }

    /// 校验工具表：非空、名称非空且唯一、文件名与正则非空
    pub fn validate(&self) -> RsvResult<()> {
        if self.specs.is_empty() {
            return Err(RsVersionsError::InvalidInput("工具表为空".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.specs.len());
        for spec in &self.specs {
            if spec.name.trim().is_empty() {
                return Err(RsVersionsError::InvalidInput("工具名称不能为空".to_string()));
            }
            if spec.source_file.trim().is_empty() {
                return Err(RsVersionsError::InvalidInput(format!("工具 {} 缺少版本文件名", spec.name)));
            }
            if spec.pattern.is_empty() {
                return Err(RsVersionsError::InvalidInput(format!("工具 {} 缺少版本正则", spec.name)));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(RsVersionsError::InvalidInput(format!("工具名称重复：{}", spec.name)));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }
}
