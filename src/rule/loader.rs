//! 工具表加载管理器
//! 负责在内置工具表与自定义 JSON 工具表之间选择

use std::fs;
use std::path::Path;

use tracing::debug;

use super::builtin::builtin_tool_table;
use super::model::ToolTable;
use crate::config::GlobalConfig;
use crate::error::{RsVersionsError, RsvResult};

/// 工具表加载管理器
pub struct ToolTableLoader;

impl ToolTableLoader {
    /// 加载工具表（配置了自定义路径则读取 JSON，否则使用内置表）
    pub fn load(config: &GlobalConfig) -> RsvResult<ToolTable> {
        let table = match &config.tool_table_path {
            Some(path) => Self::load_from_file(path)?,
            None => {
                debug!("使用内置工具表，流程名称：{}", config.pipeline_name);
                builtin_tool_table(&config.pipeline_name)
            }
        };

        table.validate()?;
        Ok(table)
    }

    /// 从 JSON 文件读取自定义工具表
    pub fn load_from_file(path: &Path) -> RsvResult<ToolTable> {
        let content = fs::read_to_string(path).map_err(|e| {
            RsVersionsError::ToolTableLoadError(format!("读取 {} 失败：{}", path.display(), e))
        })?;

        let table: ToolTable = serde_json::from_str(&content)?;
        debug!("📄 从 {} 加载自定义工具表，工具数：{}", path.display(), table.len());
        Ok(table)
    }
}
