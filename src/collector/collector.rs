//! 版本采集器核心：按声明顺序读取版本文件、匹配正则、填充结果表
use tracing::{debug, info};

use crate::compiler::{CompiledToolLibrary, CompiledToolSpec, SpecCompiler};
use crate::config::GlobalConfig;
use crate::error::RsvResult;
use crate::report::{ReportFormatter, ResultTable};
use crate::rule::{ToolTable, ToolTableLoader};
use crate::utils::{InputReader, VersionExtractor};

/// 版本采集器
#[derive(Debug, Clone)]
pub struct VersionCollector {
    compiled_lib: CompiledToolLibrary,
    config: GlobalConfig,
}

impl VersionCollector {
    /// 创建采集器（按配置加载并编译工具表）
    pub fn new(config: GlobalConfig) -> RsvResult<Self> {
        let table = ToolTableLoader::load(&config)?;
        Self::with_table(config, &table)
    }

    /// 使用指定工具表创建采集器
    pub fn with_table(config: GlobalConfig, table: &ToolTable) -> RsvResult<Self> {
        table.validate()?;
        let compiled_lib = SpecCompiler::compile(table)?;

        Ok(Self { compiled_lib, config })
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn tools(&self) -> &CompiledToolLibrary {
        &self.compiled_lib
    }

    /// 执行一次采集，返回按声明顺序排列的结果表
    pub fn collect(&self) -> RsvResult<ResultTable> {
        // 1. 预填充所有工具的占位值
        let mut results = ResultTable::seeded(
            self.compiled_lib.iter().map(|tool| tool.name.as_str()),
            &self.config.placeholder,
        );

        // 2. 逐个读取、匹配，成功则覆盖占位值
        let mut found = 0usize;
        for tool in self.compiled_lib.iter() {
            if let Some(version) = self.collect_one(tool)? {
                results.set(&tool.name, version);
                found += 1;
            }
        }

        info!("📊 版本采集完成：{}/{} 个工具识别到版本", found, self.compiled_lib.len());
        Ok(results)
    }

    /// 采集单个工具，文件缺失或未匹配时返回 None
    pub fn collect_one(&self, tool: &CompiledToolSpec) -> RsvResult<Option<String>> {
        let path = self.config.input_dir.join(&tool.source_file);
        let Some(content) = InputReader::read(&path)? else {
            return Ok(None);
        };

        // 先搜索原文，未匹配时去掉结尾换行再搜索一次（$ 可匹配最后一行行尾）
        let captures = tool
            .captures(&content)
            .or_else(|| tool.captures(InputReader::strip_final_newline(&content)));
        let Some(captures) = captures else {
            debug!("版本未匹配：工具={}，规则={}", tool.name, tool.describe());
            return Ok(None);
        };

        let version = VersionExtractor::extract(&tool.version_template, &captures);
        debug!(
            "版本匹配成功：工具={}，版本={:?}，规则={}",
            tool.name,
            version,
            tool.describe()
        );
        Ok(version)
    }

    /// 采集并按配置格式渲染报告
    pub fn report(&self) -> RsvResult<String> {
        let results = self.collect()?;
        ReportFormatter::render(&self.config, &results)
    }
}
