//! rsversions - 流程软件版本采集工具
//! 读取各工具的版本输出文件，正则提取版本号，生成 MultiQC 软件版本报告片段

// 导出全局错误类型
pub use self::error::{RsVersionsError, RsvResult};

// 导出配置模块
pub use self::config::{
    GlobalConfig, ConfigManager, CustomConfigBuilder, OutputFormat,
    DEFAULT_PIPELINE_NAME, DEFAULT_PLACEHOLDER,
};

// 导出规则模块核心接口
pub use self::rule::{
    ToolSpec, ToolTable, ToolTableLoader, builtin_tool_table, DEFAULT_TOOL_TABLE,
};

// 导出工具模块核心接口
pub use self::utils::{VersionExtractor, InputReader};

// 导出编译模块核心接口
pub use self::compiler::{CompiledToolSpec, CompiledToolLibrary, SpecCompiler};

// 导出报告模块核心接口
pub use self::report::{ResultTable, ReportFormatter, ReportHeader};

// 导出采集模块核心接口
pub use self::collector::{
    VersionCollector,
    init_collector,
    init_collector_with_config,
    scrape_software_versions,
    scrape_software_versions_report,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod report;
pub mod collector;
