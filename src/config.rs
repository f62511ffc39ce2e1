//! 全局配置管理,存储所有可配置项

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RsVersionsError;

/// 默认流程名称
pub const DEFAULT_PIPELINE_NAME: &str = "nf-core/epiawesome";

/// 版本缺失时的占位标记（灰色 N/A）
pub const DEFAULT_PLACEHOLDER: &str = r#"<span style="color:#999999;">N/A</span>"#;

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// MultiQC 自定义内容（YAML 头 + HTML 定义列表）
    #[default]
    Yaml,
    /// 结构化 JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = RsVersionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(RsVersionsError::InvalidInput(format!("不支持的输出格式：{}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 版本文件所在目录
    pub input_dir: PathBuf,
    // 流程名称（报告头 + 第一个内置工具名）
    pub pipeline_name: String,
    // 报告段落链接，None 时按流程名称推导
    pub pipeline_href: Option<String>,
    // 版本缺失时显示的占位标记
    pub placeholder: String,
    // 输出格式
    pub output_format: OutputFormat,
    // 自定义工具表（JSON），None 时使用内置工具表
    pub tool_table_path: Option<PathBuf>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pipeline_name: DEFAULT_PIPELINE_NAME.to_string(),
            pipeline_href: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            output_format: OutputFormat::Yaml,
            tool_table_path: None,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 报告段落链接（未显式配置时指向 GitHub 仓库）
    pub fn section_href(&self) -> String {
        match &self.pipeline_href {
            Some(href) => href.clone(),
            None => format!("https://github.com/{}", self.pipeline_name),
        }
    }

    /// 默认日志级别（未设置 RUST_LOG 时生效）
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn input_dir(mut self, dir: PathBuf) -> Self {
        self.config.input_dir = dir;
        self
    }

    pub fn pipeline_name(mut self, name: String) -> Self {
        self.config.pipeline_name = name;
        self
    }

    pub fn pipeline_href(mut self, href: String) -> Self {
        self.config.pipeline_href = Some(href);
        self
    }

    pub fn placeholder(mut self, placeholder: String) -> Self {
        self.config.placeholder = placeholder;
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    pub fn tool_table_path(mut self, path: PathBuf) -> Self {
        self.config.tool_table_path = Some(path);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
