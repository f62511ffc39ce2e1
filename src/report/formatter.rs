//! 报告格式化
//! 将版本结果表渲染为 MultiQC 自定义内容（YAML 头 + HTML 定义列表）或 JSON

use serde::Serialize;

use super::table::ResultTable;
use crate::config::{GlobalConfig, OutputFormat};
use crate::error::RsvResult;

/// 报告段落描述（固定文案）
pub const SECTION_DESCRIPTION: &str = "are collected at run time from the software output.";

/// 报告绘图类型
pub const PLOT_TYPE: &str = "html";

/// 报告头
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub id: String,
    pub section_name: String,
    pub section_href: String,
    pub plot_type: String,
    pub description: String,
}

impl ReportHeader {
    /// 由流程名称推导报告头
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            id: format!("{}-software-versions", config.pipeline_name),
            section_name: format!("{} Software Versions", config.pipeline_name),
            section_href: config.section_href(),
            plot_type: PLOT_TYPE.to_string(),
            description: SECTION_DESCRIPTION.to_string(),
        }
    }
}

/// JSON 报告
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    header: &'a ReportHeader,
    data: &'a ResultTable,
}

/// 报告格式化器
pub struct ReportFormatter;

impl ReportFormatter {
    /// 按配置的输出格式渲染
    pub fn render(config: &GlobalConfig, table: &ResultTable) -> RsvResult<String> {
        let header = ReportHeader::from_config(config);
        match config.output_format {
            OutputFormat::Yaml => Ok(Self::render_yaml(&header, table)),
            OutputFormat::Json => Self::render_json(&header, table),
        }
    }

    /// MultiQC 自定义内容：YAML 头 + 定义列表
    pub fn render_yaml(header: &ReportHeader, table: &ResultTable) -> String {
        let mut out = String::new();

        out.push('\n');
        out.push_str(&format!("id: '{}'\n", header.id));
        out.push_str(&format!("section_name: '{}'\n", header.section_name));
        out.push_str(&format!("section_href: '{}'\n", header.section_href));
        out.push_str(&format!("plot_type: '{}'\n", header.plot_type));
        out.push_str(&format!("description: '{}'\n", header.description));
        out.push_str("data: |\n");
        out.push_str("    <dl class=\"dl-horizontal\">\n");
        out.push('\n');

        for (name, value) in table.iter() {
            out.push_str(&format!("        <dt>{}</dt><dd>{}</dd>\n", name, value));
        }

        out.push_str("    </dl>\n");
        out
    }

    /// JSON：报告头字段 + 有序 data 对象
    pub fn render_json(header: &ReportHeader, table: &ResultTable) -> RsvResult<String> {
        let report = JsonReport { header, data: table };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
