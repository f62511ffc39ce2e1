//! 内置工具表
//! 流程默认采集的七个工具，声明顺序即报告顺序

use once_cell::sync::Lazy;

use super::model::{ToolSpec, ToolTable};
use crate::config::DEFAULT_PIPELINE_NAME;

/// 默认流程名下的内置工具表（进程级只读常量）
pub static DEFAULT_TOOL_TABLE: Lazy<ToolTable> = Lazy::new(|| builtin_tool_table(DEFAULT_PIPELINE_NAME));

/// 构建内置工具表，第一项以流程名称命名
pub fn builtin_tool_table(pipeline_name: &str) -> ToolTable {
    ToolTable::new(vec![
        ToolSpec::new(pipeline_name, "v_pipeline.txt", r"(\S+)"),
        ToolSpec::new("Nextflow", "v_nextflow.txt", r"(\S+)"),
        ToolSpec::new("FastQC", "v_fastqc.txt", r"FastQC v(\S+)"),
        ToolSpec::new("MultiQC", "v_multiqc.txt", r"multiqc, version (\S+)"),
        ToolSpec::new("Bowtie2", "v_bowtie2.txt", r"version (\S+)$"),
        ToolSpec::new("Macs2", "v_macs2.txt", r"macs2 (\S+)"),
        ToolSpec::new("Samtools", "v_samtools.txt", r"samtools (\S+)$"),
    ])
}
