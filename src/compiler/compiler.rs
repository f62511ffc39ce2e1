//! 规则编译器核心
//! 仅负责将工具表编译为可执行的正则模式

use std::time::Instant;

use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledToolLibrary, CompiledToolSpec};
use crate::error::{RsVersionsError, RsvResult};
use crate::rule::{ToolSpec, ToolTable};

/// 规则编译器
pub struct SpecCompiler;

impl SpecCompiler {
    /// 编译工具表
    pub fn compile(table: &ToolTable) -> RsvResult<CompiledToolLibrary> {
        let start = Instant::now();
        let mut tools = Vec::with_capacity(table.len());

        for spec in &table.specs {
            tools.push(Self::compile_spec(spec)?);
        }

        debug!("✅ 工具规则编译完成，共{}条，总耗时{:?}", tools.len(), start.elapsed());

        Ok(CompiledToolLibrary { tools })
    }

    /// 编译单个工具规则
    pub fn compile_spec(spec: &ToolSpec) -> RsvResult<CompiledToolSpec> {
        let regex = Regex::new(&spec.pattern)?;

        // captures_len 包含整体匹配（第0组）
        if regex.captures_len() < 2 {
            return Err(RsVersionsError::InvalidPattern(format!(
                "工具 {} 的正则 {} 缺少版本捕获组",
                spec.name, spec.pattern
            )));
        }

        Ok(CompiledToolSpec {
            name: spec.name.clone(),
            source_file: spec.source_file.clone(),
            regex,
            version_template: spec.effective_template().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::DEFAULT_TOOL_TABLE;

    #[test]
    fn test_compile_builtin_table() {
        let lib = SpecCompiler::compile(&DEFAULT_TOOL_TABLE).unwrap();
        assert_eq!(lib.len(), 7);
        assert_eq!(lib.tools[6].name, "Samtools");
        assert_eq!(lib.tools[6].describe(), r"samtools (\S+)$");
        assert_eq!(lib.tools[2].version_template, "v\\1");
    }

    #[test]
    fn test_compile_rejects_pattern_without_group() {
        let spec = ToolSpec::new("FastQC", "v_fastqc.txt", r"FastQC v\S+");
        assert!(matches!(
            SpecCompiler::compile_spec(&spec),
            Err(RsVersionsError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_compile_rejects_malformed_regex() {
        let spec = ToolSpec::new("FastQC", "v_fastqc.txt", r"FastQC v(\S+");
        assert!(matches!(
            SpecCompiler::compile_spec(&spec),
            Err(RsVersionsError::RegexCompileError(_))
        ));
    }

    #[test]
    fn test_search_is_not_anchored() {
        // 测试场景：search 语义，匹配可出现在内容任意位置
        let spec = ToolSpec::new("MultiQC", "v_multiqc.txt", r"multiqc, version (\S+)");
        let compiled = SpecCompiler::compile_spec(&spec).unwrap();
        let captures = compiled.captures("some banner\nmultiqc, version 1.9\n").unwrap();
        assert_eq!(&captures[1], "1.9");
    }
}
