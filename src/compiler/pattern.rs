//! 编译后模式模型
//! 正则编译后的结构

use regex::{Captures, Regex};

/// 编译后的单个工具规则
#[derive(Debug, Clone)]
pub struct CompiledToolSpec {
    pub name: String,
    pub source_file: String,
    pub regex: Regex,
    pub version_template: String,
}

impl CompiledToolSpec {
    /// 在内容中搜索首个匹配（非整体匹配）
    pub fn captures<'a>(&self, content: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(content)
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}

/// 编译后的工具库（保持声明顺序）
#[derive(Debug, Clone, Default)]
pub struct CompiledToolLibrary {
    pub tools: Vec<CompiledToolSpec>,
}

impl CompiledToolLibrary {
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledToolSpec> {
        self.tools.iter()
    }
}
