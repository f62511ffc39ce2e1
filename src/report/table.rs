//! 版本结果表
//! 有序映射：工具名 -> 显示值，插入顺序即输出顺序

use indexmap::IndexMap;
use serde::Serialize;

/// 版本结果表（预先为每个工具填充占位值）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    entries: IndexMap<String, String>,
}

impl ResultTable {
    /// 按工具声明顺序预填充占位值
    pub fn seeded<'a, I>(names: I, placeholder: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = names
            .into_iter()
            .map(|name| (name.to_string(), placeholder.to_string()))
            .collect();
        Self { entries }
    }

    /// 覆盖已有工具的显示值，未知工具不插入，返回是否更新
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.entries.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
