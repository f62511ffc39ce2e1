//! 规则模块：负责工具表的数据模型、内置表与加载
pub mod model;
pub mod builtin;
pub mod loader;

// 导出核心接口
pub use self::model::{ToolSpec, ToolTable, DEFAULT_VERSION_TEMPLATE};
pub use self::builtin::{builtin_tool_table, DEFAULT_TOOL_TABLE};
pub use self::loader::ToolTableLoader;
