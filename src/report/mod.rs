//! 报告模块：版本结果表与输出格式化
pub mod table;
pub mod formatter;

pub use self::table::ResultTable;
pub use self::formatter::{ReportFormatter, ReportHeader};
