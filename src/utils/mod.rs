//! 通用工具：版本提取、版本文件读取
pub mod version_extractor;
pub mod input_reader;

pub use self::version_extractor::VersionExtractor;
pub use self::input_reader::InputReader;
