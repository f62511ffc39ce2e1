//! 编译模块：将工具表编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledToolLibrary, CompiledToolSpec};
pub use self::compiler::SpecCompiler;
