//! 全局错误类型定义

use std::io::Error as IoError;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsVersionsError {
    // 工具表相关错误
    #[error("工具表加载失败：{0}")]
    ToolTableLoadError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),
    #[error("无效的版本正则：{0}")]
    InvalidPattern(String),

    // 读取相关错误（文件缺失/不可读不会走到这里，由采集器吸收）
    #[error("版本文件解码失败：{}，错误：{source}", .path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    // 序列化/反序列化错误
    #[error("JSON处理失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RsvResult<T> = Result<T, RsVersionsError>;
