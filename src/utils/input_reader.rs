//! 版本文件读取
//! 文件缺失/不可读属于可恢复情况，返回 None；内容不是合法 UTF-8 时返回错误

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{RsVersionsError, RsvResult};

/// 版本文件读取器
pub struct InputReader;

impl InputReader {
    /// 读取整个版本文件
    ///
    /// # 返回值
    /// - `Ok(Some(String))`: 文件内容
    /// - `Ok(None)`: 文件缺失、无权限或读取失败
    /// - `Err(DecodeError)`: 文件内容无法按 UTF-8 解码
    pub fn read(path: &Path) -> RsvResult<Option<String>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("版本文件不存在：{}", path.display());
                return Ok(None);
            }
            Err(e) => {
                warn!("版本文件无法读取：{}，错误：{}", path.display(), e);
                return Ok(None);
            }
        };

        let content = String::from_utf8(bytes).map_err(|source| RsVersionsError::DecodeError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(Self::normalize_newlines(content)))
    }

    /// 统一换行符：\r\n 与单独的 \r 均转为 \n
    pub fn normalize_newlines(content: String) -> String {
        if !content.contains('\r') {
            return content;
        }
        content.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// 去掉结尾的单个换行，使 `$` 可以匹配到最后一行行尾（整段内容未匹配时的回退）
    pub fn strip_final_newline(content: &str) -> &str {
        content.strip_suffix('\n').unwrap_or(content)
    }
}
