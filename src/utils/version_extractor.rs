//! 版本提取工具模块
//! 负责从正则捕获结果中，根据版本模板生成显示用的版本字符串
//! 支持 \1/\2 或 $1/$2 两种分组引用格式，捕获组1缺失时视为未匹配

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 模板占位符：\N 或 $N
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\\$](\d+)").unwrap_or_else(|e| panic!("模板占位符正则非法：{}", e))
});

/// 版本提取工具类
/// 提供静态方法 `extract` 用于版本号提取
pub struct VersionExtractor;

impl VersionExtractor {
    /// 从正则捕获结果中提取版本显示值
    ///
    /// # 参数
    /// - `version_template`: 版本模板，如 "v\1"、"$1"
    /// - `captures`: 正则捕获结果
    ///
    /// # 返回值
    /// - `Some(String)`: 替换后的版本字符串，捕获内容原样保留
    /// - `None`: 捕获组1未参与匹配，或模板引用了不存在/未参与匹配的分组
    pub fn extract(version_template: &str, captures: &Captures) -> Option<String> {
        // 捕获组1是版本号的唯一来源
        captures.get(1)?;

        let mut valid = true;
        let version = PLACEHOLDER_RE.replace_all(version_template, |caps: &Captures| {
            match caps[1].parse::<usize>().ok().and_then(|index| captures.get(index)) {
                Some(matched) => matched.as_str().to_string(),
                None => {
                    valid = false;
                    String::new()
                }
            }
        });

        if valid { Some(version.into_owned()) } else { None }
    }
}
