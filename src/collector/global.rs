//! 全局采集器单例管理
use once_cell::sync::OnceCell;

use super::collector::VersionCollector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::RsvResult;
use crate::report::ResultTable;

/// 全局采集器实例
static GLOBAL_COLLECTOR: OnceCell<VersionCollector> = OnceCell::new();

/// 初始化全局采集器（默认配置）
pub fn init_collector() -> RsvResult<&'static VersionCollector> {
    init_collector_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局采集器，已初始化时直接返回现有实例
pub fn init_collector_with_config(config: GlobalConfig) -> RsvResult<&'static VersionCollector> {
    GLOBAL_COLLECTOR.get_or_try_init(|| VersionCollector::new(config))
}

/// 采集软件版本（首次调用时以默认配置初始化）
pub fn scrape_software_versions() -> RsvResult<ResultTable> {
    init_collector()?.collect()
}

/// 采集并渲染软件版本报告（首次调用时以默认配置初始化）
pub fn scrape_software_versions_report() -> RsvResult<String> {
    init_collector()?.report()
}
