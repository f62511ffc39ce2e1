//! 采集模块：版本采集核心逻辑
pub mod global;
pub mod collector;

// 导出核心接口
pub use self::global::{
    init_collector,
    init_collector_with_config,
    scrape_software_versions,
    scrape_software_versions_report,
};
pub use self::collector::VersionCollector;
