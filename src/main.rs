//! scrape_software_versions 命令行入口
//! 不带参数运行时读取当前目录下的 v_*.txt，向标准输出打印 MultiQC 软件版本报告

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rsversions::{ConfigManager, GlobalConfig, OutputFormat, DEFAULT_PIPELINE_NAME, init_collector_with_config};

#[derive(Parser, Debug)]
#[command(name = "scrape_software_versions")]
#[command(version, about = "采集流程各工具的版本号并生成 MultiQC 软件版本报告", long_about = None)]
struct Cli {
    /// 版本文件所在目录
    #[arg(short = 'd', long, default_value = ".")]
    dir: PathBuf,

    /// 自定义工具表（JSON），替换内置工具表
    #[arg(short = 't', long)]
    tools: Option<PathBuf>,

    /// 流程名称
    #[arg(short = 'p', long, default_value = DEFAULT_PIPELINE_NAME)]
    pipeline: String,

    /// 报告段落链接，默认 https://github.com/<流程名称>
    #[arg(long)]
    href: Option<String>,

    /// 输出格式：yaml | json
    #[arg(short = 'f', long, default_value = "yaml", value_parser = parse_output_format)]
    format: OutputFormat,

    /// 同时写入报告文件
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// 写入文件时不再打印到标准输出
    #[arg(short = 'q', long, requires = "output")]
    quiet: bool,

    /// 输出调试日志
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(feature = "logging")]
fn init_logging(config: &GlobalConfig) {
    use tracing_subscriber::EnvFilter;

    // 日志写到 stderr，stdout 只留报告
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_config: &GlobalConfig) {}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ConfigManager::custom()
        .input_dir(cli.dir)
        .pipeline_name(cli.pipeline)
        .output_format(cli.format)
        .verbose(cli.verbose);
    if let Some(href) = cli.href {
        builder = builder.pipeline_href(href);
    }
    if let Some(tools) = cli.tools {
        builder = builder.tool_table_path(tools);
    }
    let config = builder.build();
    init_logging(&config);

    let collector = init_collector_with_config(config).context("初始化版本采集器失败")?;
    let report = collector.report().context("生成软件版本报告失败")?;

    if let Some(path) = &cli.output {
        fs::write(path, &report).with_context(|| format!("写入报告失败：{}", path.display()))?;
    }
    if !cli.quiet {
        print!("{}", report);
    }

    Ok(())
}
