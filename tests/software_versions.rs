//! 软件版本报告端到端测试（通过公开接口驱动）

use std::fs;
use std::path::Path;

use rsversions::{ConfigManager, OutputFormat, VersionCollector, DEFAULT_PLACEHOLDER};
use tempfile::TempDir;

fn report_for(dir: &Path) -> String {
    let config = ConfigManager::custom().input_dir(dir.to_path_buf()).build();
    VersionCollector::new(config).unwrap().report().unwrap()
}

fn entry(name: &str, value: &str) -> String {
    format!("        <dt>{}</dt><dd>{}</dd>\n", name, value)
}

#[test]
fn test_fastqc_version_extracted() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("v_fastqc.txt"), "FastQC v0.11.9").unwrap();

    let report = report_for(temp_dir.path());
    assert!(report.contains("<dt>FastQC</dt><dd>v0.11.9</dd>"));
}

#[test]
fn test_samtools_end_anchored_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("v_samtools.txt"), "samtools 1.9").unwrap();
    assert!(report_for(temp_dir.path()).contains("<dt>Samtools</dt><dd>v1.9</dd>"));

    // 结尾带换行同样可以匹配
    fs::write(temp_dir.path().join("v_samtools.txt"), "samtools 1.9\n").unwrap();
    assert!(report_for(temp_dir.path()).contains("<dt>Samtools</dt><dd>v1.9</dd>"));
}

#[test]
fn test_crlf_version_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("v_samtools.txt"), "samtools 1.9\r\n").unwrap();
    fs::write(
        temp_dir.path().join("v_bowtie2.txt"),
        "/usr/local/bin/bowtie2-align-s version 2.4.2\r\n",
    )
    .unwrap();

    let report = report_for(temp_dir.path());
    assert!(report.contains(&entry("Samtools", "v1.9")));
    assert!(report.contains(&entry("Bowtie2", "v2.4.2")));
}

#[test]
fn test_missing_bowtie2_shows_placeholder() {
    let temp_dir = TempDir::new().unwrap();

    let report = report_for(temp_dir.path());
    assert!(report.contains(r#"<dt>Bowtie2</dt><dd><span style="color:#999999;">N/A</span></dd>"#));
}

#[test]
fn test_unrelated_multiqc_text_keeps_placeholder() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("v_multiqc.txt"), "MultiQC is not installed\n").unwrap();

    let report = report_for(temp_dir.path());
    assert!(report.contains(&entry("MultiQC", DEFAULT_PLACEHOLDER)));
}

#[test]
fn test_order_independent_of_present_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("v_samtools.txt"), "samtools 1.10").unwrap();
    fs::write(temp_dir.path().join("v_nextflow.txt"), "20.04.1").unwrap();

    let report = report_for(temp_dir.path());
    let positions: Vec<usize> = [
        "nf-core/epiawesome</dt>",
        "Nextflow</dt>",
        "FastQC</dt>",
        "MultiQC</dt>",
        "Bowtie2</dt>",
        "Macs2</dt>",
        "Samtools</dt>",
    ]
    .iter()
    .map(|name| report.find(name).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_full_report_layout() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("v_pipeline.txt"), "1.0dev\n").unwrap();
    fs::write(dir.join("v_nextflow.txt"), "20.10.0\n").unwrap();
    fs::write(dir.join("v_fastqc.txt"), "FastQC v0.11.9\n").unwrap();
    fs::write(dir.join("v_macs2.txt"), "macs2 2.2.7.1\n").unwrap();

    let mut expected = String::from(concat!(
        "\n",
        "id: 'nf-core/epiawesome-software-versions'\n",
        "section_name: 'nf-core/epiawesome Software Versions'\n",
        "section_href: 'https://github.com/nf-core/epiawesome'\n",
        "plot_type: 'html'\n",
        "description: 'are collected at run time from the software output.'\n",
        "data: |\n",
        "    <dl class=\"dl-horizontal\">\n",
        "\n",
    ));
    expected.push_str(&entry("nf-core/epiawesome", "v1.0dev"));
    expected.push_str(&entry("Nextflow", "v20.10.0"));
    expected.push_str(&entry("FastQC", "v0.11.9"));
    expected.push_str(&entry("MultiQC", DEFAULT_PLACEHOLDER));
    expected.push_str(&entry("Bowtie2", DEFAULT_PLACEHOLDER));
    expected.push_str(&entry("Macs2", "v2.2.7.1"));
    expected.push_str(&entry("Samtools", DEFAULT_PLACEHOLDER));
    expected.push_str("    </dl>\n");

    let first = report_for(dir);
    assert_eq!(first, expected);
    // 输入不变时两次输出逐字节一致
    assert_eq!(report_for(dir), first);
}

#[test]
fn test_json_report_with_custom_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("v_pipeline.txt"), "1.2.0").unwrap();

    let config = ConfigManager::custom()
        .input_dir(temp_dir.path().to_path_buf())
        .pipeline_name("nf-core/chipseq".to_string())
        .output_format(OutputFormat::Json)
        .build();
    let report = VersionCollector::new(config).unwrap().report().unwrap();

    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["section_href"], "https://github.com/nf-core/chipseq");
    assert_eq!(value["data"]["nf-core/chipseq"], "v1.2.0");
    assert_eq!(value["data"].as_object().unwrap().len(), 7);
}
