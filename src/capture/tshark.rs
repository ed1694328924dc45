use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::process::Command;
use std::sync::OnceLock;

/// Leading frame number followed by the rest of a one-line summary
fn summary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)\s+\S").expect("valid summary regex"))
}

/// Parse tshark's one-line-per-frame output into `frame number → summary`.
/// Lines without a leading frame number are dropped.
pub fn parse_summaries(raw: &str) -> BTreeMap<u64, String> {
    let mut records = BTreeMap::new();
    for line in raw.lines() {
        let Some(caps) = summary_re().captures(line) else {
            continue;
        };
        let Ok(id) = caps[1].parse::<u64>() else {
            continue;
        };
        records.insert(id, line.trim().to_string());
    }
    records
}

/// Run tshark and return stdout, or fail with its stderr as the message
fn run_tshark(tshark: &str, args: &[String]) -> Result<String> {
    tracing::debug!(cmd = tshark, args = ?args, "running dissector");

    let output = Command::new(tshark)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {}", tshark))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            format!("{} exited with {}", tshark, output.status)
        } else {
            stderr.trim_end().to_string()
        };
        anyhow::bail!(message);
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// List every frame of `source` that passes `display_filter`
pub fn tshark_list(
    tshark: &str,
    source: &str,
    display_filter: &str,
) -> Result<BTreeMap<u64, String>> {
    let raw = run_tshark(tshark, &list_args(source, display_filter))?;
    let records = parse_summaries(&raw);
    tracing::info!(source, count = records.len(), "listed records");
    Ok(records)
}

/// Full protocol tree of one frame. A frame that does not exist yields empty text.
pub fn tshark_detail(tshark: &str, source: &str, id: u64) -> Result<String> {
    run_tshark(tshark, &detail_args(source, id))
}

fn list_args(source: &str, display_filter: &str) -> Vec<String> {
    let mut args = vec!["-r".to_string(), source.to_string()];
    if !display_filter.is_empty() {
        args.push("-Y".to_string());
        args.push(display_filter.to_string());
    }
    args
}

fn detail_args(source: &str, id: u64) -> Vec<String> {
    vec![
        "-r".to_string(),
        source.to_string(),
        "-V".to_string(),
        "-Y".to_string(),
        format!("frame.number == {}", id),
    ]
}
