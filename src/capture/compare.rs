use anyhow::{Context, Result};
use similar::TextDiff;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// How the two record renderings are compared
#[derive(Debug, Clone, PartialEq)]
pub enum DiffTool {
    /// In-process unified diff
    Builtin { context: usize },
    /// External program run as `command args... LEFT RIGHT`
    External { command: String, args: Vec<String> },
}

impl DiffTool {
    /// `"builtin"` selects the in-process differ, anything else names a program
    pub fn from_config(name: &str, args: &[String], context: usize) -> Self {
        if name.is_empty() || name == "builtin" {
            DiffTool::Builtin { context }
        } else {
            DiffTool::External {
                command: name.to_string(),
                args: args.to_vec(),
            }
        }
    }

    pub fn diff(&self, left: &str, right: &str) -> Result<String> {
        match self {
            DiffTool::Builtin { context } => Ok(builtin_diff(left, right, *context)),
            DiffTool::External { command, args } => external_diff(command, args, left, right),
        }
    }
}

/// Unified diff of two texts. Identical inputs produce an empty string.
pub fn builtin_diff(left: &str, right: &str, context: usize) -> String {
    TextDiff::from_lines(left, right)
        .unified_diff()
        .context_radius(context)
        .header("left", "right")
        .to_string()
}

/// Stage both texts in temp files and run an external diff over them.
/// Exit status 0 (identical) and 1 (different) are both success; the temp
/// files are removed when this returns, whichever way it returns.
pub fn external_diff(command: &str, args: &[String], left: &str, right: &str) -> Result<String> {
    let left_file = stage(left).context("Failed to stage left record")?;
    let right_file = stage(right).context("Failed to stage right record")?;

    tracing::debug!(cmd = command, args = ?args, "running diff tool");

    let output = Command::new(command)
        .args(args)
        .arg(left_file.path())
        .arg(right_file.path())
        .output()
        .with_context(|| format!("Failed to run {}", command))?;

    match output.status.code() {
        Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout).to_string()),
        _ => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.trim().is_empty() {
                anyhow::bail!("{} exited with {}", command, output.status);
            }
            anyhow::bail!(stderr.trim_end().to_string());
        }
    }
}

fn stage(text: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().prefix("capdiff-").tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}
