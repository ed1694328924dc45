use anyhow::Result;
use std::collections::BTreeMap;

use super::compare::DiffTool;
use super::tshark::{tshark_detail, tshark_list};
use crate::config::ToolsConfig;

/// The external collaborators the viewer depends on.
///
/// Every call runs to completion before returning. Failures carry the tool's
/// own error output as their message so callers can show it as-is.
pub trait CaptureTools {
    /// `identifier → one-line summary` for every record in `source`, in any order
    fn list_records(&self, source: &str) -> Result<BTreeMap<u64, String>>;

    /// Full multi-line rendering of one record; empty when it does not exist
    fn render_record(&self, source: &str, id: u64) -> Result<String>;

    /// Line-based unified diff with `-`/`+`/` ` markers in the first column
    fn diff_text(&self, left: &str, right: &str) -> Result<String>;
}

/// tshark for listing and detail, plus the configured diff tool
#[derive(Debug, Clone)]
pub struct ExternalTools {
    pub tshark: String,
    pub display_filter: String,
    pub diff: DiffTool,
}

impl ExternalTools {
    pub fn from_config(config: &ToolsConfig) -> Self {
        Self {
            tshark: config.tshark.clone(),
            display_filter: config.display_filter.clone(),
            diff: DiffTool::from_config(&config.diff, &config.diff_args, config.context),
        }
    }
}

impl CaptureTools for ExternalTools {
    fn list_records(&self, source: &str) -> Result<BTreeMap<u64, String>> {
        tshark_list(&self.tshark, source, &self.display_filter)
    }

    fn render_record(&self, source: &str, id: u64) -> Result<String> {
        tshark_detail(&self.tshark, source, id)
    }

    fn diff_text(&self, left: &str, right: &str) -> Result<String> {
        self.diff.diff(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let tools = ExternalTools::from_config(&ToolsConfig::default());
        assert_eq!(tools.tshark, "tshark");
        assert_eq!(tools.diff, DiffTool::Builtin { context: 3 });
    }

    #[test]
    fn builtin_diff_goes_through_the_trait() {
        let tools = ExternalTools::from_config(&ToolsConfig::default());
        let diff = tools.diff_text("a\n", "b\n").unwrap();
        assert!(diff.lines().any(|l| l == "-a"));
        assert!(diff.lines().any(|l| l == "+b"));
    }
}
