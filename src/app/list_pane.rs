use crate::capture::CaptureTools;

use super::viewport::{Direction, Viewport};

/// The records of one capture, one summary per line in ascending identifier order
#[derive(Debug, Clone, Default)]
pub struct ListPane {
    source: String,
    ids: Vec<u64>,
    pub viewport: Viewport,
}

impl ListPane {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ids: Vec::new(),
            viewport: Viewport::new(true),
        }
    }

    /// Replace the record set with a fresh listing of `source`.
    /// A failed listing leaves the pane empty, showing the failure text.
    pub fn load(&mut self, source: &str, tools: &dyn CaptureTools) {
        self.source = source.to_string();
        match tools.list_records(source) {
            Ok(records) => {
                // BTreeMap iteration is already ascending by identifier
                let (ids, summaries): (Vec<u64>, Vec<String>) = records.into_iter().unzip();
                tracing::debug!(source, count = ids.len(), "loaded list pane");
                self.ids = ids;
                self.viewport.set_content(summaries);
            }
            Err(err) => {
                tracing::warn!(source, error = %format!("{:#}", err), "record listing failed");
                self.ids.clear();
                self.viewport
                    .set_content(format!("{:#}", err).lines().map(str::to_string).collect());
            }
        }
    }

    /// List the same source again
    pub fn reload(&mut self, tools: &dyn CaptureTools) {
        let source = self.source.clone();
        self.load(&source, tools);
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.viewport.move_cursor(direction);
    }

    /// Identifier under the cursor, `None` when the capture has no records
    pub fn selected_identifier(&self) -> Option<u64> {
        self.ids.get(self.viewport.cursor()).copied()
    }

    /// Walk the cursor to `id` one line at a time so scrolling stays consistent.
    /// Returns false, leaving the cursor where it was, when `id` is not listed.
    pub fn select_identifier(&mut self, id: u64) -> bool {
        let Ok(target) = self.ids.binary_search(&id) else {
            tracing::warn!(source = %self.source, id, "requested record not in capture");
            return false;
        };
        while self.viewport.cursor() > target {
            self.viewport.move_cursor(Direction::Backward);
        }
        while self.viewport.cursor() < target {
            self.viewport.move_cursor(Direction::Forward);
        }
        true
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    #[cfg(test)]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }
}
