/// One-line step through a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A scrollable, cursor-tracking window over a buffer of text lines.
///
/// `top` is the first visible line and `cursor` the selected one. The viewport
/// does not know what its lines mean; it only keeps the indices consistent.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    lines: Vec<String>,
    top: usize,
    cursor: usize,
    height: usize,
    /// Emphasise the cursor row when rendering
    pub highlight_cursor: bool,
    /// Style rows starting with `-` / `+` as removed / added
    pub diff_mode: bool,
}

impl Viewport {
    pub fn new(highlight_cursor: bool) -> Self {
        Self {
            highlight_cursor,
            ..Self::default()
        }
    }

    /// Replace the buffer and re-clamp `top` and `cursor` into range
    pub fn set_content(&mut self, lines: Vec<String>) {
        self.lines = lines;
        let last = self.lines.len().saturating_sub(1);
        self.top = self.top.min(last);
        self.cursor = self.cursor.clamp(self.top, last);
    }

    /// Record the number of visible rows. Indices are left alone until the
    /// next `set_content`.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    /// Move the cursor one line, scrolling when it leaves the visible rows.
    /// Moving past either end is a no-op.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => {
                if self.cursor + 1 >= self.lines.len() {
                    return;
                }
                if self.cursor + 1 >= self.top + self.height {
                    self.top += 1;
                }
                self.cursor += 1;
            }
            Direction::Backward => {
                if self.cursor == 0 {
                    return;
                }
                if self.cursor <= self.top {
                    self.top = self.top.saturating_sub(1);
                }
                self.cursor -= 1;
            }
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
