use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::capture::{CaptureSpec, CaptureTools};
use crate::config::CapdiffConfig;

use super::input::Action;
use super::layout::PaneLayout;
use super::list_pane::ListPane;
use super::viewport::{Direction, Viewport};

/// Identifiers currently selected in the left and right panes
pub type SelectionPair = (Option<u64>, Option<u64>);

/// Owns the two list panes and the comparison pane and drives them from input
pub struct Controller<T: CaptureTools> {
    tools: T,
    config: CapdiffConfig,
    pub left: ListPane,
    pub right: ListPane,
    pub bottom: Viewport,
    pub layout: PaneLayout,
    pub should_quit: bool,
}

impl<T: CaptureTools> Controller<T> {
    /// Load both captures, place the cursors on the requested records and
    /// produce the first comparison.
    pub fn new(
        tools: T,
        config: CapdiffConfig,
        left: &CaptureSpec,
        right: &CaptureSpec,
        screen: Rect,
    ) -> Self {
        let bottom = Viewport::new(config.display.highlight_diff_cursor);

        let mut controller = Self {
            tools,
            config,
            left: ListPane::new(&left.source),
            right: ListPane::new(&right.source),
            bottom,
            layout: PaneLayout::default(),
            should_quit: false,
        };
        controller.resize(screen);

        controller.left.load(&left.source, &controller.tools);
        controller.right.load(&right.source, &controller.tools);
        controller.left.select_identifier(left.identifier);
        controller.right.select_identifier(right.identifier);
        controller.refresh_comparison();
        controller
    }

    pub fn selection(&self) -> SelectionPair {
        (
            self.left.selected_identifier(),
            self.right.selected_identifier(),
        )
    }

    /// Apply one input event. The comparison is regenerated only when the
    /// selection pair differs from what it was before the event.
    pub fn handle_event(&mut self, event: &Event) {
        let before = self.selection();

        match event {
            Event::Key(key) => {
                if let Some(action) = self.config.keys.action_for(key) {
                    self.apply(action);
                }
            }
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, *width, *height)),
            _ => {}
        }

        if self.selection() != before {
            self.refresh_comparison();
        }
    }

    fn apply(&mut self, action: Action) {
        tracing::trace!(?action, "key action");
        match action {
            Action::LeftUp => self.left.move_cursor(Direction::Backward),
            Action::LeftDown => self.left.move_cursor(Direction::Forward),
            Action::RightUp => self.right.move_cursor(Direction::Backward),
            Action::RightDown => self.right.move_cursor(Direction::Forward),
            Action::BottomUp => self.bottom.move_cursor(Direction::Backward),
            Action::BottomDown => self.bottom.move_cursor(Direction::Forward),
            Action::BothUp => {
                self.left.move_cursor(Direction::Backward);
                self.right.move_cursor(Direction::Backward);
            }
            Action::BothDown => {
                self.left.move_cursor(Direction::Forward);
                self.right.move_cursor(Direction::Forward);
            }
            Action::Reload => self.reload(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Recompute the regions for a new screen size. Pane indices are not
    /// re-clamped here.
    pub fn resize(&mut self, screen: Rect) {
        self.layout = PaneLayout::compute(screen);
        self.left.viewport.resize(self.layout.left.height as usize);
        self.right.viewport.resize(self.layout.right.height as usize);
        self.bottom.resize(self.layout.bottom.height as usize);
        tracing::debug!(width = screen.width, height = screen.height, "resized");
    }

    /// Re-list both captures and compare again even if the pair is unchanged,
    /// since the records behind it may differ now
    pub fn reload(&mut self) {
        self.left.reload(&self.tools);
        self.right.reload(&self.tools);
        self.refresh_comparison();
    }

    /// Replace the comparison pane with the diff of the two selected records.
    /// With nothing to diff, the pane shows a notice and the key reference.
    pub fn refresh_comparison(&mut self) {
        let (Some(left_id), Some(right_id)) = self.selection() else {
            self.show_notice("No record selected in one of the captures.");
            return;
        };

        tracing::info!(
            left = %format!("{}:{}", self.left.source(), left_id),
            right = %format!("{}:{}", self.right.source(), right_id),
            "comparing records"
        );

        let text = match self.compare(left_id, right_id) {
            Ok(text) if text.is_empty() => {
                self.show_notice("The selected records are identical.");
                return;
            }
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "comparison failed");
                format!("{:#}", err)
            }
        };

        self.bottom.diff_mode = true;
        self.bottom
            .set_content(text.lines().map(str::to_string).collect());
    }

    fn show_notice(&mut self, notice: &str) {
        let mut lines = vec![notice.to_string(), String::new()];
        lines.extend(self.config.keys.help_lines());
        self.bottom.diff_mode = false;
        self.bottom.set_content(lines);
    }

    fn compare(&self, left_id: u64, right_id: u64) -> anyhow::Result<String> {
        let left = self.tools.render_record(self.left.source(), left_id)?;
        let right = self.tools.render_record(self.right.source(), right_id)?;
        self.tools.diff_text(&left, &right)
    }

    #[cfg(test)]
    pub fn tools(&self) -> &T {
        &self.tools
    }
}
