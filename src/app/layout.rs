use ratatui::layout::Rect;

/// Screen split into two list panes on top and the comparison pane below,
/// with a one-cell separator between each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneLayout {
    pub left: Rect,
    pub right: Rect,
    pub bottom: Rect,
    /// Column between the two list panes
    pub vertical_separator: Rect,
    /// Row between the list panes and the comparison pane
    pub horizontal_separator: Rect,
}

impl PaneLayout {
    /// Halve the screen each way; the left and top regions take the odd cell
    pub fn compute(area: Rect) -> Self {
        let bottom_height = area.height.saturating_sub(1) / 2;
        let top_height = area.height.saturating_sub(1 + bottom_height);
        let right_width = area.width.saturating_sub(1) / 2;
        let left_width = area.width.saturating_sub(1 + right_width);

        let left = Rect::new(area.x, area.y, left_width, top_height);
        let vertical_separator = Rect::new(area.x + left_width, area.y, 1.min(area.width), top_height);
        let right = Rect::new(area.x + left_width + 1, area.y, right_width, top_height);
        let horizontal_separator =
            Rect::new(area.x, area.y + top_height, area.width, 1.min(area.height));
        let bottom = Rect::new(area.x, area.y + top_height + 1, area.width, bottom_height);

        Self {
            left,
            right,
            bottom,
            vertical_separator,
            horizontal_separator,
        }
    }
}
