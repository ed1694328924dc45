use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::app::Viewport;
use super::styles;
use super::utils::fit_width;

/// Style for the line at `index`: diff markers first, then cursor emphasis on top
fn row_style(viewport: &Viewport, index: usize, text: &str) -> Style {
    let mut style = Style::default();
    if viewport.diff_mode {
        if text.starts_with('-') {
            style = styles::del_style();
        } else if text.starts_with('+') {
            style = styles::add_style();
        } else if text.starts_with("@@") {
            style = styles::hunk_header_style();
        }
    }
    if viewport.highlight_cursor && index == viewport.cursor() && index < viewport.lines().len() {
        style = style.add_modifier(styles::cursor_modifier());
    }
    style
}

/// Draws the visible window: one row per line from `top`, blank rows past the
/// end, every row clipped or padded to the full width.
impl Widget for &Viewport {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let rows: Vec<Line> = (0..area.height as usize)
            .map(|r| {
                let index = self.top() + r;
                let text = self.lines().get(index).map(String::as_str).unwrap_or("");
                Line::styled(fit_width(text, width), row_style(self, index, text))
            })
            .collect();

        Paragraph::new(rows)
            .style(styles::default_style())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Direction;
    use ratatui::style::Modifier;

    fn render(vp: &Viewport, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        vp.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn is_highlighted(buf: &Buffer, y: u16) -> bool {
        buf[(0, y)].modifier.contains(Modifier::REVERSED)
    }

    fn viewport(lines: &[&str], height: usize, highlight: bool) -> Viewport {
        let mut vp = Viewport::new(highlight);
        vp.resize(height);
        vp.set_content(lines.iter().map(|s| s.to_string()).collect());
        vp
    }

    #[test]
    fn rows_are_clipped_and_padded() {
        let vp = viewport(&["a long line of text", "ab"], 3, false);
        let buf = render(&vp, 6, 3);

        assert_eq!(row_text(&buf, 0), "a long");
        assert_eq!(row_text(&buf, 1), "ab    ");
        assert_eq!(row_text(&buf, 2), "      ");
    }

    #[test]
    fn window_starts_at_top() {
        let mut vp = viewport(&["0", "1", "2", "3", "4"], 2, true);
        for _ in 0..3 {
            vp.move_cursor(Direction::Forward);
        }
        let buf = render(&vp, 3, 2);

        assert_eq!(row_text(&buf, 0), "2  ");
        assert_eq!(row_text(&buf, 1), "3  ");
        assert!(!is_highlighted(&buf, 0));
        assert!(is_highlighted(&buf, 1));
    }

    #[test]
    fn first_line_highlighted_after_loading_into_empty_viewport() {
        let mut vp = viewport(&[], 4, true);
        vp.set_content(vec!["first".to_string(), "second".to_string()]);
        let buf = render(&vp, 8, 4);

        assert!(is_highlighted(&buf, 0));
        assert!(!is_highlighted(&buf, 1));
        assert!(!is_highlighted(&buf, 2));
    }

    #[test]
    fn highlight_disabled_means_no_emphasis() {
        let vp = viewport(&["x", "y"], 2, false);
        let buf = render(&vp, 2, 2);
        assert!(!is_highlighted(&buf, 0));
    }

    #[test]
    fn empty_viewport_renders_blank_without_highlight() {
        let vp = viewport(&[], 2, true);
        let buf = render(&vp, 4, 2);
        assert_eq!(row_text(&buf, 0), "    ");
        assert!(!is_highlighted(&buf, 0));
    }

    #[test]
    fn diff_markers_are_colored_only_in_diff_mode() {
        let mut vp = viewport(&["-old", "+new", " same"], 3, false);
        let plain = render(&vp, 5, 3);
        assert_eq!(plain[(0, 0)].bg, styles::BG);
        assert_eq!(plain[(0, 1)].bg, styles::BG);

        vp.diff_mode = true;
        let buf = render(&vp, 5, 3);
        assert_eq!(buf[(0, 0)].bg, styles::DEL_BG);
        assert_eq!(buf[(4, 0)].bg, styles::DEL_BG);
        assert_eq!(buf[(0, 1)].bg, styles::ADD_BG);
        assert_eq!(buf[(0, 2)].bg, styles::BG);
    }

    #[test]
    fn cursor_emphasis_composes_with_diff_style() {
        let mut vp = viewport(&["-old", "+new"], 2, true);
        vp.diff_mode = true;
        vp.move_cursor(Direction::Forward);
        let buf = render(&vp, 4, 2);

        assert_eq!(buf[(0, 1)].bg, styles::ADD_BG);
        assert!(is_highlighted(&buf, 1));
        assert_eq!(buf[(0, 0)].bg, styles::DEL_BG);
        assert!(!is_highlighted(&buf, 0));
    }

    #[test]
    fn stale_top_after_shrink_shows_blank_rows() {
        let mut vp = viewport(&["0", "1", "2", "3", "4", "5"], 2, true);
        for _ in 0..5 {
            vp.move_cursor(Direction::Forward);
        }
        assert_eq!(vp.top(), 4);
        vp.resize(4);
        let buf = render(&vp, 2, 4);

        assert_eq!(row_text(&buf, 0), "4 ");
        assert_eq!(row_text(&buf, 1), "5 ");
        assert_eq!(row_text(&buf, 2), "  ");
        assert_eq!(row_text(&buf, 3), "  ");
    }

    #[test]
    fn rendering_is_idempotent() {
        let vp = viewport(&["-a", "b"], 2, true);
        let first = render(&vp, 3, 2);
        let second = render(&vp, 3, 2);
        assert_eq!(first, second);
    }
}
