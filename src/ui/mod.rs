mod styles;
mod utils;
mod viewport;

use crate::app::{Controller, ListPane};
use crate::capture::CaptureTools;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::Path;

/// Render the entire UI: left and right lists on top, comparison below
pub fn draw<T: CaptureTools>(f: &mut Frame, ctl: &Controller<T>) {
    let screen = f.area();
    let layout = &ctl.layout;
    // The layout can lag the terminal by one event while a resize is in flight
    let clip = |r: Rect| r.intersection(screen);

    f.render_widget(&ctl.left.viewport, clip(layout.left));
    f.render_widget(&ctl.right.viewport, clip(layout.right));
    f.render_widget(&ctl.bottom, clip(layout.bottom));

    render_vertical_separator(f, clip(layout.vertical_separator));
    render_horizontal_separator(f, clip(layout.horizontal_separator), ctl);

    // Join the two separators where they meet
    let joint = (layout.vertical_separator.x, layout.horizontal_separator.y);
    if let Some(cell) = f.buffer_mut().cell_mut(joint) {
        if cell.symbol() == "─" {
            cell.set_symbol("┴");
        }
    }
}

fn render_vertical_separator(f: &mut Frame, area: Rect) {
    let rows: Vec<Line> = (0..area.height)
        .map(|_| Line::from("│"))
        .collect();
    f.render_widget(Paragraph::new(rows).style(styles::separator_style()), area);
}

/// Horizontal rule carrying the current selection of each side
fn render_horizontal_separator<T: CaptureTools>(f: &mut Frame, area: Rect, ctl: &Controller<T>) {
    let left = selection_label(&ctl.left);
    let right = selection_label(&ctl.right);
    let used = 2 + left.chars().count() + 3 + right.chars().count() + 1;
    let rest = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled("─ ", styles::separator_style()),
        Span::styled(left, styles::selection_label_style()),
        Span::styled(" ⇄ ", styles::selection_arrow_style()),
        Span::styled(right, styles::selection_label_style()),
        Span::styled(format!(" {}", "─".repeat(rest)), styles::separator_style()),
    ]);
    f.render_widget(Paragraph::new(line).style(styles::separator_style()), area);
}

/// `file:identifier` for the pane's current selection, `file:-` when it has none
fn selection_label(pane: &ListPane) -> String {
    let name = Path::new(pane.source())
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| pane.source().to_string());
    match pane.selected_identifier() {
        Some(id) => format!("{}:{}", name, id),
        None => format!("{}:-", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureSpec;
    use crate::config::CapdiffConfig;
    use anyhow::Result;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::collections::BTreeMap;

    struct Static;

    impl CaptureTools for Static {
        fn list_records(&self, source: &str) -> Result<BTreeMap<u64, String>> {
            Ok((1..=3).map(|id| (id, format!("{} #{}", source, id))).collect())
        }

        fn render_record(&self, source: &str, id: u64) -> Result<String> {
            Ok(format!("{}\n{}\n", source, id))
        }

        fn diff_text(&self, left: &str, right: &str) -> Result<String> {
            Ok(crate::capture::builtin_diff(left, right, 3))
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn drawn(width: u16, height: u16) -> Buffer {
        let spec = |s: &str| CaptureSpec {
            source: format!("/captures/{}", s),
            identifier: 2,
        };
        let ctl = Controller::new(
            Static,
            CapdiffConfig::default(),
            &spec("a.pcap"),
            &spec("b.pcap"),
            Rect::new(0, 0, width, height),
        );
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, &ctl)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn panes_and_separators_land_in_fixed_positions() {
        let buf = drawn(61, 9);

        // left/right width 30, top/bottom height 4
        assert!(row_text(&buf, 0).starts_with("/captures/a.pcap #1           │"));
        assert_eq!(buf[(30, 3)].symbol(), "│");
        assert!(row_text(&buf, 1).contains("│/captures/b.pcap #2 "));
        assert_eq!(buf[(30, 4)].symbol(), "┴");
    }

    #[test]
    fn horizontal_separator_names_both_selections() {
        let buf = drawn(60, 9);
        let rule = row_text(&buf, 4);
        assert!(rule.starts_with("─ a.pcap:2 ⇄ b.pcap:2 "), "rule was {:?}", rule);
    }

    #[test]
    fn comparison_fills_bottom_region() {
        let buf = drawn(41, 9);
        assert_eq!(row_text(&buf, 5).trim_end(), "--- left");
        assert_eq!(row_text(&buf, 6).trim_end(), "+++ right");
    }

    #[test]
    fn selection_label_uses_file_name() {
        let mut pane = ListPane::new("/tmp/x/capture.pcapng");
        assert_eq!(selection_label(&pane), "capture.pcapng:-");
        pane.load("/tmp/x/capture.pcapng", &Static);
        assert_eq!(selection_label(&pane), "capture.pcapng:1");
    }
}
