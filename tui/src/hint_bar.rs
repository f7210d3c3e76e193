use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

/// Bottom rows: the status line followed by key hints.
#[derive(Clone, Debug, Default)]
pub(crate) struct HintBar {
    lines: Vec<Line<'static>>,
}

impl HintBar {
    pub(crate) fn new(lines: Vec<Line<'static>>) -> Self {
        Self { lines }
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        for (line, y) in self.lines.iter().zip(area.top()..area.bottom()) {
            Paragraph::new(line.clone()).render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

/// `key action · key action` with the keys in bold.
pub(crate) fn key_hints(pairs: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (index, (key, action)) in pairs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::from(" · ").dim());
        }
        spans.push(Span::from(*key).bold());
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Splits `area` into content and `hint_lines` rows at the bottom.
pub(crate) fn split_area_for_hints(area: Rect, hint_lines: u16) -> (Rect, Rect) {
    if hint_lines == 0 || area.height <= hint_lines {
        return (area, Rect::new(area.x, area.bottom(), area.width, 0));
    }
    let content_height = area.height - hint_lines;
    let content = Rect::new(area.x, area.y, area.width, content_height);
    let hint = Rect::new(area.x, area.y + content_height, area.width, hint_lines);
    (content, hint)
}
