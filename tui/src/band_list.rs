use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Widget;
use specmap_core::BandListing;
use unicode_width::UnicodeWidthStr;

use crate::render::list_view::ListAdapter;
use crate::render::list_view::RowState;
use crate::theme::Theme;

const COLUMN_GAP: &str = "  ";
const MAX_CUTOFF_WIDTH: usize = 36;

/// The band selector: cutoff and usage columns linked by row index.
pub(crate) struct BandListAdapter<'a> {
    pub listing: &'a BandListing,
    /// Translucent sector colour used behind the active row.
    pub row_colour: ratatui::style::Color,
    pub theme: &'a Theme,
}

impl BandListAdapter<'_> {
    fn cutoff_width(&self) -> usize {
        self.listing
            .cutoffs
            .iter()
            .map(|cutoff| cutoff.width())
            .max()
            .unwrap_or(0)
            .min(MAX_CUTOFF_WIDTH)
    }
}

impl ListAdapter for BandListAdapter<'_> {
    fn len(&self) -> usize {
        self.listing.len()
    }

    fn render_row(&self, index: usize, area: Rect, buf: &mut Buffer, state: RowState) {
        let Some((cutoff, usage)) = self.listing.row(index) else {
            return;
        };
        let marker = if state.active { "▶ " } else { "  " };
        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(
                pad_to_width(cutoff, self.cutoff_width()),
                Style::default().fg(self.theme.muted),
            ),
            Span::raw(COLUMN_GAP),
            Span::raw(usage.to_string()),
        ]);

        let mut style = Style::default().fg(self.theme.text);
        if state.active {
            style = style.bg(self.row_colour);
        }
        if state.cursor {
            style = style.fg(self.theme.focus).add_modifier(Modifier::REVERSED);
        }
        buf.set_style(area, style);
        line.render(area, buf);
    }
}

/// Truncates or pads `text` to exactly `width` terminal columns.
pub(crate) fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;
    use specmap_core::VisualTemplate;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn pads_and_truncates_by_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 3), "abc");
        assert_eq!(pad_to_width("日本", 3), "日 ");
    }

    #[test]
    fn columns_line_up() {
        let listing = BandListing {
            cutoffs: vec!["0.0 Hz to 100.0 Hz".to_string(), "1.0 kHz to 2.0 kHz".to_string()],
            usages: vec!["x".to_string(), "Amateur radio".to_string()],
        };
        let theme = Theme::for_template(VisualTemplate::Light);
        let adapter = BandListAdapter {
            listing: &listing,
            row_colour: Color::Rgb(204, 204, 255),
            theme: &theme,
        };
        let area = Rect::new(0, 0, 50, 2);
        let mut buf = Buffer::empty(area);
        adapter.render_row(0, Rect::new(0, 0, 50, 1), &mut buf, RowState::default());
        adapter.render_row(
            1,
            Rect::new(0, 1, 50, 1),
            &mut buf,
            RowState {
                cursor: false,
                active: true,
            },
        );
        assert_eq!(row_text(&buf, 0), "  0.0 Hz to 100.0 Hz  x");
        assert_eq!(row_text(&buf, 1), "▶ 1.0 kHz to 2.0 kHz  Amateur radio");
        assert_eq!(buf[(30, 1)].bg, Color::Rgb(204, 204, 255));
    }
}
