use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Widget;
use specmap_core::Shade;
use specmap_core::sector_colour;

use crate::render::list_view::ListAdapter;
use crate::render::list_view::RowState;
use crate::theme::Theme;

/// The sector selector. Each row carries a swatch in the sector colour.
pub(crate) struct SectorListAdapter<'a> {
    pub sectors: &'a [String],
    pub theme: &'a Theme,
}

impl ListAdapter for SectorListAdapter<'_> {
    fn len(&self) -> usize {
        self.sectors.len()
    }

    fn render_row(&self, index: usize, area: Rect, buf: &mut Buffer, state: RowState) {
        let Some(sector) = self.sectors.get(index) else {
            return;
        };
        let swatch = self.theme.paint(sector_colour(sector, Shade::Opaque));
        let label = if sector.is_empty() { "(none)" } else { sector.as_str() };
        let mut style = Style::default().fg(self.theme.text);
        if state.active {
            style = style.add_modifier(Modifier::BOLD);
        }
        if state.cursor {
            style = style.fg(self.theme.focus).add_modifier(Modifier::REVERSED);
        }
        buf.set_style(area, style);
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(swatch)),
            Span::raw(label.to_string()),
        ])
        .render(area, buf);
    }
}
