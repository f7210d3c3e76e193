use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::canvas::Rectangle;
use specmap_core::AxisRange;
use specmap_core::FrequencyUnit;
use specmap_core::PlotSurface;
use specmap_core::REGION_CEILING;
use specmap_core::REGION_FLOOR;
use specmap_core::RenderRegion;

use crate::theme::Theme;

/// Headroom above and below the drawn regions.
const VERTICAL_MARGIN: f64 = 20.0;

/// Frequency axis with every region of the active sector and the overlay.
pub(crate) struct PlotView<'a> {
    pub surface: &'a PlotSurface,
    pub theme: &'a Theme,
}

impl Widget for PlotView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let overlay = &self.surface.overlay;
        let title = if overlay.is_blank() {
            Line::from(" Spectrum ").bold()
        } else {
            Line::from(format!(" {} ", overlay_title(&overlay.region))).bold()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title)
            .title_bottom(Line::from(axis_caption(self.surface.axis)).fg(theme.muted));

        let axis = self.surface.axis;
        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(theme.background_color())
            .x_bounds([axis.lower, axis.upper])
            .y_bounds([REGION_FLOOR - VERTICAL_MARGIN, REGION_CEILING + VERTICAL_MARGIN])
            .paint(|ctx| {
                for region in &self.surface.regions {
                    ctx.draw(&outline(region, theme.paint(region.fill)));
                }
                if !overlay.is_blank() {
                    ctx.layer();
                    ctx.draw(&outline(&overlay.region, theme.paint(overlay.region.line)));
                }
            })
            .render(area, buf);
    }
}

fn outline(region: &RenderRegion, color: ratatui::style::Color) -> Rectangle {
    let bottom = region.y.iter().copied().fold(f64::INFINITY, f64::min);
    let top = region.y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Rectangle {
        x: region.lower(),
        y: bottom,
        width: region.width(),
        height: top - bottom,
        color,
    }
}

fn overlay_title(region: &RenderRegion) -> String {
    region.name_lines().collect::<Vec<_>>().join(" · ")
}

fn axis_caption(axis: AxisRange) -> String {
    format!(" {} … {} ", axis_label(axis.lower), axis_label(axis.upper))
}

/// Like a cutoff string but signed and rounded, since padded axis bounds
/// may be negative and carry float noise.
fn axis_label(hz: f64) -> String {
    let unit = FrequencyUnit::for_value(hz.abs());
    let value = format!("{:.3}", hz / unit.divisor());
    let value = value.trim_end_matches('0').trim_end_matches('.');
    let value = if value == "-0" { "0" } else { value };
    format!("{value} {unit}")
}
