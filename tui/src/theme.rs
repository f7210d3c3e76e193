use ratatui::style::Color;
use specmap_core::Rgba;
use specmap_core::VisualTemplate;

/// Terminal colours for one visual template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    pub background: (u8, u8, u8),
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
    pub error: Color,
}

impl Theme {
    pub(crate) fn for_template(template: VisualTemplate) -> Self {
        match template {
            VisualTemplate::Light => Self {
                background: (255, 255, 255),
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Gray,
                focus: Color::Blue,
                error: Color::Red,
            },
            VisualTemplate::Dark => Self {
                background: (17, 17, 17),
                text: Color::White,
                muted: Color::Gray,
                border: Color::DarkGray,
                focus: Color::Cyan,
                error: Color::LightRed,
            },
        }
    }

    pub(crate) fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::Rgb(r, g, b)
    }

    /// Terminals have no alpha channel, so translucent colours are blended
    /// over the template background.
    pub(crate) fn paint(&self, colour: Rgba) -> Color {
        let alpha = colour.a.clamp(0.0, 1.0);
        let (r, g, b) = self.background;
        let mix = |fg: u8, back: u8| -> u8 {
            let value = f32::from(back) + (f32::from(fg) - f32::from(back)) * alpha;
            value.round().clamp(0.0, 255.0) as u8
        };
        Color::Rgb(mix(colour.r, r), mix(colour.g, g), mix(colour.b, b))
    }
}
