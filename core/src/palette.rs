//! Fixed sector colour table.
//!
//! Every sector has one base colour. Regions and list rows use the
//! translucent variant, the overlay uses the opaque one.

use serde::Deserialize;
use serde::Serialize;

const TRANSLUCENT_ALPHA: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Translucent,
    Opaque,
}

const DEFAULT_RGB: (u8, u8, u8) = (51, 102, 255);

fn base_rgb(sector: &str) -> (u8, u8, u8) {
    match sector {
        "Aeronautical" => (252, 148, 3),
        "Amateur" => (252, 0, 160),
        "Broadcasting" => (3, 252, 53),
        "Business Radio" => (3, 69, 252),
        "Fixed Links" => (11, 3, 252),
        "Licence exempt" => (240, 200, 80),
        "Mobile and Wireless Broadband" | "Wireless Broadband" | "Mobile" => (182, 3, 252),
        "PMSE" => (107, 3, 252),
        "Public sector" => (252, 32, 3),
        "Satellite" => (252, 3, 252),
        "Space Science" => (3, 252, 227),
        // "", "Maritime", "N/A" and anything unknown.
        _ => DEFAULT_RGB,
    }
}

pub fn sector_colour(sector: &str, shade: Shade) -> Rgba {
    let (r, g, b) = base_rgb(sector);
    let a = match shade {
        Shade::Translucent => TRANSLUCENT_ALPHA,
        Shade::Opaque => 1.0,
    };
    Rgba::new(r, g, b, a)
}
