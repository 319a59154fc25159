//! Colors, line styles, and the light/dark theme threaded through every draw call.
use crate::*;
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Multiply the opacity by `alpha` (clamped to `0..=1`).
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (self.a as f64 * alpha.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Opacity in `0..=1`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// `#rrggbb`, opacity is dropped.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name {
            "black" | "k" => Self::BLACK,
            "white" | "w" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            "red" | "r" => Self::RED,
            "green" | "g" => Self::GREEN,
            "blue" | "b" => Self::BLUE,
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "yellow" | "y" => Self::rgb(255, 255, 0),
            "cyan" | "c" => Self::rgb(0, 255, 255),
            "magenta" | "m" => Self::rgb(255, 0, 255),
            "brown" => Self::rgb(165, 42, 42),
            "pink" => Self::rgb(255, 192, 203),
            "olive" => Self::rgb(128, 128, 0),
            "navy" => Self::rgb(0, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "lime" => Self::rgb(0, 255, 0),
            "maroon" => Self::rgb(128, 0, 0),
            "lightgray" | "lightgrey" => Self::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Self::rgb(169, 169, 169),
            "darkblue" => Self::rgb(0, 0, 139),
            "darkred" => Self::rgb(139, 0, 0),
            "darkgreen" => Self::rgb(0, 100, 0),
            _ => return None,
        };
        Some(c)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color name (`"red"`, `"gray"`, ...) or a `#rrggbb[aa]` hex string.
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim().to_ascii_lowercase();
        let c = match t.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::named(&t),
        };
        c.ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// Stroke pattern of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Dash pattern in multiples of the stroke width, `None` for solid lines.
    pub fn dashes(&self) -> Option<&'static [f64]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(&[3.7, 1.6]),
            LineStyle::Dotted => Some(&[1.0, 1.65]),
            LineStyle::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
        }
    }
}

impl FromStr for LineStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "solid" | "-" => Ok(LineStyle::Solid),
            "dashed" | "--" => Ok(LineStyle::Dashed),
            "dotted" | ":" => Ok(LineStyle::Dotted),
            "dashdot" | "-." => Ok(LineStyle::DashDot),
            x => Err(Error::UnknownLineStyle(x.to_string())),
        }
    }
}

/// Colors of everything that is not a primitive: background, axes, grid, and 3D panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    /// Axes, origin marker, and tick labels.
    pub foreground: Color,
    pub grid: Color,
    /// Translucent fill of the 3D back panes.
    pub pane: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            grid: Color::WHITE.with_alpha(0.4),
            pane: Color::WHITE.with_alpha(0.15),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            grid: Color::BLACK.with_alpha(0.4),
            pane: Color::BLACK.with_alpha(0.15),
        }
    }

    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_colors() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::RED);
        assert_eq!(" Gray ".parse::<Color>().unwrap(), Color::GRAY);
        assert_eq!("#00ff7f".parse::<Color>().unwrap(), Color::rgb(0, 255, 127));
        assert_eq!(
            "#00ff7f80".parse::<Color>().unwrap(),
            Color::new(0, 255, 127, 128)
        );
        assert!(matches!(
            "chartreuse-ish".parse::<Color>(),
            Err(Error::UnknownColor(_))
        ));
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn alpha_scaling() {
        let c = Color::WHITE.with_alpha(0.4);
        assert_eq!(c.a, 102);
        assert_eq!(c.with_alpha(2.0), c);
        assert_eq!(Color::rgb(255, 0, 16).hex(), "#ff0010");
    }

    #[test]
    fn parsing_line_styles() {
        assert_eq!("--".parse::<LineStyle>().unwrap(), LineStyle::Dashed);
        assert_eq!("dotted".parse::<LineStyle>().unwrap(), LineStyle::Dotted);
        assert!("wavy".parse::<LineStyle>().is_err());
        assert!(LineStyle::Solid.dashes().is_none());
    }

    #[test]
    fn themes_are_explicit_values() {
        assert_eq!(Theme::new(true).foreground, Color::WHITE);
        assert_eq!(Theme::new(false).foreground, Color::BLACK);
        assert_ne!(Theme::dark(), Theme::light());
    }
}
