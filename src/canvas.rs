//! The drawing surface a [`Figure`] is replayed onto.
//!
//! Coordinates handed to a [`Canvas`] are pixels: origin at the top left, x increasing
//! rightward, y increasing downward.
use crate::*;

/// How a segment is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Pixels.
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled disc, used for points.
    Circle,
    /// `x`, used for the origin.
    Cross,
}

/// Horizontal alignment of text about its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Pixels.
    pub size: f64,
    pub anchor: Anchor,
}

/// A rendering backend.
///
/// Implement this to draw figures to a target of your choice; [`SvgCanvas`] is provided.
pub trait Canvas {
    /// Start a new image of the given pixel size.
    fn begin(&mut self, width: f64, height: f64, background: Color);

    /// Stroke a straight segment.
    fn line(&mut self, a: Point2, b: Point2, stroke: &Stroke);

    /// Fill a closed polygon.
    fn polygon(&mut self, points: &[Point2], fill: Color);

    /// Draw a marker centred on `at`, `size` being its radius in pixels.
    fn marker(&mut self, at: Point2, marker: Marker, size: f64, color: Color);

    fn text(&mut self, at: Point2, text: &str, style: &TextStyle);

    /// Complete the image.
    fn finish(&mut self);
}
