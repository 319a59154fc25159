//! SVG backend.
use crate::*;
use std::fmt::Write as _;
use std::path::Path;

/// Collects drawing calls as SVG elements.
///
/// ```rust
/// # use vecdraw::*;
/// let mut svg = SvgCanvas::default();
/// svg.begin(100.0, 50.0, Color::WHITE);
/// svg.line([0.0, 0.0], [100.0, 50.0], &Stroke::new(Color::RED, 2.0));
/// svg.finish();
/// assert!(svg.document().contains("<line"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    elements: Vec<String>,
    done: bool,
}

impl SvgCanvas {
    /// The standalone document. Unfinished canvases are closed as they stand.
    pub fn document(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height)
        );
        for e in &self.elements {
            s.push_str(e);
            s.push('\n');
        }
        s.push_str("</svg>\n");
        s
    }

    /// Write the document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if !self.done {
            log::warn!("saving an svg canvas that was not finished");
        }
        std::fs::write(path.as_ref(), self.document())?;
        log::debug!("wrote svg to {}", path.as_ref().display());
        Ok(())
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

fn num(x: f64) -> String {
    let s = format!("{:.2}", x);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

fn paint(attr: &str, c: Color) -> String {
    if c.a == 255 {
        format!(r#"{}="{}""#, attr, c.hex())
    } else {
        format!(
            r#"{a}="{}" {a}-opacity="{}""#,
            c.hex(),
            num(c.opacity()),
            a = attr
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Canvas for SvgCanvas {
    fn begin(&mut self, width: f64, height: f64, background: Color) {
        self.width = width;
        self.height = height;
        self.elements.clear();
        self.done = false;
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" {}/>"#,
            num(width),
            num(height),
            paint("fill", background)
        ));
    }

    fn line(&mut self, a: Point2, b: Point2, stroke: &Stroke) {
        let dashes = stroke
            .style
            .dashes()
            .map(|d| {
                let d = d
                    .iter()
                    .map(|x| num(x * stroke.width))
                    .collect::<Vec<_>>()
                    .join(",");
                format!(r#" stroke-dasharray="{}""#, d)
            })
            .unwrap_or_default();
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}" stroke-linecap="round"{}/>"#,
            num(a[0]),
            num(a[1]),
            num(b[0]),
            num(b[1]),
            paint("stroke", stroke.color),
            num(stroke.width),
            dashes
        ));
    }

    fn polygon(&mut self, points: &[Point2], fill: Color) {
        if points.len() < 3 {
            return;
        }
        let pts = points
            .iter()
            .map(|&[x, y]| format!("{},{}", num(x), num(y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"<polygon points="{}" {}/>"#,
            pts,
            paint("fill", fill)
        ));
    }

    fn marker(&mut self, at: Point2, marker: Marker, size: f64, color: Color) {
        let [x, y] = at;
        match marker {
            Marker::Circle => self.elements.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                num(x),
                num(y),
                num(size),
                paint("fill", color)
            )),
            Marker::Cross => {
                let stroke = Stroke::new(color, (size / 2.5).max(1.0));
                self.line([x - size, y - size], [x + size, y + size], &stroke);
                self.line([x - size, y + size], [x + size, y - size], &stroke);
            }
        }
    }

    fn text(&mut self, at: Point2, text: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{}" {}>{}</text>"#,
            num(at[0]),
            num(at[1]),
            num(style.size),
            anchor,
            paint("fill", style.color),
            escape(text)
        ));
    }

    fn finish(&mut self) {
        self.done = true;
    }
}
