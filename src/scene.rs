//! Scene rendering.
//!
//! [`draw_2d`] and [`draw_3d`] turn primitives into a [`Figure`]: a display list of shapes in
//! data coordinates, tagged with the [`Layer`] that fixes their paint order. Every shape is
//! computed before anything is drawn, so a failing primitive aborts the call without any
//! partial output. The figure is then replayed onto any [`Canvas`].
//!
//! [`number_grid`] lays out an empty number plane the same way.
use crate::*;
use std::path::Path;

const POINTS_PER_INCH: f64 = 72.0;
const FONT_PT: f64 = 10.0;
const MARKER_RADIUS_PT: f64 = 3.0;
const LINE_WIDTH_PT: f64 = 1.5;
const AXES_WIDTH_PT: f64 = 2.0;
const GRID_WIDTH_PT: f64 = 0.8;
const TICK_LENGTH_PT: f64 = 3.5;
const TICK_PAD_PT: f64 = 3.5;
/// Height over width of a figure that does not follow the data aspect.
const FIGURE_RATIO: f64 = 0.75;
/// Height over width of a number grid that does not follow the data aspect.
const GRID_FRAME_RATIO: f64 = 9.0 / 16.0;
const BORDER_WIDTH_PT: f64 = 1.5;
/// Length of the axis tips of a number grid, as a fraction of the x range.
const TIP_FRACTION: f64 = 1.0 / 40.0;
/// Opacity of the grid drawn on the 3D panes.
const PANE_GRID_ALPHA: f64 = 0.2;
/// Opacity of the farthest marker when depth shading.
const MIN_SHADE: f64 = 0.3;

/// Paint order of a shape. Lower layers are drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Grid lines, spines, ticks, panes.
    Grid = 0,
    Axes = 1,
    Lines = 2,
    /// Arrows and the origin marker.
    Arrows = 3,
    Points = 4,
    Labels = 5,
}

/// A drawable in data coordinates `P`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<P> {
    Marker {
        at: P,
        marker: Marker,
        /// Radius in pixels.
        size: f64,
        color: Color,
    },
    Segment {
        a: P,
        b: P,
        stroke: Stroke,
    },
    /// A segment starting at a data position and running a fixed pixel vector.
    Tick {
        at: P,
        length: Point2,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<P>,
        fill: Color,
    },
    Text {
        at: P,
        /// Pixel offset from the projected position.
        offset: Point2,
        text: String,
        style: TextStyle,
    },
}

impl<P: Copy> Shape<P> {
    /// The data positions this shape is anchored on.
    pub fn positions(&self) -> Vec<P> {
        match self {
            Shape::Marker { at, .. } | Shape::Tick { at, .. } | Shape::Text { at, .. } => {
                vec![*at]
            }
            Shape::Segment { a, b, .. } => vec![*a, *b],
            Shape::Polygon { points, .. } => points.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item<P> {
    pub layer: Layer,
    pub shape: Shape<P>,
}

/// Maps data positions onto figure pixels.
pub trait View {
    type Pos: Copy + std::fmt::Debug + PartialEq;

    /// Pixel position (y down) and depth of `p`. Larger depth is nearer the viewer.
    fn project(&self, p: Self::Pos) -> (Point2, f64);

    /// Paint shapes far to near instead of in plain layer order.
    fn depth_sorted(&self) -> bool {
        false
    }

    /// Opacity factor of a marker at `depth`.
    fn shade(&self, _depth: f64) -> f64 {
        1.0
    }
}

/// The plot area inside a figure of `size` pixels, following the usual subplot margins.
pub fn plot_area([w, h]: [f64; 2]) -> Extents2 {
    Extents2::from_min_max([0.125 * w, 0.12 * h], [0.9 * w, 0.89 * h])
}

/// Linear 2D view of a viewport stretched over the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame2 {
    pub viewport: Extents2,
    /// Pixel box, y down.
    pub plot: Extents2,
}

impl View for Frame2 {
    type Pos = Point2;

    fn project(&self, [x, y]: Point2) -> (Point2, f64) {
        let Extents { origin, size } = self.viewport;
        let px = self.plot.min()[0] + (x - origin[0]) / size[0] * self.plot.size[0];
        let py = self.plot.max()[1] - (y - origin[1]) / size[1] * self.plot.size[1];
        ([px, py], 0.0)
    }
}

/// Orthographic 3D view of the viewport box, scaled to fit inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame3 {
    pub viewport: Extents3,
    pub camera: Camera,
    /// Relative side lengths of the drawn box.
    pub aspect: Point3,
    center: Point2,
    mid: Point2,
    scale: f64,
    depths: (f64, f64),
    depthshade: bool,
}

impl Frame3 {
    pub fn new(
        viewport: Extents3,
        camera: Camera,
        aspect: Point3,
        plot: Extents2,
        depthshade: bool,
    ) -> Self {
        let mut frame = Self {
            viewport,
            camera,
            aspect,
            center: midpoint(plot.min(), plot.max()),
            mid: [0.0; 2],
            scale: 1.0,
            depths: (0.0, 0.0),
            depthshade,
        };

        let corners = viewport
            .corners()
            .map(|c| camera.project(frame.normalise(c)));
        let bounds: Extents2 = corners.iter().map(|(s, _)| *s).collect();
        let [bw, bh] = bounds.size;
        let [pw, ph] = plot.size;

        frame.mid = midpoint(bounds.min(), bounds.max());
        frame.scale = (pw / bw.max(MIN_EXTENT)).min(ph / bh.max(MIN_EXTENT));
        frame.depths = corners
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, d)| {
                (lo.min(*d), hi.max(*d))
            });

        frame
    }

    /// Position inside a box centred on zero with side lengths `aspect`.
    fn normalise(&self, p: Point3) -> Point3 {
        let rel = xfm(p.sub(self.viewport.origin), self.viewport.size, |r, s| {
            r / s.max(MIN_EXTENT) - 0.5
        });
        xfm(rel, self.aspect, |r, a| r * a)
    }
}

impl View for Frame3 {
    type Pos = Point3;

    fn project(&self, p: Point3) -> (Point2, f64) {
        let ([x, y], depth) = self.camera.project(self.normalise(p));
        let [cx, cy] = self.center;
        let [mx, my] = self.mid;
        (
            [cx + (x - mx) * self.scale, cy - (y - my) * self.scale],
            depth,
        )
    }

    fn depth_sorted(&self) -> bool {
        true
    }

    fn shade(&self, depth: f64) -> f64 {
        let (lo, hi) = self.depths;
        if !self.depthshade || hi - lo <= 0.0 {
            return 1.0;
        }
        let t = ((depth - lo) / (hi - lo)).clamp(0.0, 1.0);
        MIN_SHADE + (1.0 - MIN_SHADE) * t
    }
}

/// A display list ready to be drawn.
#[derive(Debug, Clone)]
pub struct Figure<V: View> {
    view: V,
    theme: Theme,
    size: [f64; 2],
    items: Vec<Item<V::Pos>>,
}

pub type Figure2 = Figure<Frame2>;
pub type Figure3 = Figure<Frame3>;

impl<V: View> Figure<V> {
    pub fn new(view: V, theme: Theme, size: [f64; 2]) -> Self {
        Self {
            view,
            theme,
            size,
            items: Vec::new(),
        }
    }

    /// Add a shape after every other shape of the same layer.
    pub fn push(&mut self, layer: Layer, shape: Shape<V::Pos>) {
        let i = self.items.partition_point(|x| x.layer <= layer);
        self.items.insert(i, Item { layer, shape });
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Pixel width and height.
    pub fn size(&self) -> [f64; 2] {
        self.size
    }

    /// Shapes in layer order.
    pub fn items(&self) -> &[Item<V::Pos>] {
        &self.items
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Shape<V::Pos>> {
        self.items
            .iter()
            .filter(move |x| x.layer == layer)
            .map(|x| &x.shape)
    }

    /// Mean depth of a shape's anchors.
    fn depth(&self, shape: &Shape<V::Pos>) -> f64 {
        let ps = shape.positions();
        let n = ps.len().max(1) as f64;
        ps.into_iter().map(|p| self.view.project(p).1).sum::<f64>() / n
    }

    /// Items in the order they are painted.
    fn paint_order(&self) -> Vec<&Item<V::Pos>> {
        let mut order = self.items.iter().collect::<Vec<_>>();
        if self.view.depth_sorted() {
            let key = |x: &Item<V::Pos>| match x.layer {
                Layer::Grid | Layer::Axes => f64::NEG_INFINITY,
                Layer::Labels => f64::INFINITY,
                _ => self.depth(&x.shape),
            };
            let mut keyed = order.into_iter().map(|x| (key(x), x)).collect::<Vec<_>>();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            order = keyed.into_iter().map(|(_, x)| x).collect();
        }
        order
    }

    /// Replay the display list onto `canvas`.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let [w, h] = self.size;
        canvas.begin(w, h, self.theme.background);

        for item in self.paint_order() {
            match &item.shape {
                Shape::Marker {
                    at,
                    marker,
                    size,
                    color,
                } => {
                    let (p, depth) = self.view.project(*at);
                    let color = match marker {
                        Marker::Circle => color.with_alpha(self.view.shade(depth)),
                        Marker::Cross => *color,
                    };
                    canvas.marker(p, *marker, *size, color);
                }
                Shape::Segment { a, b, stroke } => {
                    let (a, _) = self.view.project(*a);
                    let (b, _) = self.view.project(*b);
                    canvas.line(a, b, stroke);
                }
                Shape::Tick { at, length, stroke } => {
                    let (p, _) = self.view.project(*at);
                    canvas.line(p, p.add(*length), stroke);
                }
                Shape::Polygon { points, fill } => {
                    let points = points
                        .iter()
                        .map(|p| self.view.project(*p).0)
                        .collect::<Vec<_>>();
                    canvas.polygon(&points, *fill);
                }
                Shape::Text {
                    at,
                    offset,
                    text,
                    style,
                } => {
                    let (p, _) = self.view.project(*at);
                    canvas.text(p.add(*offset), text, style);
                }
            }
        }

        canvas.finish();
    }

    pub fn to_svg(&self) -> SvgCanvas {
        let mut svg = SvgCanvas::default();
        self.render(&mut svg);
        svg
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_svg().save(path)
    }
}

/// Pixel sizes of strokes, markers, and text for a given resolution.
#[derive(Debug, Clone, Copy)]
struct Pens {
    /// Pixels per point.
    pt: f64,
    fg: Color,
}

impl Pens {
    fn new(dpi: u32, fg: Color) -> Self {
        Self {
            pt: f64::from(dpi) / POINTS_PER_INCH,
            fg,
        }
    }

    fn marker(&self) -> f64 {
        MARKER_RADIUS_PT * self.pt
    }

    fn line(&self, color: Color, style: LineStyle) -> Stroke {
        Stroke::new(color, LINE_WIDTH_PT * self.pt).style(style)
    }

    fn thin(&self, color: Color) -> Stroke {
        Stroke::new(color, GRID_WIDTH_PT * self.pt)
    }

    fn text(&self, anchor: Anchor) -> TextStyle {
        TextStyle {
            color: self.fg,
            size: FONT_PT * self.pt,
            anchor,
        }
    }
}

/// Format a tick value with just enough decimals to tell neighbouring ticks apart.
fn tick_text(value: f64, step: f64) -> String {
    let decimals = (0..6)
        .find(|&d| {
            let s = step * 10f64.powi(d);
            (s - s.round()).abs() < 1e-6
        })
        .unwrap_or(6) as usize;
    let s = format!("{:.*}", decimals, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

// ###### 2D ##################################################################

/// Lay out a 2D figure of `objects`.
///
/// # Example
/// ```rust
/// # use vecdraw::*;
/// let objects = [
///     Primitive2::from(Point2D::new(0.0, 0.0)),
///     Point2D::new(3.0, 4.0).into(),
/// ];
/// let cfg = Draw2Config {
///     origin: true,
///     ..Default::default()
/// };
/// let fig = draw_2d(&objects, &cfg).unwrap();
/// assert_eq!(fig.layer(Layer::Points).count(), 2);
/// ```
pub fn draw_2d(objects: &[Primitive2], cfg: &Draw2Config) -> Result<Figure2> {
    let viewport = fit_2d(extract_vectors_2d(objects), cfg.grid_size)?;
    let px = cfg.width * f64::from(cfg.dpi);
    let [vw, vh] = viewport.size;
    let size = if cfg.nice_aspect_ratio {
        [px, px * vh / vw]
    } else {
        [px, px * FIGURE_RATIO]
    };
    log::debug!("2D figure of {:?} px over viewport {:?}", size, viewport);

    let theme = cfg.theme();
    let pens = Pens::new(cfg.dpi, theme.foreground);
    let frame = Frame2 {
        viewport,
        plot: plot_area(size),
    };
    let mut fig = Figure::new(frame, theme, size);

    decorate_2d(&mut fig, cfg, &pens);

    let head_length = vw / 20.0;
    for obj in objects {
        push_2d(&mut fig, obj, head_length, &pens)?;
    }

    if let Some(path) = &cfg.save_as {
        fig.save_svg(path)?;
    }

    Ok(fig)
}

fn decorate_2d(fig: &mut Figure2, cfg: &Draw2Config, pens: &Pens) {
    let theme = fig.theme;
    let v = fig.view.viewport;
    let ([x0, y0], [x1, y1]) = (v.min(), v.max());
    let [sx, sy] = cfg.grid_size;
    let pt = pens.pt;

    if cfg.ticks {
        let xs = ticks(x0, x1, sx);
        let ys = ticks(y0, y1, sy);

        if cfg.grid {
            let stroke = pens.thin(theme.grid);
            for &x in &xs {
                fig.push(Layer::Grid, Shape::Segment { a: [x, y0], b: [x, y1], stroke });
            }
            for &y in &ys {
                fig.push(Layer::Grid, Shape::Segment { a: [x0, y], b: [x1, y], stroke });
            }
        }

        let stroke = pens.thin(theme.foreground);
        let reach = (TICK_LENGTH_PT + TICK_PAD_PT) * pt;
        for &x in &xs {
            let at = [x, y0];
            let length = [0.0, TICK_LENGTH_PT * pt];
            fig.push(Layer::Grid, Shape::Tick { at, length, stroke });
            if cfg.tick_labels {
                fig.push(
                    Layer::Grid,
                    Shape::Text {
                        at,
                        offset: [0.0, reach + FONT_PT * pt],
                        text: tick_text(x, sx),
                        style: pens.text(Anchor::Middle),
                    },
                );
            }
        }
        for &y in &ys {
            let at = [x0, y];
            let length = [-TICK_LENGTH_PT * pt, 0.0];
            fig.push(Layer::Grid, Shape::Tick { at, length, stroke });
            if cfg.tick_labels {
                fig.push(
                    Layer::Grid,
                    Shape::Text {
                        at,
                        offset: [-reach, FONT_PT * pt / 3.0],
                        text: tick_text(y, sy),
                        style: pens.text(Anchor::End),
                    },
                );
            }
        }
    }

    // spines
    let stroke = pens.thin(theme.foreground);
    let corners = [[x0, y0], [x1, y0], [x1, y1], [x0, y1]];
    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % 4];
        fig.push(Layer::Grid, Shape::Segment { a, b, stroke });
    }

    if cfg.axes_labels {
        let below = (TICK_LENGTH_PT + TICK_PAD_PT + 2.5 * FONT_PT) * pt;
        let left = (TICK_LENGTH_PT + TICK_PAD_PT + 3.0 * FONT_PT) * pt;
        fig.push(
            Layer::Grid,
            Shape::Text {
                at: [(x0 + x1) / 2.0, y0],
                offset: [0.0, below],
                text: "x".to_string(),
                style: pens.text(Anchor::Middle),
            },
        );
        fig.push(
            Layer::Grid,
            Shape::Text {
                at: [x0, (y0 + y1) / 2.0],
                offset: [-left, 0.0],
                text: "y".to_string(),
                style: pens.text(Anchor::End),
            },
        );
    }

    if cfg.axes {
        let stroke = Stroke::new(theme.foreground, AXES_WIDTH_PT * pt);
        fig.push(Layer::Axes, Shape::Segment { a: [x0, 0.0], b: [x1, 0.0], stroke });
        fig.push(Layer::Axes, Shape::Segment { a: [0.0, y0], b: [0.0, y1], stroke });
    }

    if cfg.origin {
        fig.push(
            Layer::Arrows,
            Shape::Marker {
                at: [0.0; 2],
                marker: Marker::Cross,
                size: pens.marker(),
                color: theme.foreground,
            },
        );
    }
}

fn label_2d(fig: &mut Figure2, at: Point2, text: &str, pens: &Pens) {
    fig.push(
        Layer::Labels,
        Shape::Text {
            at,
            offset: [0.0; 2],
            text: text.to_string(),
            style: pens.text(Anchor::Middle),
        },
    );
}

fn point_2d(fig: &mut Figure2, p: &Point2D, pens: &Pens) {
    fig.push(
        Layer::Points,
        Shape::Marker {
            at: p.pos,
            marker: Marker::Circle,
            size: pens.marker(),
            color: p.color,
        },
    );
    if let Some(label) = &p.label {
        label_2d(fig, label_xy(p.pos, None), label, pens);
    }
}

fn push_2d(fig: &mut Figure2, obj: &Primitive2, head_length: f64, pens: &Pens) -> Result<()> {
    match obj {
        Primitive2::Point(p) => point_2d(fig, p, pens),
        Primitive2::PointSet(set) => {
            for p in set.points() {
                point_2d(fig, p, pens);
            }
        }
        Primitive2::Line(l) => {
            fig.push(
                Layer::Lines,
                Shape::Segment {
                    a: l.start,
                    b: l.end,
                    stroke: pens.line(l.color, l.linestyle),
                },
            );
            if let Some(label) = &l.label {
                label_2d(fig, label_xy(l.start, Some(l.end)), label, pens);
            }
        }
        Primitive2::Arrow(a) => {
            let ArrowHead2 { shaft, head } = ArrowHead2::new(a.tail, a.head, head_length)?;
            fig.push(
                Layer::Arrows,
                Shape::Segment {
                    a: shaft[0],
                    b: shaft[1],
                    stroke: pens.line(a.color, a.linestyle),
                },
            );
            fig.push(
                Layer::Arrows,
                Shape::Polygon {
                    points: head.to_vec(),
                    fill: a.color,
                },
            );
            if let Some(label) = &a.label {
                label_2d(fig, label_xy(a.tail, Some(a.head)), label, pens);
            }
        }
    }

    Ok(())
}

// ###### 3D ##################################################################

/// Lay out a 3D figure of `objects`.
pub fn draw_3d(objects: &[Primitive3], cfg: &Draw3Config) -> Result<Figure3> {
    if let Some(&s) = cfg
        .grid_size
        .iter()
        .find(|s| !(s.is_finite() && **s > 0.0))
    {
        return Err(Error::InvalidGridSize(s));
    }

    let heads = head_bounds(objects)?;
    let viewport = fit_3d(
        extract_vectors_3d(objects).chain(heads),
        DEFAULT_MARGIN,
    );
    let px = cfg.width * f64::from(cfg.dpi);
    let (size, aspect) = if cfg.nice_aspect_ratio {
        ([px, px], [1.0; 3])
    } else {
        ([px, px * FIGURE_RATIO], [1.0, 1.0, FIGURE_RATIO])
    };
    log::debug!("3D figure of {:?} px over viewport {:?}", size, viewport);

    let theme = cfg.theme();
    let pens = Pens::new(cfg.dpi, theme.foreground);
    let frame = Frame3::new(
        viewport,
        cfg.camera(),
        aspect,
        plot_area(size),
        cfg.depthshade,
    );
    let mut fig = Figure::new(frame, theme, size);

    decorate_3d(&mut fig, cfg, &pens);

    for obj in objects {
        push_3d(&mut fig, obj, &pens)?;
    }

    if let Some(path) = &cfg.save_as {
        fig.save_svg(path)?;
    }

    Ok(fig)
}

/// Corners of the arrow heads' bounds.
///
/// Cones stick out sideways from their arrows, so an arrow lying along an axis would otherwise
/// leave the other axes without spread and blow its head up over the whole figure.
fn head_bounds(objects: &[Primitive3]) -> Result<Vec<Point3>> {
    let mut corners = Vec::new();
    for obj in objects {
        if let Primitive3::Arrow(a) = obj {
            let e = a.cone()?.to_mesh().aabb();
            corners.extend([e.min(), e.max()]);
        }
    }
    Ok(corners)
}

fn decorate_3d(fig: &mut Figure3, cfg: &Draw3Config, pens: &Pens) {
    let theme = fig.theme;
    let v = fig.view.viewport;
    let (lo, hi) = (v.min(), v.max());
    let eye = fig.view.camera.eye();
    let step = cfg.grid_size;
    let pt = pens.pt;

    // panes sit on the far side of each axis
    let back = |i: usize| if eye[i] > 0.0 { lo[i] } else { hi[i] };
    let front = |i: usize| if eye[i] > 0.0 { hi[i] } else { lo[i] };

    for i in 0..3 {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        let at = |a: f64, b: f64| {
            let mut p = [0.0; 3];
            p[i] = back(i);
            p[j] = a;
            p[k] = b;
            p
        };
        let quad = vec![
            at(lo[j], lo[k]),
            at(hi[j], lo[k]),
            at(hi[j], hi[k]),
            at(lo[j], hi[k]),
        ];
        fig.push(
            Layer::Grid,
            Shape::Polygon {
                points: quad.clone(),
                fill: theme.pane,
            },
        );
        for (n, &a) in quad.iter().enumerate() {
            let b = quad[(n + 1) % 4];
            fig.push(
                Layer::Grid,
                Shape::Segment {
                    a,
                    b,
                    stroke: pens.thin(theme.grid),
                },
            );
        }

        if cfg.ticks && cfg.grid {
            let stroke = pens.thin(theme.foreground.with_alpha(PANE_GRID_ALPHA));
            for t in ticks_inclusive(lo[j], hi[j], step[j]) {
                let (a, b) = (at(t, lo[k]), at(t, hi[k]));
                fig.push(Layer::Grid, Shape::Segment { a, b, stroke });
            }
            for t in ticks_inclusive(lo[k], hi[k], step[k]) {
                let (a, b) = (at(lo[j], t), at(hi[j], t));
                fig.push(Layer::Grid, Shape::Segment { a, b, stroke });
            }
        }
    }

    // x and y labels run along the front floor edges, z labels up the leftmost vertical edge
    let (zx, zy) = [
        (lo[0], lo[1]),
        (hi[0], lo[1]),
        (hi[0], hi[1]),
        (lo[0], hi[1]),
    ]
    .into_iter()
    .map(|(x, y)| ((x, y), fig.view.project([x, y, lo[2]]).0[0]))
    .min_by(|a, b| a.1.total_cmp(&b.1))
    .map(|(xy, _)| xy)
    .unwrap_or((lo[0], lo[1]));

    let edge = |axis: usize, t: f64| match axis {
        0 => [t, front(1), lo[2]],
        1 => [front(0), t, lo[2]],
        _ => [zx, zy, t],
    };
    let place = |axis: usize, rows: f64| {
        if axis == 2 {
            ([-rows * FONT_PT * pt, FONT_PT * pt / 3.0], Anchor::End)
        } else {
            ([0.0, rows * FONT_PT * pt], Anchor::Middle)
        }
    };

    if cfg.ticks && cfg.tick_labels {
        for axis in 0..3 {
            let (offset, anchor) = place(axis, 1.5);
            for t in ticks_inclusive(lo[axis], hi[axis], step[axis]) {
                fig.push(
                    Layer::Grid,
                    Shape::Text {
                        at: edge(axis, t),
                        offset,
                        text: tick_text(t, step[axis]),
                        style: pens.text(anchor),
                    },
                );
            }
        }
    }

    if cfg.axes_labels {
        for (axis, name) in ["x", "y", "z"].into_iter().enumerate() {
            let (offset, anchor) = place(axis, 3.5);
            fig.push(
                Layer::Grid,
                Shape::Text {
                    at: edge(axis, (lo[axis] + hi[axis]) / 2.0),
                    offset,
                    text: name.to_string(),
                    style: pens.text(anchor),
                },
            );
        }
    }

    if cfg.axes {
        let stroke = pens.line(theme.foreground, LineStyle::Solid);
        for i in 0..3 {
            let (mut a, mut b) = ([0.0; 3], [0.0; 3]);
            a[i] = lo[i];
            b[i] = hi[i];
            fig.push(Layer::Axes, Shape::Segment { a, b, stroke });
        }
    }

    if cfg.origin {
        fig.push(
            Layer::Arrows,
            Shape::Marker {
                at: [0.0; 3],
                marker: Marker::Cross,
                size: pens.marker(),
                color: theme.foreground,
            },
        );
    }
}

fn point_3d(fig: &mut Figure3, p: &Point3D, pens: &Pens) {
    fig.push(
        Layer::Points,
        Shape::Marker {
            at: p.pos,
            marker: Marker::Circle,
            size: pens.marker(),
            color: p.color,
        },
    );
    if let Some(label) = &p.label {
        fig.push(
            Layer::Labels,
            Shape::Text {
                at: p.pos,
                offset: [0.0, -(MARKER_RADIUS_PT + TICK_PAD_PT) * pens.pt],
                text: label.to_string(),
                style: pens.text(Anchor::Middle),
            },
        );
    }
}

fn push_3d(fig: &mut Figure3, obj: &Primitive3, pens: &Pens) -> Result<()> {
    match obj {
        Primitive3::Point(p) => point_3d(fig, p, pens),
        Primitive3::PointSet(set) => {
            for p in set.points() {
                point_3d(fig, p, pens);
            }
        }
        Primitive3::Line(l) => fig.push(
            Layer::Lines,
            Shape::Segment {
                a: l.start,
                b: l.end,
                stroke: pens.line(l.color, l.linestyle),
            },
        ),
        Primitive3::Arrow(a) => {
            let cone = a.cone()?;
            let [s, e] = cone.shaft();
            fig.push(
                Layer::Arrows,
                Shape::Segment {
                    a: s,
                    b: e,
                    stroke: pens.line(a.color, a.linestyle),
                },
            );
            for tri in cone.faces() {
                fig.push(
                    Layer::Arrows,
                    Shape::Polygon {
                        points: tri.to_vec(),
                        fill: a.color,
                    },
                );
            }
        }
    }

    Ok(())
}

// ###### NUMBER GRID #########################################################

/// Lay out an empty number plane over fixed ranges.
///
/// Grid lines run at every multiple of the step inside each range, the axes are drawn where
/// zero falls inside the ranges, and the plane is bordered, with ticks and numbers along its
/// bottom and left edges.
///
/// # Example
/// ```rust
/// # use vecdraw::*;
/// let cfg = NumberGridConfig {
///     x_range: [-2.0, 2.0, 1.0],
///     y_range: [-1.0, 1.0, 1.0],
///     ..Default::default()
/// };
/// let fig = number_grid(&cfg).unwrap();
/// assert_eq!(fig.view().viewport.max(), [2.0, 1.0]);
/// ```
pub fn number_grid(cfg: &NumberGridConfig) -> Result<Figure2> {
    let [x0, x1, sx] = cfg.x_range;
    let [y0, y1, sy] = cfg.y_range;
    for (min, max, step) in [(x0, x1, sx), (y0, y1, sy)] {
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidGridSize(step));
        }
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(Error::InvalidRange { min, max });
        }
    }

    let viewport = Extents2::from_min_max([x0, y0], [x1, y1]);
    let px = cfg.width * f64::from(cfg.dpi);
    let size = if cfg.nice_aspect_ratio {
        [px, px * (y1 - y0) / (x1 - x0)]
    } else {
        [px, px * GRID_FRAME_RATIO]
    };
    log::debug!("number grid of {:?} px over {:?}", size, viewport);

    let theme = cfg.theme();
    let pens = Pens::new(cfg.dpi, theme.foreground);
    let pt = pens.pt;
    let frame = Frame2 {
        viewport,
        plot: plot_area(size),
    };
    let mut fig = Figure::new(frame, theme, size);

    let xs = ticks_inclusive(x0, x1, sx);
    let ys = ticks_inclusive(y0, y1, sy);

    let stroke = pens.thin(theme.grid);
    for &x in &xs {
        fig.push(Layer::Grid, Shape::Segment { a: [x, y0], b: [x, y1], stroke });
    }
    for &y in &ys {
        fig.push(Layer::Grid, Shape::Segment { a: [x0, y], b: [x1, y], stroke });
    }

    let stroke = Stroke::new(theme.foreground, AXES_WIDTH_PT * pt);
    let tip = (x1 - x0) * TIP_FRACTION;
    let mut axes = Vec::new();
    if y0 <= 0.0 && 0.0 <= y1 {
        axes.push(([x0, 0.0], [x1, 0.0]));
    }
    if x0 <= 0.0 && 0.0 <= x1 {
        axes.push(([0.0, y0], [0.0, y1]));
    }
    for (a, b) in axes {
        if cfg.tips {
            let ArrowHead2 { shaft, head } = ArrowHead2::new(a, b, tip)?;
            fig.push(Layer::Axes, Shape::Segment { a: shaft[0], b: shaft[1], stroke });
            fig.push(
                Layer::Axes,
                Shape::Polygon {
                    points: head.to_vec(),
                    fill: theme.foreground,
                },
            );
        } else {
            fig.push(Layer::Axes, Shape::Segment { a, b, stroke });
        }
    }

    let stroke = Stroke::new(theme.foreground, BORDER_WIDTH_PT * pt);
    let corners = [[x0, y0], [x1, y0], [x1, y1], [x0, y1]];
    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % 4];
        fig.push(Layer::Axes, Shape::Segment { a, b, stroke });
    }

    let stroke = pens.thin(theme.foreground);
    let reach = (TICK_LENGTH_PT + TICK_PAD_PT) * pt;
    for &x in &xs {
        let at = [x, y0];
        let length = [0.0, TICK_LENGTH_PT * pt];
        fig.push(Layer::Axes, Shape::Tick { at, length, stroke });
        fig.push(
            Layer::Labels,
            Shape::Text {
                at,
                offset: [0.0, reach + FONT_PT * pt],
                text: tick_text(x, sx),
                style: pens.text(Anchor::Middle),
            },
        );
    }
    for &y in &ys {
        let at = [x0, y];
        let length = [-TICK_LENGTH_PT * pt, 0.0];
        fig.push(Layer::Axes, Shape::Tick { at, length, stroke });
        fig.push(
            Layer::Labels,
            Shape::Text {
                at,
                offset: [-reach, FONT_PT * pt / 3.0],
                text: tick_text(y, sy),
                style: pens.text(Anchor::End),
            },
        );
    }

    if let Some(path) = &cfg.save_as {
        fig.save_svg(path)?;
    }

    Ok(fig)
}
