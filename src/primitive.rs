//! Drawable primitives: labelled points, point sets, segments, and arrows in 2D and 3D.
use crate::*;

/// One member of a point set before the set's shared defaults are applied.
///
/// Unset values default to the set's color and no label.
///
/// ```rust
/// # use vecdraw::*;
/// let s = PointSet2D::new([
///     PointSpec::new([5.0, 0.0]),
///     PointSpec::new([1.0, 2.0]).color(Color::RED).label("A"),
/// ])
/// .unwrap();
/// assert_eq!(s.points()[0].pos, [5.0, 0.0]);
/// assert_eq!(s.points()[1].label.as_deref(), Some("A"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSpec<P> {
    pub pos: P,
    pub color: Option<Color>,
    pub label: Option<String>,
}

pub type PointSpec2 = PointSpec<Point2>;
pub type PointSpec3 = PointSpec<Point3>;

impl<P> PointSpec<P> {
    pub fn new(pos: P) -> Self {
        Self {
            pos,
            color: None,
            label: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl<const N: usize> PointSpec<[f64; N]> {
    /// Build from up to `N` coordinates, zero filling the rest.
    ///
    /// Slices longer than `N` are rejected rather than truncated.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        if coords.len() > N {
            return Err(Error::Arity {
                got: coords.len(),
                max: N,
            });
        }
        let mut pos = [0.0; N];
        pos[..coords.len()].copy_from_slice(coords);
        Ok(Self::new(pos))
    }
}

/// A coordinate tuple that describes one member of a point set in `P` space.
///
/// Tuples follow the positional order `(x, y[, z], color, label)`. Trailing coordinates
/// default to zero, so `(5.0,)` is the point `(5, 0)`. Only the arities that fit `P` are
/// implemented: a 3D tuple does not make a 2D point. Colors are parsed by name and an unknown
/// one fails the conversion.
///
/// ```compile_fail
/// # use vecdraw::*;
/// let _ = PointSet2D::new([(1.0, 2.0, 3.0)]);
/// ```
pub trait ToSpec<P> {
    fn to_spec(self) -> Result<PointSpec<P>>;
}

impl<P> ToSpec<P> for PointSpec<P> {
    fn to_spec(self) -> Result<PointSpec<P>> {
        Ok(self)
    }
}

fn with_color<P>(pos: P, color: &str) -> Result<PointSpec<P>> {
    Ok(PointSpec::new(pos).color(color.parse()?))
}

impl ToSpec<Point2> for Point2 {
    fn to_spec(self) -> Result<PointSpec2> {
        Ok(PointSpec::new(self))
    }
}

impl ToSpec<Point2> for (f64,) {
    fn to_spec(self) -> Result<PointSpec2> {
        Ok(PointSpec::new([self.0, 0.0]))
    }
}

impl ToSpec<Point2> for (f64, f64) {
    fn to_spec(self) -> Result<PointSpec2> {
        Ok(PointSpec::new([self.0, self.1]))
    }
}

impl ToSpec<Point2> for (f64, f64, &str) {
    fn to_spec(self) -> Result<PointSpec2> {
        let (x, y, color) = self;
        with_color([x, y], color)
    }
}

impl ToSpec<Point2> for (f64, f64, &str, &str) {
    fn to_spec(self) -> Result<PointSpec2> {
        let (x, y, color, label) = self;
        Ok(with_color([x, y], color)?.label(label))
    }
}

impl ToSpec<Point3> for Point3 {
    fn to_spec(self) -> Result<PointSpec3> {
        Ok(PointSpec::new(self))
    }
}

impl ToSpec<Point3> for (f64,) {
    fn to_spec(self) -> Result<PointSpec3> {
        Ok(PointSpec::new([self.0, 0.0, 0.0]))
    }
}

impl ToSpec<Point3> for (f64, f64) {
    fn to_spec(self) -> Result<PointSpec3> {
        Ok(PointSpec::new([self.0, self.1, 0.0]))
    }
}

impl ToSpec<Point3> for (f64, f64, f64) {
    fn to_spec(self) -> Result<PointSpec3> {
        let (x, y, z) = self;
        Ok(PointSpec::new([x, y, z]))
    }
}

impl ToSpec<Point3> for (f64, f64, f64, &str) {
    fn to_spec(self) -> Result<PointSpec3> {
        let (x, y, z, color) = self;
        with_color([x, y, z], color)
    }
}

impl ToSpec<Point3> for (f64, f64, f64, &str, &str) {
    fn to_spec(self) -> Result<PointSpec3> {
        let (x, y, z, color, label) = self;
        Ok(with_color([x, y, z], color)?.label(label))
    }
}

// ###### 2D ##################################################################

#[derive(Debug, Clone, PartialEq)]
pub struct Point2D {
    pub pos: Point2,
    pub color: Color,
    pub label: Option<String>,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: [x, y],
            color: Color::BLACK,
            label: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn from_spec(spec: PointSpec<Point2>, default: Color) -> Self {
        let PointSpec { pos, color, label } = spec;
        Self {
            pos,
            color: color.unwrap_or(default),
            label,
        }
    }
}

/// Points sharing a default color.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet2D {
    points: Vec<Point2D>,
    color: Color,
}

impl PointSet2D {
    /// A black point set.
    pub fn new<I, S>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: ToSpec<Point2>,
    {
        Self::with_color(points, Color::BLACK)
    }

    /// Fails on the first member whose tuple does not convert.
    pub fn with_color<I, S>(points: I, color: Color) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: ToSpec<Point2>,
    {
        let points = points
            .into_iter()
            .map(|s| Ok(Point2D::from_spec(s.to_spec()?, color)))
            .collect::<Result<_>>()?;
        Ok(Self { points, color })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    pub start: Point2,
    pub end: Point2,
    pub color: Color,
    pub linestyle: LineStyle,
    pub label: Option<String>,
}

impl Line2D {
    /// A solid gray segment.
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            color: Color::GRAY,
            linestyle: LineStyle::Solid,
            label: None,
        }
    }

    /// Segment from `start` to the origin.
    pub fn to_origin(start: Point2) -> Self {
        Self::new(start, [0.0; 2])
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn linestyle(mut self, linestyle: LineStyle) -> Self {
        self.linestyle = linestyle;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrow2D {
    pub head: Point2,
    pub tail: Point2,
    pub color: Color,
    pub linestyle: LineStyle,
    pub label: Option<String>,
}

impl Arrow2D {
    /// A solid red arrow from the origin to `head`.
    pub fn new(head: Point2) -> Self {
        Self {
            head,
            tail: [0.0; 2],
            color: Color::RED,
            linestyle: LineStyle::Solid,
            label: None,
        }
    }

    pub fn tail(mut self, tail: Point2) -> Self {
        self.tail = tail;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn linestyle(mut self, linestyle: LineStyle) -> Self {
        self.linestyle = linestyle;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// ###### 3D ##################################################################

#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    pub pos: Point3,
    pub color: Color,
    pub label: Option<String>,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            pos: [x, y, z],
            color: Color::BLACK,
            label: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn from_spec(spec: PointSpec<Point3>, default: Color) -> Self {
        let PointSpec { pos, color, label } = spec;
        Self {
            pos,
            color: color.unwrap_or(default),
            label,
        }
    }
}

/// Points sharing a default color.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet3D {
    points: Vec<Point3D>,
    color: Color,
}

impl PointSet3D {
    /// A black point set.
    pub fn new<I, S>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: ToSpec<Point3>,
    {
        Self::with_color(points, Color::BLACK)
    }

    /// Fails on the first member whose tuple does not convert.
    pub fn with_color<I, S>(points: I, color: Color) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: ToSpec<Point3>,
    {
        let points = points
            .into_iter()
            .map(|s| Ok(Point3D::from_spec(s.to_spec()?, color)))
            .collect::<Result<_>>()?;
        Ok(Self { points, color })
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line3D {
    pub start: Point3,
    pub end: Point3,
    pub color: Color,
    pub linestyle: LineStyle,
}

impl Line3D {
    /// A solid gray segment.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            color: Color::GRAY,
            linestyle: LineStyle::Solid,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn linestyle(mut self, linestyle: LineStyle) -> Self {
        self.linestyle = linestyle;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrow3D {
    pub head: Point3,
    pub tail: Point3,
    pub color: Color,
    pub linestyle: LineStyle,
    pub head_length: f64,
    pub head_radius: f64,
    /// Number of triangles approximating the cone.
    pub head_resolution: usize,
}

impl Arrow3D {
    /// A solid red arrow from the origin to `head`.
    pub fn new(head: Point3) -> Self {
        Self {
            head,
            tail: [0.0; 3],
            color: Color::RED,
            linestyle: LineStyle::Solid,
            head_length: 0.2,
            head_radius: 0.08,
            head_resolution: 24,
        }
    }

    pub fn tail(mut self, tail: Point3) -> Self {
        self.tail = tail;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn linestyle(mut self, linestyle: LineStyle) -> Self {
        self.linestyle = linestyle;
        self
    }

    /// Cone length, base radius, and triangle count.
    pub fn head(mut self, length: f64, radius: f64, resolution: usize) -> Self {
        self.head_length = length;
        self.head_radius = radius;
        self.head_resolution = resolution;
        self
    }

    /// The cone this arrow ends in.
    pub fn cone(&self) -> Result<Cone> {
        Cone::new(
            self.tail,
            self.head,
            self.head_length,
            self.head_radius,
            self.head_resolution,
        )
    }
}

// ###### CLOSED SETS #########################################################

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive2 {
    Point(Point2D),
    PointSet(PointSet2D),
    Line(Line2D),
    Arrow(Arrow2D),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive3 {
    Point(Point3D),
    PointSet(PointSet3D),
    Line(Line3D),
    Arrow(Arrow3D),
}

macro_rules! lift {
    ($enum:ident :: $variant:ident ( $ty:ty )) => {
        impl From<$ty> for $enum {
            fn from(x: $ty) -> Self {
                $enum::$variant(x)
            }
        }
    };
}

lift!(Primitive2::Point(Point2D));
lift!(Primitive2::PointSet(PointSet2D));
lift!(Primitive2::Line(Line2D));
lift!(Primitive2::Arrow(Arrow2D));
lift!(Primitive3::Point(Point3D));
lift!(Primitive3::PointSet(PointSet3D));
lift!(Primitive3::Line(Line3D));
lift!(Primitive3::Arrow(Arrow3D));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_coordinate_tuple() {
        let s = PointSet2D::with_color([(5.0,)], Color::BLUE).unwrap();
        let p = &s.points()[0];
        assert_eq!(p.pos, [5.0, 0.0]);
        assert_eq!(p.color, Color::BLUE);
        assert_eq!(p.label, None);
    }

    #[test]
    fn full_tuple_overrides_set_color() {
        let s = PointSet2D::new([(1.0, 2.0, "red", "A")]).unwrap();
        let p = &s.points()[0];
        assert_eq!(p.pos, [1.0, 2.0]);
        assert_eq!(p.color, Color::RED);
        assert_eq!(p.label.as_deref(), Some("A"));
        assert_eq!(s.color(), Color::BLACK);
    }

    #[test]
    fn three_d_tuples() {
        let short = PointSet3D::with_color([(1.0, 2.0)], Color::GRAY).unwrap();
        assert_eq!(short.points()[0].pos, [1.0, 2.0, 0.0]);
        assert_eq!(short.points()[0].color, Color::GRAY);

        let full = PointSet3D::with_color(
            [(1.0, 2.0, 3.0, "green", "P"), (4.0, 5.0, 6.0, "gray", "Q")],
            Color::GRAY,
        )
        .unwrap();
        let ps = full.points();
        assert_eq!(ps[0].pos, [1.0, 2.0, 3.0]);
        assert_eq!(ps[0].color, Color::GREEN);
        assert_eq!(ps[0].label.as_deref(), Some("P"));
        assert_eq!(ps[1].label.as_deref(), Some("Q"));
    }

    #[test]
    fn tuples_fit_their_space() {
        // the third member of a 3D tuple is z, of a 2D tuple the color
        let s = PointSet3D::new([(1.0, 2.0, 3.0, "blue")]).unwrap();
        assert_eq!(s.points()[0].pos, [1.0, 2.0, 3.0]);
        assert_eq!(s.points()[0].color, Color::BLUE);

        let s = PointSet2D::new([[1.0, 2.0]]).unwrap();
        assert_eq!(s.points()[0].pos, [1.0, 2.0]);
    }

    #[test]
    fn unknown_tuple_color_fails() {
        assert!(matches!(
            PointSet2D::with_color([(1.0, 1.0, "rde")], Color::BLUE),
            Err(Error::UnknownColor(_))
        ));
        assert!(matches!(
            PointSet3D::new([(1.0, 1.0, 1.0, "nope", "A")]),
            Err(Error::UnknownColor(_))
        ));
    }

    #[test]
    fn coordinate_slices() {
        let s = PointSpec3::from_coords(&[4.0]).unwrap();
        assert_eq!(s.pos, [4.0, 0.0, 0.0]);

        let s = PointSpec2::from_coords(&[]).unwrap();
        assert_eq!(s.pos, [0.0, 0.0]);

        assert!(matches!(
            PointSpec2::from_coords(&[1.0, 2.0, 3.0]),
            Err(Error::Arity { got: 3, max: 2 })
        ));
    }

    #[test]
    fn constructor_defaults() {
        let p = Point2D::new(1.0, 2.0).label("p");
        assert_eq!((p.pos, p.color), ([1.0, 2.0], Color::BLACK));
        assert_eq!(p.label.as_deref(), Some("p"));

        let l = Line2D::to_origin([1.0, 1.0]);
        assert_eq!((l.color, l.linestyle), (Color::GRAY, LineStyle::Solid));
        assert_eq!(l.end, [0.0, 0.0]);

        let a = Arrow2D::new([1.0, 1.0]);
        assert_eq!((a.color, a.tail), (Color::RED, [0.0, 0.0]));

        let a = Arrow3D::new([1.0, 1.0, 1.0]);
        assert_eq!(
            (a.head_length, a.head_radius, a.head_resolution),
            (0.2, 0.08, 24)
        );
    }

    #[test]
    fn lifting_into_enums() {
        let p: Primitive2 = Point2D::new(1.0, 2.0).into();
        assert!(matches!(p, Primitive2::Point(_)));
        let p: Primitive3 = Line3D::new([0.0; 3], [1.0; 3]).into();
        assert!(matches!(p, Primitive3::Line(_)));
    }
}
