//! Line oriented text description of a scene.
//!
//! One primitive per line, blank lines and `#` comments ignored:
//!
//! ```text
//! point 3 4 color=red label="A"
//! points (1,2) (3,4,blue) (5,6,red,"B") color=green
//! line (0,0) (3,4) color=gray style=dashed label="l"
//! arrow (3,4) (0,0) color=red
//! arrow (1,0,0) head_length=0.3 head_resolution=12
//! ```
//!
//! Coordinates are either loose numbers (a single point) or parenthesised tuples, where a
//! tuple may end with a color and a quoted label. `line` and `arrow` take one or two tuples;
//! a missing second end is the origin.
use super::*;
use rustc_hash::FxHashMap;
use std::str::FromStr;

const KINDS: [&str; 4] = ["point", "points", "line", "arrow"];

#[derive(Debug, Clone, PartialEq)]
enum Item<'a> {
    Num(f64),
    Text(&'a str),
}

#[derive(Debug, Clone, PartialEq)]
enum Arg<'a> {
    Num(f64),
    Tuple(Vec<Item<'a>>),
}

enum Part<'a> {
    Arg(Arg<'a>),
    Opt((&'a str, &'a str)),
}

fn parts(s: &str) -> std::result::Result<Vec<Part>, nom::Err<()>> {
    use nom::{
        branch::*, bytes::complete::*, character::complete::*, combinator::*, multi::*,
        number::complete::double, sequence::*, IResult, Parser,
    };

    fn ws<'a, G, O>(g: G) -> impl FnMut(&'a str) -> IResult<&'a str, O, ()>
    where
        G: Parser<&'a str, O, ()>,
    {
        preceded(multispace0, g)
    }
    fn quoted(i: &str) -> IResult<&str, &str, ()> {
        delimited(char('"'), take_till(|c| c == '"'), char('"'))(i)
    }
    fn item(i: &str) -> IResult<&str, Item, ()> {
        alt((
            map(quoted, Item::Text),
            map(double, Item::Num),
            map(
                take_till1(|c: char| c == ',' || c == ')' || c.is_whitespace()),
                Item::Text,
            ),
        ))(i)
    }
    fn point_tuple(i: &str) -> IResult<&str, Vec<Item>, ()> {
        delimited(
            char('('),
            separated_list1(ws(char(',')), ws(item)),
            ws(char(')')),
        )(i)
    }
    let key = recognize(pair(alpha1, many0(alt((alphanumeric1, tag("_"))))));
    let option = separated_pair(
        key,
        char('='),
        alt((quoted, take_till1(|c: char| c.is_whitespace()))),
    );

    let (_, parts) = all_consuming(terminated(
        many0(ws(alt((
            map(option, Part::Opt),
            map(point_tuple, |t| Part::Arg(Arg::Tuple(t))),
            map(double, |x| Part::Arg(Arg::Num(x))),
        )))),
        multispace0,
    ))(s)?;

    Ok(parts)
}

/// Cut a trailing comment. A `#` only opens a comment at the start of a line or after
/// whitespace, so hex colors survive.
fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    let mut prev = ' ';
    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '#' if !quoted && prev.is_whitespace() => return &line[..i],
            _ => (),
        }
        prev = c;
    }
    line
}

#[derive(Debug)]
struct Statement<'a> {
    line: usize,
    kind: &'a str,
    args: Vec<Arg<'a>>,
    options: FxHashMap<&'a str, &'a str>,
}

impl<'a> Statement<'a> {
    fn parse(line: usize, text: &'a str) -> Result<Option<Self>> {
        let text = strip_comment(text).trim();
        if text.is_empty() {
            return Ok(None);
        }

        let (kind, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
        if !KINDS.contains(&kind) {
            return Err(Error::UnrecognizedPrimitive {
                line,
                kind: kind.to_string(),
            });
        }

        let parts = parts(rest).map_err(|_| Error::Parse {
            line,
            msg: format!("malformed `{}` statement", kind),
        })?;

        let mut args = Vec::new();
        let mut options = FxHashMap::default();
        for part in parts {
            match part {
                Part::Arg(a) => args.push(a),
                Part::Opt((k, v)) => {
                    options.insert(k, v);
                }
            }
        }

        let st = Self {
            line,
            kind,
            args,
            options,
        };
        // nom reads `nan` and `inf` as numbers
        let finite = |x: &f64| x.is_finite();
        let all_finite = st.args.iter().all(|a| match a {
            Arg::Num(x) => finite(x),
            Arg::Tuple(items) => items.iter().all(|i| match i {
                Item::Num(x) => finite(x),
                Item::Text(_) => true,
            }),
        });
        if !all_finite {
            return Err(st.malformed("coordinates must be finite"));
        }

        Ok(Some(st))
    }

    fn malformed(&self, msg: &str) -> Error {
        Error::Parse {
            line: self.line,
            msg: format!("`{}`: {}", self.kind, msg),
        }
    }

    /// Reject options outside `keys`.
    fn allow(&self, keys: &[&str]) -> Result<()> {
        let mut unknown = self
            .options
            .keys()
            .filter(|k| !keys.contains(*k))
            .collect::<Vec<_>>();
        unknown.sort();
        match unknown.first() {
            Some(key) => Err(Error::UnknownOption {
                line: self.line,
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn value<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.options
            .get(key)
            .map(|v| {
                v.parse::<T>().map_err(|_| Error::Parse {
                    line: self.line,
                    msg: format!("invalid value `{}` for `{}`", v, key),
                })
            })
            .transpose()
    }

    fn color(&self) -> Result<Option<Color>> {
        self.options.get("color").map(|s| s.parse()).transpose()
    }

    fn style(&self) -> Result<LineStyle> {
        self.options
            .get("style")
            .map(|s| s.parse())
            .transpose()
            .map(Option::unwrap_or_default)
    }

    fn label(&self) -> Option<&'a str> {
        self.options.get("label").copied()
    }

    fn spec<const N: usize>(&self, items: &[Item]) -> Result<PointSpec<[f64; N]>> {
        let n = items
            .iter()
            .take_while(|x| matches!(x, Item::Num(_)))
            .count();
        if n == 0 {
            return Err(self.malformed("a point needs at least one coordinate"));
        }
        let coords = items[..n]
            .iter()
            .filter_map(|x| match x {
                Item::Num(v) => Some(*v),
                Item::Text(_) => None,
            })
            .collect::<Vec<_>>();
        let mut spec = PointSpec::from_coords(&coords)?;

        let mut rest = items[n..].iter().map(|x| match x {
            Item::Text(s) => Ok(*s),
            Item::Num(_) => Err(self.malformed("coordinates must come before color and label")),
        });
        if let Some(c) = rest.next() {
            spec = spec.color(c?.parse()?);
        }
        if let Some(l) = rest.next() {
            spec = spec.label(l?);
        }
        if rest.next().is_some() {
            return Err(self.malformed("a point takes coordinates, a color, and a label"));
        }

        Ok(spec)
    }

    /// Every point given, either one run of loose numbers or one per tuple.
    fn specs<const N: usize>(&self) -> Result<Vec<PointSpec<[f64; N]>>> {
        if self.args.is_empty() {
            return Err(self.malformed("expected coordinates"));
        }

        if self.args.iter().all(|a| matches!(a, Arg::Num(_))) {
            let coords = self
                .args
                .iter()
                .filter_map(|a| match a {
                    Arg::Num(x) => Some(*x),
                    Arg::Tuple(_) => None,
                })
                .collect::<Vec<_>>();
            return Ok(vec![PointSpec::from_coords(&coords)?]);
        }

        self.args
            .iter()
            .map(|a| match a {
                Arg::Tuple(items) => self.spec(items),
                Arg::Num(_) => Err(self.malformed("loose numbers mixed with tuples")),
            })
            .collect()
    }

    fn single<const N: usize>(&self) -> Result<PointSpec<[f64; N]>> {
        let mut specs = self.specs()?;
        match specs.len() {
            1 => Ok(specs.remove(0)),
            _ => Err(self.malformed("expected a single point")),
        }
    }

    /// One or two bare positions, the second defaulting to the origin.
    fn ends<const N: usize>(&self) -> Result<([f64; N], [f64; N])> {
        let specs = self.specs::<N>()?;
        if specs.iter().any(|s| s.color.is_some() || s.label.is_some()) {
            return Err(self.malformed("colors and labels are given as options"));
        }
        let mut specs = specs.into_iter();
        match (specs.next(), specs.next(), specs.next()) {
            (Some(a), b, None) => Ok((a.pos, b.map_or([0.0; N], |b| b.pos))),
            _ => Err(self.malformed("expected one or two points")),
        }
    }
}

fn statements(text: &str) -> Result<Vec<Statement>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, l)| Statement::parse(i + 1, l).transpose())
        .collect()
}

/// Parse a 2D scene.
///
/// # Example
/// ```rust
/// # use vecdraw::*;
/// let scene = io::scene::parse_scene_2d("point 3 4 color=red label=\"A\"\narrow (1,1)").unwrap();
/// assert_eq!(scene.len(), 2);
/// ```
pub fn parse_scene_2d(text: &str) -> Result<Vec<Primitive2>> {
    let scene = statements(text)?
        .iter()
        .map(primitive_2d)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("parsed {} 2D primitives", scene.len());
    Ok(scene)
}

/// Parse a 3D scene. Labels are only accepted on points.
pub fn parse_scene_3d(text: &str) -> Result<Vec<Primitive3>> {
    let scene = statements(text)?
        .iter()
        .map(primitive_3d)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("parsed {} 3D primitives", scene.len());
    Ok(scene)
}

fn primitive_2d(st: &Statement) -> Result<Primitive2> {
    match st.kind {
        "point" => {
            st.allow(&["color", "label"])?;
            let spec = st.single::<2>()?;
            let [x, y] = spec.pos;
            let mut p = Point2D::new(x, y);
            if let Some(c) = st.color()?.or(spec.color) {
                p = p.color(c);
            }
            if let Some(l) = st.label().or(spec.label.as_deref()) {
                p = p.label(l);
            }
            Ok(p.into())
        }
        "points" => {
            st.allow(&["color"])?;
            let specs = st.specs::<2>()?;
            let set = match st.color()? {
                Some(c) => PointSet2D::with_color(specs, c)?,
                None => PointSet2D::new(specs)?,
            };
            Ok(set.into())
        }
        "line" => {
            st.allow(&["color", "style", "label"])?;
            let (a, b) = st.ends::<2>()?;
            let mut l = Line2D::new(a, b).linestyle(st.style()?);
            if let Some(c) = st.color()? {
                l = l.color(c);
            }
            if let Some(s) = st.label() {
                l = l.label(s);
            }
            Ok(l.into())
        }
        "arrow" => {
            st.allow(&["color", "style", "label"])?;
            let (head, tail) = st.ends::<2>()?;
            let mut a = Arrow2D::new(head)
                .tail(tail)
                .linestyle(st.style()?);
            if let Some(c) = st.color()? {
                a = a.color(c);
            }
            if let Some(s) = st.label() {
                a = a.label(s);
            }
            Ok(a.into())
        }
        kind => Err(Error::UnrecognizedPrimitive {
            line: st.line,
            kind: kind.to_string(),
        }),
    }
}

fn primitive_3d(st: &Statement) -> Result<Primitive3> {
    match st.kind {
        "point" => {
            st.allow(&["color", "label"])?;
            let spec = st.single::<3>()?;
            let [x, y, z] = spec.pos;
            let mut p = Point3D::new(x, y, z);
            if let Some(c) = st.color()?.or(spec.color) {
                p = p.color(c);
            }
            if let Some(l) = st.label().or(spec.label.as_deref()) {
                p = p.label(l);
            }
            Ok(p.into())
        }
        "points" => {
            st.allow(&["color"])?;
            let specs = st.specs::<3>()?;
            let set = match st.color()? {
                Some(c) => PointSet3D::with_color(specs, c)?,
                None => PointSet3D::new(specs)?,
            };
            Ok(set.into())
        }
        "line" => {
            st.allow(&["color", "style"])?;
            let (a, b) = st.ends::<3>()?;
            let mut l = Line3D::new(a, b).linestyle(st.style()?);
            if let Some(c) = st.color()? {
                l = l.color(c);
            }
            Ok(l.into())
        }
        "arrow" => {
            st.allow(&[
                "color",
                "style",
                "head_length",
                "head_radius",
                "head_resolution",
            ])?;
            let (head, tail) = st.ends::<3>()?;
            let mut a = Arrow3D::new(head)
                .tail(tail)
                .linestyle(st.style()?);
            if let Some(c) = st.color()? {
                a = a.color(c);
            }
            a = a.head(
                st.value("head_length")?.unwrap_or(a.head_length),
                st.value("head_radius")?.unwrap_or(a.head_radius),
                st.value("head_resolution")?.unwrap_or(a.head_resolution),
            );
            Ok(a.into())
        }
        kind => Err(Error::UnrecognizedPrimitive {
            line: st.line,
            kind: kind.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments() {
        assert_eq!(strip_comment("# all of it"), "");
        assert_eq!(strip_comment("point 1 2 # trailing"), "point 1 2 ");
        assert_eq!(strip_comment("point 1 2 color=#ff0000"), "point 1 2 color=#ff0000");
        assert_eq!(strip_comment(r#"point 1 2 label=" #1""#), r#"point 1 2 label=" #1""#);
    }

    #[test]
    fn parsing_2d() {
        let text = r#"
            # a small scene
            point 3 4 color=red label="A"
            points (1,2) (3,4,blue) (5,6,red,"B") color=green
            line (0,0) (3,4) color=gray style=dashed label="l"
            arrow (3,4) (0,0) color=#00ff00
            arrow (2.5, -1)
        "#;
        let scene = parse_scene_2d(text).unwrap();
        assert_eq!(scene.len(), 5);

        assert_eq!(
            scene[0],
            Primitive2::from(Point2D::new(3.0, 4.0).color(Color::RED).label("A"))
        );

        let Primitive2::PointSet(set) = &scene[1] else {
            panic!("expecting a point set")
        };
        assert_eq!(set.color(), Color::GREEN);
        let colors = set.points().iter().map(|p| p.color).collect::<Vec<_>>();
        assert_eq!(colors, vec![Color::GREEN, Color::BLUE, Color::RED]);
        assert_eq!(set.points()[2].label.as_deref(), Some("B"));
        assert_eq!(set.points()[2].pos, [5.0, 6.0]);

        assert_eq!(
            scene[2],
            Primitive2::from(
                Line2D::new([0.0, 0.0], [3.0, 4.0])
                    .color(Color::GRAY)
                    .linestyle(LineStyle::Dashed)
                    .label("l")
            )
        );
        assert_eq!(
            scene[3],
            Primitive2::from(Arrow2D::new([3.0, 4.0]).color(Color::rgb(0, 255, 0)))
        );
        assert_eq!(scene[4], Primitive2::from(Arrow2D::new([2.5, -1.0])));
    }

    #[test]
    fn parsing_3d() {
        let text = "arrow (1,0,0) head_length=0.3 head_resolution=12\nline (1,2,3) style=:\npoint 1 2";
        let scene = parse_scene_3d(text).unwrap();
        assert_eq!(
            scene,
            vec![
                Primitive3::from(Arrow3D::new([1.0, 0.0, 0.0]).head(0.3, 0.08, 12)),
                Primitive3::from(
                    Line3D::new([1.0, 2.0, 3.0], [0.0; 3]).linestyle(LineStyle::Dotted)
                ),
                Primitive3::from(Point3D::new(1.0, 2.0, 0.0)),
            ]
        );
    }

    #[test]
    fn errors() {
        let e = parse_scene_2d("point 1 1\n\ncircle (0,0) 3").unwrap_err();
        assert!(matches!(
            e,
            Error::UnrecognizedPrimitive { line: 3, ref kind } if kind == "circle"
        ));

        let e = parse_scene_2d("point 1 1 size=3").unwrap_err();
        assert!(matches!(e, Error::UnknownOption { line: 1, ref key } if key == "size"));

        // labels are not an option of 3D lines
        let e = parse_scene_3d("line (1,1,1) label=\"x\"").unwrap_err();
        assert!(matches!(e, Error::UnknownOption { .. }));

        let e = parse_scene_2d("line (0,0 (1,1)").unwrap_err();
        assert!(matches!(e, Error::Parse { line: 1, .. }));

        let e = parse_scene_2d("point 1 2 3").unwrap_err();
        assert!(matches!(e, Error::Arity { got: 3, max: 2 }));

        let e = parse_scene_2d("point 1 2 color=chartreuse").unwrap_err();
        assert!(matches!(e, Error::UnknownColor(_)));

        let e = parse_scene_2d("line (0,0) (1,1) style=wavy").unwrap_err();
        assert!(matches!(e, Error::UnknownLineStyle(_)));

        let e = parse_scene_3d("arrow (1,1,1) head_resolution=many").unwrap_err();
        assert!(matches!(e, Error::Parse { .. }));

        let e = parse_scene_2d("arrow (1,1) (0,0) (2,2)").unwrap_err();
        assert!(matches!(e, Error::Parse { .. }));

        let e = parse_scene_2d("points").unwrap_err();
        assert!(matches!(e, Error::Parse { .. }));

        let e = parse_scene_3d("points (1,2,3,purplish)").unwrap_err();
        assert!(matches!(e, Error::UnknownColor(_)));
    }

    #[test]
    fn non_finite_coordinates() {
        for text in [
            "point nan 1",
            "point 1 inf",
            "points (1,2) (inf,0)",
            "arrow (1,NaN)",
        ] {
            let e = parse_scene_2d(text).unwrap_err();
            assert!(matches!(e, Error::Parse { line: 1, .. }), "{}: {:?}", text, e);
        }
        let e = parse_scene_3d("line (0,0,0) (1,1,inf)").unwrap_err();
        assert!(matches!(e, Error::Parse { .. }));
    }
}
