use std::ops;

/// Fixed dimension vector of `f64`s.
///
/// Points and vectors share the same representation: a [`Point2`] is both the location `(x, y)`
/// and the displacement from the origin to it.
pub trait Point: Copy + Sized + IntoIterator<Item = f64> {
    /// Set all the values to this value.
    fn all(v: f64) -> Self;

    /// Set all values to zero.
    fn zero() -> Self {
        Self::all(0.)
    }

    /// Set all values to one.
    fn one() -> Self {
        Self::all(1.)
    }

    /// Scale point by multiplying all dimensions by `scalar`.
    fn scale(self, scalar: f64) -> Self;

    /// Calculate the magnitude of the vector.
    fn mag(self) -> f64 {
        dot_prod(self, self).sqrt()
    }

    /// Normalise the vector by the magnitude.
    ///
    /// A zero vector normalises to `NaN`s, callers guard against that themselves.
    fn unit(self) -> Self {
        self.scale(self.mag().recip())
    }

    /// Return the minimum of each dimension.
    fn min_all(self, b: Self) -> Self {
        xfm(self, b, f64::min)
    }

    /// Return the maximum of each dimension.
    fn max_all(self, b: Self) -> Self {
        xfm(self, b, f64::max)
    }

    /// All dimensions are finite.
    fn is_finite(self) -> bool {
        self.into_iter().all(f64::is_finite)
    }

    /// Perform a transformation on each pair of dimensions.
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self;

    /// Perform a transformation on each dimension.
    fn map_each<F: Fn(f64) -> f64>(self, f: F) -> Self {
        self.xfm(self, |a, _| f(a))
    }
}

pub trait Add<Rhs = Self> {
    fn add(self, rhs: Rhs) -> Self;
    fn sub(self, rhs: Rhs) -> Self
    where
        Self: Sized + Copy,
        Rhs: Point,
    {
        self.add(rhs.scale(-1.0))
    }
}

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

/// 3D Point (X,Y,Z).
pub type Point3 = [f64; 3];

impl Add for Point2 {
    fn add(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Add::add)
    }

    fn sub(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Sub::sub)
    }
}
impl Point for Point2 {
    fn all(v: f64) -> Self {
        [v; 2]
    }
    fn scale(self, scalar: f64) -> Self {
        self.map(|f| f * scalar)
    }
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self {
        let [x0, y0] = self;
        let [x1, y1] = b;
        [f(x0, x1), f(y0, y1)]
    }
}

impl Add for Point3 {
    fn add(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Add::add)
    }

    fn sub(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Sub::sub)
    }
}
impl Point for Point3 {
    fn all(v: f64) -> Self {
        [v; 3]
    }
    fn scale(self, scalar: f64) -> Self {
        self.map(|f| f * scalar)
    }
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self {
        let [x0, y0, z0] = self;
        let [x1, y1, z1] = b;
        [f(x0, x1), f(y0, y1), f(z0, z1)]
    }
}

/// The vector rotated a quarter turn counter-clockwise, `(-y, x)`.
pub fn perp(v: Point2) -> Point2 {
    let [x, y] = v;
    [-y, x]
}

/// Halfway between `a` and `b`.
pub fn midpoint<P: Point + Add>(a: P, b: P) -> P {
    a.add(b).scale(0.5)
}

pub fn dot_prod<P: Point>(a: P, b: P) -> f64 {
    a.into_iter().zip(b).map(|(a, b)| a * b).sum()
}

#[allow(clippy::many_single_char_names)]
pub fn xprod(a: Point3, b: Point3) -> Point3 {
    let [ax, ay, az] = a;
    let [bx, by, bz] = b;
    let x = ay * bz - az * by;
    let y = az * bx - ax * bz;
    let z = ax * by - ay * bx;
    [x, y, z]
}

/// Sum any number of vectors. An empty input sums to the zero vector.
pub fn add_all<P, I>(vectors: I) -> P
where
    P: Point + Add,
    I: IntoIterator<Item = P>,
{
    vectors.into_iter().fold(P::zero(), Add::add)
}

/// Euclidean distance between two points.
pub fn distance<P: Point + Add>(a: P, b: P) -> f64 {
    a.sub(b).mag()
}

/// The length of the closed loop through `points`, including the edge from the last point back
/// to the first.
pub fn perimeter<P: Point + Add>(points: &[P]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| distance(points[i], points[(i + 1) % n]))
        .sum()
}

/// `(length, angle)` of a 2D vector, angle in radians from the positive x axis.
pub fn to_polar(v: Point2) -> (f64, f64) {
    let [x, y] = v;
    (v.mag(), y.atan2(x))
}

/// Inverse of [`to_polar`].
pub fn to_cartesian((length, angle): (f64, f64)) -> Point2 {
    [length * angle.cos(), length * angle.sin()]
}

/// Rotate every vector about the origin by `angle` radians.
pub fn rotate(angle: f64, vectors: &[Point2]) -> Vec<Point2> {
    vectors
        .iter()
        .copied()
        .map(to_polar)
        .map(|(l, a)| to_cartesian((l, a + angle)))
        .collect()
}

/// Shift every vector by `translation`.
pub fn translate<P: Point + Add>(translation: P, vectors: &[P]) -> Vec<P> {
    vectors.iter().map(|&v| translation.add(v)).collect()
}

/// Angle between two vectors, in radians.
pub fn angle_between<P: Point>(a: P, b: P) -> f64 {
    (dot_prod(a, b) / (a.mag() * b.mag())).acos()
}

/// Signed length of `v` projected onto `direction`.
pub fn component<P: Point>(v: P, direction: P) -> f64 {
    dot_prod(v, direction) / direction.mag()
}

/// Helper function which effectively transforms to [`Point::xfm`].
#[inline(always)]
pub fn xfm<P: Point, F: Fn(f64, f64) -> f64>(a: P, b: P, f: F) -> P {
    P::xfm(a, b, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close<P: Point + Add>(a: P, b: P) -> bool {
        distance(a, b) < 1e-11
    }

    #[test]
    fn point_adding() {
        let p = [0.0, 1.0].add([3.0, 1.0]);
        assert_eq!(p, [3.0, 2.0]);

        let p = [0.0, 1.0, 5.0].add([3.0, 1.0, 5.0]);
        assert_eq!(p, [3.0, 2.0, 10.0]);

        let p = [0.0, 1.0, 5.0].sub([3.0, 1.0, 5.0]);
        assert_eq!(p, [-3.0, 0.0, 0.0]);
    }

    #[test]
    fn summing_vectors() {
        assert_eq!(add_all([[1.0, 0.0], [2.0, 3.0], [-1.0, 1.0]]), [2.0, 4.0]);
        assert_eq!(add_all(Vec::<Point3>::new()), [0.0; 3]);
    }

    #[test]
    fn xproduct_test() {
        let v = xprod([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(v, [0.0, 0.0, 1.0]);

        let v = xprod([1.0, 1.0, 0.0], [-1.0, 1.0, 0.0]);
        assert_eq!(v, [0.0, -0.0, 2.0]);
    }

    #[test]
    fn mag_testing() {
        let m = [3.0, -4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [-2.0, -3.0, 6.0].mag() - 7.0;
        assert!(m.abs() < 1e-11);
    }

    #[test]
    fn unit_vector() {
        assert_eq!([2.0, 0.0].unit(), [1.0, 0.0]);
        assert_eq!([0.0, 0.0, 2.0].unit(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn perimeter_of_square() {
        let sq = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert!((perimeter(&sq) - 4.0).abs() < 1e-11);
        assert_eq!(perimeter::<Point2>(&[]), 0.0);
    }

    #[test]
    fn polar_conversions() {
        let (l, a) = to_polar([0.0, 2.0]);
        assert!((l - 2.0).abs() < 1e-11);
        assert!((a - FRAC_PI_2).abs() < 1e-11);

        assert!(close(to_cartesian((2.0, PI)), [-2.0, 0.0]));
    }

    #[test]
    fn rotating_and_translating() {
        let r = rotate(FRAC_PI_2, &[[1.0, 0.0], [0.0, 3.0]]);
        assert!(close(r[0], [0.0, 1.0]));
        assert!(close(r[1], [-3.0, 0.0]));

        let t = translate([1.0, 1.0, 1.0], &[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]]);
        assert_eq!(t, vec![[1.0, 1.0, 1.0], [2.0, 3.0, 4.0]]);
    }

    #[test]
    fn angles_and_components() {
        let a = angle_between([1.0, 0.0], [0.0, 5.0]);
        assert!((a - FRAC_PI_2).abs() < 1e-11);

        let c = component([3.0, 4.0, 0.0], [0.0, 2.0, 0.0]);
        assert!((c - 4.0).abs() < 1e-11);
    }

    #[test]
    fn perp_and_midpoint() {
        assert_eq!(perp([1.0, 2.0]), [-2.0, 1.0]);
        assert_eq!(dot_prod(perp([1.0, 2.0]), [1.0, 2.0]), 0.0);
        assert_eq!(midpoint([0.0, 0.0, 0.0], [2.0, 4.0, -2.0]), [1.0, 2.0, -1.0]);
    }
}
