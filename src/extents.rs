use crate::*;

pub type Extents2 = Extents<Point2>;
pub type Extents3 = Extents<Point3>;

/// Axis aligned bounding box, stored as the minimum corner and the size along each axis.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Extents<P> {
    pub origin: P,
    pub size: P,
}

impl<P> Extents<P>
where
    P: Copy + Point + Add,
{
    /// Zero sized extents sitting on the origin.
    pub fn zero() -> Self {
        Self {
            origin: P::zero(),
            size: P::zero(),
        }
    }

    pub fn from_min_max(min: P, max: P) -> Self {
        let size = max.sub(min);

        Self { origin: min, size }
    }

    pub fn min(&self) -> P {
        self.origin
    }

    pub fn max(&self) -> P {
        self.origin.add(self.size)
    }

    /// The `(min, max)` pair of each axis.
    pub fn ranges(&self) -> impl Iterator<Item = (f64, f64)> {
        self.min().into_iter().zip(self.max())
    }

    pub fn union(self, other: Self) -> Self {
        let origin = self.origin.min_all(other.origin);
        let max = self.max().max_all(other.max());
        let size = max.sub(origin);

        Self { origin, size }
    }

    /// Grow the extents on both sides of each axis by the matching component of `by`.
    ///
    /// Non-finite components leave that axis as is.
    ///
    /// # Example
    /// ```rust
    /// # use vecdraw::*;
    /// let e = Extents2::from_min_max([0.0, 0.0], [2.0, 1.0]);
    /// assert_eq!(e.pad([1.0, 0.5]), Extents2::from_min_max([-1.0, -0.5], [3.0, 1.5]));
    /// ```
    pub fn pad(self, by: P) -> Self {
        let by = by.map_each(|x| if x.is_finite() { x } else { 0.0 });
        Self::from_min_max(self.min().sub(by), self.max().add(by))
    }

    /// Bounds of `points`, or [`Self::zero`] for an empty input.
    fn bounding<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        let Some(init) = iter.next() else {
            return Self::zero();
        };

        let (min, max) = iter.fold((init, init), |(min, max), p| {
            (min.min_all(p), max.max_all(p))
        });

        Self::from_min_max(min, max)
    }
}

impl Extents3 {
    /// Return the 8 corners of this box.
    pub fn corners(&self) -> [Point3; 8] {
        let [x0, y0, z0] = self.origin;
        let [x1, y1, z1] = self.max();
        [
            [x0, y0, z0],
            [x1, y0, z0],
            [x1, y1, z0],
            [x0, y1, z0],
            [x0, y0, z1],
            [x1, y0, z1],
            [x1, y1, z1],
            [x0, y1, z1],
        ]
    }
}

impl FromIterator<Point3> for Extents3 {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Point3>,
    {
        Self::bounding(iter)
    }
}

impl FromIterator<Point2> for Extents2 {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Point2>,
    {
        Self::bounding(iter)
    }
}

impl Envelops<Point3> for Extents3 {
    fn envelops(&self, p: Point3) -> bool {
        p.into_iter()
            .zip(self.ranges())
            .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }
}

impl Envelops<Point2> for Extents2 {
    fn envelops(&self, p: Point2) -> bool {
        let [x, y] = p;

        let [mx, my] = self.origin;

        if x < mx || y < my {
            return false;
        }

        let [mx, my] = self.max();

        x <= mx && y <= my
    }
}

/// Types with an axis aligned bounding box.
pub trait Aabb {
    type Space;

    fn aabb(&self) -> Extents<Self::Space>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_points() {
        let e = Extents2::from_iter([[1.0, 2.0], [-1.0, 5.0], [0.5, -3.0]]);
        assert_eq!(e.min(), [-1.0, -3.0]);
        assert_eq!(e.max(), [1.0, 5.0]);

        assert_eq!(Extents3::from_iter(Vec::new()), Extents3::zero());
    }

    #[test]
    fn union_with_zero_takes_in_origin() {
        let e = Extents3::from_min_max([1.0, 2.0, -4.0], [3.0, 5.0, -1.0]).union(Extents3::zero());
        assert_eq!(e.min(), [0.0, 0.0, -4.0]);
        assert_eq!(e.max(), [3.0, 5.0, 0.0]);
        assert!(e.envelops([0.0; 3]));
    }

    #[test]
    fn padding() {
        let e = Extents3::from_min_max([0.0; 3], [1.0; 3]).pad([0.5, f64::NAN, 0.0]);
        assert_eq!(e.min(), [-0.5, 0.0, 0.0]);
        assert_eq!(e.max(), [1.5, 1.0, 1.0]);
    }

    #[test]
    fn envelopment() {
        let e = Extents2::from_min_max([-1.0, -1.0], [1.0, 1.0]);
        assert!(e.envelops([1.0, -1.0]));
        assert!(!e.envelops([1.1, 0.0]));

        let e = Extents3::from_min_max([-1.0; 3], [1.0; 3]);
        assert!(e.envelops([0.0, 1.0, -1.0]));
        assert!(!e.envelops([0.0, 0.0, -1.5]));
    }
}
