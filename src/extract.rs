//! Flattening primitives into the raw coordinates they occupy.
use crate::*;
use std::{array, iter::Take, slice};

/// Something sitting at a single location.
pub trait Located {
    type Pos: Point;

    fn pos(&self) -> Self::Pos;
}

impl Located for Point2D {
    type Pos = Point2;
    fn pos(&self) -> Point2 {
        self.pos
    }
}

impl Located for Point3D {
    type Pos = Point3;
    fn pos(&self) -> Point3 {
        self.pos
    }
}

/// Lazy coordinates of one primitive.
///
/// Points give their position, sets one position per member in order, segments their start
/// then end, and arrows their head then tail.
pub enum Coords<'a, T: Located> {
    Fixed(Take<array::IntoIter<T::Pos, 2>>),
    Set(slice::Iter<'a, T>),
}

impl<'a, T: Located> Coords<'a, T> {
    fn one(p: T::Pos) -> Self {
        Coords::Fixed([p, p].into_iter().take(1))
    }

    fn two(a: T::Pos, b: T::Pos) -> Self {
        Coords::Fixed([a, b].into_iter().take(2))
    }
}

impl<'a, T: Located> Iterator for Coords<'a, T> {
    type Item = T::Pos;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Coords::Fixed(x) => x.next(),
            Coords::Set(x) => x.next().map(Located::pos),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Coords::Fixed(x) => x.size_hint(),
            Coords::Set(x) => x.size_hint(),
        }
    }
}

impl<'a, T: Located> ExactSizeIterator for Coords<'a, T> {}

impl Primitive2 {
    pub fn vectors(&self) -> Coords<'_, Point2D> {
        match self {
            Primitive2::Point(p) => Coords::one(p.pos),
            Primitive2::PointSet(s) => Coords::Set(s.points().iter()),
            Primitive2::Line(l) => Coords::two(l.start, l.end),
            Primitive2::Arrow(a) => Coords::two(a.head, a.tail),
        }
    }
}

impl Primitive3 {
    pub fn vectors(&self) -> Coords<'_, Point3D> {
        match self {
            Primitive3::Point(p) => Coords::one(p.pos),
            Primitive3::PointSet(s) => Coords::Set(s.points().iter()),
            Primitive3::Line(l) => Coords::two(l.start, l.end),
            Primitive3::Arrow(a) => Coords::two(a.head, a.tail),
        }
    }
}

/// Every coordinate of every primitive, in input order.
pub fn extract_vectors_2d(objects: &[Primitive2]) -> impl Iterator<Item = Point2> + '_ {
    objects.iter().flat_map(Primitive2::vectors)
}

/// Every coordinate of every primitive, in input order.
pub fn extract_vectors_3d(objects: &[Primitive3]) -> impl Iterator<Item = Point3> + '_ {
    objects.iter().flat_map(Primitive3::vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_set_keeps_order_and_count() {
        let s = PointSet2D::new([(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]).unwrap();
        let objects = [Primitive2::from(s)];
        let v = extract_vectors_2d(&objects).collect::<Vec<_>>();
        assert_eq!(v, vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(objects[0].vectors().len(), 3);
    }

    #[test]
    fn every_kind_in_order() {
        let objects: Vec<Primitive2> = vec![
            Point2D::new(1.0, 1.0).into(),
            Line2D::new([2.0, 0.0], [0.0, 2.0]).into(),
            Arrow2D::new([3.0, 3.0]).tail([1.0, -1.0]).into(),
        ];
        let v = extract_vectors_2d(&objects).collect::<Vec<_>>();
        assert_eq!(
            v,
            vec![[1.0, 1.0], [2.0, 0.0], [0.0, 2.0], [3.0, 3.0], [1.0, -1.0]]
        );

        // can be restarted by calling again
        assert_eq!(extract_vectors_2d(&objects).count(), 5);
    }

    #[test]
    fn three_d_extraction() {
        let objects: Vec<Primitive3> = vec![
            Point3D::new(1.0, 2.0, 3.0).into(),
            PointSet3D::new([(0.0, 0.0, 1.0), (0.0, 1.0, 0.0)])
                .unwrap()
                .into(),
            Arrow3D::new([1.0, 0.0, 0.0]).into(),
        ];
        let v = extract_vectors_3d(&objects).collect::<Vec<_>>();
        assert_eq!(v.len(), 5);
        assert_eq!(v[4], [0.0; 3]);
    }
}
