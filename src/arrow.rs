//! Arrow heads: a filled triangle in 2D, a tessellated cone in 3D.
use crate::*;
use std::f64::consts::TAU;

/// Threshold on `|d.z|` beyond which the world Z axis is too close to the arrow direction to
/// build a frame from, and world Y is used instead.
const PARALLEL_Z: f64 = 0.999;

/// A 2D arrow split into its shaft and a filled triangular head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead2 {
    /// Tail to the base of the head.
    pub shaft: [Point2; 2],
    /// Tip first, then the two base corners.
    pub head: [Point2; 3],
}

impl ArrowHead2 {
    /// Head width relative to its length.
    pub const WIDTH_RATIO: f64 = 1.0 / 1.5;

    /// Build an arrow whose head is `head_length` long and `head_length / 1.5` wide, with the
    /// tip landing exactly on `head`.
    pub fn new(tail: Point2, head: Point2, head_length: f64) -> Result<Self> {
        let v = head.sub(tail);
        let len = v.mag();
        if len == 0.0 {
            return Err(Error::ZeroLengthArrow);
        }
        if !(head_length.is_finite() && head_length >= 0.0) {
            return Err(Error::InvalidArrowHead {
                length: head_length,
                radius: head_length * Self::WIDTH_RATIO / 2.0,
            });
        }
        if head_length > len {
            log::warn!(
                "arrow head ({}) is longer than the arrow ({}), shaft will point backwards",
                head_length,
                len
            );
        }

        let d = v.scale(len.recip());
        let base = tail.add(d.scale(len - head_length));
        let half = perp(d).scale(head_length * Self::WIDTH_RATIO / 2.0);

        Ok(Self {
            shaft: [tail, base],
            head: [head, base.add(half), base.sub(half)],
        })
    }
}

/// A 3D arrow head: a cone from the end of the shaft to the arrow's head.
///
/// The cone base is a ring of `resolution` vertices in the plane perpendicular to the arrow,
/// joined to the apex by a closed fan of triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    tail: Point3,
    shaft_end: Point3,
    apex: Point3,
    ring: Vec<Point3>,
}

impl Cone {
    /// # Example
    /// ```rust
    /// # use vecdraw::*;
    /// let cone = Cone::new([0.0; 3], [1.0, 0.0, 0.0], 0.2, 0.08, 4).unwrap();
    /// assert_eq!(cone.ring().len(), 4);
    /// assert_eq!(cone.faces().count(), 4);
    /// assert!(distance(cone.shaft()[1], [0.8, 0.0, 0.0]) < 1e-12);
    /// ```
    pub fn new(
        tail: Point3,
        head: Point3,
        head_length: f64,
        head_radius: f64,
        resolution: usize,
    ) -> Result<Self> {
        let v = head.sub(tail);
        let len = v.mag();
        if len == 0.0 {
            return Err(Error::ZeroLengthArrow);
        }
        if resolution < 3 {
            return Err(Error::InvalidResolution(resolution));
        }
        let valid = |x: f64| x.is_finite() && x >= 0.0;
        if !valid(head_length) || !valid(head_radius) {
            return Err(Error::InvalidArrowHead {
                length: head_length,
                radius: head_radius,
            });
        }
        if head_length > len {
            log::warn!(
                "arrow head ({}) is longer than the arrow ({}), shaft will point backwards",
                head_length,
                len
            );
        }

        let d = v.scale(len.recip());
        let shaft_end = tail.add(d.scale(len - head_length));
        let (a, b) = frame(d);

        let ring = (0..resolution)
            .map(|i| TAU * i as f64 / resolution as f64)
            .map(|t| {
                let r = a.scale(t.cos()).add(b.scale(t.sin()));
                shaft_end.add(r.scale(head_radius))
            })
            .collect();

        Ok(Self {
            tail,
            shaft_end,
            apex: head,
            ring,
        })
    }

    /// Tail to the centre of the cone base.
    pub fn shaft(&self) -> [Point3; 2] {
        [self.tail, self.shaft_end]
    }

    pub fn apex(&self) -> Point3 {
        self.apex
    }

    /// The base vertices, evenly spaced around the shaft end.
    pub fn ring(&self) -> &[Point3] {
        &self.ring
    }

    /// One triangle per consecutive pair of ring vertices, closing back onto the first.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = Tri> + '_ {
        let n = self.ring.len();
        (0..n).map(move |i| [self.ring[i], self.ring[(i + 1) % n], self.apex])
    }

    /// The cone as an indexed mesh: ring vertices first, the apex last.
    pub fn to_mesh(&self) -> TriMesh {
        TriMesh::from(self)
    }
}

/// Two unit vectors completing the unit direction `d` to a right handed orthonormal frame.
pub fn frame(d: Point3) -> (Point3, Point3) {
    let up = if d[2].abs() < PARALLEL_Z {
        [0.0, 0.0, 1.0]
    } else {
        [0.0, 1.0, 0.0]
    };
    let a = xprod(d, up).unit();
    let b = xprod(d, a);
    (a, b)
}
