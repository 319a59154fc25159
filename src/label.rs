use crate::*;

/// Distance, in data units, between a label anchor and the geometry it annotates.
pub const LABEL_OFFSET: f64 = 0.2;

/// Anchor for a text label attached to a segment or a point.
///
/// For a segment `start -> end` the label sits [`LABEL_OFFSET`] away from the midpoint along the
/// left hand normal `(-dy, dx) / |d|`.
///
/// For a single point the point's own position vector stands in for the direction and only the
/// vertical part of the offset is applied, so the anchor is `(x, y + 0.2 * x / |p|)`. A point on
/// the y axis gets no offset and points left of the y axis get their labels below.
///
/// Zero length directions use a norm of `1.0`, so this never divides by zero.
///
/// # Example
/// ```rust
/// # use vecdraw::*;
/// let [x, y] = label_xy([0.0, 0.0], Some([2.0, 0.0]));
/// assert!((x - 1.0).abs() < 1e-12 && (y - 0.2).abs() < 1e-12);
/// ```
pub fn label_xy(start: Point2, end: Option<Point2>) -> Point2 {
    let (mid, dir) = match end {
        Some(end) => (midpoint(start, end), end.sub(start)),
        None => (start, start),
    };

    let norm = match dir.mag() {
        n if n == 0.0 => 1.0,
        n => n,
    };
    let [nx, ny] = perp(dir).scale(norm.recip());

    match end {
        Some(_) => mid.add([nx, ny].scale(LABEL_OFFSET)),
        None => [start[0], mid[1] + LABEL_OFFSET * ny],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    fn close(a: Point2, b: Point2) -> bool {
        distance(a, b) < 1e-12
    }

    #[test]
    fn horizontal_and_vertical_segments() {
        assert!(close(label_xy([0.0, 0.0], Some([4.0, 0.0])), [2.0, 0.2]));
        // reversed direction flips the side
        assert!(close(label_xy([4.0, 0.0], Some([0.0, 0.0])), [2.0, -0.2]));
        assert!(close(label_xy([1.0, 0.0], Some([1.0, 2.0])), [0.8, 1.0]));
    }

    #[test]
    fn degenerate_segment_offsets_up() {
        assert!(close(label_xy([3.0, 3.0], Some([3.0, 3.0])), [3.0, 3.0]));
    }

    #[test]
    fn single_points() {
        // direction is the position itself: (3,4)/5 rotated is (-0.8, 0.6)
        assert!(close(label_xy([3.0, 4.0], None), [3.0, 4.0 + 0.2 * 0.6]));
        // on the y axis, no vertical component in the normal
        assert!(close(label_xy([0.0, 2.0], None), [0.0, 2.0]));
        // left of the y axis, label goes below
        assert!(close(label_xy([-1.0, 0.0], None), [-1.0, -0.2]));
        // the origin falls back to a unit norm and a zero normal
        assert!(close(label_xy([0.0, 0.0], None), [0.0, 0.0]));
    }

    #[quickcheck]
    fn segment_labels_are_perpendicular(a: (f64, f64), b: (f64, f64)) -> TestResult {
        // fold arbitrary floats into a drawable range
        let f = |x: f64| if x.is_finite() { x % 1000.0 } else { 0.0 };
        let (a, b) = ([f(a.0), f(a.1)], [f(b.0), f(b.1)]);
        if distance(a, b) < 1e-3 {
            return TestResult::discard();
        }

        let l = label_xy(a, Some(b));
        let off = l.sub(midpoint(a, b));
        let d = b.sub(a).unit();

        TestResult::from_bool(
            (off.mag() - LABEL_OFFSET).abs() < 1e-9 && dot_prod(off, d).abs() < 1e-9,
        )
    }
}
