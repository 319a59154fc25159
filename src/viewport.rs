//! Fitting axis limits around a scene.
//!
//! Both fits always take in the origin, so a scene whose geometry is strictly positive (or
//! strictly negative) still shows where the axes cross.
use crate::*;

/// Fraction of the extent added to each side of a 3D viewport.
pub const DEFAULT_MARGIN: f64 = 0.1;

/// Stand-in extent for an axis with no spread, so the viewport never collapses.
pub const MIN_EXTENT: f64 = 1e-9;

/// Fit a 2D viewport whose limits land on multiples of `grid_size`.
///
/// Each axis is padded by `max(ceil(5% of extent), step)` before rounding the lower limit down
/// and the upper limit up to the grid.
///
/// # Example
/// ```rust
/// # use vecdraw::*;
/// let v = fit_2d([[3.0, 4.0]], [1.0, 1.0]).unwrap();
/// assert_eq!(v.min(), [-1.0, -1.0]);
/// assert_eq!(v.max(), [4.0, 5.0]);
/// ```
pub fn fit_2d<I>(points: I, grid_size: Point2) -> Result<Extents2>
where
    I: IntoIterator<Item = Point2>,
{
    if let Some(&s) = grid_size.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
        return Err(Error::InvalidGridSize(s));
    }

    let e = Extents2::from_iter(points).union(Extents2::zero());

    let pad = e
        .size
        .xfm(grid_size, |size, step| (0.05 * size).ceil().max(step));
    let lo = e
        .min()
        .sub(pad)
        .xfm(grid_size, |x, step| (x / step).floor() * step);
    let hi = e
        .max()
        .add(pad)
        .xfm(grid_size, |x, step| (x / step).ceil() * step);

    let v = Extents2::from_min_max(lo, hi);
    log::debug!("fitted 2D viewport {:?} -> {:?}", v.min(), v.max());
    Ok(v)
}

/// Fit a 3D viewport padded by `margin * extent` on each side of each axis.
///
/// Axes without spread use [`MIN_EXTENT`] as their extent.
pub fn fit_3d<I>(points: I, margin: f64) -> Extents3
where
    I: IntoIterator<Item = Point3>,
{
    let e = Extents3::from_iter(points).union(Extents3::zero());
    let pad = e.size.map_each(|r| r.max(MIN_EXTENT) * margin);
    let v = e.pad(pad);
    log::debug!("fitted 3D viewport {:?} -> {:?}", v.min(), v.max());
    v
}

/// Longest run of ticks generated for one axis.
pub const MAX_TICKS: usize = 500;

fn too_many(count: f64, lo: f64, hi: f64, step: f64) -> bool {
    let over = count > MAX_TICKS as f64;
    if over {
        log::warn!(
            "skipping ticks over [{}, {}]: step {} gives {} of them",
            lo,
            hi,
            step,
            count
        );
    }
    over
}

/// Tick values `lo, lo + step, ...` strictly below `hi`.
///
/// Computed by index so long runs do not accumulate floating point drift. Runs longer than
/// [`MAX_TICKS`] come back empty.
pub fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0 && lo.is_finite() && hi.is_finite()) || hi <= lo {
        return Vec::new();
    }

    let n = ((hi - lo) / step).ceil();
    if too_many(n, lo, hi, step) {
        return Vec::new();
    }
    (0..n as usize)
        .map(|i| lo + i as f64 * step)
        .filter(|&t| t < hi)
        .collect()
}

/// Tick values that fall on multiples of `step` inside `lo..=hi`.
///
/// Empty when there would be more than [`MAX_TICKS`] of them.
pub fn ticks_inclusive(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0 && lo.is_finite() && hi.is_finite()) || hi < lo {
        return Vec::new();
    }

    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if too_many(last - first + 1.0, lo, hi, step) {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    #[test]
    fn two_points_with_origin() {
        let v = fit_2d([[0.0, 0.0], [3.0, 4.0]], [1.0, 1.0]).unwrap();
        assert_eq!(v.min(), [-1.0, -1.0]);
        assert_eq!(v.max(), [4.0, 5.0]);
    }

    #[test]
    fn large_extents_pad_by_five_percent() {
        // extent 100, 5% is 5 which beats the unit grid step
        let v = fit_2d([[100.0, -50.0]], [1.0, 2.0]).unwrap();
        assert_eq!(v.min(), [-5.0, -54.0]);
        assert_eq!(v.max(), [105.0, 4.0]);
    }

    #[test]
    fn empty_scene_still_has_area() {
        let v = fit_2d(Vec::new(), [0.5, 0.5]).unwrap();
        assert_eq!(v.min(), [-0.5, -0.5]);
        assert_eq!(v.max(), [0.5, 0.5]);

        let v = fit_3d(Vec::new(), DEFAULT_MARGIN);
        assert!(v.size.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn bad_grid_sizes() {
        assert!(matches!(
            fit_2d([[1.0, 1.0]], [0.0, 1.0]),
            Err(Error::InvalidGridSize(_))
        ));
        assert!(fit_2d([[1.0, 1.0]], [1.0, f64::NAN]).is_err());
        assert!(fit_2d([[1.0, 1.0]], [1.0, -2.0]).is_err());
    }

    #[test]
    fn three_d_margin() {
        let v = fit_3d([[1.0, 2.0, -4.0]], DEFAULT_MARGIN);
        let close = |a: Point3, b: Point3| distance(a, b) < 1e-9;
        assert!(close(v.min(), [-0.1, -0.2, -4.4]));
        assert!(close(v.max(), [1.1, 2.2, 0.4]));
    }

    #[test]
    fn tick_generation() {
        assert_eq!(ticks(-1.0, 4.0, 1.0), vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(ticks(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
        assert!(ticks(1.0, 1.0, 1.0).is_empty());
        assert!(ticks(0.0, 1.0, 0.0).is_empty());

        assert_eq!(ticks_inclusive(-1.1, 2.0, 1.0), vec![-1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn tick_runs_are_bounded() {
        assert!(ticks(0.0, 1e300, 1e-300).is_empty());
        assert!(ticks_inclusive(-1e300, 1e300, 1e-300).is_empty());
        assert_eq!(ticks(0.0, 500.0, 1.0).len(), MAX_TICKS);
        assert!(ticks(0.0, 501.0, 1.0).is_empty());
        assert_eq!(ticks_inclusive(0.0, 499.0, 1.0).len(), MAX_TICKS);
        assert!(ticks_inclusive(0.0, 500.0, 1.0).is_empty());
    }

    fn sane(p: &[f64]) -> bool {
        p.iter().all(|x| x.is_finite() && x.abs() < 1e12)
    }

    #[quickcheck]
    fn viewport_2d_contains_origin_and_points(ps: Vec<(f64, f64)>, step: u8) -> TestResult {
        if step == 0 {
            return TestResult::discard();
        }
        let step = step as f64 / 4.0;
        let pts = ps
            .into_iter()
            .map(|(x, y)| [x, y])
            .filter(|p| sane(p))
            .collect::<Vec<_>>();
        let v = fit_2d(pts.iter().copied(), [step, step]).unwrap();

        let ok = v.envelops([0.0, 0.0])
            && pts.iter().all(|&p| v.envelops(p))
            && v.size.iter().all(|&s| s > 0.0);
        TestResult::from_bool(ok)
    }

    #[quickcheck]
    fn viewport_3d_contains_origin(ps: Vec<(f64, f64, f64)>) -> bool {
        let pts = ps
            .into_iter()
            .map(|(x, y, z)| [x, y, z])
            .filter(|p| sane(p));
        let v = fit_3d(pts, DEFAULT_MARGIN);
        v.ranges().all(|(lo, hi)| lo <= 0.0 && 0.0 <= hi && lo < hi)
    }
}
