use crate::*;

/// Orthographic view direction given as azimuth and elevation, in degrees.
///
/// Azimuth rotates about the Z axis starting from +X, elevation tilts up from the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azim: f64,
    pub elev: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azim: -60.0,
            elev: 30.0,
        }
    }
}

impl Camera {
    pub fn new(azim: f64, elev: f64) -> Self {
        Self { azim, elev }
    }

    /// Unit vector from the scene towards the viewer.
    pub fn eye(&self) -> Point3 {
        let (az, el) = (self.azim.to_radians(), self.elev.to_radians());
        [el.cos() * az.cos(), el.cos() * az.sin(), el.sin()]
    }

    /// Screen right and screen up, both perpendicular to [`Self::eye`].
    fn screen_axes(&self) -> (Point3, Point3) {
        let (az, el) = (self.azim.to_radians(), self.elev.to_radians());
        let right = [-az.sin(), az.cos(), 0.0];
        let up = [-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos()];
        (right, up)
    }

    /// Screen coordinates (y up) and depth of `p`. Larger depth is nearer the viewer.
    pub fn project(&self, p: Point3) -> (Point2, f64) {
        let (right, up) = self.screen_axes();
        (
            [dot_prod(p, right), dot_prod(p, up)],
            dot_prod(p, self.eye()),
        )
    }
}
