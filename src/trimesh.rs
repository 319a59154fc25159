use crate::*;

/// Triangle represented by 3 points (A, B, C).
pub type Tri = [Point3; 3];

/// A triangle mesh.
///
/// `PartialEq` is _derived_ and does _exact_ equality including structural equality, useful for
/// tests but not for comparing geometry.
#[derive(Debug, PartialEq, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TriMesh {
    /// The _distinct_ points.
    points: Vec<Point3>,
    /// Each _triangle_ is a triplet of indices back into `points`.
    triangles: Vec<(u32, u32, u32)>,
}

impl TriMesh {
    pub fn tri_len(&self) -> usize {
        self.triangles.len()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn tris(&self) -> impl ExactSizeIterator<Item = Tri> + '_ {
        self.triangles.iter().map(move |&(a, b, c)| {
            [
                self.points[a as usize],
                self.points[b as usize],
                self.points[c as usize],
            ]
        })
    }
}

impl From<&Cone> for TriMesh {
    /// Ring vertices first, the apex last, one triangle per face of the fan.
    fn from(cone: &Cone) -> Self {
        let n = cone.ring().len() as u32;
        let points = cone.ring().iter().copied().chain([cone.apex()]).collect();
        let triangles = (0..n).map(|i| (i, (i + 1) % n, n)).collect();
        Self { points, triangles }
    }
}

impl Aabb for TriMesh {
    type Space = Point3;
    fn aabb(&self) -> Extents3 {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_of_a_cone() {
        let cone = Cone::new([0.0; 3], [0.0, 0.0, 2.0], 0.5, 0.25, 3).unwrap();
        let mesh = TriMesh::from(&cone);
        assert_eq!(mesh.points().len(), 4);
        assert_eq!(mesh.points()[3], [0.0, 0.0, 2.0]);
        assert_eq!(mesh.tri_len(), 3);
        assert_eq!(
            mesh.tris().last().map(|t| (t[1], t[2])),
            Some((cone.ring()[0], cone.apex()))
        );
    }

    #[test]
    fn mesh_aabb() {
        let cone = Cone::new([0.0; 3], [0.0, 0.0, 2.0], 0.5, 0.25, 4).unwrap();
        let e = TriMesh::from(&cone).aabb();
        let close = |a: Point3, b: Point3| distance(a, b) < 1e-12;
        assert!(close(e.min(), [-0.25, -0.25, 1.5]));
        assert!(close(e.max(), [0.25, 0.25, 2.0]));
    }
}
