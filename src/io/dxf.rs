//! DXF export of 3D scenes.
use super::*;
use ::dxf::entities::{Entity, EntityType, Face3D};

/// Layer holding line segments.
pub const LINES_LAYER: &str = "lines";
/// Layer holding arrow shafts and heads.
pub const ARROWS_LAYER: &str = "arrows";

// Face3D consists of 4 corners, so the 4th point == 1st point for a triangle
fn to_face_3d(tri: Tri) -> Face3D {
    let [a, b, c] = tri;
    Face3D {
        first_corner: to_dxf_point(a),
        second_corner: to_dxf_point(b),
        third_corner: to_dxf_point(c),
        fourth_corner: to_dxf_point(a),
        ..Default::default()
    }
}

fn on_layer(specific: EntityType, layer: &str) -> Entity {
    let mut entity = Entity::new(specific);
    entity.common.layer = layer.to_string();
    entity
}

/// Write the lines and arrows of a 3D scene as DXF.
///
/// Segments and arrow shafts become 3D polylines, arrow heads become one `Face3D` per
/// triangle of the cone mesh. Points carry no geometry worth exporting and are skipped.
pub fn scene_to_dxf(objects: &[Primitive3]) -> Result<Vec<u8>> {
    let mut d = ::dxf::Drawing::new();
    let mut skipped = 0;

    for obj in objects {
        match obj {
            Primitive3::Point(_) | Primitive3::PointSet(_) => skipped += 1,
            Primitive3::Line(l) => {
                let polyline = to_polyline(&mut d, [l.start, l.end].into_iter());
                d.add_entity(on_layer(EntityType::Polyline(polyline), LINES_LAYER));
            }
            Primitive3::Arrow(a) => {
                let cone = a.cone()?;
                let polyline = to_polyline(&mut d, cone.shaft().into_iter());
                d.add_entity(on_layer(EntityType::Polyline(polyline), ARROWS_LAYER));

                let mesh = cone.to_mesh();
                let faces = mesh
                    .tris()
                    .map(to_face_3d)
                    .map(EntityType::Face3D)
                    .map(|e| on_layer(e, ARROWS_LAYER));
                for entity in faces {
                    d.add_entity(entity);
                }
            }
        }
    }

    if skipped > 0 {
        log::debug!("{} point primitives not exported to dxf", skipped);
    }

    d.normalize();
    let mut buf = Vec::new();
    d.save(&mut buf)
        .map_err(|e| Error::Dxf(format!("{:?} ==> {}", e, e)))?;

    Ok(buf)
}
