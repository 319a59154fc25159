//! Interop with the outside world.
//! A line oriented text format for describing scenes, and DXF export of 3D scenes.
use crate::*;

pub mod dxf;
pub mod scene;

pub use self::dxf::scene_to_dxf;
pub use scene::{parse_scene_2d, parse_scene_3d};

fn to_dxf_point(p: Point3) -> ::dxf::Point {
    let [x, y, z] = p;
    ::dxf::Point { x, y, z }
}

#[cfg(test)]
fn from_dxf_point(p: &::dxf::Point) -> Point3 {
    [p.x, p.y, p.z]
}

fn to_polyline(
    drawing: &mut ::dxf::Drawing,
    ps: impl Iterator<Item = Point3>,
) -> ::dxf::entities::Polyline {
    let mut polyline = ::dxf::entities::Polyline::default();

    let vertices = ps.map(to_dxf_point).map(::dxf::entities::Vertex::new);

    for vertex in vertices {
        polyline.add_vertex(drawing, vertex);
    }

    polyline.set_is_3d_polyline(true);

    polyline
}
