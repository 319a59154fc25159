//! Vector geometry diagrams in 2D and 3D.
//!
//! Describe a scene with [`Primitive2`] or [`Primitive3`] values (points, point sets, line
//! segments, arrows), then lay it out with [`draw_2d`] or [`draw_3d`]. The viewport is fitted
//! around the primitives and the origin, labels are offset clear of the geometry, and the
//! result is a [`Figure`] that can be replayed onto any [`Canvas`], such as [`SvgCanvas`].
//!
//! ```rust
//! use vecdraw::*;
//!
//! let scene: Vec<Primitive2> = vec![
//!     Arrow2D::new([3.0, 4.0]).label("v").into(),
//!     Line2D::new([0.0, 4.0], [3.0, 4.0]).linestyle(LineStyle::Dashed).into(),
//!     Point2D::new(3.0, 0.0).color(Color::BLUE).into(),
//! ];
//! let fig = draw_2d(&scene, &Draw2Config::default()).unwrap();
//! let svg = fig.to_svg();
//! assert!(svg.document().contains("<polygon"));
//! ```
//!
//! [`number_grid`] lays out an empty, bordered number plane over fixed ranges.
//!
//! The `io` feature adds a line oriented text format for scenes and DXF export of 3D scenes.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod arrow;
mod camera;
mod canvas;
mod config;
mod error;
mod extents;
mod extract;
#[cfg(feature = "io")]
pub mod io;
mod label;
mod point;
mod primitive;
mod scene;
mod style;
mod svg;
mod trimesh;
mod viewport;

pub use arrow::*;
pub use camera::*;
pub use canvas::*;
pub use config::*;
pub use error::*;
pub use extents::*;
pub use extract::*;
pub use label::*;
pub use point::*;
pub use primitive::*;
pub use scene::*;
pub use style::*;
pub use svg::*;
pub use trimesh::*;
pub use viewport::*;

pub trait Envelops<O> {
    fn envelops(&self, object: O) -> bool;
}
