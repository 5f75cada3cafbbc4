//! Data structures representing a loaded OBJ mesh

mod curve;
mod element;
mod geometry;
mod grouping;
mod material;
mod mesh;

pub use curve::{Curve, CurveType, DEFAULT_DEGREE, UNSPECIFIED_RANGE};
pub use element::{Face, FaceId, Line, Point};
pub use geometry::{Normal, ParameterSpaceVertex, Texture, Vertex};
pub use grouping::{DEFAULT_NAME, Group, Object, Smoothing};
pub use material::{Color, Material, MaterialMaps};
pub use mesh::Mesh;
