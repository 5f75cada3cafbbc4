//! # objmesh
//!
//! A pure Rust loader for Wavefront OBJ geometry and its MTL material
//! libraries.
//!
//! The loader reads an OBJ file line by line and builds a [`Mesh`]: vertex,
//! normal, texture and parameter-space buffers, faces, points and lines with
//! their references resolved, the groups, objects and smoothing groups those
//! faces belong to, and freeform curves with their degree, type, range and
//! parameters.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Bad lines are reported and skipped; a single malformed line never aborts
//!   a load
//! - Per-load [`Diagnostics`] with severity counters, source file and line
//!   numbers, forwarded to the [`log`] facade
//! - Faces are stored once and referenced from groups, objects and smoothing
//!   groups by [`FaceId`]
//!
//! ## Example
//!
//! ```no_run
//! use objmesh::{Diagnostics, ObjLoader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut diagnostics = Diagnostics::new();
//! let mesh = ObjLoader::new().load("model.obj", &mut diagnostics)?;
//!
//! for group in mesh.groups() {
//!     println!("{}: {} faces", group.name, group.faces.len());
//! }
//! println!("{}", diagnostics.summary());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod material;
pub mod model;
pub mod parser;
pub mod prefix;

pub use config::LoadConfig;
pub use diagnostics::{Diagnostic, Diagnostics, LoadSummary, Location, Severity};
pub use error::{Error, Result};
pub use loader::ObjLoader;
pub use material::MtlLoader;
pub use model::{
    Color, Curve, CurveType, DEFAULT_DEGREE, DEFAULT_NAME, Face, FaceId, Group, Line, Material,
    MaterialMaps, Mesh, Normal, Object, ParameterSpaceVertex, Point, Smoothing, Texture,
    UNSPECIFIED_RANGE, Vertex,
};

use std::io::Read;
use std::path::Path;

impl Mesh {
    /// Load an OBJ file with the default configuration
    ///
    /// Line-level problems are logged but not returned; use
    /// [`ObjLoader::load`] with your own [`Diagnostics`] to inspect them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objmesh::Mesh;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mesh = Mesh::from_path("model.obj")?;
    /// println!("Mesh contains {} vertices", mesh.vertices().len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        ObjLoader::new().load(path, &mut Diagnostics::new())
    }

    /// Load OBJ text from a reader with the default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use objmesh::Mesh;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    /// let mesh = Mesh::from_reader(text.as_bytes())?;
    ///
    /// assert_eq!(mesh.faces().len(), 1);
    /// assert_eq!(mesh.groups()[0].name, "Default");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        ObjLoader::new().load_from_reader(reader, &mut Diagnostics::new())
    }
}
