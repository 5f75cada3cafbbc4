//! Polygonal elements: faces, points and lines
//!
//! Elements own copies of the vertices, texture coordinates and normals they
//! referenced at parse time. Later changes to the mesh buffers do not reach
//! back into elements that were already built.

use super::geometry::{Normal, Texture, Vertex};

/// Stable handle to a face stored in a [`Mesh`](super::Mesh)
///
/// Groups, objects and smoothing groups refer to faces through this handle,
/// so one face can be a member of all three at once without shared ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(usize);

impl FaceId {
    /// Create a handle from a raw arena index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the face in [`Mesh::faces`](super::Mesh::faces)
    pub fn index(self) -> usize {
        self.0
    }
}

/// A polygonal face (`f v/t/n ...`)
///
/// The three sequences are filled independently: a reference that failed to
/// resolve is simply absent, so their lengths may differ from each other and
/// from the number of corners declared on the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Face {
    /// Resolved corner positions
    pub vertices: Vec<Vertex>,
    /// Resolved texture coordinates
    pub textures: Vec<Texture>,
    /// Resolved normals
    pub normals: Vec<Normal>,
}

impl Face {
    /// Create a new empty face
    pub fn new() -> Self {
        Self::default()
    }
}

/// A point element (`p v/t ...`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    /// Resolved positions
    pub vertices: Vec<Vertex>,
    /// Resolved texture coordinates
    pub textures: Vec<Texture>,
}

impl Point {
    /// Create a new empty point element
    pub fn new() -> Self {
        Self::default()
    }
}

/// A polyline element (`l v/t ...`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Resolved positions, in drawing order
    pub vertices: Vec<Vertex>,
    /// Resolved texture coordinates
    pub textures: Vec<Texture>,
}

impl Line {
    /// Create a new empty line element
    pub fn new() -> Self {
        Self::default()
    }
}
