//! Geometric primitives read from `v`, `vn`, `vt` and `vp` lines
//!
//! All four are plain single-precision value types; they are immutable once
//! stored and copied by value into the faces, points, lines and curves that
//! reference them.

/// A geometric vertex (`v x y z`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A vertex normal (`vn x y z`)
///
/// Normals are stored exactly as written; they are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normal {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Normal {
    /// Create a new normal
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A texture coordinate (`vt u v`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Texture {
    /// Horizontal texture coordinate
    pub u: f32,
    /// Vertical texture coordinate
    pub v: f32,
}

impl Texture {
    /// Create a new texture coordinate
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// A vertex in the parameter space of a curve or surface (`vp x y z`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterSpaceVertex {
    /// First parameter coordinate
    pub x: f32,
    /// Second parameter coordinate
    pub y: f32,
    /// Weight / third coordinate
    pub z: f32,
}

impl ParameterSpaceVertex {
    /// Create a new parameter-space vertex
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
