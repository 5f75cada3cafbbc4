//! The mesh store

use std::path::PathBuf;

use super::curve::Curve;
use super::element::{Face, FaceId, Line, Point};
use super::geometry::{Normal, ParameterSpaceVertex, Texture, Vertex};
use super::grouping::{Group, Object, Smoothing};
use super::material::Material;

/// Everything parsed from one OBJ file
///
/// A mesh starts empty and only ever grows while a file is loaded. All
/// buffers are indexed from 0 here, whereas OBJ source text references them
/// from 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    normals: Vec<Normal>,
    textures: Vec<Texture>,
    parameter_vertices: Vec<ParameterSpaceVertex>,
    faces: Vec<Face>,
    points: Vec<Point>,
    lines: Vec<Line>,
    curves: Vec<Curve>,
    groups: Vec<Group>,
    objects: Vec<Object>,
    smoothing_groups: Vec<Smoothing>,
    materials: Vec<Material>,
    material_libraries: Vec<PathBuf>,
    color_interpolation: bool,
    dissolve_interpolation: bool,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing at all has been stored
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.normals.is_empty()
            && self.textures.is_empty()
            && self.parameter_vertices.is_empty()
            && self.faces.is_empty()
            && self.points.is_empty()
            && self.lines.is_empty()
            && self.curves.is_empty()
            && self.groups.is_empty()
            && self.objects.is_empty()
            && self.smoothing_groups.is_empty()
            && self.materials.is_empty()
            && self.material_libraries.is_empty()
    }

    // Read access

    /// Geometric vertices, in file order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex normals, in file order
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    /// Texture coordinates, in file order
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Parameter-space vertices, in file order
    pub fn parameter_vertices(&self) -> &[ParameterSpaceVertex] {
        &self.parameter_vertices
    }

    /// All faces, indexed by [`FaceId`]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Look up a face by handle
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.index())
    }

    /// Resolve a list of face handles, skipping any that are not in this mesh
    pub fn resolve_faces<'a>(&'a self, ids: &'a [FaceId]) -> impl Iterator<Item = &'a Face> + 'a {
        ids.iter().filter_map(move |id| self.face(*id))
    }

    /// Point elements, in file order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Line elements, in file order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Freeform curves, in file order
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Groups, in creation order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Objects, in creation order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Smoothing groups, in creation order
    pub fn smoothing_groups(&self) -> &[Smoothing] {
        &self.smoothing_groups
    }

    /// Materials loaded from every referenced library, in file order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Paths named by `mtllib` lines, after resolution
    pub fn material_libraries(&self) -> &[PathBuf] {
        &self.material_libraries
    }

    /// Whether `c_interp on` was set
    pub fn color_interpolation(&self) -> bool {
        self.color_interpolation
    }

    /// Whether `d_interp on` was set
    pub fn dissolve_interpolation(&self) -> bool {
        self.dissolve_interpolation
    }

    // Append operations

    /// Append a vertex and return its 0-based index
    pub fn push_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Append a normal and return its 0-based index
    pub fn push_normal(&mut self, normal: Normal) -> usize {
        self.normals.push(normal);
        self.normals.len() - 1
    }

    /// Append a texture coordinate and return its 0-based index
    pub fn push_texture(&mut self, texture: Texture) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    /// Append a parameter-space vertex and return its 0-based index
    pub fn push_parameter_vertex(&mut self, vertex: ParameterSpaceVertex) -> usize {
        self.parameter_vertices.push(vertex);
        self.parameter_vertices.len() - 1
    }

    /// Append a face and return its handle
    pub fn push_face(&mut self, face: Face) -> FaceId {
        self.faces.push(face);
        FaceId::new(self.faces.len() - 1)
    }

    /// Append a point element and return its index
    pub fn push_point(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Append a line element and return its index
    pub fn push_line(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Append a curve and return its index
    pub fn push_curve(&mut self, curve: Curve) -> usize {
        self.curves.push(curve);
        self.curves.len() - 1
    }

    /// Append a group and return its index
    pub fn push_group(&mut self, group: Group) -> usize {
        self.groups.push(group);
        self.groups.len() - 1
    }

    /// Append an object and return its index
    pub fn push_object(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Append a smoothing group and return its index
    pub fn push_smoothing_group(&mut self, smoothing: Smoothing) -> usize {
        self.smoothing_groups.push(smoothing);
        self.smoothing_groups.len() - 1
    }

    /// Append materials loaded from a library
    pub fn extend_materials(&mut self, materials: impl IntoIterator<Item = Material>) {
        self.materials.extend(materials);
    }

    /// Record a material library path
    pub fn push_material_library(&mut self, path: PathBuf) {
        self.material_libraries.push(path);
    }

    /// Set the `c_interp` flag
    pub fn set_color_interpolation(&mut self, enabled: bool) {
        self.color_interpolation = enabled;
    }

    /// Set the `d_interp` flag
    pub fn set_dissolve_interpolation(&mut self, enabled: bool) {
        self.dissolve_interpolation = enabled;
    }

    // Crate-internal mutation used by the loader

    pub(crate) fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }

    pub(crate) fn object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    pub(crate) fn smoothing_group_mut(&mut self, index: usize) -> Option<&mut Smoothing> {
        self.smoothing_groups.get_mut(index)
    }

    pub(crate) fn curve_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    pub(crate) fn find_group(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    pub(crate) fn find_object(&self, name: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.name == name)
    }

    pub(crate) fn find_smoothing_group(&self, smoothness: u32) -> Option<usize> {
        self.smoothing_groups
            .iter()
            .position(|s| s.smoothness == smoothness)
    }
}
