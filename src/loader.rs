//! OBJ load orchestration
//!
//! [`ObjLoader`] reads an OBJ file line by line, hands each recognized line
//! to the element parser and applies the result to the mesh being built:
//! buffer appends, current group/object/smoothing tracking, and correlation
//! of `deg`/`cstype`/`parm` lines with the curves they describe.
//!
//! A line that fails to parse is reported through [`Diagnostics`] and
//! skipped. Only I/O failures and a wrong file extension abort a load.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::config::LoadConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::material::MtlLoader;
use crate::model::{Curve, CurveType, DEFAULT_NAME, Face, Group, Mesh, Object, Smoothing};
use crate::parser::{self, CurveBody, Element};
use crate::prefix::{self, ElementKind};

/// Loader for Wavefront OBJ files
///
/// # Example
///
/// ```no_run
/// use objmesh::{Diagnostics, ObjLoader};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut diagnostics = Diagnostics::new();
/// let mesh = ObjLoader::new().load("cube.obj", &mut diagnostics)?;
///
/// println!("{} faces in {} groups", mesh.faces().len(), mesh.groups().len());
/// println!("{}", diagnostics.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjLoader {
    config: LoadConfig,
}

impl ObjLoader {
    /// Create a loader with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with a custom configuration
    pub fn with_config(config: LoadConfig) -> Self {
        Self { config }
    }

    /// The loader's configuration
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Load an OBJ file from disk
    ///
    /// The path must end in `.obj` (any case); otherwise the file is not
    /// opened and [`Error::UnsupportedExtension`] is returned. Relative
    /// `mtllib` paths resolve against the file's directory unless the
    /// configuration names a material directory.
    pub fn load(&self, path: impl AsRef<Path>, diagnostics: &mut Diagnostics) -> Result<Mesh> {
        let path = path.as_ref();
        if !has_extension(path, "obj") {
            return Err(Error::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: "obj",
            });
        }

        let file = File::open(path)?;
        diagnostics.info(format!("Loading file {}", path.display()));

        let previous = diagnostics.enter_file(Some(path));
        let result = self.read(BufReader::new(file), path.parent(), diagnostics);
        diagnostics.restore(previous);

        let mesh = result?;
        diagnostics.info(format!(
            "Finished loading {}: {} vertices, {} faces, {} curves",
            path.display(),
            mesh.vertices().len(),
            mesh.faces().len(),
            mesh.curves().len()
        ));
        Ok(mesh)
    }

    /// Load OBJ text from any reader
    ///
    /// Relative `mtllib` paths resolve against the configured material
    /// directory, or the working directory if none is set.
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        diagnostics: &mut Diagnostics,
    ) -> Result<Mesh> {
        let previous = diagnostics.enter_file(None);
        let result = self.read(BufReader::new(reader), None, diagnostics);
        diagnostics.restore(previous);
        result
    }

    fn read<R: BufRead>(
        &self,
        reader: R,
        obj_dir: Option<&Path>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Mesh> {
        let mut state = LoadState::new(&self.config, obj_dir);
        for_each_line(reader, diagnostics, |line, diagnostics| {
            let Some(kind) = prefix::classify(line) else {
                return;
            };
            if let Err(err) = state.process(kind, line, diagnostics) {
                diagnostics.error(err);
            }
        })?;
        Ok(state.mesh)
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Whether `path` carries the extension `expected`, ignoring case
pub(crate) fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}

/// Feed every line of `reader` to `handle`, keeping the diagnostics line
/// number current
///
/// A byte order mark at the start of the first line is dropped. Lines that
/// are not valid UTF-8 are reported and skipped. A read error stops the
/// iteration and is returned.
pub(crate) fn for_each_line<R, F>(
    reader: R,
    diagnostics: &mut Diagnostics,
    mut handle: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str, &mut Diagnostics),
{
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        diagnostics.set_line(Some(index + 1));

        let mut bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        if index == 0 {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }
        match std::str::from_utf8(bytes) {
            Ok(line) => handle(line, diagnostics),
            Err(err) => diagnostics.error(Error::ParseError(format!(
                "Line is not valid UTF-8: {}",
                err
            ))),
        }
    }
    diagnostics.set_line(None);
    Ok(())
}

/// Mesh under construction plus the orchestrator's pointers
struct LoadState<'a> {
    config: &'a LoadConfig,
    obj_dir: Option<&'a Path>,
    mesh: Mesh,
    current_group: Option<usize>,
    current_object: Option<usize>,
    current_smoothing: Option<usize>,
    // Latest `deg`/`cstype` values, read by every following `curv` line
    pending_degree: Option<u32>,
    pending_type: Option<CurveType>,
    last_curve: Option<usize>,
}

impl<'a> LoadState<'a> {
    fn new(config: &'a LoadConfig, obj_dir: Option<&'a Path>) -> Self {
        Self {
            config,
            obj_dir,
            mesh: Mesh::new(),
            current_group: None,
            current_object: None,
            current_smoothing: None,
            pending_degree: None,
            pending_type: None,
            last_curve: None,
        }
    }

    fn process(
        &mut self,
        kind: ElementKind,
        line: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        let element = parser::parse(kind, line, &self.mesh, diagnostics)?;
        diagnostics.trace(format_args!("Parsed {}", kind.name()));

        match element {
            Element::Vertex(v) => {
                self.mesh.push_vertex(v);
            }
            Element::Normal(n) => {
                self.mesh.push_normal(n);
            }
            Element::Texture(t) => {
                self.mesh.push_texture(t);
            }
            Element::ParameterVertex(vp) => {
                self.mesh.push_parameter_vertex(vp);
            }
            Element::Face(face) => self.add_face(face),
            Element::Point(point) => {
                self.mesh.push_point(point);
            }
            Element::Line(polyline) => {
                self.mesh.push_line(polyline);
            }
            Element::Group(group) => self.current_group = Some(self.mesh.push_group(group)),
            Element::Object(object) => self.current_object = Some(self.mesh.push_object(object)),
            Element::Smoothing(smoothing) => {
                self.current_smoothing = Some(self.mesh.push_smoothing_group(smoothing))
            }
            Element::Degree(degree) => self.pending_degree = Some(degree),
            Element::CurveType(curve_type) => self.pending_type = Some(curve_type),
            Element::Curve(body) => {
                let (degree, curve_type) = self.curve_attributes()?;
                self.add_curve(body, degree, curve_type);
            }
            Element::Parameters(values) => self.attach_parameters(values)?,
            Element::MaterialLibraries(paths) => {
                for written in paths {
                    self.load_material_library(&written, diagnostics);
                }
            }
            Element::ColorInterpolation(enabled) => self.mesh.set_color_interpolation(enabled),
            Element::DissolveInterpolation(enabled) => {
                self.mesh.set_dissolve_interpolation(enabled)
            }
        }
        Ok(())
    }

    fn curve_attributes(&self) -> Result<(u32, CurveType)> {
        self.pending_degree
            .zip(self.pending_type)
            .ok_or(Error::MissingCurveAttributes {
                degree: self.pending_degree.is_none(),
                curve_type: self.pending_type.is_none(),
            })
    }

    fn add_face(&mut self, face: Face) {
        let id = self.mesh.push_face(face);
        let group = self.group();
        let object = self.object();
        let smoothing = self.smoothing();

        if let Some(g) = self.mesh.group_mut(group) {
            g.faces.push(id);
        }
        if let Some(s) = self.mesh.smoothing_group_mut(smoothing) {
            s.faces.push(id);
        }

        // The object keeps a copy of each group it first sees a face from
        let snapshot = self
            .mesh
            .groups()
            .get(group)
            .filter(|g| {
                self.mesh
                    .objects()
                    .get(object)
                    .is_some_and(|o| !o.has_group(&g.name))
            })
            .cloned();
        if let Some(o) = self.mesh.object_mut(object) {
            o.groups.extend(snapshot);
            o.faces.push(id);
        }
    }

    /// Current group, falling back to the shared "Default" group
    fn group(&mut self) -> usize {
        if let Some(index) = self.current_group {
            return index;
        }
        let index = self
            .mesh
            .find_group(DEFAULT_NAME)
            .unwrap_or_else(|| self.mesh.push_group(Group::new(DEFAULT_NAME)));
        self.current_group = Some(index);
        index
    }

    /// Current object, falling back to the shared "Default" object
    fn object(&mut self) -> usize {
        if let Some(index) = self.current_object {
            return index;
        }
        let index = self
            .mesh
            .find_object(DEFAULT_NAME)
            .unwrap_or_else(|| self.mesh.push_object(Object::new(DEFAULT_NAME)));
        self.current_object = Some(index);
        index
    }

    /// Current smoothing group, falling back to level 0
    fn smoothing(&mut self) -> usize {
        if let Some(index) = self.current_smoothing {
            return index;
        }
        let index = self
            .mesh
            .find_smoothing_group(0)
            .unwrap_or_else(|| self.mesh.push_smoothing_group(Smoothing::new(0)));
        self.current_smoothing = Some(index);
        index
    }

    fn add_curve(&mut self, body: CurveBody, degree: u32, curve_type: CurveType) {
        let mut curve = Curve::new(curve_type, degree);
        curve.control_points = body.control_points;
        curve.global_parameter_range = body.global_parameter_range;
        self.last_curve = Some(self.mesh.push_curve(curve));
    }

    fn attach_parameters(&mut self, values: Vec<f32>) -> Result<()> {
        let curve = self
            .last_curve
            .and_then(|index| self.mesh.curve_mut(index))
            .ok_or(Error::OrphanParameters)?;

        if values.len() != curve.control_points.len() {
            return Err(Error::ParameterCountMismatch {
                expected: curve.control_points.len(),
                found: values.len(),
            });
        }
        curve.parameters = values;
        curve.has_parameters = true;
        Ok(())
    }

    fn load_material_library(&mut self, written: &str, diagnostics: &mut Diagnostics) {
        let path = self.config.resolve_material_path(written, self.obj_dir);
        self.mesh.push_material_library(path.clone());

        if !self.config.follows_material_libraries() {
            diagnostics.debug(format!("Skipping material library {}", path.display()));
            return;
        }
        match MtlLoader::new().load(&path, diagnostics) {
            Ok(materials) => self.mesh.extend_materials(materials),
            Err(err) => diagnostics.error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UNSPECIFIED_RANGE, Vertex};

    fn load(text: &str) -> (Mesh, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let loader = ObjLoader::with_config(LoadConfig::new().follow_material_libraries(false));
        let mesh = loader.load_from_reader(text.as_bytes(), &mut diagnostics).unwrap();
        (mesh, diagnostics)
    }

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";

    #[test]
    fn test_vertices_in_file_order() {
        let (mesh, diagnostics) = load("v 1 2 3\nvn 0 0 1\nv 4 5 6\nvt 0.5 0.5\nvp 0.1 0.2 0.3\n");
        assert_eq!(mesh.vertices(), &[Vertex::new(1.0, 2.0, 3.0), Vertex::new(4.0, 5.0, 6.0)]);
        assert_eq!(mesh.normals().len(), 1);
        assert_eq!(mesh.textures().len(), 1);
        assert_eq!(mesh.parameter_vertices().len(), 1);
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_faces_share_default_entities() {
        let (mesh, _) = load(&format!("{}f 1 2 3\nf 3 2 1\n", TRIANGLE));

        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.groups().len(), 1);
        assert_eq!(mesh.objects().len(), 1);
        assert_eq!(mesh.smoothing_groups().len(), 1);

        assert_eq!(mesh.groups()[0].name, DEFAULT_NAME);
        assert_eq!(mesh.groups()[0].faces.len(), 2);
        assert_eq!(mesh.objects()[0].name, DEFAULT_NAME);
        assert_eq!(mesh.objects()[0].faces.len(), 2);
        assert_eq!(mesh.smoothing_groups()[0].smoothness, 0);
        assert_eq!(mesh.smoothing_groups()[0].faces.len(), 2);
    }

    #[test]
    fn test_object_snapshots_group_once() {
        let text = format!("{}o body\ng top\nf 1 2 3\nf 1 2 3\ng side\nf 1 2 3\n", TRIANGLE);
        let (mesh, _) = load(&text);

        let object = &mesh.objects()[0];
        assert_eq!(object.faces.len(), 3);
        let names: Vec<&str> = object.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["top", "side"]);
        // Snapshot taken when the first face of "top" was linked
        assert_eq!(object.groups[0].faces.len(), 1);
        assert_eq!(mesh.groups()[0].faces.len(), 2);
    }

    #[test]
    fn test_group_lines_always_create_new_entities() {
        let text = format!("{}g a\nf 1 2 3\ng a\nf 1 2 3\ns 1\ns 1\nf 1 2 3\n", TRIANGLE);
        let (mesh, _) = load(&text);
        assert_eq!(mesh.groups().len(), 2);
        assert_eq!(mesh.groups()[0].faces.len(), 1);
        assert_eq!(mesh.groups()[1].faces.len(), 2);
        // Default level 0, then two level-1 groups; only the last receives the face
        assert_eq!(mesh.smoothing_groups().len(), 3);
        assert_eq!(mesh.smoothing_groups()[2].faces.len(), 1);
        assert!(mesh.smoothing_groups()[1].faces.is_empty());
    }

    #[test]
    fn test_bad_line_does_not_abort() {
        let (mesh, diagnostics) = load("v 1 2 3\nv 1 two 3\nv 4 5 6\n");
        assert_eq!(mesh.vertices().len(), 2);
        assert_eq!(diagnostics.summary().errors, 1);
        assert_eq!(diagnostics.issues()[0].location.line, Some(2));
    }

    #[test]
    fn test_curve_correlation() {
        let text = format!(
            "{}deg 3\ncstype bezier\ncurv 0.0 1.0 1 2 3\nparm u 0.0 0.5 1.0\n",
            TRIANGLE
        );
        let (mesh, diagnostics) = load(&text);

        let curve = &mesh.curves()[0];
        assert_eq!(curve.degree, 3);
        assert_eq!(curve.curve_type, CurveType::Bezier);
        assert_eq!(curve.global_parameter_range, [0.0, 1.0]);
        assert_eq!(curve.control_points.len(), 3);
        assert_eq!(curve.parameters, vec![0.0, 0.5, 1.0]);
        assert!(curve.has_parameters);
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_curve_without_attributes_is_rejected() {
        let (mesh, diagnostics) = load(&format!("{}deg 2\ncurv 0.0 1.0 1 2\n", TRIANGLE));
        assert!(mesh.curves().is_empty());
        assert_eq!(diagnostics.summary().errors, 1);
        assert!(diagnostics.issues()[0].message.contains("[E3001]"));
        assert!(diagnostics.issues()[0].message.contains("'cstype'"));
    }

    #[test]
    fn test_curve_attributes_apply_to_every_following_curve() {
        let text = format!(
            "{}deg 3\ncstype bezier\ncurv 0.0 1.0 1 2 3\ncurv 0.0 1.0 3 2 1\n",
            TRIANGLE
        );
        let (mesh, diagnostics) = load(&text);

        assert_eq!(mesh.curves().len(), 2);
        for curve in mesh.curves() {
            assert_eq!(curve.degree, 3);
            assert_eq!(curve.curve_type, CurveType::Bezier);
        }
        assert_eq!(mesh.curves()[1].control_points[0], Vertex::new(0.0, 1.0, 0.0));
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_failed_curve_keeps_attributes() {
        let text = format!(
            "{}deg 2\ncstype taylor\ncurv 0.0 1.0\ncurv 0.0 1.0 2 3\n",
            TRIANGLE
        );
        let (mesh, diagnostics) = load(&text);

        assert_eq!(mesh.curves().len(), 1);
        assert_eq!(mesh.curves()[0].degree, 2);
        assert_eq!(mesh.curves()[0].curve_type, CurveType::Taylor);
        assert_eq!(diagnostics.summary().errors, 1);
        assert_eq!(diagnostics.issues()[0].location.line, Some(6));
    }

    #[test]
    fn test_newer_attributes_replace_older_ones() {
        let text = format!(
            "{}deg 3\ncstype bezier\ncurv 0.0 1.0 1 2 3\ndeg 1\ncurv 0.0 1.0 1 2\n",
            TRIANGLE
        );
        let (mesh, _) = load(&text);

        assert_eq!(mesh.curves()[1].degree, 1);
        assert_eq!(mesh.curves()[1].curve_type, CurveType::Bezier);
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let text = format!("\u{feff}{}f 1 2 3\n", TRIANGLE);
        let (mesh, diagnostics) = load(&text);

        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.vertices()[0], Vertex::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.faces()[0].vertices.len(), 3);
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_parameter_count_mismatch() {
        let text = format!(
            "{}deg 3\ncstype bezier\ncurv 0.3 0.1 1 2 3\nparm 0.0 1.0\n",
            TRIANGLE
        );
        let (mesh, diagnostics) = load(&text);

        let curve = &mesh.curves()[0];
        assert_eq!(curve.global_parameter_range, UNSPECIFIED_RANGE);
        assert!(!curve.has_parameters);
        assert!(curve.parameters.is_empty());
        assert_eq!(diagnostics.summary().warnings, 1);
        assert_eq!(diagnostics.summary().errors, 1);
    }

    #[test]
    fn test_orphan_parameters() {
        let (mesh, diagnostics) = load("parm 0.0 1.0\n");
        assert!(mesh.is_empty());
        assert!(diagnostics.issues()[0].message.contains("[E3004]"));
    }

    #[test]
    fn test_material_libraries_recorded_without_loading() {
        let (mesh, diagnostics) = load("mtllib a.mtl b.mtl\nc_interp on\nd_interp off\n");
        assert_eq!(mesh.material_libraries().len(), 2);
        assert!(mesh.materials().is_empty());
        assert!(mesh.color_interpolation());
        assert!(!mesh.dissolve_interpolation());
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_crlf_and_invalid_utf8_lines() {
        let mut bytes = b"v 1 2 3\r\n".to_vec();
        bytes.extend_from_slice(b"v \xff 0 0\n");
        bytes.extend_from_slice(b"v 4 5 6\r\n");

        let mut diagnostics = Diagnostics::new();
        let mesh = ObjLoader::new()
            .load_from_reader(bytes.as_slice(), &mut diagnostics)
            .unwrap();
        assert_eq!(mesh.vertices().len(), 2);
        assert_eq!(diagnostics.summary().errors, 1);
    }

    #[test]
    fn test_extension_check() {
        assert!(has_extension(Path::new("cube.obj"), "obj"));
        assert!(has_extension(Path::new("dir/CUBE.OBJ"), "obj"));
        assert!(!has_extension(Path::new("cube.obj.txt"), "obj"));
        assert!(!has_extension(Path::new("obj"), "obj"));
    }

    #[test]
    fn test_wrong_extension_is_rejected_before_open() {
        let mut diagnostics = Diagnostics::new();
        let err = ObjLoader::new()
            .load("does-not-exist.txt", &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension { expected: "obj", .. }));
        assert_eq!(diagnostics.summary(), Default::default());
    }
}
