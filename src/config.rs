//! Loader configuration

use std::path::{Path, PathBuf};

/// Configuration for loading OBJ files
///
/// # Example
///
/// ```
/// use objmesh::{LoadConfig, ObjLoader};
///
/// let config = LoadConfig::new()
///     .with_material_dir("assets/materials")
///     .follow_material_libraries(true);
/// let loader = ObjLoader::with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    follow_material_libraries: bool,
    material_dir: Option<PathBuf>,
}

impl LoadConfig {
    /// Create the default configuration: material libraries are loaded and
    /// resolved next to the OBJ file
    pub fn new() -> Self {
        Self {
            follow_material_libraries: true,
            material_dir: None,
        }
    }

    /// Whether `mtllib` lines open and parse the referenced libraries
    ///
    /// When disabled the library paths are still recorded on the mesh.
    pub fn follow_material_libraries(mut self, follow: bool) -> Self {
        self.follow_material_libraries = follow;
        self
    }

    /// Resolve relative `mtllib` paths against `dir` instead of the OBJ
    /// file's directory
    pub fn with_material_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.material_dir = Some(dir.into());
        self
    }

    /// Whether material libraries are loaded
    pub fn follows_material_libraries(&self) -> bool {
        self.follow_material_libraries
    }

    /// Explicit material directory, if one was set
    pub fn material_dir(&self) -> Option<&Path> {
        self.material_dir.as_deref()
    }

    /// Resolve a library path written in an OBJ file
    ///
    /// Absolute paths are returned unchanged. Relative paths are joined to the
    /// configured material directory, or else to `obj_dir`, or else left
    /// relative to the working directory.
    pub fn resolve_material_path(&self, written: &str, obj_dir: Option<&Path>) -> PathBuf {
        let written = Path::new(written);
        if written.is_absolute() {
            return written.to_path_buf();
        }
        match self.material_dir().or(obj_dir) {
            Some(base) => base.join(written),
            None => written.to_path_buf(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new()
    }
}
