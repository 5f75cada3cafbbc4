//! MTL material library loading
//!
//! Only `newmtl` lines are read; every other statement in the library is
//! skipped and the remaining [`Material`] fields keep their defaults.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::loader::{for_each_line, has_extension};
use crate::model::Material;
use crate::prefix::{NEW_MATERIAL, is_blank_or_comment};

/// Loader for Wavefront MTL material libraries
#[derive(Debug, Clone, Copy, Default)]
pub struct MtlLoader;

impl MtlLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load a material library from disk
    ///
    /// The path must end in `.mtl` (any case); otherwise the file is not
    /// opened and [`Error::UnsupportedExtension`] is returned.
    pub fn load(
        &self,
        path: impl AsRef<Path>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Material>> {
        let path = path.as_ref();
        if !has_extension(path, "mtl") {
            return Err(Error::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: "mtl",
            });
        }

        let file = File::open(path)?;
        diagnostics.info(format!("Loading material library {}", path.display()));

        let previous = diagnostics.enter_file(Some(path));
        let result = self.read(BufReader::new(file), diagnostics);
        diagnostics.restore(previous);

        let materials = result?;
        diagnostics.info(format!(
            "Finished loading {}: {} materials",
            path.display(),
            materials.len()
        ));
        Ok(materials)
    }

    /// Load a material library from any reader
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Material>> {
        let previous = diagnostics.enter_file(None);
        let result = self.read(BufReader::new(reader), diagnostics);
        diagnostics.restore(previous);
        result
    }

    fn read<R: BufRead>(&self, reader: R, diagnostics: &mut Diagnostics) -> Result<Vec<Material>> {
        let mut materials = Vec::new();
        for_each_line(reader, diagnostics, |line, diagnostics| {
            if is_blank_or_comment(line) {
                return;
            }
            let mut tokens = line.split_whitespace();
            if tokens.next() != Some(NEW_MATERIAL) {
                return;
            }
            match tokens.next() {
                Some(name) => {
                    diagnostics.debug(format!("Material found: {}", name));
                    materials.push(Material::new(name));
                }
                None => diagnostics.error(Error::missing_field("material", "name")),
            }
        })?;
        Ok(materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materials_in_file_order() {
        let text = "# two materials\nnewmtl red\nKd 1 0 0\nnewmtl blue\nKd 0 0 1\n";
        let mut diagnostics = Diagnostics::new();
        let materials = MtlLoader::new()
            .load_from_reader(text.as_bytes(), &mut diagnostics)
            .unwrap();

        let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["red", "blue"]);
        // Only the name is read
        assert_eq!(materials[0], Material::new("red"));
        assert_eq!(diagnostics.summary().debug, 2);
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_unnamed_material_is_an_error() {
        let mut diagnostics = Diagnostics::new();
        let materials = MtlLoader::new()
            .load_from_reader("newmtl\nnewmtl ok\n".as_bytes(), &mut diagnostics)
            .unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(diagnostics.summary().errors, 1);
        assert_eq!(diagnostics.issues()[0].location.line, Some(1));
    }

    #[test]
    fn test_wrong_extension_is_rejected() {
        let mut diagnostics = Diagnostics::new();
        let err = MtlLoader::new()
            .load("materials.txt", &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension { expected: "mtl", .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut diagnostics = Diagnostics::new();
        let err = MtlLoader::new()
            .load("definitely/not/here.mtl", &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
