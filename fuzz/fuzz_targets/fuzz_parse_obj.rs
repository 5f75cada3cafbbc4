#![no_main]

use libfuzzer_sys::fuzz_target;
use objmesh::{Diagnostics, ObjLoader};

fuzz_target!(|data: &[u8]| {
    // mtllib references in fuzz input are recorded, never opened
    let config = objmesh::LoadConfig::new().follow_material_libraries(false);
    let mut diagnostics = Diagnostics::new();
    let mesh = ObjLoader::with_config(config)
        .load_from_reader(data, &mut diagnostics)
        .expect("in-memory reads cannot fail");

    for group in mesh.groups() {
        assert_eq!(mesh.resolve_faces(&group.faces).count(), group.faces.len());
    }
    for curve in mesh.curves() {
        assert!(!curve.has_parameters || curve.parameters.len() == curve.control_points.len());
    }
});
