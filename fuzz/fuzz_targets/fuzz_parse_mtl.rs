#![no_main]

use libfuzzer_sys::fuzz_target;
use objmesh::{Diagnostics, MtlLoader};

fuzz_target!(|data: &[u8]| {
    let mut diagnostics = Diagnostics::new();
    let _ = MtlLoader::new().load_from_reader(data, &mut diagnostics);
});
