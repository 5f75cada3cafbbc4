//! Parsing of `v`, `vn`, `vt` and `vp` lines

use super::{arguments, parse_f32};
use crate::error::Result;
use crate::model::{Normal, ParameterSpaceVertex, Texture, Vertex};
use crate::prefix::ElementKind;

/// Parse the first `N` arguments of a line as floats; extra tokens are ignored
fn parse_floats<const N: usize>(
    kind: ElementKind,
    line: &str,
    fields: [&'static str; N],
) -> Result<[f32; N]> {
    let mut tokens = arguments(line);
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = parse_f32(kind, field, tokens.next())?;
    }
    Ok(values)
}

/// Parse a `v x y z` line
pub fn parse_vertex(line: &str) -> Result<Vertex> {
    let [x, y, z] = parse_floats(
        ElementKind::Vertex,
        line,
        ["x coordinate", "y coordinate", "z coordinate"],
    )?;
    Ok(Vertex::new(x, y, z))
}

/// Parse a `vn x y z` line
pub fn parse_normal(line: &str) -> Result<Normal> {
    let [x, y, z] = parse_floats(
        ElementKind::Normal,
        line,
        ["x component", "y component", "z component"],
    )?;
    Ok(Normal::new(x, y, z))
}

/// Parse a `vt u v` line
pub fn parse_texture(line: &str) -> Result<Texture> {
    let [u, v] = parse_floats(ElementKind::Texture, line, ["u coordinate", "v coordinate"])?;
    Ok(Texture::new(u, v))
}

/// Parse a `vp x y z` line
pub fn parse_parameter_vertex(line: &str) -> Result<ParameterSpaceVertex> {
    let [x, y, z] = parse_floats(
        ElementKind::ParameterVertex,
        line,
        ["x coordinate", "y coordinate", "z coordinate"],
    )?;
    Ok(ParameterSpaceVertex::new(x, y, z))
}
