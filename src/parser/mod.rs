//! Element parsing for OBJ lines
//!
//! [`parse`] turns one classified line into one typed [`Element`]. Parsing
//! has no side effects on the mesh: reference-bearing kinds only read the
//! buffers accumulated so far. A returned `Err` means the whole line is
//! rejected; references that fail to resolve inside an otherwise valid line
//! are reported through the [`Diagnostics`] handle and skipped.

mod curve;
mod elements;
mod geometry;
mod grouping;

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::model::*;
use crate::prefix::ElementKind;
use std::str::SplitWhitespace;

pub use curve::{
    CurveBody, RangeTokens, parse_curve, parse_curve_type, parse_degree, parse_parameters,
};
pub use elements::{IndexGroup, parse_face, parse_index_group, parse_line, parse_point};
pub use geometry::{parse_normal, parse_parameter_vertex, parse_texture, parse_vertex};
pub use grouping::{parse_group, parse_object, parse_smoothing};

/// One parsed OBJ line
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// `v`
    Vertex(Vertex),
    /// `vn`
    Normal(Normal),
    /// `vt`
    Texture(Texture),
    /// `vp`
    ParameterVertex(ParameterSpaceVertex),
    /// `f`
    Face(Face),
    /// `p`
    Point(Point),
    /// `l`
    Line(Line),
    /// `g`
    Group(Group),
    /// `o`
    Object(Object),
    /// `s`
    Smoothing(Smoothing),
    /// `curv`; degree and type are supplied by the loader
    Curve(CurveBody),
    /// `deg`
    Degree(u32),
    /// `cstype`
    CurveType(CurveType),
    /// `parm`
    Parameters(Vec<f32>),
    /// `mtllib`, one entry per library named on the line
    MaterialLibraries(Vec<String>),
    /// `c_interp`
    ColorInterpolation(bool),
    /// `d_interp`
    DissolveInterpolation(bool),
}

/// Parse one line as the given element kind
///
/// `mesh` provides the buffers that face, point, line and curve references
/// are resolved against.
pub fn parse(
    kind: ElementKind,
    line: &str,
    mesh: &Mesh,
    diagnostics: &mut Diagnostics,
) -> Result<Element> {
    let element = match kind {
        ElementKind::Vertex => Element::Vertex(parse_vertex(line)?),
        ElementKind::Normal => Element::Normal(parse_normal(line)?),
        ElementKind::Texture => Element::Texture(parse_texture(line)?),
        ElementKind::ParameterVertex => Element::ParameterVertex(parse_parameter_vertex(line)?),
        ElementKind::Face => Element::Face(parse_face(line, mesh, diagnostics)?),
        ElementKind::Point => Element::Point(parse_point(line, mesh, diagnostics)?),
        ElementKind::Line => Element::Line(parse_line(line, mesh, diagnostics)?),
        ElementKind::Group => Element::Group(parse_group(line, diagnostics)),
        ElementKind::Object => Element::Object(parse_object(line, diagnostics)),
        ElementKind::Smoothing => Element::Smoothing(parse_smoothing(line, diagnostics)),
        ElementKind::Curve => Element::Curve(parse_curve(line, mesh, diagnostics)?),
        ElementKind::Degree => Element::Degree(parse_degree(line)?),
        ElementKind::CurveType => Element::CurveType(parse_curve_type(line)?),
        ElementKind::Parameters => Element::Parameters(parse_parameters(line)?),
        ElementKind::MaterialLibrary => {
            Element::MaterialLibraries(parse_material_libraries(line)?)
        }
        ElementKind::ColorInterpolation => {
            Element::ColorInterpolation(parse_switch(ElementKind::ColorInterpolation, line)?)
        }
        ElementKind::DissolveInterpolation => {
            Element::DissolveInterpolation(parse_switch(ElementKind::DissolveInterpolation, line)?)
        }
    };
    Ok(element)
}

/// Tokens following the prefix token
fn arguments(line: &str) -> SplitWhitespace<'_> {
    let mut tokens = line.split_whitespace();
    tokens.next();
    tokens
}

/// Parse a required finite float
fn parse_f32(kind: ElementKind, field: &'static str, token: Option<&str>) -> Result<f32> {
    let token = token.ok_or_else(|| Error::missing_field(kind.name(), field))?;
    let value = token.parse::<f32>().map_err(|_| {
        Error::parse_error_with_context(kind.name(), field, token, "floating-point number")
    })?;
    if !value.is_finite() {
        return Err(Error::parse_error_with_context(
            kind.name(),
            field,
            token,
            "finite number",
        ));
    }
    Ok(value)
}

/// Parse a `mtllib` line into the library paths it names
pub fn parse_material_libraries(line: &str) -> Result<Vec<String>> {
    let paths: Vec<String> = arguments(line).map(str::to_string).collect();
    if paths.is_empty() {
        return Err(Error::missing_field(ElementKind::MaterialLibrary.name(), "path"));
    }
    Ok(paths)
}

/// Parse an `on`/`off` switch line
fn parse_switch(kind: ElementKind, line: &str) -> Result<bool> {
    match arguments(line).next() {
        Some("on") => Ok(true),
        Some("off") => Ok(false),
        Some(other) => Err(Error::parse_error_with_context(
            kind.name(),
            "switch",
            other,
            "'on' or 'off'",
        )),
        None => Err(Error::missing_field(kind.name(), "switch")),
    }
}
