//! Parsing of `f`, `p` and `l` lines and 1-based reference resolution

use super::arguments;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::model::{Face, Line, Mesh, Point};
use crate::prefix::ElementKind;

/// One `v`, `v/t`, `v//n` or `v/t/n` reference group, as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexGroup {
    /// Vertex index (1-based)
    pub vertex: i64,
    /// Texture index (1-based), if given
    pub texture: Option<i64>,
    /// Normal index (1-based), if given
    pub normal: Option<i64>,
}

/// Parse one slash-delimited reference group
///
/// Empty or absent texture/normal components are `None`. A missing or
/// non-integer vertex component, a non-integer texture/normal component, or
/// more than three components reject the whole line.
pub fn parse_index_group(kind: ElementKind, token: &str) -> Result<IndexGroup> {
    let mut parts = token.split('/');

    let vertex = match parts.next() {
        Some(v) if !v.is_empty() => parse_index(kind, "vertex index", v)?,
        _ => return Err(Error::missing_field(kind.name(), "vertex index")),
    };
    let texture = parse_optional_index(kind, "texture index", parts.next())?;
    let normal = parse_optional_index(kind, "normal index", parts.next())?;

    if parts.next().is_some() {
        return Err(Error::parse_error_with_context(
            kind.name(),
            "reference",
            token,
            "at most three '/'-separated indices",
        ));
    }

    Ok(IndexGroup {
        vertex,
        texture,
        normal,
    })
}

pub(crate) fn parse_index(kind: ElementKind, field: &str, token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| Error::parse_error_with_context(kind.name(), field, token, "integer"))
}

fn parse_optional_index(
    kind: ElementKind,
    field: &str,
    token: Option<&str>,
) -> Result<Option<i64>> {
    match token {
        None | Some("") => Ok(None),
        Some(t) => parse_index(kind, field, t).map(Some),
    }
}

/// Resolve a 1-based index into a buffer as it exists now
pub(crate) fn resolve<T: Copy>(buffer: &[T], element: &'static str, index: i64) -> Result<T> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| buffer.get(i))
        .copied()
        .ok_or(Error::IndexOutOfRange {
            element,
            index,
            len: buffer.len(),
        })
}

/// Push the resolved value, or report the failure and skip it
pub(crate) fn resolve_into<T: Copy>(
    target: &mut Vec<T>,
    buffer: &[T],
    element: &'static str,
    index: i64,
    diagnostics: &mut Diagnostics,
) {
    match resolve(buffer, element, index) {
        Ok(value) => target.push(value),
        Err(err) => diagnostics.error(err),
    }
}

/// Split the arguments of an element line into reference groups
fn index_groups(kind: ElementKind, line: &str) -> Result<Vec<IndexGroup>> {
    let groups = arguments(line)
        .map(|token| parse_index_group(kind, token))
        .collect::<Result<Vec<_>>>()?;
    if groups.is_empty() {
        return Err(Error::missing_field(kind.name(), "vertex references"));
    }
    Ok(groups)
}

/// Parse an `f` line
pub fn parse_face(line: &str, mesh: &Mesh, diagnostics: &mut Diagnostics) -> Result<Face> {
    let mut face = Face::new();
    for group in index_groups(ElementKind::Face, line)? {
        resolve_into(&mut face.vertices, mesh.vertices(), "vertex", group.vertex, diagnostics);
        if let Some(t) = group.texture {
            resolve_into(&mut face.textures, mesh.textures(), "texture", t, diagnostics);
        }
        if let Some(n) = group.normal {
            resolve_into(&mut face.normals, mesh.normals(), "normal", n, diagnostics);
        }
    }
    Ok(face)
}

/// Parse a `p` line
///
/// Normal components, if written, are ignored.
pub fn parse_point(line: &str, mesh: &Mesh, diagnostics: &mut Diagnostics) -> Result<Point> {
    let mut point = Point::new();
    for group in index_groups(ElementKind::Point, line)? {
        resolve_into(&mut point.vertices, mesh.vertices(), "vertex", group.vertex, diagnostics);
        if let Some(t) = group.texture {
            resolve_into(&mut point.textures, mesh.textures(), "texture", t, diagnostics);
        }
    }
    Ok(point)
}

/// Parse an `l` line
///
/// Normal components, if written, are ignored.
pub fn parse_line(line: &str, mesh: &Mesh, diagnostics: &mut Diagnostics) -> Result<Line> {
    let mut polyline = Line::new();
    for group in index_groups(ElementKind::Line, line)? {
        resolve_into(&mut polyline.vertices, mesh.vertices(), "vertex", group.vertex, diagnostics);
        if let Some(t) = group.texture {
            resolve_into(&mut polyline.textures, mesh.textures(), "texture", t, diagnostics);
        }
    }
    Ok(polyline)
}
