//! Parsing of freeform curve lines: `cstype`, `deg`, `parm` and `curv`
//!
//! `cstype` and `deg` only describe the next curve, and `parm` only refines
//! the previous one; correlating them is the loader's job. This module parses
//! each line on its own.

use super::arguments;
use super::elements::{parse_index, resolve_into};
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::model::{CurveType, Mesh, UNSPECIFIED_RANGE, Vertex};
use crate::prefix::ElementKind;

/// Geometry of a `curv` line, before degree and type are attached
#[derive(Debug, Clone, PartialEq)]
pub struct CurveBody {
    /// Validated `[start, end]`, or [`UNSPECIFIED_RANGE`]
    pub global_parameter_range: [f32; 2],
    /// Resolved control points
    pub control_points: Vec<Vertex>,
}

/// How the two leading tokens of a `curv` line were written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTokens {
    /// Both contain a decimal point: they are the range
    Both,
    /// Only one contains a decimal point: both are consumed, no range
    One,
    /// Neither contains a decimal point: no range, nothing consumed
    Neither,
}

impl RangeTokens {
    /// Classify the leading tokens of a `curv` line's arguments
    pub fn classify(args: &[&str]) -> Self {
        let is_decimal = |index: usize| args.get(index).is_some_and(|t| t.contains('.'));
        match (is_decimal(0), is_decimal(1)) {
            (true, true) => RangeTokens::Both,
            (false, false) => RangeTokens::Neither,
            _ => RangeTokens::One,
        }
    }
}

/// Parse a `cstype [rat] type` line
pub fn parse_curve_type(line: &str) -> Result<CurveType> {
    let kind = ElementKind::CurveType;
    let mut tokens = arguments(line);
    let first = tokens
        .next()
        .ok_or_else(|| Error::missing_field(kind.name(), "type"))?;

    let (rational, name) = if first == "rat" {
        let name = tokens
            .next()
            .ok_or_else(|| Error::InvalidCurveType(first.to_string()))?;
        (true, name)
    } else {
        (false, first)
    };

    let curve_type = match (rational, name) {
        (false, "bezier") => CurveType::Bezier,
        (true, "bezier") => CurveType::RationalBezier,
        (false, "bspline" | "b-spline") => CurveType::BSpline,
        (true, "bspline" | "b-spline") => CurveType::RationalBSpline,
        (false, "cardinal") => CurveType::Cardinal,
        (true, "cardinal") => CurveType::RationalCardinal,
        (false, "taylor") => CurveType::Taylor,
        (true, "taylor") => CurveType::RationalTaylor,
        _ => {
            let written = if rational {
                format!("rat {}", name)
            } else {
                name.to_string()
            };
            return Err(Error::InvalidCurveType(written));
        }
    };
    Ok(curve_type)
}

/// Parse a `deg n` line
///
/// Degrees below 1 reject the line.
pub fn parse_degree(line: &str) -> Result<u32> {
    let kind = ElementKind::Degree;
    let token = arguments(line)
        .next()
        .ok_or_else(|| Error::missing_field(kind.name(), "value"))?;
    let degree = parse_index(kind, "value", token)?;
    if degree < 1 {
        return Err(Error::InvalidDegree(degree));
    }
    u32::try_from(degree)
        .map_err(|_| Error::parse_error_with_context(kind.name(), "value", token, "32-bit integer"))
}

/// Parse a `parm [u|v] p1 p2 ...` line
///
/// Every value must lie in `[0, 1]`; the first one that does not rejects the
/// whole line.
pub fn parse_parameters(line: &str) -> Result<Vec<f32>> {
    let kind = ElementKind::Parameters;
    let mut tokens = arguments(line).peekable();
    if matches!(tokens.peek(), Some(&"u") | Some(&"v")) {
        tokens.next();
    }

    let mut values = Vec::new();
    for token in tokens {
        let value = super::parse_f32(kind, "value", Some(token))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::ParameterOutOfRange(value));
        }
        values.push(value);
    }

    if values.is_empty() {
        return Err(Error::missing_field(kind.name(), "values"));
    }
    Ok(values)
}

/// Validate an explicit `start end` pair
fn parse_range(start: &str, end: &str) -> Option<[f32; 2]> {
    let start = start.parse::<f32>().ok()?;
    let end = end.parse::<f32>().ok()?;
    let unit = 0.0..=1.0;
    (unit.contains(&start) && unit.contains(&end) && start <= end).then_some([start, end])
}

/// Parse a `curv u0 u1 v1 v2 ...` line
///
/// The range is only taken when both leading tokens contain a decimal point.
/// Any other shape yields [`UNSPECIFIED_RANGE`] and a warning; see
/// [`RangeTokens`] for which tokens are then treated as control points.
pub fn parse_curve(line: &str, mesh: &Mesh, diagnostics: &mut Diagnostics) -> Result<CurveBody> {
    let kind = ElementKind::Curve;
    let args: Vec<&str> = arguments(line).collect();

    let (range, start) = match RangeTokens::classify(&args) {
        RangeTokens::Both => match parse_range(args[0], args[1]) {
            Some(range) => (Ok(range), 2),
            None => (
                Err(format!(
                    "Invalid global parameter range '{} {}', reset to [-1, -1]",
                    args[0], args[1]
                )),
                2,
            ),
        },
        RangeTokens::One => (
            Err("Curve global parameter range is incomplete, reset to [-1, -1]".to_string()),
            args.len().min(2),
        ),
        RangeTokens::Neither => (
            Err("Curve has no global parameter range, set to [-1, -1]".to_string()),
            0,
        ),
    };

    let indices = args[start..]
        .iter()
        .map(|token| parse_index(kind, "control point index", token))
        .collect::<Result<Vec<_>>>()?;
    if indices.is_empty() {
        return Err(Error::missing_field(kind.name(), "control points"));
    }

    let global_parameter_range = range.unwrap_or_else(|warning| {
        diagnostics.warning(warning);
        UNSPECIFIED_RANGE
    });

    let mut control_points = Vec::with_capacity(indices.len());
    for index in indices {
        resolve_into(&mut control_points, mesh.vertices(), "vertex", index, diagnostics);
    }

    Ok(CurveBody {
        global_parameter_range,
        control_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_with_vertices(count: usize) -> Mesh {
        let mut mesh = Mesh::new();
        for i in 0..count {
            mesh.push_vertex(Vertex::new(i as f32, 0.0, 0.0));
        }
        mesh
    }

    #[test]
    fn test_all_curve_types() {
        for curve_type in CurveType::ALL {
            let line = format!("cstype {}", curve_type.as_str());
            assert_eq!(parse_curve_type(&line).unwrap(), curve_type);
        }
        assert_eq!(parse_curve_type("cstype bspline").unwrap(), CurveType::BSpline);
        assert_eq!(
            parse_curve_type("cstype rat bspline").unwrap(),
            CurveType::RationalBSpline
        );
    }

    #[test]
    fn test_invalid_curve_types() {
        assert!(matches!(
            parse_curve_type("cstype nurbs"),
            Err(Error::InvalidCurveType(ref t)) if t == "nurbs"
        ));
        assert!(matches!(
            parse_curve_type("cstype rat nurbs"),
            Err(Error::InvalidCurveType(ref t)) if t == "rat nurbs"
        ));
        assert!(parse_curve_type("cstype rat").is_err());
        assert!(parse_curve_type("cstype").is_err());
    }

    #[test]
    fn test_degree() {
        assert_eq!(parse_degree("deg 3").unwrap(), 3);
        assert_eq!(parse_degree("deg 1").unwrap(), 1);
        assert!(matches!(parse_degree("deg 0"), Err(Error::InvalidDegree(0))));
        assert!(matches!(parse_degree("deg -2"), Err(Error::InvalidDegree(-2))));
        assert!(parse_degree("deg three").is_err());
        assert!(parse_degree("deg").is_err());
    }

    #[test]
    fn test_parameters() {
        assert_eq!(parse_parameters("parm 0.0 0.5 1.0").unwrap(), vec![0.0, 0.5, 1.0]);
        assert_eq!(parse_parameters("parm u 0 1").unwrap(), vec![0.0, 1.0]);
        assert!(matches!(
            parse_parameters("parm 0.0 1.5 0.2"),
            Err(Error::ParameterOutOfRange(v)) if v == 1.5
        ));
        assert!(parse_parameters("parm -0.1").is_err());
        assert!(parse_parameters("parm").is_err());
        assert!(parse_parameters("parm u").is_err());
    }

    #[test]
    fn test_range_token_classification() {
        assert_eq!(RangeTokens::classify(&["0.0", "1.0", "1"]), RangeTokens::Both);
        assert_eq!(RangeTokens::classify(&["0.0", "1", "2"]), RangeTokens::One);
        assert_eq!(RangeTokens::classify(&["0", "1.0", "2"]), RangeTokens::One);
        assert_eq!(RangeTokens::classify(&["1", "2", "3"]), RangeTokens::Neither);
        assert_eq!(RangeTokens::classify(&[]), RangeTokens::Neither);
    }

    #[test]
    fn test_curve_with_valid_range() {
        let mesh = mesh_with_vertices(3);
        let mut diagnostics = Diagnostics::new();
        let body = parse_curve("curv 0.0 1.0 1 2 3", &mesh, &mut diagnostics).unwrap();

        assert_eq!(body.global_parameter_range, [0.0, 1.0]);
        assert_eq!(body.control_points.len(), 3);
        assert_eq!(body.control_points[2], Vertex::new(2.0, 0.0, 0.0));
        assert!(diagnostics.summary().is_clean());
    }

    #[test]
    fn test_curve_with_reversed_range() {
        let mesh = mesh_with_vertices(3);
        let mut diagnostics = Diagnostics::new();
        let body = parse_curve("curv 0.3 0.1 1 2 3", &mesh, &mut diagnostics).unwrap();

        assert_eq!(body.global_parameter_range, UNSPECIFIED_RANGE);
        assert_eq!(body.control_points.len(), 3);
        assert_eq!(diagnostics.summary().warnings, 1);
    }

    #[test]
    fn test_curve_with_out_of_unit_range() {
        let mesh = mesh_with_vertices(2);
        let mut diagnostics = Diagnostics::new();
        let body = parse_curve("curv 0.0 2.0 1 2", &mesh, &mut diagnostics).unwrap();
        assert_eq!(body.global_parameter_range, UNSPECIFIED_RANGE);
        assert_eq!(diagnostics.summary().warnings, 1);
    }

    #[test]
    fn test_curve_with_one_decimal_token() {
        let mesh = mesh_with_vertices(3);
        let mut diagnostics = Diagnostics::new();
        // "1" is consumed together with "0.5"; control points are 2 and 3
        let body = parse_curve("curv 0.5 1 2 3", &mesh, &mut diagnostics).unwrap();

        assert_eq!(body.global_parameter_range, UNSPECIFIED_RANGE);
        assert_eq!(
            body.control_points,
            vec![Vertex::new(1.0, 0.0, 0.0), Vertex::new(2.0, 0.0, 0.0)]
        );
        assert_eq!(diagnostics.summary().warnings, 1);
    }

    #[test]
    fn test_curve_without_range() {
        let mesh = mesh_with_vertices(3);
        let mut diagnostics = Diagnostics::new();
        let body = parse_curve("curv 1 2 3", &mesh, &mut diagnostics).unwrap();

        assert_eq!(body.global_parameter_range, UNSPECIFIED_RANGE);
        assert_eq!(body.control_points.len(), 3);
        assert_eq!(diagnostics.summary().warnings, 1);
    }

    #[test]
    fn test_curve_out_of_range_control_point() {
        let mesh = mesh_with_vertices(2);
        let mut diagnostics = Diagnostics::new();
        let body = parse_curve("curv 0.0 1.0 1 2 3", &mesh, &mut diagnostics).unwrap();

        assert_eq!(body.control_points.len(), 2);
        assert_eq!(diagnostics.summary().errors, 1);
    }

    #[test]
    fn test_curve_without_control_points() {
        let mesh = mesh_with_vertices(2);
        let mut diagnostics = Diagnostics::new();
        assert!(parse_curve("curv 0.0 1.0", &mesh, &mut diagnostics).is_err());
        assert!(parse_curve("curv", &mesh, &mut diagnostics).is_err());
        assert!(parse_curve("curv 0.0 1.0 1 x", &mesh, &mut diagnostics).is_err());
        assert_eq!(diagnostics.summary().warnings, 0);
    }
}
