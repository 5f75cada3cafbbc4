//! Freeform curve types

use std::fmt;

use super::geometry::Vertex;

/// Degree used when a curve is built without an explicit `deg`
pub const DEFAULT_DEGREE: u32 = 3;

/// Global parameter range stored when the `curv` line gives no usable range
pub const UNSPECIFIED_RANGE: [f32; 2] = [-1.0, -1.0];

/// Curve or surface basis type, as declared by `cstype`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// `bezier`
    Bezier,
    /// `rat bezier`
    RationalBezier,
    /// `b-spline` (also written `bspline`)
    BSpline,
    /// `rat b-spline`
    RationalBSpline,
    /// `cardinal`
    Cardinal,
    /// `rat cardinal`
    RationalCardinal,
    /// `taylor`
    Taylor,
    /// `rat taylor`
    RationalTaylor,
}

impl CurveType {
    /// Every recognized type, in declaration order
    pub const ALL: [CurveType; 8] = [
        CurveType::Bezier,
        CurveType::RationalBezier,
        CurveType::BSpline,
        CurveType::RationalBSpline,
        CurveType::Cardinal,
        CurveType::RationalCardinal,
        CurveType::Taylor,
        CurveType::RationalTaylor,
    ];

    /// Normalized `cstype` text for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveType::Bezier => "bezier",
            CurveType::RationalBezier => "rat bezier",
            CurveType::BSpline => "b-spline",
            CurveType::RationalBSpline => "rat b-spline",
            CurveType::Cardinal => "cardinal",
            CurveType::RationalCardinal => "rat cardinal",
            CurveType::Taylor => "taylor",
            CurveType::RationalTaylor => "rat taylor",
        }
    }

    /// Whether the type carries weights (`rat` prefix)
    pub fn is_rational(&self) -> bool {
        matches!(
            self,
            CurveType::RationalBezier
                | CurveType::RationalBSpline
                | CurveType::RationalCardinal
                | CurveType::RationalTaylor
        )
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A freeform curve (`curv u0 u1 v1 v2 ...`)
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Basis type from the last `cstype` line
    pub curve_type: CurveType,
    /// Degree from the last `deg` line
    pub degree: u32,
    /// Resolved control points
    pub control_points: Vec<Vertex>,
    /// `[start, end]` of the global parameter range, or [`UNSPECIFIED_RANGE`]
    pub global_parameter_range: [f32; 2],
    /// Per-control-point parameters from a following `parm` line
    pub parameters: Vec<f32>,
    /// Set once a valid `parm` line has been attached
    pub has_parameters: bool,
}

impl Curve {
    /// Create a new curve with no control points and an unspecified range
    pub fn new(curve_type: CurveType, degree: u32) -> Self {
        Self {
            curve_type,
            degree,
            control_points: Vec::new(),
            global_parameter_range: UNSPECIFIED_RANGE,
            parameters: Vec::new(),
            has_parameters: false,
        }
    }

    /// Whether the curve has a valid global parameter range
    pub fn has_range(&self) -> bool {
        self.global_parameter_range != UNSPECIFIED_RANGE
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::new(CurveType::Bezier, DEFAULT_DEGREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_type_names() {
        let names: Vec<&str> = CurveType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "bezier",
                "rat bezier",
                "b-spline",
                "rat b-spline",
                "cardinal",
                "rat cardinal",
                "taylor",
                "rat taylor"
            ]
        );
        assert_eq!(CurveType::RationalTaylor.to_string(), "rat taylor");
        assert!(CurveType::RationalCardinal.is_rational());
        assert!(!CurveType::BSpline.is_rational());
    }

    #[test]
    fn test_default_curve() {
        let curve = Curve::default();
        assert_eq!(curve.degree, DEFAULT_DEGREE);
        assert!(!curve.has_range());
        assert!(!curve.has_parameters);
        assert!(curve.control_points.is_empty());
    }
}
