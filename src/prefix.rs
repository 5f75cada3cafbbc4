//! Line prefix table
//!
//! Maps the first whitespace-delimited token of an OBJ line to the kind of
//! element it declares. Matching the whole token is what keeps `v`, `vn`,
//! `vt` and `vp` apart (they differ in the second character), and likewise
//! `p` from `parm`, `l` from `lod`, `curv` from `curv2`.

/// Prefix starting a new material in an MTL file
pub const NEW_MATERIAL: &str = "newmtl";

/// Character starting a comment line
pub const COMMENT: char = '#';

/// Kind of element declared by an OBJ line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `v`
    Vertex,
    /// `vn`
    Normal,
    /// `vt`
    Texture,
    /// `vp`
    ParameterVertex,
    /// `f`
    Face,
    /// `p`
    Point,
    /// `l`
    Line,
    /// `g`
    Group,
    /// `o`
    Object,
    /// `s`
    Smoothing,
    /// `curv`
    Curve,
    /// `deg`
    Degree,
    /// `cstype`
    CurveType,
    /// `parm`
    Parameters,
    /// `mtllib`
    MaterialLibrary,
    /// `c_interp`
    ColorInterpolation,
    /// `d_interp`
    DissolveInterpolation,
}

const PREFIXES: [(&str, ElementKind); 17] = [
    ("v", ElementKind::Vertex),
    ("vn", ElementKind::Normal),
    ("vt", ElementKind::Texture),
    ("vp", ElementKind::ParameterVertex),
    ("f", ElementKind::Face),
    ("p", ElementKind::Point),
    ("l", ElementKind::Line),
    ("g", ElementKind::Group),
    ("o", ElementKind::Object),
    ("s", ElementKind::Smoothing),
    ("curv", ElementKind::Curve),
    ("deg", ElementKind::Degree),
    ("cstype", ElementKind::CurveType),
    ("parm", ElementKind::Parameters),
    ("mtllib", ElementKind::MaterialLibrary),
    ("c_interp", ElementKind::ColorInterpolation),
    ("d_interp", ElementKind::DissolveInterpolation),
];

impl ElementKind {
    /// Prefix token that introduces this kind
    pub fn prefix(self) -> &'static str {
        PREFIXES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(prefix, _)| *prefix)
            .unwrap_or_default()
    }

    /// Human-readable name used in messages
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Normal => "normal",
            ElementKind::Texture => "texture",
            ElementKind::ParameterVertex => "parameter space vertex",
            ElementKind::Face => "face",
            ElementKind::Point => "point",
            ElementKind::Line => "line",
            ElementKind::Group => "group",
            ElementKind::Object => "object",
            ElementKind::Smoothing => "smoothing group",
            ElementKind::Curve => "curve",
            ElementKind::Degree => "degree",
            ElementKind::CurveType => "curve type",
            ElementKind::Parameters => "parameter list",
            ElementKind::MaterialLibrary => "material library",
            ElementKind::ColorInterpolation => "color interpolation",
            ElementKind::DissolveInterpolation => "dissolve interpolation",
        }
    }

    /// Look up the kind for a prefix token
    pub fn from_prefix(token: &str) -> Option<Self> {
        PREFIXES
            .iter()
            .find(|(prefix, _)| *prefix == token)
            .map(|(_, kind)| *kind)
    }
}

/// Whether a line carries no element: empty, whitespace only, or a comment
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT)
}

/// Classify a line by its first token
///
/// Returns `None` for blank lines, comments and unrecognized prefixes.
pub fn classify(line: &str) -> Option<ElementKind> {
    if is_blank_or_comment(line) {
        return None;
    }
    line.split_whitespace().next().and_then(ElementKind::from_prefix)
}
