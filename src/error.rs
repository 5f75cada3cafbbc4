//! Error types for OBJ/MTL loading
//!
//! Every error carries a code so that log output can be grepped and
//! categorized.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and file-level errors (fatal to the whole load)
//! - **E2xxx**: Line syntax errors (fatal to the offending line)
//! - **E3xxx**: Cross-reference and attribute correlation errors
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: File does not carry the expected extension
//! - `E2001`: Numeric or token parse error
//! - `E2002`: Required field missing from a line
//! - `E2003`: Unknown curve/surface type
//! - `E2004`: Curve degree below 1
//! - `E2005`: Curve parameter outside `[0, 1]`
//! - `E3001`: Curve defined without a preceding degree/type
//! - `E3002`: Index does not resolve into an already-parsed buffer
//! - `E3003`: Parameter count differs from control point count
//! - `E3004`: Parameter list with no curve to attach to

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for OBJ/MTL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading OBJ and MTL files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file path does not end in the extension the loader handles
    ///
    /// **Error Code**: E1002
    ///
    /// Raised before the file is opened.
    #[error("[E1002] '{}' is not a .{expected} file", .path.display())]
    UnsupportedExtension {
        /// The rejected path
        path: PathBuf,
        /// Expected extension, without the dot
        expected: &'static str,
    },

    /// Parse error for numeric values or tokens
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Invalid number format (e.g. "1,5" instead of "1.5")
    /// - Non-numeric characters in numeric fields
    #[error("[E2001] Parse error: {0}")]
    ParseError(String),

    /// A line ended before a required field
    ///
    /// **Error Code**: E2002
    #[error("[E2002] '{element}' line is missing its {field}")]
    MissingField {
        /// Element kind being parsed
        element: &'static str,
        /// Name of the missing field
        field: &'static str,
    },

    /// The `cstype` value is not one of the eight recognized forms
    ///
    /// **Error Code**: E2003
    #[error(
        "[E2003] Invalid curve/surface type '{0}'. Must be one of: bezier, b-spline, cardinal, \
         taylor, optionally preceded by 'rat'"
    )]
    InvalidCurveType(String),

    /// The `deg` value is below 1
    ///
    /// **Error Code**: E2004
    #[error("[E2004] Invalid curve degree {0}: degree must be at least 1")]
    InvalidDegree(i64),

    /// A `parm` value lies outside `[0, 1]`
    ///
    /// **Error Code**: E2005
    #[error("[E2005] Curve parameter {0} is outside the range [0, 1]")]
    ParameterOutOfRange(f32),

    /// A `curv` line was reached with no pending degree and/or type
    ///
    /// **Error Code**: E3001
    ///
    /// **Suggestions**:
    /// - Put `deg` and `cstype` lines before every `curv` line
    #[error("[E3001] Curve has no preceding {}", missing_curve_attributes(.degree, .curve_type))]
    MissingCurveAttributes {
        /// The degree was missing
        degree: bool,
        /// The curve type was missing
        curve_type: bool,
    },

    /// A 1-based reference does not resolve into its buffer
    ///
    /// **Error Code**: E3002
    ///
    /// **Common Causes**:
    /// - Index 0 (OBJ indices start at 1)
    /// - Forward reference to an element declared later in the file
    #[error("[E3002] {element} index {index} is out of bounds ({len} parsed so far)")]
    IndexOutOfRange {
        /// Buffer the index points into
        element: &'static str,
        /// The declared (1-based) index
        index: i64,
        /// Length of the buffer when the reference was read
        len: usize,
    },

    /// A `parm` line does not carry one value per control point
    ///
    /// **Error Code**: E3003
    #[error("[E3003] Curve has {expected} control points but {found} parameters were given")]
    ParameterCountMismatch {
        /// Control point count of the curve
        expected: usize,
        /// Number of parameters on the line
        found: usize,
    },

    /// A `parm` line appeared before any curve
    ///
    /// **Error Code**: E3004
    #[error("[E3004] Parameter list has no preceding curve to attach to")]
    OrphanParameters,
}

fn missing_curve_attributes(degree: &bool, curve_type: &bool) -> &'static str {
    match (*degree, *curve_type) {
        (true, true) => "'deg' and 'cstype' lines",
        (true, false) => "'deg' line",
        _ => "'cstype' line",
    }
}

impl Error {
    /// Create a ParseError naming the element, field and offending token
    ///
    /// # Arguments
    /// * `element` - The element kind being parsed (e.g. "vertex")
    /// * `field` - The field being parsed (e.g. "x coordinate")
    /// * `value` - The token that failed to parse
    /// * `expected_type` - The expected type (e.g. "floating-point number")
    pub fn parse_error_with_context(
        element: &str,
        field: &str,
        value: &str,
        expected_type: &str,
    ) -> Self {
        Error::ParseError(format!(
            "Failed to parse {} {}: expected {}, got '{}'",
            element, field, expected_type, value
        ))
    }

    /// Create a MissingField error
    pub fn missing_field(element: &'static str, field: &'static str) -> Self {
        Error::MissingField { element, field }
    }

    /// Whether this error aborts a whole load rather than a single line
    pub fn is_fatal_to_load(&self) -> bool {
        matches!(self, Error::Io(_) | Error::UnsupportedExtension { .. })
    }
}
