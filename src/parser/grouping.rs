//! Parsing of `g`, `o` and `s` lines
//!
//! None of these can reject a line: a missing name or an unreadable
//! smoothing level is reported as a warning and replaced by a default.

use super::arguments;
use crate::diagnostics::Diagnostics;
use crate::model::{Group, Object, Smoothing};
use crate::prefix::ElementKind;

/// First argument of the line, or an empty name with a warning
fn parse_name(kind: ElementKind, line: &str, diagnostics: &mut Diagnostics) -> String {
    match arguments(line).next() {
        Some(name) => name.to_string(),
        None => {
            diagnostics.warning(format!("{} has no name, using an empty name", kind.name()));
            String::new()
        }
    }
}

/// Parse a `g name` line
///
/// Only the first name is kept; OBJ allows several group names on one line
/// but membership in multiple groups is not modeled.
pub fn parse_group(line: &str, diagnostics: &mut Diagnostics) -> Group {
    Group::new(parse_name(ElementKind::Group, line, diagnostics))
}

/// Parse an `o name` line
pub fn parse_object(line: &str, diagnostics: &mut Diagnostics) -> Object {
    Object::new(parse_name(ElementKind::Object, line, diagnostics))
}

/// Parse an `s level` / `s off` line
pub fn parse_smoothing(line: &str, diagnostics: &mut Diagnostics) -> Smoothing {
    let level = match arguments(line).next() {
        Some("off") => Some(0),
        Some(token) if token.bytes().all(|b| b.is_ascii_digit()) => token.parse::<u32>().ok(),
        _ => None,
    };

    match level {
        Some(smoothness) => Smoothing::new(smoothness),
        None => {
            diagnostics.warning("Smoothness level not specified, set to 0");
            Smoothing::new(0)
        }
    }
}
