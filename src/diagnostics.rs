//! Per-load diagnostics
//!
//! A [`Diagnostics`] handle is created by the caller and passed into each
//! load. It forwards every message to the [`log`] facade, counts messages per
//! severity, and keeps warnings and errors (with the file and line that
//! produced them) for later inspection.
//!
//! ```
//! use objmesh::{Diagnostics, ObjLoader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut diagnostics = Diagnostics::new();
//! let text = "v 0 0 0\nf 1 2 3\n";
//! let mesh = ObjLoader::new().load_from_reader(text.as_bytes(), &mut diagnostics)?;
//!
//! assert_eq!(mesh.faces().len(), 1);
//! assert_eq!(diagnostics.summary().errors, 2);
//! for issue in diagnostics.issues() {
//!     println!("{}", issue);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

/// `log` target used for every record emitted while loading
pub const LOG_TARGET: &str = "objmesh";

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Something was dropped from the result
    Error,
    /// A default or sentinel was substituted
    Warning,
    /// Load progress
    Info,
    /// Detail useful when debugging input files
    Debug,
}

impl Severity {
    /// Matching `log` level
    pub fn level(self) -> log::Level {
        match self {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
        }
    }

    /// Upper-case label
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the input a message originated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Source file, when loading from a path
    pub file: Option<PathBuf>,
    /// 1-based line number
    pub line: Option<usize>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}", file.display(), line),
            (Some(file), None) => write!(f, "{}", file.display()),
            (None, Some(line)) => write!(f, "line {}", line),
            (None, None) => Ok(()),
        }
    }
}

/// A recorded warning or error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity (always `Error` or `Warning`)
    pub severity: Severity,
    /// Where the message originated
    pub location: Location,
    /// Message text
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location == Location::default() {
            write!(f, "[{}] {}", self.severity, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.severity, self.location, self.message)
        }
    }
}

/// Message counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of debug messages
    pub debug: usize,
    /// Number of info messages
    pub info: usize,
}

impl LoadSummary {
    /// No errors and no warnings were reported
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Load finished with {} errors, {} warnings, {} debug messages, {} info messages.",
            self.errors, self.warnings, self.debug, self.info
        )
    }
}

/// Logging handle for one or more loads
#[derive(Debug, Default)]
pub struct Diagnostics {
    summary: LoadSummary,
    issues: Vec<Diagnostic>,
    location: Location,
}

impl Diagnostics {
    /// Create a new handle with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an error
    pub fn error(&mut self, message: impl fmt::Display) {
        self.emit(Severity::Error, message.to_string());
    }

    /// Report a warning
    pub fn warning(&mut self, message: impl fmt::Display) {
        self.emit(Severity::Warning, message.to_string());
    }

    /// Report an informational message
    pub fn info(&mut self, message: impl fmt::Display) {
        self.emit(Severity::Info, message.to_string());
    }

    /// Report a debug message
    pub fn debug(&mut self, message: impl fmt::Display) {
        self.emit(Severity::Debug, message.to_string());
    }

    /// Emit an uncounted trace record
    pub fn trace(&self, message: impl fmt::Display) {
        if log::log_enabled!(target: LOG_TARGET, log::Level::Trace) {
            log::trace!(target: LOG_TARGET, "{}{}", self.prefix(), message);
        }
    }

    /// Counters accumulated so far
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    /// Every warning and error, in the order they were reported
    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    /// Recorded errors
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.issues.iter().filter(|d| d.severity == Severity::Error)
    }

    /// Recorded warnings
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.issues.iter().filter(|d| d.severity == Severity::Warning)
    }

    /// Whether any error has been reported
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    /// Current location
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Switch to a new source file, returning the previous location
    pub(crate) fn enter_file(&mut self, file: Option<&Path>) -> Location {
        std::mem::replace(
            &mut self.location,
            Location {
                file: file.map(Path::to_path_buf),
                line: None,
            },
        )
    }

    /// Restore a location returned by [`enter_file`](Self::enter_file)
    pub(crate) fn restore(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn set_line(&mut self, line: Option<usize>) {
        self.location.line = line;
    }

    fn prefix(&self) -> String {
        if self.location == Location::default() {
            String::new()
        } else {
            format!("{}: ", self.location)
        }
    }

    fn emit(&mut self, severity: Severity, message: String) {
        log::log!(target: LOG_TARGET, severity.level(), "{}{}", self.prefix(), message);

        match severity {
            Severity::Error => self.summary.errors += 1,
            Severity::Warning => self.summary.warnings += 1,
            Severity::Info => self.summary.info += 1,
            Severity::Debug => self.summary.debug += 1,
        }

        if matches!(severity, Severity::Error | Severity::Warning) {
            self.issues.push(Diagnostic {
                severity,
                location: self.location.clone(),
                message,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_severity() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error("e1");
        diagnostics.error("e2");
        diagnostics.warning("w");
        diagnostics.info("i");
        diagnostics.debug("d");
        diagnostics.trace("t");

        let summary = diagnostics.summary();
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.info, 1);
        assert_eq!(summary.debug, 1);
        assert!(!summary.is_clean());
        assert!(diagnostics.has_errors());
    }

    #[test]
    fn test_only_warnings_and_errors_are_recorded() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("loading");
        diagnostics.warning("defaulted");
        diagnostics.debug("detail");
        diagnostics.error("dropped");

        assert_eq!(diagnostics.issues().len(), 2);
        assert_eq!(diagnostics.errors().count(), 1);
        assert_eq!(diagnostics.warnings().count(), 1);
        assert_eq!(diagnostics.issues()[0].message, "defaulted");
    }

    #[test]
    fn test_issue_carries_location() {
        let mut diagnostics = Diagnostics::new();
        let previous = diagnostics.enter_file(Some(Path::new("cube.obj")));
        diagnostics.set_line(Some(12));
        diagnostics.error("bad index");
        diagnostics.restore(previous);
        diagnostics.error("after");

        let first = &diagnostics.issues()[0];
        assert_eq!(first.location.line, Some(12));
        assert_eq!(first.to_string(), "[ERROR] cube.obj:12: bad index");

        let second = &diagnostics.issues()[1];
        assert_eq!(second.location, Location::default());
        assert_eq!(second.to_string(), "[ERROR] after");
    }

    #[test]
    fn test_summary_line() {
        let summary = LoadSummary {
            errors: 1,
            warnings: 2,
            debug: 3,
            info: 4,
        };
        assert_eq!(
            summary.to_string(),
            "Load finished with 1 errors, 2 warnings, 3 debug messages, 4 info messages."
        );
        assert!(LoadSummary::default().is_clean());
    }
}
