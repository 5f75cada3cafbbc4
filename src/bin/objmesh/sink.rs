//! Log output to standard output and a log file

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use env_logger::Target;
use log::{Level, LevelFilter};

/// Writer that copies everything to stdout and appends it to a file
pub struct Tee {
    file: File,
}

impl Tee {
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    fn try_clone(&self) -> io::Result<Self> {
        Ok(Self {
            file: self.file.try_clone()?,
        })
    }

    /// Write a message without timestamp or level
    pub fn plain(&mut self, message: impl std::fmt::Display) {
        let _ = writeln!(self, "{}", message);
        let _ = self.flush();
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Open (or create) `path` for appending and install the global logger
///
/// Records at `level` and above go to stdout and the file as
/// `[%Y-%m-%d %H:%M:%S] [LEVEL] message`. The returned [`Tee`] writes to the
/// same destinations for output that carries no level.
pub fn install(path: &Path, level: LevelFilter) -> Result<Tee, Box<dyn std::error::Error>> {
    let tee = Tee::open(path)?;

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                label(record.level()),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(tee.try_clone()?)))
        .try_init()?;

    Ok(tee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_tee_appends_to_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("objmesh.log");
        fs::write(&path, "earlier run\n").unwrap();

        let mut tee = Tee::open(&path).unwrap();
        let mut pipe = tee.try_clone().unwrap();
        writeln!(pipe, "[2026-01-01 00:00:00] [WARNING] first").unwrap();
        tee.plain("Load finished with 0 errors, 1 warnings, 0 debug messages, 0 info messages.");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].ends_with("[WARNING] first"));
        assert!(lines[2].starts_with("Load finished"));
    }

    #[test]
    fn test_warning_label() {
        assert_eq!(label(Level::Warn), "WARNING");
        assert_eq!(label(Level::Error), "ERROR");
    }
}
