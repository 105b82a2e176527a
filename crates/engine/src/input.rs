use crate::error::{EngineError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A dictionary source: a file, or stdin (`-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Path used in error reports (`-` for stdin).
    #[must_use]
    pub fn path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("-"),
            Self::File(p) => p.clone(),
        }
    }

    /// Open the source for buffered line reading.
    ///
    /// # Errors
    /// Returns `EngineError::FileRead` if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| self.read_error(e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub(crate) fn read_error(&self, source: io::Error) -> EngineError {
        EngineError::FileRead {
            path: self.path(),
            source,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}

impl Serialize for InputSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Call `f` with each line (1-based line number, text without line terminator).
///
/// Non-UTF-8 bytes are replaced rather than rejected. `f` returns `false` to stop early.
///
/// # Errors
/// Returns `EngineError::FileRead` on a read failure.
pub fn for_each_line<R, F>(reader: &mut R, source: &InputSource, mut f: F) -> Result<usize>
where
    R: BufRead + ?Sized,
    F: FnMut(usize, &str) -> bool,
{
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                line_no += 1;
                let text = String::from_utf8_lossy(strip_line_ending(&buf));
                if !f(line_no, &text) {
                    break;
                }
            }
            Err(e) => return Err(source.read_error(e)),
        }
    }

    Ok(line_no)
}

/// Read the whole source into owned lines.
///
/// # Errors
/// Returns `EngineError::FileRead` on a read failure.
pub fn read_lines<R: BufRead + ?Sized>(reader: &mut R, source: &InputSource) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for_each_line(reader, source, |_, line| {
        lines.push(line.to_owned());
        true
    })?;
    Ok(lines)
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
