//! Optional dump of the lines each document produced, for debugging layouts.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use extrato_ingest::Line;

/// Receives the raw lines of every document before scanning.
///
/// Failures here are logged by the runner and never abort a batch.
pub trait DiagnosticSink {
    fn record_lines(&mut self, document: &str, lines: &[Line]) -> io::Result<()>;
}

/// Writes `<dir>/<document>.lines.txt`, one numbered line per row.
#[derive(Debug, Clone)]
pub struct DumpLinesDir {
    dir: PathBuf,
}

impl DumpLinesDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, document: &str) -> PathBuf {
        let stem = Path::new(document)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| document.replace(['/', '\\'], "_"));
        self.dir.join(format!("{stem}.lines.txt"))
    }
}

impl DiagnosticSink for DumpLinesDir {
    fn record_lines(&mut self, document: &str, lines: &[Line]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_for(document);
        let mut out = io::BufWriter::new(fs::File::create(&path)?);
        for (i, line) in lines.iter().enumerate() {
            match line.x {
                Some(x) => writeln!(out, "{:>5} [{x:>7.1}] {}", i + 1, line.text)?,
                None => writeln!(out, "{:>5} {}", i + 1, line.text)?,
            }
        }
        out.flush()?;
        tracing::debug!(path = %path.display(), lines = lines.len(), "dumped lines");
        Ok(())
    }
}
