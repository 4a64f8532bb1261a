//! Documents as line sources.
//!
//! Decoding the original statement (PDF, OCR) happens elsewhere; these types
//! read what that step leaves behind: a plain-text dump, or a table of
//! positioned words (`y<TAB>x<TAB>text`, one word or block per row).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DocumentReadError;
use crate::line::{group_rows, lines_from_text, Line, PositionedWord};

/// A document that can be reduced to an ordered sequence of lines.
pub trait LineSource {
    /// Identifier used to tag transactions and log events.
    fn id(&self) -> &str;

    fn read_lines(&self) -> Result<Vec<Line>, DocumentReadError>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn read_lines(&self) -> Result<Vec<Line>, DocumentReadError> {
        (**self).read_lines()
    }
}

/// Lines already in memory.
#[derive(Debug, Clone)]
pub struct TextDocument {
    id: String,
    lines: Vec<Line>,
}

impl TextDocument {
    pub fn new(id: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            id: id.into(),
            lines,
        }
    }

    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, lines_from_text(text))
    }
}

impl LineSource for TextDocument {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_lines(&self) -> Result<Vec<Line>, DocumentReadError> {
        Ok(self.lines.clone())
    }
}

/// Plain-text dump on disk. Bytes that are not UTF-8 are replaced rather than
/// rejected; extraction tools do not always agree on encodings.
#[derive(Debug, Clone)]
pub struct TextFile {
    id: String,
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: document_id(&path),
            path,
        }
    }
}

impl LineSource for TextFile {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_lines(&self) -> Result<Vec<Line>, DocumentReadError> {
        let bytes = fs::read(&self.path).map_err(|source| DocumentReadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(lines_from_text(&String::from_utf8_lossy(&bytes)))
    }
}

/// Positioned words on disk, tab separated: `y`, `x`, `text`. Lines starting
/// with `#` are comments.
#[derive(Debug, Clone)]
pub struct WordsFile {
    id: String,
    path: PathBuf,
}

impl WordsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: document_id(&path),
            path,
        }
    }

    fn read_words(&self) -> Result<Vec<PositionedWord>, DocumentReadError> {
        let bytes = fs::read(&self.path).map_err(|source| DocumentReadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .quoting(false)
            .from_reader(bytes.as_slice());

        let mut words = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let record = result.map_err(|e| self.layout_error(row, e.to_string()))?;
            if record.len() < 3 {
                return Err(self.layout_error(row, format!("expected 3 fields, got {}", record.len())));
            }
            let y: f32 = record[0]
                .trim()
                .parse()
                .map_err(|_| self.layout_error(row, format!("bad y {:?}", &record[0])))?;
            let x: f32 = record[1]
                .trim()
                .parse()
                .map_err(|_| self.layout_error(row, format!("bad x {:?}", &record[1])))?;
            // Tabs inside the text split it into extra fields; glue them back.
            let text = record.iter().skip(2).collect::<Vec<_>>().join(" ");
            words.push(PositionedWord { x, y, text });
        }
        Ok(words)
    }

    fn layout_error(&self, row: usize, reason: String) -> DocumentReadError {
        DocumentReadError::Layout {
            document: self.id.clone(),
            row,
            reason,
        }
    }
}

impl LineSource for WordsFile {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_lines(&self) -> Result<Vec<Line>, DocumentReadError> {
        Ok(group_rows(&self.read_words()?))
    }
}

fn document_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
