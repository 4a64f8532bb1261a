//! Header/footer/balance line classification.

use regex::{Regex, RegexBuilder};

/// Case-insensitive pattern list. A line matching any pattern is noise and
/// never reaches the accumulator.
#[derive(Debug, Clone, Default)]
pub struct NoiseClassifier {
    patterns: Vec<Regex>,
}

impl NoiseClassifier {
    /// Compile each pattern; on failure returns the offending pattern.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, (String, regex::Error)> {
        let patterns = compile_all(patterns)?;
        Ok(Self { patterns })
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(line))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

pub(crate) fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, (String, regex::Error)> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p.as_ref())
                .case_insensitive(true)
                .build()
                .map_err(|e| (p.as_ref().to_string(), e))
        })
        .collect()
}
