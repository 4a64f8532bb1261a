//! Statement period (year, sometimes month) read from document header text.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::tokens::month::month_from_any;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementPeriod {
    pub year: i32,
    pub month: Option<u32>,
}

impl StatementPeriod {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }
}

/// How an adapter learns the statement year for day/month-only dates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YearRule {
    /// Dates carry their own year.
    #[default]
    None,
    /// First line matching `pattern` fixes the period. The pattern needs a
    /// named `year` group and may have a `month` group (number or name).
    Header { pattern: String },
}

#[derive(Debug, Clone, Default)]
pub struct PeriodDetector {
    re: Option<Regex>,
}

impl PeriodDetector {
    pub fn new(rule: &YearRule) -> Result<Self, regex::Error> {
        let re = match rule {
            YearRule::None => None,
            YearRule::Header { pattern } => {
                Some(RegexBuilder::new(pattern).case_insensitive(true).build()?)
            }
        };
        Ok(Self { re })
    }

    pub fn is_active(&self) -> bool {
        self.re.is_some()
    }

    pub(crate) fn has_year_group(&self) -> bool {
        self.re
            .as_ref()
            .map(|re| re.capture_names().any(|n| n == Some("year")))
            .unwrap_or(true)
    }

    pub fn detect(&self, line: &str) -> Option<StatementPeriod> {
        let re = self.re.as_ref()?;
        re.captures_iter(line).find_map(|caps| {
            let raw = caps.name("year")?.as_str();
            let mut year: i32 = raw.parse().ok()?;
            if raw.len() == 2 {
                year += 2000;
            }
            let month = match caps.name("month") {
                Some(m) => Some(month_from_any(m.as_str())?),
                None => None,
            };
            Some(StatementPeriod { year, month })
        })
    }
}
