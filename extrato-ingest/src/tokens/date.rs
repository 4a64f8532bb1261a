//! Date token recognition.
//!
//! Every grammar is anchored at the start of the text. Grammars are tried in
//! specificity order, so `DD/MM` can never claim the prefix of `DD/MM/YYYY`.

use chrono::NaiveDate;
use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::month::{month_from_abbrev, month_from_name};
use crate::error::ScanError;
use crate::period::StatementPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateGrammar {
    /// `05/03/2024`
    FullNumeric,
    /// `05/03/24`
    TwoDigitYear,
    /// `05/03`, year from the statement period
    ShortNumeric,
    /// `05 MAR 2024`
    MonthAbbrev,
    /// `05/mar`, year from the statement period
    ShortMonthAbbrev,
    /// `5 de março de 2024`
    Extenso,
    /// `05`, month and year from the statement period
    DayOnly,
}

impl DateGrammar {
    fn pattern(self) -> &'static str {
        match self {
            DateGrammar::FullNumeric => r"(?P<d>\d{2})/(?P<m>\d{2})/(?P<y>\d{4})",
            DateGrammar::TwoDigitYear => r"(?P<d>\d{2})/(?P<m>\d{2})/(?P<yy>\d{2})",
            DateGrammar::ShortNumeric => r"(?P<d>\d{2})/(?P<m>\d{2})",
            DateGrammar::MonthAbbrev => r"(?P<d>\d{1,2})\s+(?P<mon>\p{L}{3})\.?\s+(?P<y>\d{4})",
            DateGrammar::ShortMonthAbbrev => r"(?P<d>\d{2})\s*/\s*(?P<mon>\p{L}{3})",
            DateGrammar::Extenso => r"(?P<d>\d{1,2})\s+de\s+(?P<mon>\p{L}+)\s+de\s+(?P<y>\d{4})",
            DateGrammar::DayOnly => r"(?P<d>\d{1,2})",
        }
    }

    /// Lower is tried first.
    fn specificity(self) -> u8 {
        match self {
            DateGrammar::Extenso => 0,
            DateGrammar::FullNumeric => 1,
            DateGrammar::MonthAbbrev => 2,
            DateGrammar::TwoDigitYear => 3,
            DateGrammar::ShortMonthAbbrev => 4,
            DateGrammar::ShortNumeric => 5,
            DateGrammar::DayOnly => 6,
        }
    }

    /// Whether the year comes from the statement period.
    pub fn needs_period(self) -> bool {
        matches!(
            self,
            DateGrammar::ShortNumeric | DateGrammar::ShortMonthAbbrev | DateGrammar::DayOnly
        )
    }
}

/// Where a date may sit in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePlacement {
    /// The line is nothing but the date.
    #[default]
    WholeLine,
    /// The date opens the line; whatever follows is ordinary text.
    LineStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken {
    pub date: NaiveDate,
    /// Byte offset just past the token (and its trailing whitespace).
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct DateRecognizer {
    grammars: Vec<(DateGrammar, Regex)>,
}

impl DateRecognizer {
    pub fn new(grammars: &[DateGrammar], placement: DatePlacement) -> Result<Self, regex::Error> {
        let mut ordered: Vec<DateGrammar> = grammars.to_vec();
        ordered.sort_by_key(|g| g.specificity());
        ordered.dedup();

        let grammars = ordered
            .into_iter()
            .map(|g| {
                let anchored = match placement {
                    DatePlacement::WholeLine => format!(r"^(?:{})$", g.pattern()),
                    DatePlacement::LineStart => format!(r"^(?:{})(?:\s+|$)", g.pattern()),
                };
                RegexBuilder::new(&anchored)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (g, re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { grammars })
    }

    /// `None` when no grammar matches. `Some(Err(_))` when the text has the
    /// shape of a date that cannot be resolved.
    pub fn recognize(
        &self,
        text: &str,
        period: Option<StatementPeriod>,
    ) -> Option<Result<DateToken, ScanError>> {
        self.grammars.iter().find_map(|(grammar, re)| {
            re.captures(text)
                .map(|caps| resolve(*grammar, &caps, period))
        })
    }

    pub fn uses_period(&self) -> bool {
        self.grammars.iter().any(|(g, _)| g.needs_period())
    }
}

fn resolve(
    grammar: DateGrammar,
    caps: &Captures<'_>,
    period: Option<StatementPeriod>,
) -> Result<DateToken, ScanError> {
    let whole = caps.get(0).map(|m| (m.as_str(), m.end())).unwrap_or(("", 0));
    let raw = whole.0.trim().to_string();

    let day: u32 = caps["d"]
        .parse()
        .map_err(|_| ScanError::UnrecognizedDate(raw.clone()))?;

    let month = if let Some(m) = caps.name("m") {
        m.as_str()
            .parse::<u32>()
            .map_err(|_| ScanError::UnrecognizedDate(raw.clone()))?
    } else if let Some(mon) = caps.name("mon") {
        let found = match grammar {
            DateGrammar::Extenso => month_from_name(mon.as_str()),
            _ => month_from_abbrev(mon.as_str()),
        };
        found.ok_or_else(|| ScanError::UnknownMonth(mon.as_str().to_string()))?
    } else {
        period
            .and_then(|p| p.month)
            .ok_or_else(|| ScanError::MissingYearContext(raw.clone()))?
    };

    let year = if let Some(y) = caps.name("y") {
        y.as_str()
            .parse::<i32>()
            .map_err(|_| ScanError::UnrecognizedDate(raw.clone()))?
    } else if let Some(yy) = caps.name("yy") {
        2000 + yy
            .as_str()
            .parse::<i32>()
            .map_err(|_| ScanError::UnrecognizedDate(raw.clone()))?
    } else {
        period
            .map(|p| p.year)
            .ok_or_else(|| ScanError::MissingYearContext(raw.clone()))?
    };

    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ScanError::UnrecognizedDate(raw))?;
    Ok(DateToken {
        date,
        end: whole.1,
    })
}
