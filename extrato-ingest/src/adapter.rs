//! Declarative per-institution configuration and its compiled form.
//!
//! An [`AdapterSpec`] is plain data (built-ins live in `institutions`, users
//! add more through TOML). [`FormatAdapter::compile`] validates it once and
//! keeps the compiled regexes; the scanner never sees raw patterns.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, ScanError};
use crate::noise::{compile_all, NoiseClassifier};
use crate::period::{PeriodDetector, StatementPeriod, YearRule};
use crate::tokens::{
    AmountPlacement, AmountRecognizer, AmountToken, DateGrammar, DatePlacement, DateRecognizer,
    DateToken, SignConvention,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Credit,
    Debit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityMarker {
    pub pattern: String,
    pub polarity: Polarity,
}

/// What to do with a record whose amount is `0,00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroAmountPolicy {
    #[default]
    Drop,
    Keep,
}

/// What a date line does to a record that is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenRecordDatePolicy {
    /// Drop the open record and start over with the new date.
    #[default]
    Discard,
    /// Move the open record to the new date, keeping its description.
    KeepDescription,
}

/// State after an amount closes a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterClose {
    #[default]
    Idle,
    /// Stay open on the same date with an empty description, for statements
    /// that print the date once per day.
    KeepDate,
}

/// Where a record's amount is printed relative to its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPosition {
    /// Description lines first; the amount closes the record.
    #[default]
    AfterDescription,
    /// The amount sits on the date line and the description follows. The
    /// record closes at the next date or at the end of the document; a later
    /// line carrying an amount ends the description.
    OnDateLine,
}

/// Output column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub date: String,
    pub description: String,
    pub amount: String,
    /// Present only for institutions that print a document number.
    pub document_number: Option<String>,
    pub source_document: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            date: "Data".to_string(),
            description: "Descrição".to_string(),
            amount: "Valor (R$)".to_string(),
            document_number: None,
            source_document: "Arquivo".to_string(),
        }
    }
}

impl ColumnSchema {
    pub fn headers(&self) -> Vec<&str> {
        let mut headers = vec![self.date.as_str(), self.description.as_str()];
        if let Some(doc) = &self.document_number {
            headers.push(doc.as_str());
        }
        headers.push(self.amount.as_str());
        headers.push(self.source_document.as_str());
        headers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterSpec {
    pub id: String,
    pub name: String,
    pub date_grammars: Vec<DateGrammar>,
    pub date_placement: DatePlacement,
    pub sign: SignConvention,
    pub amount_placement: AmountPlacement,
    pub require_currency_symbol: bool,
    pub noise: Vec<String>,
    pub section_start: Vec<String>,
    pub polarity_markers: Vec<PolarityMarker>,
    /// Lowercase substrings; a description containing one is dropped.
    pub exclusion_keywords: Vec<String>,
    pub description_scrubbers: Vec<String>,
    /// First capture (or the whole match) becomes the document number and is
    /// cut from the description.
    pub document_number: Option<String>,
    pub year_rule: YearRule,
    pub zero_amounts: ZeroAmountPolicy,
    pub date_in_open_record: OpenRecordDatePolicy,
    pub after_close: AfterClose,
    pub amount_position: AmountPosition,
    pub columns: ColumnSchema,
}

impl Default for AdapterSpec {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            date_grammars: vec![DateGrammar::FullNumeric],
            date_placement: DatePlacement::default(),
            sign: SignConvention::default(),
            amount_placement: AmountPlacement::default(),
            require_currency_symbol: false,
            noise: Vec::new(),
            section_start: Vec::new(),
            polarity_markers: Vec::new(),
            exclusion_keywords: Vec::new(),
            description_scrubbers: Vec::new(),
            document_number: None,
            year_rule: YearRule::default(),
            zero_amounts: ZeroAmountPolicy::default(),
            date_in_open_record: OpenRecordDatePolicy::default(),
            after_close: AfterClose::default(),
            amount_position: AmountPosition::default(),
            columns: ColumnSchema::default(),
        }
    }
}

impl AdapterSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A validated adapter, immutable and shareable across document scans.
#[derive(Debug, Clone)]
pub struct FormatAdapter {
    spec: AdapterSpec,
    dates: DateRecognizer,
    amounts: AmountRecognizer,
    noise: NoiseClassifier,
    sections: Vec<Regex>,
    polarity: Vec<(Regex, Polarity)>,
    scrubbers: Vec<Regex>,
    document_number: Option<Regex>,
    exclusions: Vec<String>,
    period: PeriodDetector,
}

impl FormatAdapter {
    pub fn compile(spec: AdapterSpec) -> Result<Self, AdapterError> {
        let id = spec.id.trim().to_lowercase();
        if id.is_empty() {
            return Err(AdapterError::EmptyId);
        }
        if spec.date_grammars.is_empty() {
            return Err(AdapterError::NoDateGrammar(id));
        }

        let pattern_err = |field: &'static str| {
            let adapter = id.clone();
            move |(pattern, source): (String, regex::Error)| AdapterError::Pattern {
                adapter: adapter.clone(),
                field,
                pattern,
                source,
            }
        };

        // Grammar and amount patterns are built in; an error here is a bug.
        let dates = DateRecognizer::new(&spec.date_grammars, spec.date_placement)
            .map_err(|e| pattern_err("date")((format!("{:?}", spec.date_grammars), e)))?;
        let amounts =
            AmountRecognizer::new(spec.sign, spec.amount_placement, spec.require_currency_symbol)
                .map_err(|e| pattern_err("amount")((format!("{:?}", spec.sign), e)))?;

        let noise = NoiseClassifier::new(&spec.noise).map_err(pattern_err("noise"))?;
        let sections = compile_all(&spec.section_start).map_err(pattern_err("section_start"))?;
        let marker_patterns: Vec<&str> = spec
            .polarity_markers
            .iter()
            .map(|m| m.pattern.as_str())
            .collect();
        let polarity = compile_all(&marker_patterns)
            .map_err(pattern_err("polarity_markers"))?
            .into_iter()
            .zip(spec.polarity_markers.iter().map(|m| m.polarity))
            .collect();
        let scrubbers = compile_all(&spec.description_scrubbers)
            .map_err(pattern_err("description_scrubbers"))?;
        let document_number = spec
            .document_number
            .as_deref()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| pattern_err("document_number")((p.to_string(), e)))
            })
            .transpose()?;

        let period = PeriodDetector::new(&spec.year_rule).map_err(|e| {
            let pattern = match &spec.year_rule {
                YearRule::Header { pattern } => pattern.clone(),
                YearRule::None => String::new(),
            };
            pattern_err("year_rule")((pattern, e))
        })?;
        if !period.has_year_group() {
            return Err(AdapterError::YearGroupMissing(id));
        }

        let exclusions = spec
            .exclusion_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Ok(Self {
            spec: AdapterSpec { id, ..spec },
            dates,
            amounts,
            noise,
            sections,
            polarity,
            scrubbers,
            document_number,
            exclusions,
            period,
        })
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &AdapterSpec {
        &self.spec
    }

    pub fn columns(&self) -> &ColumnSchema {
        &self.spec.columns
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.noise.is_noise(line)
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn starts_section(&self, line: &str) -> bool {
        self.sections.iter().any(|re| re.is_match(line))
    }

    /// Polarity switched to by `line`, if it is a marker.
    pub fn polarity_switch(&self, line: &str) -> Option<Polarity> {
        self.polarity
            .iter()
            .find(|(re, _)| re.is_match(line))
            .map(|(_, p)| *p)
    }

    pub fn recognize_date(
        &self,
        text: &str,
        period: Option<StatementPeriod>,
    ) -> Option<Result<DateToken, ScanError>> {
        self.dates.recognize(text, period)
    }

    pub fn recognize_amount(&self, text: &str) -> Option<Result<AmountToken, ScanError>> {
        self.amounts.recognize(text)
    }

    pub fn detects_period(&self) -> bool {
        self.period.is_active()
    }

    pub fn detect_period(&self, line: &str) -> Option<StatementPeriod> {
        self.period.detect(line)
    }

    pub(crate) fn scrubbers(&self) -> &[Regex] {
        &self.scrubbers
    }

    pub(crate) fn document_number_pattern(&self) -> Option<&Regex> {
        self.document_number.as_ref()
    }

    /// Exclusion keyword contained in `description`, if any.
    pub(crate) fn exclusion_hit(&self, description: &str) -> Option<&str> {
        let lower = description.to_lowercase();
        self.exclusions
            .iter()
            .find(|k| lower.contains(k.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrato_core::Amount;

    #[test]
    fn test_compile_lowercases_id() {
        let adapter = FormatAdapter::compile(AdapterSpec::new("  MyBank ", "My Bank")).unwrap();
        assert_eq!(adapter.id(), "mybank");
        assert_eq!(adapter.name(), "My Bank");
    }

    #[test]
    fn test_compile_rejects_empty_id() {
        let err = FormatAdapter::compile(AdapterSpec::new(" ", "x")).unwrap_err();
        assert!(matches!(err, AdapterError::EmptyId));
    }

    #[test]
    fn test_compile_rejects_no_grammar() {
        let spec = AdapterSpec {
            date_grammars: vec![],
            ..AdapterSpec::new("b", "B")
        };
        assert!(matches!(
            FormatAdapter::compile(spec).unwrap_err(),
            AdapterError::NoDateGrammar(_)
        ));
    }

    #[test]
    fn test_compile_reports_bad_noise_pattern() {
        let spec = AdapterSpec {
            noise: vec!["SALDO".into(), "[".into()],
            ..AdapterSpec::new("b", "B")
        };
        match FormatAdapter::compile(spec).unwrap_err() {
            AdapterError::Pattern { field, pattern, .. } => {
                assert_eq!(field, "noise");
                assert_eq!(pattern, "[");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_year_rule_needs_year_group() {
        let spec = AdapterSpec {
            year_rule: YearRule::Header {
                pattern: r"\d{4}".into(),
            },
            ..AdapterSpec::new("b", "B")
        };
        assert!(matches!(
            FormatAdapter::compile(spec).unwrap_err(),
            AdapterError::YearGroupMissing(_)
        ));
    }

    #[test]
    fn test_compiled_matchers() {
        let spec = AdapterSpec {
            noise: vec![r"\bSALDO\b".into()],
            polarity_markers: vec![PolarityMarker {
                pattern: "^total de sa[ií]das".into(),
                polarity: Polarity::Debit,
            }],
            exclusion_keywords: vec!["Limite".into()],
            ..AdapterSpec::new("b", "B")
        };
        let adapter = FormatAdapter::compile(spec).unwrap();

        assert!(adapter.is_noise("saldo anterior"));
        assert_eq!(adapter.polarity_switch("Total de saídas - 1.000,00"), Some(Polarity::Debit));
        assert_eq!(adapter.polarity_switch("Pix enviado"), None);
        assert_eq!(adapter.exclusion_hit("LIMITE DA CONTA"), Some("limite"));
        assert!(!adapter.has_sections());
        assert!(!adapter.starts_section("anything"));

        let tok = adapter.recognize_amount("-1.234,56").unwrap().unwrap();
        assert_eq!(tok.amount, Amount::from_cents(-123456));
    }

    #[test]
    fn test_spec_from_toml_defaults() {
        let spec: AdapterSpec = toml::from_str(
            r#"
id = "coop"
name = "Cooperativa"
date_grammars = ["short_numeric"]
date_placement = "line_start"
amount_placement = "line_end"
sign = "letter_suffix"
noise = ["SALDO"]
year_rule = { kind = "header", pattern = '(?P<year>20\d{2})' }
after_close = "keep_date"

[columns]
document_number = "Documento"
"#,
        )
        .unwrap();

        assert_eq!(spec.date_grammars, vec![DateGrammar::ShortNumeric]);
        assert_eq!(spec.sign, SignConvention::LetterSuffix);
        assert_eq!(spec.after_close, AfterClose::KeepDate);
        assert_eq!(spec.zero_amounts, ZeroAmountPolicy::Drop);
        assert_eq!(spec.columns.date, "Data");
        assert_eq!(
            spec.columns.headers(),
            vec!["Data", "Descrição", "Documento", "Valor (R$)", "Arquivo"]
        );
        FormatAdapter::compile(spec).unwrap();
    }
}
