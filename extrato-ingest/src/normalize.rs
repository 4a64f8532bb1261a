//! Turns a closed (date, description buffer, amount) triple into a record.

use chrono::NaiveDate;
use extrato_core::{collapse_whitespace, Amount};

use crate::adapter::{FormatAdapter, Polarity, ZeroAmountPolicy};
use crate::types::{SkipReason, StatementRecord};

pub(crate) struct RawRecord<'a> {
    pub date: NaiveDate,
    pub description: &'a str,
    pub amount: Amount,
    pub polarity: Polarity,
    pub line: usize,
}

pub(crate) fn normalize(
    adapter: &FormatAdapter,
    raw: RawRecord<'_>,
) -> Result<StatementRecord, SkipReason> {
    let mut description = collapse_whitespace(raw.description);

    for re in adapter.scrubbers() {
        description = re.replace_all(&description, " ").into_owned();
    }

    let mut document_number = None;
    if let Some(re) = adapter.document_number_pattern() {
        let hit = re.captures(&description).and_then(|caps| {
            let whole = caps.get(0)?;
            let found = caps.get(1).unwrap_or(whole);
            Some((found.as_str().trim().to_string(), found.range()))
        });
        if let Some((number, range)) = hit {
            if !number.is_empty() {
                document_number = Some(number);
            }
            description.replace_range(range, " ");
        }
    }

    let description = collapse_whitespace(&description);
    if description.is_empty() {
        return Err(SkipReason::EmptyDescription);
    }
    if let Some(keyword) = adapter.exclusion_hit(&description) {
        return Err(SkipReason::Excluded(keyword.to_string()));
    }
    if adapter.is_noise(&description) {
        return Err(SkipReason::Excluded("noise".to_string()));
    }

    let amount = match raw.polarity {
        Polarity::Debit => raw.amount.as_debit(),
        Polarity::Credit => raw.amount,
    };
    if amount.is_zero() && adapter.spec().zero_amounts == ZeroAmountPolicy::Drop {
        return Err(SkipReason::ZeroAmount);
    }

    Ok(StatementRecord {
        date: raw.date,
        description,
        amount,
        document_number,
        line: raw.line,
    })
}
