//! Monetary token recognition for Brazilian numerals (`R$ 1.234,56`).
//!
//! The sign is read only from the marker the institution prints, following
//! the adapter's [`SignConvention`].

use extrato_core::Amount;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

const NUMERAL: &str = r"(?:\d{1,3}(?:\.\d{3})+|\d+),\d{2}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignConvention {
    /// `-1.234,56`, `-R$ 1.234,56`, `R$ -1.234,56`
    #[default]
    LeadingMinus,
    /// `1.234,56-` / `1.234,56+`
    TrailingMarker,
    /// `1.234,56 C` (credit) / `1.234,56 D` (debit)
    LetterSuffix,
}

/// Where a monetary token may sit in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPlacement {
    /// The line is nothing but the amount.
    #[default]
    WholeLine,
    /// The amount ends the line; text before it is description.
    LineEnd,
    /// First amount in the line; text before it is description, anything
    /// after it (running balances) is dropped.
    Anywhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountToken {
    pub amount: Amount,
    /// Byte offset where the token (including its leading blank) starts.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct AmountRecognizer {
    re: Regex,
    sign: SignConvention,
}

impl AmountRecognizer {
    pub fn new(
        sign: SignConvention,
        placement: AmountPlacement,
        require_symbol: bool,
    ) -> Result<Self, regex::Error> {
        let symbol = if require_symbol {
            r"R\$\s*"
        } else {
            r"(?:R\$\s*)?"
        };
        let body = match sign {
            SignConvention::LeadingMinus => {
                format!(r"(?P<lead>-)?\s*{symbol}(?P<inner>-)?\s*(?P<num>{NUMERAL})")
            }
            SignConvention::TrailingMarker => {
                format!(r"{symbol}(?P<num>{NUMERAL})\s?(?P<mark>[+-])?")
            }
            SignConvention::LetterSuffix => {
                format!(r"{symbol}(?P<num>{NUMERAL})\s?(?P<mark>[CD])?")
            }
        };
        let pattern = match placement {
            AmountPlacement::WholeLine => format!(r"^{body}$"),
            AmountPlacement::LineEnd => format!(r"(?:^|\s){body}$"),
            AmountPlacement::Anywhere => format!(r"(?:^|\s){body}(?:\s|$)"),
        };

        Ok(Self {
            re: Regex::new(&pattern)?,
            sign,
        })
    }

    /// `None` when the text carries no amount. `Some(Err(_))` when the digits
    /// match the shape but cannot be held as a fixed-point value.
    pub fn recognize(&self, text: &str) -> Option<Result<AmountToken, ScanError>> {
        let caps = self.re.captures(text)?;
        let whole = caps.get(0)?;
        let numeral = caps.name("num")?.as_str();

        let amount = match Amount::from_brazilian(numeral) {
            Ok(a) => a,
            Err(_) => {
                return Some(Err(ScanError::UnrecognizedAmount(
                    whole.as_str().trim().to_string(),
                )));
            }
        };

        let negative = match self.sign {
            SignConvention::LeadingMinus => {
                caps.name("lead").is_some() || caps.name("inner").is_some()
            }
            SignConvention::TrailingMarker | SignConvention::LetterSuffix => {
                matches!(caps.name("mark").map(|m| m.as_str()), Some("-") | Some("D"))
            }
        };

        Some(Ok(AmountToken {
            amount: if negative { amount.negate() } else { amount },
            start: whole.start(),
            end: whole.end(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(c: i64) -> Amount {
        Amount::from_cents(c)
    }

    fn whole(sign: SignConvention) -> AmountRecognizer {
        AmountRecognizer::new(sign, AmountPlacement::WholeLine, false).unwrap()
    }

    fn amount_of(r: &AmountRecognizer, text: &str) -> Amount {
        r.recognize(text).unwrap().unwrap().amount
    }

    #[test]
    fn test_plain_numeral() {
        let r = whole(SignConvention::LeadingMinus);
        assert_eq!(amount_of(&r, "1.234,56"), cents(123456));
        assert_eq!(amount_of(&r, "1234,56"), cents(123456));
        assert_eq!(amount_of(&r, "0,00"), cents(0));
    }

    #[test]
    fn test_leading_minus_variants() {
        let r = whole(SignConvention::LeadingMinus);
        assert_eq!(amount_of(&r, "-1.234,56"), cents(-123456));
        assert_eq!(amount_of(&r, "- 1.234,56"), cents(-123456));
        assert_eq!(amount_of(&r, "-R$ 1.234,56"), cents(-123456));
        assert_eq!(amount_of(&r, "R$ -1.234,56"), cents(-123456));
        assert_eq!(amount_of(&r, "R$1.234,56"), cents(123456));
    }

    #[test]
    fn test_trailing_marker() {
        let r = whole(SignConvention::TrailingMarker);
        assert_eq!(amount_of(&r, "1.234,56-"), cents(-123456));
        assert_eq!(amount_of(&r, "1.234,56+"), cents(123456));
        assert_eq!(amount_of(&r, "1.234,56"), cents(123456));
        assert!(r.recognize("-1.234,56").is_none());
    }

    #[test]
    fn test_letter_suffix() {
        let r = whole(SignConvention::LetterSuffix);
        assert_eq!(amount_of(&r, "1.234,56D"), cents(-123456));
        assert_eq!(amount_of(&r, "1.234,56C"), cents(123456));
        assert_eq!(amount_of(&r, "1.234,56 D"), cents(-123456));
        assert!(r.recognize("1.234,56X").is_none());
    }

    #[test]
    fn test_malformed_numerals_are_no_match() {
        let r = whole(SignConvention::LeadingMinus);
        for text in ["1.234,5", "1.234,567", "1,234.56", "12.34,56", "1.234", "abc", ""] {
            assert!(r.recognize(text).is_none(), "{text:?} should not match");
        }
    }

    #[test]
    fn test_required_symbol() {
        let r = AmountRecognizer::new(SignConvention::LeadingMinus, AmountPlacement::Anywhere, true)
            .unwrap();
        assert!(r.recognize("PIX 10,00").is_none());
        let tok = r.recognize("Pix recebido: Fulano R$ 100,00 R$ 1.100,00").unwrap().unwrap();
        assert_eq!(tok.amount, cents(10000));
        assert_eq!(&"Pix recebido: Fulano R$ 100,00 R$ 1.100,00"[..tok.start], "Pix recebido: Fulano");
    }

    #[test]
    fn test_line_end_splits_description() {
        let r = AmountRecognizer::new(SignConvention::TrailingMarker, AmountPlacement::LineEnd, false)
            .unwrap();
        let text = "TARIFA PACOTE 1.000,00 45,90-";
        let tok = r.recognize(text).unwrap().unwrap();
        assert_eq!(tok.amount, cents(-4590));
        assert_eq!(&text[..tok.start], "TARIFA PACOTE 1.000,00");
        assert!(r.recognize("TARIFA 45,90- EXTRA").is_none());
    }

    #[test]
    fn test_anywhere_takes_first_amount() {
        let r = AmountRecognizer::new(SignConvention::LeadingMinus, AmountPlacement::Anywhere, false)
            .unwrap();
        let text = "PIX ENVIADO 123456 -250,00 9.750,00";
        let tok = r.recognize(text).unwrap().unwrap();
        assert_eq!(tok.amount, cents(-25000));
        assert_eq!(&text[..tok.start], "PIX ENVIADO 123456");
        assert!(r.recognize("REF 10,00%").is_none());
    }

    #[test]
    fn test_canonical_brazilian_form_reparses() {
        let r = whole(SignConvention::LeadingMinus);
        for c in [0_i64, 5, -5, 123456, -123456, 99_999_999] {
            let a = cents(c);
            let shown = a.format(&extrato_core::MoneyFormat::brazilian_numeral());
            assert_eq!(amount_of(&r, &shown), a, "{shown}");
            let with_symbol = a.format(&extrato_core::MoneyFormat::brl());
            assert_eq!(amount_of(&r, &with_symbol), a, "{with_symbol}");
        }
    }
}
