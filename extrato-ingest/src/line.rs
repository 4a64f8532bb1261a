//! Lines as handed over by the text/layout extraction collaborator.

use std::collections::BTreeMap;

/// One line of extracted text, optionally with its horizontal position.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub x: Option<f32>,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: None,
        }
    }

    pub fn at(x: f32, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: Some(x),
        }
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::new(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::new(text)
    }
}

/// Split a plain-text dump into lines.
pub fn lines_from_text(text: &str) -> Vec<Line> {
    text.lines().map(Line::from).collect()
}

/// A word or block placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedWord {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Group words sharing a rounded vertical position into rows, top to bottom,
/// each row joined left to right.
pub fn group_rows(words: &[PositionedWord]) -> Vec<Line> {
    let mut rows: BTreeMap<i64, Vec<&PositionedWord>> = BTreeMap::new();
    for word in words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }
        rows.entry(word.y.round() as i64).or_default().push(word);
    }

    rows.into_values()
        .map(|mut row| {
            row.sort_by(|a, b| a.x.total_cmp(&b.x));
            let x = row.first().map(|w| w.x);
            let text = row
                .iter()
                .map(|w| w.text.trim())
                .collect::<Vec<_>>()
                .join(" ");
            Line { text, x }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(x: f32, y: f32, text: &str) -> PositionedWord {
        PositionedWord {
            x,
            y,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_group_rows_orders_by_y_then_x() {
        let words = vec![
            word(300.0, 120.2, "R$ 100,00"),
            word(40.0, 100.0, "5 de Março de 2024"),
            word(40.0, 119.8, "Pix recebido:"),
            word(120.0, 120.0, "Fulano"),
            word(200.0, 100.4, "Saldo do dia: R$ 10,00"),
        ];

        let lines = group_rows(&words);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "5 de Março de 2024 Saldo do dia: R$ 10,00");
        assert_eq!(lines[0].x, Some(40.0));
        assert_eq!(lines[1].text, "Pix recebido: Fulano R$ 100,00");
    }

    #[test]
    fn test_blank_words_skipped() {
        let lines = group_rows(&[word(1.0, 1.0, "  "), word(2.0, 1.0, "A")]);
        assert_eq!(lines, vec![Line::at(2.0, "A")]);
    }

    #[test]
    fn test_lines_from_text() {
        let lines = lines_from_text("a\r\nb\n\nc");
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "", "c"]);
    }
}
