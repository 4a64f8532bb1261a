use std::io::Write;

use chrono::NaiveDate;
use extrato_core::{Amount, MoneyFormat};
use extrato_ingest::tokens::{AmountPlacement, AmountRecognizer, SignConvention};
use extrato_ingest::{
    scan_lines, scan_text, AdapterRegistry, AdapterSpec, FormatAdapter, Line, LineSource,
    ScanOptions, WordsFile,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn balance_aware() -> FormatAdapter {
    FormatAdapter::compile(AdapterSpec {
        noise: vec![r"\b(SALDO|TOTAL)\b".to_string(), r"^Folha \d+".to_string()],
        ..AdapterSpec::new("generic", "Generic")
    })
    .unwrap()
}

#[test]
fn test_brazilian_amount_conventions() {
    let cases = [
        (SignConvention::LeadingMinus, "1.234,56", 123456),
        (SignConvention::TrailingMarker, "1.234,56-", -123456),
        (SignConvention::TrailingMarker, "1.234,56+", 123456),
        (SignConvention::LetterSuffix, "1.234,56D", -123456),
        (SignConvention::LetterSuffix, "1.234,56C", 123456),
        (SignConvention::LeadingMinus, "R$ -1.234,56", -123456),
    ];
    for (sign, text, cents) in cases {
        let r = AmountRecognizer::new(sign, AmountPlacement::WholeLine, false).unwrap();
        let tok = r.recognize(text).unwrap().unwrap();
        assert_eq!(tok.amount, Amount::from_cents(cents), "{text}");
    }
}

#[test]
fn test_canonical_amount_reparse_is_stable() {
    let r = AmountRecognizer::new(SignConvention::LeadingMinus, AmountPlacement::WholeLine, true)
        .unwrap();
    for cents in [0, 1, 99, 100_000, -123_456, 987_654_321] {
        let amount = Amount::from_cents(cents);
        let printed = amount.format(&MoneyFormat::brl());
        let again = r.recognize(&printed).unwrap().unwrap().amount;
        assert_eq!(again, amount, "{printed}");
        assert_eq!(again.to_string().split('.').nth(1).map(str::len), Some(2));
    }
}

#[test]
fn test_noise_between_description_lines() {
    let lines: Vec<Line> = ["05/03/2024", "Folha 2/3", "ABC", "DEF", "10,00"]
        .into_iter()
        .map(Line::from)
        .collect();
    let out = scan_lines(&balance_aware(), &lines, &ScanOptions::default());
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].description, "ABC DEF");
}

#[test]
fn test_later_date_owns_the_amount() {
    let out = scan_text(
        &balance_aware(),
        "01/03/2024\nABC\n02/03/2024\nDEF\n10,00\n",
        &ScanOptions::default(),
    );
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].date, ymd(2024, 3, 2));
}

#[test]
fn test_total_line_is_never_a_description() {
    let out = scan_text(
        &balance_aware(),
        "01/03/2024\nTOTAL DISPONIVEL\n10,00\n02/03/2024\nSALDO\n5,00\n",
        &ScanOptions::default(),
    );
    assert!(out.records.is_empty());
}

#[test]
fn test_zero_amount_emits_nothing_by_default() {
    let out = scan_text(
        &balance_aware(),
        "01/03/2024\nAJUSTE\n0,00\n",
        &ScanOptions::default(),
    );
    assert!(out.records.is_empty());
}

#[test]
fn test_inter_positioned_words_from_disk() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        "# y\tx\ttext\n\
         100\t40\t5 de Março de 2024\n\
         100\t420\tSaldo do dia: R$ 1.000,00\n\
         121\t40\tPix recebido: \"Cliente A\"\n\
         121\t300\tR$ 300,00\n\
         121\t420\tR$ 1.300,00\n"
    )
    .unwrap();

    let registry = AdapterRegistry::builtin().unwrap();
    let inter = registry.get("inter").unwrap();
    let lines = WordsFile::new(f.path()).read_lines().unwrap();
    let out = scan_lines(inter, &lines, &ScanOptions::default());

    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].date, ymd(2024, 3, 5));
    assert_eq!(out.records[0].amount, Amount::from_cents(30000));
}

#[test]
fn test_year_override_for_short_dates() {
    let registry = AdapterRegistry::builtin().unwrap();
    let daycoval = registry.get("daycoval").unwrap();
    let out = scan_text(
        daycoval,
        "04/03 TED RECEBIDA 50,00\n",
        &ScanOptions { year: Some(2022) },
    );
    assert_eq!(out.records[0].date, ymd(2022, 3, 4));
}
