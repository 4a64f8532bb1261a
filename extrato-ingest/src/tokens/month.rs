//! Portuguese month names as printed on statements.

const ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// `JAN`, `fev`, `Set.` → 1..=12
pub fn month_from_abbrev(s: &str) -> Option<u32> {
    let key = s.trim().trim_end_matches('.').to_lowercase();
    ABBREVIATIONS
        .iter()
        .position(|m| *m == key)
        .map(|i| i as u32 + 1)
}

/// `Janeiro`, `MARÇO` (also the unaccented `marco`) → 1..=12
pub fn month_from_name(s: &str) -> Option<u32> {
    let key = s.trim().to_lowercase();
    if key == "marco" {
        return Some(3);
    }
    NAMES.iter().position(|m| *m == key).map(|i| i as u32 + 1)
}

/// Number, full name or abbreviation.
pub fn month_from_any(s: &str) -> Option<u32> {
    if let Ok(n) = s.trim().parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    month_from_name(s).or_else(|| month_from_abbrev(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations() {
        assert_eq!(month_from_abbrev("JAN"), Some(1));
        assert_eq!(month_from_abbrev("fev"), Some(2));
        assert_eq!(month_from_abbrev("Set."), Some(9));
        assert_eq!(month_from_abbrev("DEZ"), Some(12));
        assert_eq!(month_from_abbrev("FEB"), None);
    }

    #[test]
    fn test_full_names() {
        assert_eq!(month_from_name("Janeiro"), Some(1));
        assert_eq!(month_from_name("MARÇO"), Some(3));
        assert_eq!(month_from_name("marco"), Some(3));
        assert_eq!(month_from_name("dezembro"), Some(12));
        assert_eq!(month_from_name("december"), None);
    }

    #[test]
    fn test_any() {
        assert_eq!(month_from_any("07"), Some(7));
        assert_eq!(month_from_any("13"), None);
        assert_eq!(month_from_any("outubro"), Some(10));
        assert_eq!(month_from_any("OUT"), Some(10));
    }
}
