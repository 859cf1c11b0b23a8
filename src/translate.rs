use std::collections::HashMap;

/// Weekday-letter maps keyed by language pair (`"SRC_TGT"`, uppercased).
///
/// Every shipped pair rewrites foreign weekday letters into the canonical
/// `LMCJVSG` alphabet. Letters a source language cannot name unambiguously
/// (English `T`, `S`; French `M`) carry no mapping and pass through.
#[derive(Debug)]
pub struct WeekdayTable {
    pairs: HashMap<String, HashMap<char, char>>,
}

impl WeekdayTable {
    pub fn new() -> Self {
        let mut pairs = HashMap::new();
        pairs.insert(pair_key("ESP", "CAT"), HashMap::from([('X', 'C'), ('D', 'G')]));
        pairs.insert(pair_key("FRA", "CAT"), HashMap::from([('D', 'G')]));
        pairs.insert(
            pair_key("ENG", "CAT"),
            HashMap::from([('M', 'L'), ('W', 'C'), ('F', 'V')]),
        );
        Self { pairs }
    }

    /// Rewrite a weekday pattern letter by letter. Unknown language pairs and
    /// unmapped letters pass through unchanged; translation never fails.
    pub fn translate(&self, pattern: &str, source: &str, target: &str) -> String {
        let Some(map) = self.pairs.get(&pair_key(source, target)) else {
            return pattern.to_string();
        };
        pattern
            .chars()
            .map(|c| map.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl Default for WeekdayTable {
    fn default() -> Self {
        Self::new()
    }
}

fn pair_key(source: &str, target: &str) -> String {
    format!("{}_{}", source.to_uppercase(), target.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pair_is_identity() {
        let table = WeekdayTable::new();
        assert_eq!(table.translate("LMCJV", "ESP", "ENG"), "LMCJV");
        assert_eq!(table.translate("LMCJV", "ZZZ", "YYY"), "LMCJV");
    }

    #[test]
    fn spanish_pattern_normalizes() {
        let table = WeekdayTable::new();
        assert_eq!(table.translate("LXVD", "ESP", "CAT"), "LCVG");
    }

    #[test]
    fn unmapped_letters_pass_through() {
        let table = WeekdayTable::new();
        // English T is ambiguous (Tuesday/Thursday) and stays untouched.
        assert_eq!(table.translate("MTWF", "ENG", "CAT"), "LTCV");
    }

    #[test]
    fn language_codes_are_case_insensitive() {
        let table = WeekdayTable::new();
        assert_eq!(table.translate("XD", "esp", "cat"), "CG");
    }

    #[test]
    fn same_language_is_identity() {
        let table = WeekdayTable::new();
        assert_eq!(table.translate("LMCJVSG", "CAT", "CAT"), "LMCJVSG");
    }
}
