use crate::error::RegistryError;
use crate::reference::{CountryEntry, COUNTRY_ENTRIES};
use serde::Serialize;
use std::ops::Range;
use std::sync::OnceLock;

/// Marker letter for the bank code in a field layout.
pub const BANK_CODE_MARKER: char = 'b';

/// Positions covered by one marker letter, from its first to its last
/// occurrence in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpan {
    pub marker: char,
    pub range: Range<usize>,
}

/// IBAN format rules for one country.
#[derive(Debug, Clone, Serialize)]
pub struct CountryFormat {
    pub code: &'static str,
    pub name: &'static str,
    pub length: usize,
    pub bban_format: &'static str,
    /// Marker template without spaces; one letter per IBAN position.
    pub field_layout: String,
    pub notes: &'static str,
    #[serde(skip)]
    spans: Vec<FieldSpan>,
}

impl CountryFormat {
    fn from_entry(entry: &CountryEntry) -> Self {
        let field_layout: String = entry
            .layout
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        let spans = field_spans(&field_layout);
        Self {
            code: entry.code,
            name: entry.name,
            length: entry.length,
            bban_format: entry.bban_format,
            field_layout,
            notes: entry.notes,
            spans,
        }
    }

    /// Position range of `marker`, if the layout uses it.
    pub fn field(&self, marker: char) -> Option<Range<usize>> {
        self.spans
            .iter()
            .find(|span| span.marker == marker)
            .map(|span| span.range.clone())
    }

    pub fn bank_code_range(&self) -> Option<Range<usize>> {
        self.field(BANK_CODE_MARKER)
    }

    pub fn bban_length(&self) -> usize {
        self.length.saturating_sub(4)
    }

    pub fn spans(&self) -> &[FieldSpan] {
        &self.spans
    }
}

/// Spans of every marker in the BBAN part, in order of first appearance.
/// The country code and check digit header is not a field.
fn field_spans(layout: &str) -> Vec<FieldSpan> {
    let mut spans: Vec<FieldSpan> = Vec::new();
    for (idx, marker) in layout.chars().enumerate().skip(4) {
        match spans.iter_mut().find(|span| span.marker == marker) {
            Some(span) => span.range.end = idx + 1,
            None => spans.push(FieldSpan {
                marker,
                range: idx..idx + 1,
            }),
        }
    }
    spans
}

/// Immutable lookup table of country formats, sorted by country code.
#[derive(Debug, Clone)]
pub struct Registry {
    countries: Vec<CountryFormat>,
}

impl Registry {
    /// Builds a registry from a table, checking that every layout matches
    /// its expected length and country code and that codes are strictly
    /// sorted (which also rules out duplicates).
    pub fn build(entries: &[CountryEntry]) -> Result<Self, RegistryError> {
        for window in entries.windows(2) {
            if window[0].code >= window[1].code {
                return Err(RegistryError::Unsorted {
                    code: window[1].code.to_string(),
                });
            }
        }
        let countries: Vec<CountryFormat> = entries.iter().map(CountryFormat::from_entry).collect();
        for country in &countries {
            let actual = country.field_layout.chars().count();
            if actual != country.length {
                return Err(RegistryError::LayoutLength {
                    code: country.code.to_string(),
                    expected: country.length,
                    actual,
                });
            }
            if !country.field_layout.starts_with(country.code) {
                return Err(RegistryError::LayoutPrefix {
                    code: country.code.to_string(),
                });
            }
        }
        Ok(Self { countries })
    }

    /// The built-in table. Built on first use and shared read-only after.
    pub fn standard() -> &'static Registry {
        static STANDARD: OnceLock<Registry> = OnceLock::new();
        STANDARD.get_or_init(|| Registry {
            countries: COUNTRY_ENTRIES.iter().map(CountryFormat::from_entry).collect(),
        })
    }

    pub fn get(&self, code: &str) -> Option<&CountryFormat> {
        self.countries
            .binary_search_by(|country| country.code.cmp(code))
            .ok()
            .map(|idx| &self.countries[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryFormat> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Looks up an uppercase country code in the built-in table.
pub fn lookup(code: &str) -> Option<&'static CountryFormat> {
    Registry::standard().get(code)
}

/// Accepts a two-letter code in any case and returns it uppercased.
pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_passes_build_checks() {
        let built = Registry::build(COUNTRY_ENTRIES).expect("table is consistent");
        assert_eq!(built.len(), Registry::standard().len());
    }

    #[test]
    fn every_layout_matches_expected_length() {
        for country in Registry::standard().iter() {
            assert_eq!(
                country.field_layout.len(),
                country.length,
                "layout length for {}",
                country.code
            );
            assert_eq!(&country.field_layout[..2], country.code);
            assert_eq!(&country.field_layout[2..4], "kk", "header of {}", country.code);
        }
    }

    #[test]
    fn bank_code_runs_are_contiguous() {
        for country in Registry::standard().iter() {
            if let Some(range) = country.bank_code_range() {
                let run = &country.field_layout[range];
                assert!(
                    run.chars().all(|ch| ch == BANK_CODE_MARKER),
                    "bank code of {} is not contiguous",
                    country.code
                );
            }
        }
    }

    #[test]
    fn lookup_finds_known_countries() {
        let lu = lookup("LU").expect("LU is registered");
        assert_eq!(lu.name, "Luxembourg");
        assert_eq!(lu.length, 20);
        assert_eq!(lu.field_layout, "LUkkbbbccccccccccccc");
        assert_eq!(lu.bank_code_range(), Some(4..7));
        assert_eq!(lu.bban_length(), 16);

        let de = lookup("DE").expect("DE is registered");
        assert_eq!(de.bank_code_range(), Some(4..12));
        assert_eq!(de.field('c'), Some(12..22));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup("ZZ").is_none());
        assert!(lookup("lu").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("IK").is_none());
    }

    #[test]
    fn countries_without_bank_marker() {
        assert_eq!(lookup("HN").and_then(CountryFormat::bank_code_range), None);
        assert_eq!(lookup("HN").and_then(|c| c.field('p')), Some(4..8));
        assert_eq!(lookup("IR").and_then(CountryFormat::bank_code_range), None);
    }

    #[test]
    fn spans_skip_header() {
        let be = lookup("BE").expect("BE is registered");
        let markers: Vec<char> = be.spans().iter().map(|span| span.marker).collect();
        assert_eq!(markers, vec!['b', 'c', 'x']);
        assert_eq!(be.field('k'), None);
        assert_eq!(be.field('x'), Some(14..16));
    }

    #[test]
    fn build_rejects_inconsistent_tables() {
        let short = CountryEntry {
            code: "AA",
            name: "Short",
            length: 16,
            bban_format: "12n",
            layout: "AAkk bbbb cccc ccc",
            notes: "",
        };
        assert_eq!(
            Registry::build(&[short]).unwrap_err(),
            RegistryError::LayoutLength {
                code: "AA".to_string(),
                expected: 16,
                actual: 15,
            }
        );

        let wrong_prefix = CountryEntry {
            layout: "ABkk bbbb cccc cccc",
            ..short
        };
        assert_eq!(
            Registry::build(&[wrong_prefix]).unwrap_err(),
            RegistryError::LayoutPrefix {
                code: "AA".to_string()
            }
        );

        let fixed = CountryEntry {
            layout: "AAkk bbbb cccc cccc",
            ..short
        };
        assert!(matches!(
            Registry::build(&[fixed, fixed]),
            Err(RegistryError::Unsorted { .. })
        ));
        assert_eq!(Registry::build(&[fixed]).unwrap().len(), 1);
    }

    #[test]
    fn country_code_normalization() {
        assert_eq!(normalize_country_code(" lu "), Some("LU".to_string()));
        assert_eq!(normalize_country_code("L1"), None);
        assert_eq!(normalize_country_code("LUX"), None);
    }
}
