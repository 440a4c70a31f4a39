use crate::error::IbanError;
use crate::registry::{self, CountryFormat};
use crate::util::{
    check_digits, group_by_four, mod97, normalize, obscure, rearrange, split_header,
    to_digit_string, MIN_IBAN_LENGTH,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Outcome of a structural check that got as far as the checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    /// Grouped form of the normalized input; only set when valid.
    pub formatted: Option<String>,
}

/// An IBAN that passed validation, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Iban {
    /// Normalized number, no spaces.
    pub number: String,
    pub country_code: String,
    pub checksum: String,
    pub bban: String,
    /// `None` when the country's layout has no bank code field.
    pub bank_code: Option<String>,
}

impl Iban {
    pub fn formatted(&self) -> String {
        group_by_four(&self.number)
    }

    pub fn masked(&self) -> String {
        obscure(&self.number)
    }

    pub fn country(&self) -> Option<&'static CountryFormat> {
        registry::lookup(&self.country_code)
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        build_iban(raw)
    }
}

/// Normalizes `raw` and checks it is long enough and plain ASCII, so that
/// later steps can slice it by byte position.
fn prepare(raw: &str) -> Result<String, IbanError> {
    let iban = normalize(raw);
    let length = iban.chars().count();
    if length < MIN_IBAN_LENGTH {
        log::debug!("IBAN too short: {}", obscure(&iban));
        return Err(IbanError::TooShort {
            length,
            masked: obscure(&iban),
        });
    }
    ensure_ascii(&iban)?;
    Ok(iban)
}

fn ensure_ascii(iban: &str) -> Result<(), IbanError> {
    match iban.chars().find(|ch| !ch.is_ascii()) {
        Some(bad) => Err(IbanError::MalformedInput(format!(
            "non-ASCII character '{bad}' in <{}>",
            obscure(iban)
        ))),
        None => Ok(()),
    }
}

/// Checks `raw` against the country registry and the MOD 97-10 checksum.
///
/// Structural problems (too short, unknown country, wrong length, characters
/// that cannot be turned into digits) are errors. A well-formed IBAN whose
/// check digits do not verify returns `Ok` with `is_valid == false`.
pub fn validate(raw: &str) -> Result<Validation, IbanError> {
    let iban = prepare(raw)?;

    let (country_code, check, bban) = split_header(&iban)?;
    let format = registry::lookup(country_code).ok_or_else(|| {
        log::debug!(
            "IBAN {} has country code not in the list ({})",
            obscure(&iban),
            country_code
        );
        IbanError::UnknownCountry(country_code.to_string())
    })?;

    if format.length != iban.len() {
        log::debug!(
            "IBAN {} length ({}) does not match configuration length ({})",
            obscure(&iban),
            iban.len(),
            format.length
        );
        return Err(IbanError::LengthMismatch {
            country: country_code.to_string(),
            expected: format.length,
            actual: iban.len(),
        });
    }

    let remainder = mod97(&to_digit_string(&rearrange(country_code, check, bban)))?;
    if remainder != 1 {
        log::debug!("IBAN {} failed the checksum", obscure(&iban));
        return Ok(Validation {
            is_valid: false,
            formatted: None,
        });
    }

    Ok(Validation {
        is_valid: true,
        formatted: Some(group_by_four(&iban)),
    })
}

/// Check digits the account in `raw` should carry, whatever digits it
/// currently has. Needs no registry entry.
pub fn checksum(raw: &str) -> Result<u8, IbanError> {
    let iban = prepare(raw)?;
    let (country_code, _, bban) = split_header(&iban)?;
    check_digits(country_code, bban)
}

/// Normalized `raw` with positions 3-4 replaced by `digits` (at most 98).
pub fn replace_check_digits(raw: &str, digits: u8) -> Result<String, IbanError> {
    if digits > 98 {
        return Err(IbanError::MalformedInput(format!(
            "check digits {digits} are out of range"
        )));
    }
    let iban = prepare(raw)?;
    let (country_code, _, bban) = split_header(&iban)?;
    Ok(format!("{country_code}{digits:02}{bban}"))
}

/// Bank code of a normalized IBAN, cut out at the positions of the `b`
/// run in the country's field layout.
pub fn extract_bank_code(country_code: &str, iban: &str) -> Result<String, IbanError> {
    ensure_ascii(iban)?;
    let code = country_code.to_ascii_uppercase();
    let range = registry::lookup(&code)
        .and_then(CountryFormat::bank_code_range)
        .ok_or_else(|| IbanError::NoBankCodeField(code.clone()))?;
    iban.get(range.clone())
        .map(str::to_string)
        .ok_or_else(|| IbanError::LengthMismatch {
            country: code,
            expected: range.end,
            actual: iban.len(),
        })
}

/// Validates `raw` and splits it into an `Iban`.
///
/// Countries whose layout has no bank code field still produce an `Iban`,
/// with `bank_code` left empty.
pub fn build_iban(raw: &str) -> Result<Iban, IbanError> {
    let validation = validate(raw).map_err(|err| IbanError::InvalidIban(Box::new(err)))?;
    if !validation.is_valid {
        return Err(IbanError::InvalidIban(Box::new(IbanError::ChecksumInvalid)));
    }

    let number = prepare(raw)?;
    let (country_code, checksum, bban) = split_header(&number)?;
    let bank_code = match extract_bank_code(country_code, &number) {
        Ok(code) => Some(code),
        Err(IbanError::NoBankCodeField(_)) => {
            log::debug!("no bank code field for country {}", country_code);
            None
        }
        Err(err) => return Err(IbanError::InvalidIban(Box::new(err))),
    };

    Ok(Iban {
        country_code: country_code.to_string(),
        checksum: checksum.to_string(),
        bban: bban.to_string(),
        bank_code,
        number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_ibans() {
        let result = validate("LU28 0019 4006 4475 0000").unwrap();
        assert!(result.is_valid);
        assert_eq!(result.formatted.as_deref(), Some("LU28 0019 4006 4475 0000"));

        let result = validate("EG210003700067100239218937900").unwrap();
        assert!(result.is_valid);
        assert_eq!(
            result.formatted.as_deref(),
            Some("EG21 0003 7000 6710 0239 2189 3790 0")
        );
    }

    #[test]
    fn checksum_failure_is_not_an_error() {
        let result = validate("LU12 3456 7890 1234 5678").unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.formatted, None);
    }

    #[test]
    fn short_input_is_too_short() {
        assert!(matches!(
            validate("LU28 0019 4006"),
            Err(IbanError::TooShort { length: 12, .. })
        ));
        assert!(matches!(validate(""), Err(IbanError::TooShort { length: 0, .. })));
        assert!(matches!(
            checksum("NO93 8601 111"),
            Err(IbanError::TooShort { .. })
        ));
    }

    #[test]
    fn short_non_ascii_input_counts_characters() {
        assert!(matches!(
            validate("ÄÄÄÄÄÄÄ1"),
            Err(IbanError::TooShort { length: 8, .. })
        ));
        let err = validate("DEÜÜÜÜÜÜ").unwrap_err();
        assert_eq!(
            err,
            IbanError::TooShort {
                length: 8,
                masked: "DE**ÜÜÜÜ".to_string(),
            }
        );
        assert!(err.to_string().contains("(8 characters"));
    }

    #[test]
    fn long_non_ascii_input_is_malformed() {
        assert!(matches!(
            validate("DE89 3704 0044 0532 0130 0Ä"),
            Err(IbanError::MalformedInput(_))
        ));
        assert!(matches!(
            checksum("ÄÄ00 3704 0044 0532 0130 00"),
            Err(IbanError::MalformedInput(_))
        ));
        assert!(matches!(
            build_iban("DEÄÄ 3704 0044 0532 0130").unwrap_err().root_cause(),
            IbanError::MalformedInput(_)
        ));
    }

    #[test]
    fn too_short_message_is_masked() {
        let err = validate("DE89 3704 0044 05").unwrap_err();
        assert_eq!(
            err.to_string(),
            "IBAN is too short (14 characters, minimum is 15): <DE********4405>"
        );
    }

    #[test]
    fn unknown_country_is_reported() {
        assert_eq!(
            validate("ZZ12 3456 7890 1234 5678").unwrap_err(),
            IbanError::UnknownCountry("ZZ".to_string())
        );
    }

    #[test]
    fn length_must_match_registry() {
        assert_eq!(
            validate("LU28 0019 4006 4475 0000 1").unwrap_err(),
            IbanError::LengthMismatch {
                country: "LU".to_string(),
                expected: 20,
                actual: 21,
            }
        );
    }

    #[test]
    fn stray_characters_are_malformed() {
        assert!(matches!(
            validate("LU28-0019-4006-44750"),
            Err(IbanError::MalformedInput(_))
        ));
        assert!(matches!(
            checksum("LU00 0019 4006 4475 00.0"),
            Err(IbanError::MalformedInput(_))
        ));
    }

    #[test]
    fn lowercase_input_behaves_like_uppercase() {
        assert_eq!(
            validate("gb29 nwbk 6016 1331 9268 19").unwrap(),
            validate("GB29 NWBK 6016 1331 9268 19").unwrap()
        );
        assert!(validate("gb29nwbk60161331926819").unwrap().is_valid);
    }

    #[test]
    fn checksum_recomputes_check_digits() {
        assert_eq!(checksum("LU00 0019 4006 4475 0000").unwrap(), 28);
        assert_eq!(checksum("LU28 0019 4006 4475 0000").unwrap(), 28);
        // country agnostic: ZZ is not registered
        assert!(checksum("ZZ00 0019 4006 4475 0000").is_ok());
    }

    #[test]
    fn replaced_check_digits_validate() {
        let digits = checksum("LU00 0019 4006 4475 0000").unwrap();
        let fixed = replace_check_digits("LU00 0019 4006 4475 0000", digits).unwrap();
        assert_eq!(fixed, "LU280019400644750000");
        assert!(validate(&fixed).unwrap().is_valid);

        let digits = checksum("NO00 8601 1117 947").unwrap();
        assert_eq!(replace_check_digits("NO00 8601 1117 947", digits).unwrap(), "NO9386011117947");
    }

    #[test]
    fn replaced_check_digits_stay_two_wide() {
        assert_eq!(
            replace_check_digits("LU28 0019 4006 4475 0000", 98).unwrap(),
            "LU980019400644750000"
        );
        assert_eq!(
            replace_check_digits("LU28 0019 4006 4475 0000", 0).unwrap(),
            "LU000019400644750000"
        );
        assert!(matches!(
            replace_check_digits("LU28 0019 4006 4475 0000", 99),
            Err(IbanError::MalformedInput(_))
        ));
        assert!(matches!(
            replace_check_digits("LU28 0019 4006 4475 0000", 123),
            Err(IbanError::MalformedInput(_))
        ));
    }

    #[test]
    fn bank_code_follows_layout() {
        assert_eq!(extract_bank_code("LU", "LU280019400644750000").unwrap(), "001");
        assert_eq!(extract_bank_code("de", "DE89370400440532013000").unwrap(), "37040044");
        assert_eq!(extract_bank_code("GB", "GB29NWBK60161331926819").unwrap(), "NWBK");
        assert_eq!(
            extract_bank_code("HN", "HN88CABF00000000000250005469").unwrap_err(),
            IbanError::NoBankCodeField("HN".to_string())
        );
        assert_eq!(
            extract_bank_code("ZZ", "ZZ280019400644750000").unwrap_err(),
            IbanError::NoBankCodeField("ZZ".to_string())
        );
        assert!(matches!(
            extract_bank_code("DE", "DE8937"),
            Err(IbanError::LengthMismatch { .. })
        ));
        assert!(matches!(
            extract_bank_code("DE", "DEÄÄ3704004405320130"),
            Err(IbanError::MalformedInput(_))
        ));
    }

    #[test]
    fn build_iban_decomposes() {
        let iban = build_iban("lu28 0019 4006 4475 0000").unwrap();
        assert_eq!(
            iban,
            Iban {
                number: "LU280019400644750000".to_string(),
                country_code: "LU".to_string(),
                checksum: "28".to_string(),
                bban: "0019400644750000".to_string(),
                bank_code: Some("001".to_string()),
            }
        );
        assert_eq!(iban.to_string(), "LU28 0019 4006 4475 0000");
        assert_eq!(iban.masked(), "LU**************0000");
        assert_eq!(iban.country().map(|c| c.name), Some("Luxembourg"));
    }

    #[test]
    fn build_iban_without_bank_field_is_lenient() {
        let digits = checksum("IR00 0550 0000 0000 0000 0000 01").unwrap();
        let number = replace_check_digits("IR00 0550 0000 0000 0000 0000 01", digits).unwrap();
        let iban: Iban = number.parse().unwrap();
        assert_eq!(iban.country_code, "IR");
        assert_eq!(iban.bank_code, None);
    }

    #[test]
    fn build_iban_wraps_failures() {
        let err = build_iban("LU12 3456 7890 1234 5678").unwrap_err();
        assert_eq!(err, IbanError::InvalidIban(Box::new(IbanError::ChecksumInvalid)));

        let err = build_iban("ZZ12 3456 7890 1234 5678").unwrap_err();
        assert_eq!(err.root_cause(), &IbanError::UnknownCountry("ZZ".to_string()));

        let err = "LU28".parse::<Iban>().unwrap_err();
        assert!(matches!(err.root_cause(), IbanError::TooShort { .. }));
    }
}
