use crate::error::IbanError;

/// Shortest IBAN issued by any country (Norway).
pub const MIN_IBAN_LENGTH: usize = 15;

/// Longest digit run parsed at once during MOD 97 reduction; fits a `u32`.
const MOD97_CHUNK: usize = 9;

/// Strips all whitespace and uppercases the rest.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Splits a value into blocks of four characters separated by single spaces.
pub fn group_by_four(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for (idx, ch) in value.chars().enumerate() {
        if idx > 0 && idx % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Masks everything but the first 2 and last 4 characters, for logs and
/// error messages.
pub fn obscure(iban: &str) -> String {
    let chars: Vec<char> = iban.chars().collect();
    if chars.len() <= 6 {
        return iban.to_string();
    }
    let mut out = String::with_capacity(chars.len());
    out.extend(&chars[..2]);
    out.extend(std::iter::repeat('*').take(chars.len() - 6));
    out.extend(&chars[chars.len() - 4..]);
    out
}

/// Splits a normalized IBAN into country code, check digits and BBAN.
pub fn split_header(iban: &str) -> Result<(&str, &str, &str), IbanError> {
    match (iban.get(..2), iban.get(2..4), iban.get(4..)) {
        (Some(country), Some(check), Some(bban)) => Ok((country, check, bban)),
        _ => Err(IbanError::MalformedInput(format!(
            "cannot split header of <{}>",
            obscure(iban)
        ))),
    }
}

/// Moves the 4-character header behind the BBAN (ISO 7064 MOD 97-10 order).
pub fn rearrange(country: &str, check: &str, bban: &str) -> String {
    let mut out = String::with_capacity(bban.len() + 4);
    out.push_str(bban);
    out.push_str(country);
    out.push_str(check);
    out
}

/// Replaces each `A..=Z` with its value `10..=35`; every other character is
/// copied unchanged.
pub fn to_digit_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 2);
    for ch in value.chars() {
        if ch.is_ascii_uppercase() {
            let val = ch as u32 - 'A' as u32 + 10;
            out.push_str(&val.to_string());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Remainder of an arbitrarily long decimal string modulo 97.
///
/// At most nine digits are parsed at a time; each partial remainder is put
/// back in front of the unconsumed digits.
pub fn mod97(digits: &str) -> Result<u32, IbanError> {
    if digits.is_empty() {
        return Err(IbanError::MalformedInput("empty digit string".to_string()));
    }
    if let Some(bad) = digits.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(IbanError::MalformedInput(format!(
            "unexpected character '{bad}' in checksum input"
        )));
    }

    let mut rest = digits;
    let mut chunk = String::with_capacity(MOD97_CHUNK);
    loop {
        let take = (MOD97_CHUNK - chunk.len()).min(rest.len());
        chunk.push_str(&rest[..take]);
        rest = &rest[take..];

        let value: u32 = chunk
            .parse()
            .map_err(|err| IbanError::MalformedInput(format!("{err}")))?;
        let remainder = value % 97;
        if rest.is_empty() {
            return Ok(remainder);
        }
        chunk.clear();
        chunk.push_str(&remainder.to_string());
    }
}

/// Check digits for `country` + `bban`, computed with `00` in the check
/// position: `98 - mod97(...)`.
pub fn check_digits(country: &str, bban: &str) -> Result<u8, IbanError> {
    let remainder = mod97(&to_digit_string(&rearrange(country, "00", bban)))?;
    // remainder < 97, so the result stays within 2..=98
    Ok((98 - remainder) as u8)
}
