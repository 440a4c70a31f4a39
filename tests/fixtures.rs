use iban_check::batch::{check_records, load_records};
use iban_check::{build_iban, checksum, lookup, validate};
use std::path::Path;

fn fixture_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/iban.json"))
}

#[test]
fn every_fixture_iban_validates() {
    let records = load_records(fixture_path()).expect("fixture file loads");
    assert!(!records.is_empty());

    for (idx, record) in records.iter().enumerate() {
        let result = validate(&record.iban)
            .unwrap_or_else(|err| panic!("record {} ({}) errored: {}", idx, record.code, err));
        assert!(result.is_valid, "record {} ({}) is not valid", idx, record.code);
        assert_eq!(result.formatted.as_deref(), Some(record.iban.as_str()));
    }
}

#[test]
fn fixture_codes_match_registry() {
    let records = load_records(fixture_path()).expect("fixture file loads");
    for record in &records {
        let country = lookup(&record.code)
            .unwrap_or_else(|| panic!("{} is not registered", record.code));
        assert_eq!(country.name, record.country);

        let iban = build_iban(&record.iban).expect("fixture builds");
        assert_eq!(iban.country_code, record.code);
        assert_eq!(iban.number.len(), country.length);
        assert_eq!(
            checksum(&record.iban).expect("checksum computes"),
            iban.checksum.parse::<u8>().expect("two digits")
        );
    }
}

#[test]
fn fixture_batch_is_clean() {
    let records = load_records(fixture_path()).expect("fixture file loads");
    let report = check_records(&records);
    assert_eq!(report.valid_records, records.len());
    assert_eq!(report.error_count(), 0);
}

#[test]
fn known_bank_codes() {
    let cases = [
        ("GB29 NWBK 6016 1331 9268 19", "NWBK"),
        ("DE89 3704 0044 0532 0130 00", "37040044"),
        ("FR14 2004 1010 0505 0001 3M02 606", "20041"),
        ("NL91 ABNA 0417 1643 00", "ABNA"),
        ("CH93 0076 2011 6238 5295 7", "00762"),
        ("BE68 5390 0754 7034", "539"),
    ];
    for (raw, expected) in cases {
        let iban = build_iban(raw).expect("valid IBAN");
        assert_eq!(iban.bank_code.as_deref(), Some(expected), "bank code of {}", raw);
    }
}
