use crate::error::IbanError;
use crate::iban::build_iban;
use crate::models::{BatchRow, IbanList, IbanRecord};
use crate::registry::normalize_country_code;
use crate::util::{normalize, obscure};
use std::collections::BTreeMap;
use std::fs::create_dir_all;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct BatchIssue {
    pub level: IssueLevel,
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub total_records: usize,
    pub valid_records: usize,
    pub rows: Vec<BatchRow>,
    pub issues: Vec<BatchIssue>,
}

impl BatchReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Warning)
            .count()
    }

    /// Issue messages at `level` with their counts, most frequent first and
    /// alphabetical among ties.
    pub fn tally(&self, level: IssueLevel) -> Vec<(&str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for issue in self.issues.iter().filter(|issue| issue.level == level) {
            *counts.entry(issue.message.as_str()).or_default() += 1;
        }
        let mut tally: Vec<(&str, usize)> = counts.into_iter().collect();
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally
    }
}

/// Reads fixture records from a `.json` list (`{"ibans": [...]}`) or from a
/// CSV file with `country,code,iban` headers.
pub fn load_records(path: &Path) -> Result<Vec<IbanRecord>, String> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let data = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
        let list: IbanList = serde_json::from_str(&data).map_err(|err| err.to_string())?;
        return Ok(list.ibans);
    }

    let mut reader = csv::Reader::from_path(path).map_err(|err| err.to_string())?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: IbanRecord = result.map_err(|err| err.to_string())?;
        records.push(record);
    }
    Ok(records)
}

pub fn check_file(path: &Path) -> Result<BatchReport, String> {
    let records = load_records(path)?;
    log::debug!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(check_records(&records))
}

pub fn check_records(records: &[IbanRecord]) -> BatchReport {
    let mut rows = Vec::with_capacity(records.len());
    let mut issues = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let line = idx + 1;
        rows.push(check_record(line, record, &mut issues));
    }

    let valid_records = rows.iter().filter(|row| row.valid).count();
    BatchReport {
        total_records: records.len(),
        valid_records,
        rows,
        issues,
    }
}

fn check_record(line: usize, record: &IbanRecord, issues: &mut Vec<BatchIssue>) -> BatchRow {
    let mut row = BatchRow {
        line,
        code: record.code.clone(),
        iban: obscure(&normalize(&record.iban)),
        valid: false,
        bank_code: None,
        error: None,
    };

    let iban = match build_iban(&record.iban) {
        Ok(iban) => iban,
        Err(err) => {
            issues.push(issue(IssueLevel::Error, line, issue_message(&err)));
            row.error = Some(err.to_string());
            return row;
        }
    };

    row.valid = true;
    if normalize_country_code(&record.code).as_deref() != Some(iban.country_code.as_str()) {
        issues.push(issue(
            IssueLevel::Error,
            line,
            "fixture code does not match IBAN country",
        ));
    }
    if iban.bank_code.is_none() {
        issues.push(issue(
            IssueLevel::Warning,
            line,
            "no bank code field for country",
        ));
    }
    row.bank_code = iban.bank_code;
    row
}

fn issue(level: IssueLevel, line: usize, message: &str) -> BatchIssue {
    BatchIssue {
        level,
        line,
        message: message.to_string(),
    }
}

/// Stable per-kind message, so issues can be counted by message.
fn issue_message(err: &IbanError) -> &'static str {
    match err.root_cause() {
        IbanError::TooShort { .. } => "IBAN is too short",
        IbanError::UnknownCountry(_) => "IBAN country is not in the list",
        IbanError::LengthMismatch { .. } => "IBAN length does not match country specification",
        IbanError::ChecksumInvalid => "IBAN check digits are invalid",
        IbanError::MalformedInput(_) => "IBAN contains invalid characters",
        IbanError::NoBankCodeField(_) => "no bank code field for country",
        IbanError::InvalidIban(_) => "invalid IBAN",
    }
}

pub fn write_report(output: &Path, report: &BatchReport) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for row in &report.rows {
        writer.serialize(row).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}
