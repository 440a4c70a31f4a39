use serde::{Deserialize, Serialize};

/// One fixture row: `{country, code, iban}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanRecord {
    pub country: String,
    pub code: String,
    pub iban: String,
}

/// JSON fixture file layout: `{"ibans": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanList {
    pub ibans: Vec<IbanRecord>,
}

/// One line of a batch report. The IBAN is always masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRow {
    pub line: usize,
    pub code: String,
    pub iban: String,
    pub valid: bool,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
