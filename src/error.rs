use thiserror::Error;

/// Failures of the validation engine.
///
/// A checksum that simply does not verify is not an error for `validate`,
/// which reports it through `Validation::is_valid`. `ChecksumInvalid` only
/// shows up wrapped in `InvalidIban` when a caller asked for a full `Iban`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    #[error("IBAN is too short ({length} characters, minimum is 15): <{masked}>")]
    TooShort { length: usize, masked: String },

    #[error("country <{0}> is not in the list")]
    UnknownCountry(String),

    #[error("length ({actual}) does not match configuration length ({expected}) for country <{country}>")]
    LengthMismatch {
        country: String,
        expected: usize,
        actual: usize,
    },

    #[error("check digits do not verify (MOD 97-10)")]
    ChecksumInvalid,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("no bank code field for country <{0}>")]
    NoBankCodeField(String),

    #[error("invalid IBAN number received: {0}")]
    InvalidIban(#[source] Box<IbanError>),
}

impl IbanError {
    /// The innermost cause, looking through `InvalidIban`.
    pub fn root_cause(&self) -> &IbanError {
        match self {
            IbanError::InvalidIban(inner) => inner.root_cause(),
            other => other,
        }
    }
}

/// Inconsistencies in a country table handed to `Registry::build`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("layout for <{code}> has {actual} positions, expected {expected}")]
    LayoutLength {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("layout for <{code}> does not start with the country code")]
    LayoutPrefix { code: String },

    #[error("country table is not strictly sorted at <{code}>")]
    Unsorted { code: String },
}
