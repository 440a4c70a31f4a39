//! IBAN validation against per-country format rules and the ISO 7064
//! MOD 97-10 checksum.
//!
//! All operations are pure functions over the input string and a country
//! table that is built once and never changed, so they can be called from
//! any number of threads.

pub mod batch;
pub mod error;
pub mod iban;
pub mod logging;
pub mod models;
pub mod reference;
pub mod registry;
pub mod util;

pub use error::{IbanError, RegistryError};
pub use iban::{
    build_iban, checksum, extract_bank_code, replace_check_digits, validate, Iban, Validation,
};
pub use registry::{lookup, CountryFormat, Registry};
pub use util::normalize;
