//! Pattern registries for format contracts.
//!
//! Two immutable registries map a semantic category to a compiled matcher
//! over a canonicalized string: credit-card issuers and IBAN countries. Both
//! tables are process-wide, built on first use, and read-only afterwards.

pub mod card;
pub mod iban;

pub use card::CardIssuer;
pub use iban::IbanCountry;
