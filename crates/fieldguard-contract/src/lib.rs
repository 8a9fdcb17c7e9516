//! The field-contract engine.
//!
//! A field of a host object is declared as a [`Field<T>`] wrapper carrying a
//! [`Contract`]; every write runs through the contract's
//! validate-and-transform pipeline, reads return the last accepted value
//! unchanged. The [`catalog`] module holds the pre-built contracts.
//!
//! ```
//! use fieldguard_contract::{catalog, Field};
//! use fieldguard_patterns::IbanCountry;
//!
//! struct Account {
//!     iban: Field<String>,
//! }
//!
//! let mut account = Account {
//!     iban: Field::install("Account", "iban", None, catalog::iban(IbanCountry::Germany)),
//! };
//! account.iban.set("DE75 5121 0800 1245 1261 99").unwrap();
//! assert_eq!(account.iban.get().map(String::as_str), Some("DE75512108001245126199"));
//! ```

pub mod catalog;
pub mod contract;
pub mod error;
pub mod field;
pub mod format;
pub mod mutability;
pub mod numeric;
pub mod presence;
pub mod temporal;
pub mod text;

pub use contract::Contract;
pub use error::{SpecError, Violation};
pub use field::{Field, FieldId};
pub use format::AcceptedIssuers;
