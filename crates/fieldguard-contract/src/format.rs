//! Format contracts: credit card, IBAN, email.
//!
//! Each semantic predicate is "the canonicalized value matches at least one
//! pattern in the accepted set"; the stored value is the canonical form.

use fieldguard_core::{predicate, FieldValue, Shape};
use fieldguard_patterns::card;
use fieldguard_patterns::iban;
use fieldguard_patterns::{CardIssuer, IbanCountry};

use crate::contract::Contract;
use crate::error::Violation;
use crate::field::FieldId;

/// Issuer set a card contract accepts.
#[derive(Debug, Clone)]
pub enum AcceptedIssuers {
    /// Any issuer in the registry.
    All,
    One(CardIssuer),
    AnyOf(Vec<CardIssuer>),
}

impl AcceptedIssuers {
    fn matches(&self, digits: &str) -> Option<CardIssuer> {
        match self {
            AcceptedIssuers::All => card::match_any(digits),
            AcceptedIssuers::One(issuer) => card::match_digits(digits, [*issuer]),
            AcceptedIssuers::AnyOf(issuers) => {
                card::match_digits(digits, issuers.iter().copied())
            }
        }
    }
}

/// Credit-card number contract.
///
/// Accepts text or numeric candidates and stores the digits-only canonical
/// form, so `5105-1051-0510-5100` and `5105 1051 0510 5100` both store
/// `5105105105105100`.
#[derive(Debug)]
pub struct CardContract {
    accepts: AcceptedIssuers,
}

impl CardContract {
    pub fn new(accepts: AcceptedIssuers) -> Self {
        Self { accepts }
    }
}

impl Contract<String> for CardContract {
    fn shape(&self) -> Shape {
        Shape::TextOrNumber
    }

    fn coerce(&self, candidate: FieldValue) -> Option<String> {
        match candidate {
            FieldValue::Text(value) => Some(value),
            FieldValue::Int(value) => Some(value.to_string()),
            _ => None,
        }
    }

    fn apply(&self, id: &FieldId, candidate: String) -> Result<String, Violation> {
        let digits = card::canonicalize(&candidate);
        if self.accepts.matches(&digits).is_none() {
            return Err(Violation::constraint(
                id,
                format!("value of '{}' is not a valid credit card number", id.field),
            ));
        }
        Ok(digits)
    }
}

/// IBAN contract for one country.
///
/// Stores the first run of the canonicalized candidate matching the country
/// layout; trailing characters after a complete match are discarded.
#[derive(Debug)]
pub struct IbanContract {
    country: IbanCountry,
}

impl IbanContract {
    pub fn new(country: IbanCountry) -> Self {
        Self { country }
    }
}

impl Contract<String> for IbanContract {
    fn apply(&self, id: &FieldId, candidate: String) -> Result<String, Violation> {
        match iban::find_iban(self.country, &candidate) {
            Some(canonical) => Ok(canonical),
            None => Err(Violation::constraint(
                id,
                format!(
                    "value of '{}' is not a valid {} IBAN",
                    id.field, self.country
                ),
            )),
        }
    }
}

/// Email address contract. Stores the accepted candidate unchanged.
#[derive(Debug)]
pub struct EmailContract;

impl Contract<String> for EmailContract {
    fn apply(&self, id: &FieldId, candidate: String) -> Result<String, Violation> {
        if !predicate::is_email_str(&candidate) {
            return Err(Violation::constraint(
                id,
                format!("value of '{}' should be a valid email address", id.field),
            ));
        }
        Ok(candidate)
    }
}
