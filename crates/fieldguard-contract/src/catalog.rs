//! Pre-built contracts, each a thin configuration of the engine.
//!
//! Everything here is a one-line wiring of a contract family; the design
//! content lives in the families themselves.

use chrono::NaiveDateTime;
use fieldguard_patterns::{CardIssuer, IbanCountry};

use crate::error::SpecError;
use crate::format::{AcceptedIssuers, CardContract, EmailContract, IbanContract};
use crate::mutability::{KeyContract, ReadOnlyContract};
use crate::numeric::{FloatContract, IntegerContract, SegmentContract, SignRule};
use crate::presence::{NotNullContract, RequiredContract};
use crate::temporal::{DateContract, IntervalContract};
use crate::text::{CaseContract, CaseRule, EscapeContract};

pub fn credit_card(accepts: AcceptedIssuers) -> CardContract {
    CardContract::new(accepts)
}

pub fn credit_card_of(issuer: CardIssuer) -> CardContract {
    CardContract::new(AcceptedIssuers::One(issuer))
}

pub fn iban(country: IbanCountry) -> IbanContract {
    IbanContract::new(country)
}

pub fn email() -> EmailContract {
    EmailContract
}

pub fn segment(from: f64, to: f64, including: bool) -> Result<SegmentContract, SpecError> {
    SegmentContract::new(from, to, including)
}

pub fn interval(
    from: NaiveDateTime,
    to: NaiveDateTime,
    including: bool,
) -> Result<IntervalContract, SpecError> {
    IntervalContract::new(from, to, including)
}

pub fn integer() -> IntegerContract {
    IntegerContract::new(SignRule::Any)
}

pub fn positive_integer() -> IntegerContract {
    IntegerContract::new(SignRule::PositiveOrZero)
}

pub fn negative_integer() -> IntegerContract {
    IntegerContract::new(SignRule::Negative)
}

pub fn float(decimals: u32) -> FloatContract {
    FloatContract::new(decimals)
}

pub fn uppercase() -> CaseContract {
    CaseContract::new(CaseRule::Upper)
}

pub fn lowercase() -> CaseContract {
    CaseContract::new(CaseRule::Lower)
}

pub fn upper_first() -> CaseContract {
    CaseContract::new(CaseRule::UpperFirst)
}

pub fn lower_first() -> CaseContract {
    CaseContract::new(CaseRule::LowerFirst)
}

pub fn escape() -> EscapeContract {
    EscapeContract
}

pub fn secure() -> EscapeContract {
    EscapeContract
}

pub fn date() -> DateContract {
    DateContract
}

pub fn read_only() -> ReadOnlyContract {
    ReadOnlyContract
}

pub fn key() -> KeyContract {
    KeyContract
}

pub fn required() -> RequiredContract {
    RequiredContract
}

pub fn not_null() -> NotNullContract {
    NotNullContract
}
