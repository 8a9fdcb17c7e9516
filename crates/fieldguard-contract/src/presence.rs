//! Presence contracts: required and not-null.
//!
//! Both live in the admit gate so they see null candidates before the
//! engine's null shortcut.

use fieldguard_core::FieldValue;

use crate::contract::Contract;
use crate::error::Violation;
use crate::field::FieldId;

/// Rejects absent candidates.
#[derive(Debug, Clone, Copy)]
pub struct RequiredContract;

impl Contract<FieldValue> for RequiredContract {
    fn admit(
        &self,
        id: &FieldId,
        _occupied: bool,
        candidate: &FieldValue,
    ) -> Result<(), Violation> {
        if candidate.is_null() {
            return Err(Violation::constraint(
                id,
                format!("property '{}' is required", id.field),
            ));
        }
        Ok(())
    }

    fn apply(&self, _id: &FieldId, candidate: FieldValue) -> Result<FieldValue, Violation> {
        Ok(candidate)
    }
}

/// Rejects null candidates.
#[derive(Debug, Clone, Copy)]
pub struct NotNullContract;

impl Contract<FieldValue> for NotNullContract {
    fn admit(
        &self,
        id: &FieldId,
        _occupied: bool,
        candidate: &FieldValue,
    ) -> Result<(), Violation> {
        if candidate.is_null() {
            return Err(Violation::constraint(
                id,
                format!("value of '{}' is null", id.field),
            ));
        }
        Ok(())
    }

    fn apply(&self, _id: &FieldId, candidate: FieldValue) -> Result<FieldValue, Violation> {
        Ok(candidate)
    }
}
