//! Mutability contracts: write-once fields.

use fieldguard_core::FieldValue;

use crate::contract::Contract;
use crate::error::Violation;
use crate::field::FieldId;

fn read_only_violation(id: &FieldId) -> Violation {
    Violation::constraint(
        id,
        format!(
            "cannot assign to '{}' because it is a read-only property",
            id.field
        ),
    )
}

/// Write-once: rejects every write once a value is stored.
///
/// Null writes while the field is unset are accepted and keep it unset, so
/// the latch arms on the first non-null write.
#[derive(Debug, Clone, Copy)]
pub struct ReadOnlyContract;

impl Contract<FieldValue> for ReadOnlyContract {
    fn admit(
        &self,
        id: &FieldId,
        occupied: bool,
        _candidate: &FieldValue,
    ) -> Result<(), Violation> {
        if occupied {
            return Err(read_only_violation(id));
        }
        Ok(())
    }

    fn apply(&self, _id: &FieldId, candidate: FieldValue) -> Result<FieldValue, Violation> {
        Ok(candidate)
    }
}

/// Key property: required and write-once combined.
#[derive(Debug, Clone, Copy)]
pub struct KeyContract;

impl Contract<FieldValue> for KeyContract {
    fn admit(&self, id: &FieldId, occupied: bool, candidate: &FieldValue) -> Result<(), Violation> {
        if candidate.is_null() {
            return Err(Violation::constraint(
                id,
                format!("property '{}' is required", id.field),
            ));
        }
        if occupied {
            return Err(read_only_violation(id));
        }
        Ok(())
    }

    fn apply(&self, _id: &FieldId, candidate: FieldValue) -> Result<FieldValue, Violation> {
        Ok(candidate)
    }
}
