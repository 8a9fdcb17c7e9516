use fieldguard_core::{FieldShape, FieldValue};

use crate::contract::Contract;
use crate::error::Violation;

/// Names one field of one host type inside violation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldId {
    pub owner: &'static str,
    pub field: &'static str,
}

/// One guarded field of one host instance.
///
/// After installation the wrapper is the sole path to the value: every write
/// runs the contract pipeline, reads return the stored value untouched. The
/// wrapper lives exactly as long as its host and is never reinstalled.
pub struct Field<T: FieldShape> {
    id: FieldId,
    value: Option<T>,
    contract: Box<dyn Contract<T>>,
}

impl<T: FieldShape> Field<T> {
    /// Install a contract on a field.
    ///
    /// The initial value is captured as-is, without validation; the contract
    /// applies to every write from here on.
    pub fn install(
        owner: &'static str,
        field: &'static str,
        initial: Option<T>,
        contract: impl Contract<T> + 'static,
    ) -> Self {
        tracing::debug!(owner, field, "field contract installed");
        Self {
            id: FieldId { owner, field },
            value: initial,
            contract: Box::new(contract),
        }
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Current stored value. Reads never validate or transform.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Run a candidate through the contract and store it on acceptance.
    ///
    /// A rejected write returns the violation and leaves the stored value
    /// untouched.
    pub fn set(&mut self, candidate: impl Into<FieldValue>) -> Result<(), Violation> {
        let candidate = candidate.into();
        self.contract
            .admit(&self.id, self.value.is_some(), &candidate)?;

        if candidate.is_null() {
            self.value = None;
            return Ok(());
        }

        let shaped = match self.contract.coerce(candidate) {
            Some(shaped) => shaped,
            None => return Err(Violation::type_mismatch(&self.id, self.contract.shape())),
        };

        let accepted = self.contract.apply(&self.id, shaped)?;
        self.value = Some(accepted);
        Ok(())
    }
}

impl<T: FieldShape + std::fmt::Debug> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
