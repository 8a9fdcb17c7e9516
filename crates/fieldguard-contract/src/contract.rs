use fieldguard_core::{FieldShape, FieldValue, Shape};

use crate::error::Violation;
use crate::field::FieldId;

/// The shared capability of every field contract.
///
/// A contract is a combination of a type guard, a semantic predicate, and an
/// optional transform. The engine owns the write pipeline and calls the
/// hooks in a fixed order; most contracts only implement [`Contract::apply`]
/// and inherit the shape handling from the stored type.
pub trait Contract<T: FieldShape>: Send + Sync {
    /// Shape named in type-violation diagnostics.
    fn shape(&self) -> Shape {
        T::SHAPE
    }

    /// Resolve the dynamic candidate into the stored type.
    ///
    /// `None` reports a type violation. Contracts accepting a wider input
    /// shape than the stored type (string-or-number fields) override this.
    fn coerce(&self, candidate: FieldValue) -> Option<T> {
        T::from_value(candidate)
    }

    /// Gate observing every write before the null shortcut.
    ///
    /// `occupied` reports whether the field currently holds a value.
    /// Mutability and presence rules live here, since they must also see
    /// null candidates.
    fn admit(
        &self,
        id: &FieldId,
        occupied: bool,
        candidate: &FieldValue,
    ) -> Result<(), Violation> {
        let _ = (id, occupied, candidate);
        Ok(())
    }

    /// Semantic predicate plus transform over a shaped candidate.
    ///
    /// Returns the value to store, which may differ from the candidate
    /// (canonicalization, case conversion, rounding).
    fn apply(&self, id: &FieldId, candidate: T) -> Result<T, Violation>;
}
