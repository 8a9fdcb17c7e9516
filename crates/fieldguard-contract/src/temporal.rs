//! Temporal contracts: date validity and date intervals.

use chrono::NaiveDateTime;
use fieldguard_core::transform::format_message_date;

use crate::contract::Contract;
use crate::error::{SpecError, Violation};
use crate::field::FieldId;

/// Date contract: the candidate must be a date value or absent.
///
/// Validity is structural in the stored type, so the type guard carries the
/// whole rule.
#[derive(Debug, Clone, Copy)]
pub struct DateContract;

impl Contract<NaiveDateTime> for DateContract {
    fn apply(&self, _id: &FieldId, candidate: NaiveDateTime) -> Result<NaiveDateTime, Violation> {
        Ok(candidate)
    }
}

/// Range membership over date instants.
///
/// Bound semantics match the numeric segment contract; comparisons run on
/// each date's absolute instant.
#[derive(Debug, Clone, Copy)]
pub struct IntervalContract {
    from: NaiveDateTime,
    to: NaiveDateTime,
    including: bool,
}

impl IntervalContract {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime, including: bool) -> Result<Self, SpecError> {
        if from > to || (from == to && !including) {
            return Err(SpecError::segment(
                format_message_date(from),
                format_message_date(to),
                including,
            ));
        }
        Ok(Self {
            from,
            to,
            including,
        })
    }
}

impl Contract<NaiveDateTime> for IntervalContract {
    fn apply(&self, id: &FieldId, candidate: NaiveDateTime) -> Result<NaiveDateTime, Violation> {
        let inside = if self.including {
            candidate >= self.from && candidate <= self.to
        } else {
            candidate > self.from && candidate < self.to
        };
        if !inside {
            let borders = if self.including { " including them" } else { "" };
            return Err(Violation::constraint(
                id,
                format!(
                    "value of '{}' should be a date between {} and {}{}",
                    id.field,
                    format_message_date(self.from),
                    format_message_date(self.to),
                    borders
                ),
            ));
        }
        Ok(candidate)
    }
}
