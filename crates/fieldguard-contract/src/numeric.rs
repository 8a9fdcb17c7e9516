//! Numeric contracts: range membership and numeric shape.

use crate::contract::Contract;
use crate::error::{SpecError, Violation};
use crate::field::FieldId;

/// Range membership over finite numbers.
///
/// Construction fails on inverted bounds, or on equal bounds with the
/// borders excluded, before any field exists. Non-integral values are valid
/// members unless a numeric-shape contract also applies.
#[derive(Debug, Clone, Copy)]
pub struct SegmentContract {
    from: f64,
    to: f64,
    including: bool,
}

impl SegmentContract {
    pub fn new(from: f64, to: f64, including: bool) -> Result<Self, SpecError> {
        if from > to || (from == to && !including) {
            return Err(SpecError::segment(from, to, including));
        }
        Ok(Self {
            from,
            to,
            including,
        })
    }
}

impl Contract<f64> for SegmentContract {
    fn apply(&self, id: &FieldId, candidate: f64) -> Result<f64, Violation> {
        let inside = if self.including {
            candidate >= self.from && candidate <= self.to
        } else {
            candidate > self.from && candidate < self.to
        };
        if !inside {
            let borders = if self.including { " incl. them" } else { "" };
            return Err(Violation::constraint(
                id,
                format!(
                    "value of '{}' is not a number between {} and {}{}",
                    id.field, self.from, self.to, borders
                ),
            ));
        }
        Ok(candidate)
    }
}

/// Sign rule of an integer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignRule {
    Any,
    /// Positive incl. zero.
    PositiveOrZero,
    Negative,
}

/// Integral-ness and sign checks. Stores the number unchanged.
#[derive(Debug, Clone, Copy)]
pub struct IntegerContract {
    sign: SignRule,
}

impl IntegerContract {
    pub fn new(sign: SignRule) -> Self {
        Self { sign }
    }
}

impl Contract<f64> for IntegerContract {
    fn apply(&self, id: &FieldId, candidate: f64) -> Result<f64, Violation> {
        let integral = candidate.fract() == 0.0;
        let (accepted, label) = match self.sign {
            SignRule::Any => (integral, "a valid integer"),
            SignRule::PositiveOrZero => (integral && candidate >= 0.0, "a positive integer"),
            SignRule::Negative => (integral && candidate < 0.0, "a negative integer"),
        };
        if !accepted {
            return Err(Violation::constraint(
                id,
                format!("value of '{}' should be {}", id.field, label),
            ));
        }
        Ok(candidate)
    }
}

/// Decimal-digit rounding on write.
///
/// Rounding is the defined transform, not a rejection: fractional candidates
/// round to the configured number of decimal digits, integral candidates are
/// stored unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FloatContract {
    decimals: u32,
}

impl FloatContract {
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }
}

impl Contract<f64> for FloatContract {
    fn apply(&self, _id: &FieldId, candidate: f64) -> Result<f64, Violation> {
        if candidate.fract() == 0.0 {
            return Ok(candidate);
        }
        let scale = 10f64.powi(self.decimals as i32);
        Ok((candidate * scale).round() / scale)
    }
}
