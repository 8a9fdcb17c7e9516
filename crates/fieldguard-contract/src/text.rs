//! String-shape contracts: case conversion and escaping.
//!
//! These carry no rejection predicate beyond "must be a string or absent";
//! they are purely a transform on write.

use fieldguard_core::transform;

use crate::contract::Contract;
use crate::error::Violation;
use crate::field::FieldId;

/// Case rule of a case contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    Upper,
    Lower,
    UpperFirst,
    LowerFirst,
}

/// Case conversion on write.
#[derive(Debug, Clone, Copy)]
pub struct CaseContract {
    rule: CaseRule,
}

impl CaseContract {
    pub fn new(rule: CaseRule) -> Self {
        Self { rule }
    }
}

impl Contract<String> for CaseContract {
    fn apply(&self, _id: &FieldId, candidate: String) -> Result<String, Violation> {
        Ok(match self.rule {
            CaseRule::Upper => candidate.to_uppercase(),
            CaseRule::Lower => candidate.to_lowercase(),
            CaseRule::UpperFirst => recase_first(candidate, true),
            CaseRule::LowerFirst => recase_first(candidate, false),
        })
    }
}

fn recase_first(value: String, upper: bool) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mapped: String = if upper {
                first.to_uppercase().collect()
            } else {
                first.to_lowercase().collect()
            };
            mapped + chars.as_str()
        }
        None => value,
    }
}

/// HTML-entity plus URL-unsafe escaping on write.
///
/// The two transformers compose, HTML first, so the entity ampersands come
/// out percent-escaped as well.
#[derive(Debug, Clone, Copy)]
pub struct EscapeContract;

impl Contract<String> for EscapeContract {
    fn apply(&self, _id: &FieldId, candidate: String) -> Result<String, Violation> {
        Ok(transform::escape_url_unsafe(&transform::escape_html(
            &candidate,
        )))
    }
}
