//! Credit-card issuer registry.
//!
//! Each issuer maps to its historical public numbering rule: an anchored
//! prefix/length pattern over the canonical digit string. Candidates are
//! canonicalized first, so separators and whitespace never reach a pattern.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Issuers with a recognized numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CardIssuer {
    AmericanExpress,
    MasterCard,
    Visa,
    Discover,
    Maestro,
    Jcb,
    DinersClub,
}

static AMERICAN_EXPRESS: LazyLock<Regex> = LazyLock::new(|| compile(r"^3[47][0-9]{13}$"));
static MASTER_CARD: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^5[1-5][0-9]{14}$|^2(?:2(?:2[1-9]|[3-9][0-9])|[3-6][0-9][0-9]|7(?:[01][0-9]|20))[0-9]{12}$")
});
static VISA: LazyLock<Regex> = LazyLock::new(|| compile(r"^4[0-9]{12}(?:[0-9]{3})?$"));
static DISCOVER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:65[4-9][0-9]{13}|64[4-9][0-9]{13}|6011[0-9]{12}|622(?:12[6-9]|1[3-9][0-9]|[2-8][0-9][0-9]|9[01][0-9]|92[0-5])[0-9]{10})$",
    )
});
static MAESTRO: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:5018|5081|5044|5020|5038|603845|6304|6759|676[1-3]|6799|6220|504834|504817|504645)[0-9]{8,15}$",
    )
});
static JCB: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:2131|1800|35[0-9]{3})[0-9]{11}$"));
static DINERS_CLUB: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$"));

fn compile(rule: &str) -> Regex {
    Regex::new(rule).expect("issuer pattern compiles")
}

/// Numbering rule of one issuer.
pub fn issuer_pattern(issuer: CardIssuer) -> &'static Regex {
    match issuer {
        CardIssuer::AmericanExpress => &AMERICAN_EXPRESS,
        CardIssuer::MasterCard => &MASTER_CARD,
        CardIssuer::Visa => &VISA,
        CardIssuer::Discover => &DISCOVER,
        CardIssuer::Maestro => &MAESTRO,
        CardIssuer::Jcb => &JCB,
        CardIssuer::DinersClub => &DINERS_CLUB,
    }
}

/// Strip every non-digit character, keeping the canonical digit string.
pub fn canonicalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// First issuer in the given set whose rule matches the canonical digits.
pub fn match_digits<I>(digits: &str, issuers: I) -> Option<CardIssuer>
where
    I: IntoIterator<Item = CardIssuer>,
{
    issuers
        .into_iter()
        .find(|issuer| issuer_pattern(*issuer).is_match(digits))
}

/// First registry issuer whose rule matches the canonical digits.
pub fn match_any(digits: &str) -> Option<CardIssuer> {
    match_digits(digits, CardIssuer::iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_keeps_digits_only() {
        assert_eq!(canonicalize("5105-1051 0510.5100"), "5105105105105100");
        assert_eq!(canonicalize("no digits"), "");
    }
}
