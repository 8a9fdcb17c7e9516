//! IBAN country registry.
//!
//! Each country maps to its fixed IBAN layout: the two-letter country code,
//! two check characters, and country-specific segments of fixed lengths.
//! Layouts are expressed over the canonical form (whitespace stripped,
//! uppercased), so digit groups carry no separator allowances.
//!
//! Matching is a find, not a full-string match: the first run of the
//! canonical input that satisfies the layout is returned, and anything after
//! a complete match is discarded rather than rejected.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Countries with a registered IBAN layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum IbanCountry {
    Albania,
    Andorra,
    Austria,
    Azerbaijan,
    Bahrain,
    Belarus,
    Belgium,
    BosniaHerzegovina,
    Brazil,
    Bulgaria,
    CostaRica,
    Croatia,
    Cyprus,
    CzechRepublic,
    Denmark,
    DominicanRepublic,
    Estonia,
    FaroeIslands,
    Finland,
    France,
    Georgia,
    Germany,
    Gibraltar,
    Greece,
    Greenland,
    Guatemala,
    HolySee,
    Hungary,
    Iceland,
    Ireland,
    Israel,
    Italy,
    Jordan,
    Kazakhstan,
    Kosovo,
    Kuwait,
    Latvia,
    Lebanon,
    Liechtenstein,
    Lithuania,
    Luxembourg,
    Malta,
    Mauritania,
    Mauritius,
    Moldova,
    Monaco,
    Montenegro,
    Netherlands,
    NorthMacedonia,
    Norway,
    Pakistan,
    Palestine,
    Poland,
    Portugal,
    Qatar,
    Romania,
    SanMarino,
    SaudiArabia,
    Serbia,
    SlovakRepublic,
    Slovenia,
    Spain,
    Sweden,
    Switzerland,
    TimorLeste,
    Tunisia,
    Turkey,
    Ukraine,
    UnitedArabEmirates,
    UnitedKingdom,
    VirginIslandsBritish,
}

/// Layout rule of one country over the canonical string.
fn layout(country: IbanCountry) -> &'static str {
    match country {
        IbanCountry::Albania => r"AL[0-9A-Z]{2}[0-9]{8}[0-9A-Z]{16}",
        IbanCountry::Andorra => r"AD[0-9A-Z]{2}[0-9]{8}[0-9A-Z]{12}",
        IbanCountry::Austria => r"AT[0-9A-Z]{2}[0-9]{16}",
        IbanCountry::Azerbaijan => r"AZ[0-9A-Z]{2}[0-9A-Z]{4}[0-9]{20}",
        IbanCountry::Bahrain => r"BH[0-9A-Z]{2}[A-Z]{4}[0-9A-Z]{14}",
        IbanCountry::Belarus => r"BY[0-9A-Z]{2}[0-9A-Z]{4}[0-9]{20}",
        IbanCountry::Belgium => r"BE[0-9A-Z]{2}[0-9]{12}",
        IbanCountry::BosniaHerzegovina => r"BA[0-9A-Z]{2}[0-9]{16}",
        IbanCountry::Brazil => r"BR[0-9A-Z]{2}[0-9]{23}[A-Z][0-9A-Z]",
        IbanCountry::Bulgaria => r"BG[0-9A-Z]{2}[A-Z]{4}[0-9]{6}[0-9A-Z]{8}",
        IbanCountry::CostaRica => r"CR[0-9A-Z]{2}[0-9]{18}",
        IbanCountry::Croatia => r"HR[0-9A-Z]{2}[0-9]{17}",
        IbanCountry::Cyprus => r"CY[0-9A-Z]{2}[0-9]{8}[0-9A-Z]{16}",
        IbanCountry::CzechRepublic => r"CZ[0-9A-Z]{2}[0-9]{20}",
        IbanCountry::Denmark => r"DK[0-9A-Z]{2}[0-9]{14}",
        IbanCountry::DominicanRepublic => r"DO[0-9A-Z]{2}[A-Z]{4}[0-9]{20}",
        IbanCountry::Estonia => r"EE[0-9A-Z]{2}[0-9]{16}",
        IbanCountry::FaroeIslands => r"FO[0-9A-Z]{2}[0-9]{14}",
        IbanCountry::Finland => r"FI[0-9A-Z]{2}[0-9]{14}",
        IbanCountry::France => r"FR[0-9A-Z]{2}[0-9]{10}[0-9A-Z]{11}[0-9]{2}",
        IbanCountry::Georgia => r"GE[0-9A-Z]{2}[0-9A-Z]{2}[0-9]{16}",
        IbanCountry::Germany => r"DE[0-9A-Z]{2}[0-9]{18}",
        IbanCountry::Gibraltar => r"GI[0-9A-Z]{2}[A-Z]{4}[0-9A-Z]{15}",
        IbanCountry::Greece => r"GR[0-9A-Z]{2}[0-9]{7}[0-9A-Z]{16}",
        IbanCountry::Greenland => r"GL[0-9A-Z]{2}[0-9]{14}",
        IbanCountry::Guatemala => r"GT[0-9A-Z]{2}[0-9A-Z]{24}",
        IbanCountry::HolySee => r"VA[0-9A-Z]{2}[0-9]{18}",
        IbanCountry::Hungary => r"HU[0-9A-Z]{2}[0-9]{24}",
        IbanCountry::Iceland => r"IS[0-9A-Z]{2}[0-9]{22}",
        IbanCountry::Ireland => r"IE[0-9A-Z]{2}[0-9A-Z]{4}[0-9]{14}",
        IbanCountry::Israel => r"IL[0-9A-Z]{2}[0-9]{19}",
        IbanCountry::Italy => r"IT[0-9A-Z]{2}[A-Z][0-9]{10}[0-9A-Z]{12}",
        IbanCountry::Jordan => r"JO[0-9A-Z]{2}[A-Z]{4}[0-9]{22}",
        IbanCountry::Kazakhstan => r"KZ[0-9A-Z]{2}[0-9]{13}[0-9A-Z]{13}",
        IbanCountry::Kosovo => r"XK[0-9A-Z]{2}[0-9]{16}",
        IbanCountry::Kuwait => r"KW[0-9A-Z]{2}[A-Z]{4}[0-9A-Z]{22}",
        IbanCountry::Latvia => r"LV[0-9A-Z]{2}[A-Z]{4}[0-9A-Z]{13}",
        IbanCountry::Lebanon => r"LB[0-9A-Z]{2}[0-9]{4}[0-9A-Z]{20}",
        IbanCountry::Liechtenstein => r"LI[0-9A-Z]{2}[0-9]{5}[0-9A-Z]{12}",
        IbanCountry::Lithuania => r"LT[0-9A-Z]{2}[0-9]{16}",
        IbanCountry::Luxembourg => r"LU[0-9A-Z]{2}[0-9]{3}[0-9A-Z]{13}",
        IbanCountry::Malta => r"MT[0-9A-Z]{2}[A-Z]{4}[0-9]{5}[0-9A-Z]{18}",
        IbanCountry::Mauritania => r"MR[0-9A-Z]{2}[0-9]{23}",
        IbanCountry::Mauritius => r"MU[0-9A-Z]{2}[A-Z]{4}[0-9]{19}[A-Z]{3}",
        IbanCountry::Moldova => r"MD[0-9A-Z]{2}[0-9A-Z]{20}",
        IbanCountry::Monaco => r"MC[0-9A-Z]{2}[0-9]{10}[0-9A-Z]{11}[0-9]{2}",
        IbanCountry::Montenegro => r"ME[0-9A-Z]{2}[0-9]{18}",
        IbanCountry::Netherlands => r"NL[0-9A-Z]{2}[A-Z]{4}[0-9]{10}",
        IbanCountry::NorthMacedonia => r"MK[0-9A-Z]{2}[0-9]{3}[0-9A-Z]{10}[0-9]{2}",
        IbanCountry::Norway => r"NO[0-9A-Z]{2}[0-9]{11}",
        IbanCountry::Pakistan => r"PK[0-9A-Z]{2}[0-9A-Z]{4}[0-9]{16}",
        IbanCountry::Palestine => r"PS[0-9A-Z]{2}[0-9A-Z]{4}[0-9]{21}",
        IbanCountry::Poland => r"PL[0-9A-Z]{2}[0-9]{24}",
        IbanCountry::Portugal => r"PT[0-9A-Z]{2}[0-9]{21}",
        IbanCountry::Qatar => r"QA[0-9A-Z]{2}[A-Z]{4}[0-9A-Z]{21}",
        IbanCountry::Romania => r"RO[0-9A-Z]{2}[A-Z]{4}[0-9A-Z]{16}",
        IbanCountry::SanMarino => r"SM[0-9A-Z]{2}[A-Z][0-9]{10}[0-9A-Z]{12}",
        IbanCountry::SaudiArabia => r"SA[0-9A-Z]{2}[0-9]{2}[0-9A-Z]{18}",
        IbanCountry::Serbia => r"RS[0-9A-Z]{2}[0-9]{18}",
        IbanCountry::SlovakRepublic => r"SK[0-9A-Z]{2}[0-9]{20}",
        IbanCountry::Slovenia => r"SI[0-9A-Z]{2}[0-9]{15}",
        IbanCountry::Spain => r"ES[0-9A-Z]{2}[0-9]{20}",
        IbanCountry::Sweden => r"SE[0-9A-Z]{2}[0-9]{20}",
        IbanCountry::Switzerland => r"CH[0-9A-Z]{2}[0-9]{5}[0-9A-Z]{12}",
        IbanCountry::TimorLeste => r"TL[0-9A-Z]{2}[0-9]{19}",
        IbanCountry::Tunisia => r"TN[0-9A-Z]{2}[0-9]{20}",
        IbanCountry::Turkey => r"TR[0-9A-Z]{2}[0-9]{5}[0-9A-Z]{17}",
        IbanCountry::Ukraine => r"UA[0-9]{27}",
        IbanCountry::UnitedArabEmirates => r"AE[0-9A-Z]{2}[0-9]{19}",
        IbanCountry::UnitedKingdom => r"GB[0-9A-Z]{2}[A-Z]{4}[0-9]{14}",
        IbanCountry::VirginIslandsBritish => r"VG[0-9A-Z]{2}[0-9A-Z]{4}[0-9]{16}",
    }
}

// Built from every enum variant, so lookups cannot miss.
static PATTERNS: LazyLock<HashMap<IbanCountry, Regex>> = LazyLock::new(|| {
    IbanCountry::iter()
        .map(|country| {
            let pattern = Regex::new(layout(country)).expect("IBAN layout compiles");
            (country, pattern)
        })
        .collect()
});

/// Layout matcher of one country.
pub fn country_pattern(country: IbanCountry) -> &'static Regex {
    &PATTERNS[&country]
}

/// Strip all whitespace and uppercase, the canonical form layouts match.
pub fn canonicalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<String>()
        .to_ascii_uppercase()
}

/// First run of the canonicalized input matching the country layout.
///
/// Characters after a complete match are dropped, not rejected.
pub fn find_iban(country: IbanCountry, input: &str) -> Option<String> {
    let canonical = canonicalize(input);
    country_pattern(country)
        .find(&canonical)
        .map(|found| found.as_str().to_string())
}
