//! Province → IANA timezone table.
//!
//! Every Canadian province and territory maps to the zone covering the
//! bulk of its population.

use chrono_tz::Tz;

/// `(name, postal abbreviation, zone)` for each province and territory.
pub const PROVINCE_TIMEZONES: [(&str, &str, Tz); 13] = [
    ("Alberta", "AB", Tz::America__Edmonton),
    ("British Columbia", "BC", Tz::America__Vancouver),
    ("Manitoba", "MB", Tz::America__Winnipeg),
    ("New Brunswick", "NB", Tz::America__Moncton),
    ("Newfoundland and Labrador", "NL", Tz::America__St_Johns),
    ("Northwest Territories", "NT", Tz::America__Yellowknife),
    ("Nova Scotia", "NS", Tz::America__Halifax),
    ("Nunavut", "NU", Tz::America__Iqaluit),
    ("Ontario", "ON", Tz::America__Toronto),
    ("Prince Edward Island", "PE", Tz::America__Halifax),
    ("Quebec", "QC", Tz::America__Toronto),
    ("Saskatchewan", "SK", Tz::America__Regina),
    ("Yukon", "YT", Tz::America__Whitehorse),
];

/// Returns the timezone for a province name or postal abbreviation.
///
/// Matching ignores ASCII case and surrounding whitespace; `Québec` is
/// accepted as well as `Quebec`.
#[must_use]
pub fn timezone_for_province(province: &str) -> Option<Tz> {
    let needle = province.trim();
    if needle.is_empty() {
        return None;
    }
    let needle = if needle.eq_ignore_ascii_case("québec") { "Quebec" } else { needle };

    PROVINCE_TIMEZONES
        .iter()
        .find(|(name, code, _)| name.eq_ignore_ascii_case(needle) || code.eq_ignore_ascii_case(needle))
        .map(|&(_, _, tz)| tz)
}
