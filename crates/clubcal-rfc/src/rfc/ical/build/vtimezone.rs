//! `VTIMEZONE` synthesis from the IANA timezone database (RFC 5545 §3.6.5).

use chrono::{NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

use crate::rfc::ical::core::{Component, ComponentKind, DateTime, Property, UtcOffset, names};

/// Offset in effect at an instant: total UTC offset, DST flag, abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Observed {
    offset: UtcOffset,
    daylight: bool,
    name: String,
}

fn observe(tz: Tz, utc: &NaiveDateTime) -> Observed {
    let offset = tz.offset_from_utc_datetime(utc);
    Observed {
        offset: UtcOffset::from_seconds(offset.fix().local_minus_utc()),
        daylight: offset.dst_offset() != TimeDelta::zero(),
        name: offset.to_string(),
    }
}

fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

/// Narrows a transition known to lie in `(lo, hi]` down to the second.
fn transition_instant(tz: Tz, mut lo: NaiveDateTime, mut hi: NaiveDateTime) -> NaiveDateTime {
    let before = observe(tz, &lo);
    while (hi - lo).num_seconds() > 1 {
        let mid = lo + TimeDelta::seconds((hi - lo).num_seconds() / 2);
        if observe(tz, &mid) == before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}

fn observance(kind: ComponentKind, onset: NaiveDateTime, from: &Observed, to: &Observed) -> Component {
    let mut component = Component::new(kind);
    component.add_property(Property::datetime(names::DTSTART, DateTime::floating(onset)));
    component.add_property(Property::utc_offset(names::TZOFFSETFROM, from.offset));
    component.add_property(Property::utc_offset(names::TZOFFSETTO, to.offset));
    component.add_property(Property::text(names::TZNAME, to.name.clone()));
    component
}

/// Builds a `VTIMEZONE` for `tz` covering the years `from_year..=to_year`.
///
/// One `STANDARD` or `DAYLIGHT` observance is emitted per offset transition
/// found in the range, each with `DTSTART` in the local time preceding the
/// transition. A zone without transitions in the range gets a single
/// `STANDARD` observance anchored at 1970.
#[must_use]
pub fn vtimezone(tz: Tz, from_year: i32, to_year: i32) -> Component {
    let mut component = Component::timezone();
    component.add_property(Property::raw(names::TZID, tz.name()));

    let (Some(start), Some(end)) = (year_start(from_year), year_start(to_year.max(from_year) + 1))
    else {
        tracing::warn!(tz = tz.name(), from_year, to_year, "Year range out of bounds");
        return component;
    };

    let mut cursor = start;
    let mut current = observe(tz, &cursor);
    let initial = current.clone();

    while cursor < end {
        let next = cursor + TimeDelta::days(1);
        let observed = observe(tz, &next);
        if observed != current {
            let at = transition_instant(tz, cursor, next);
            let after = observe(tz, &at);
            let onset = at + TimeDelta::seconds(i64::from(current.offset.as_seconds()));
            let kind = if after.daylight {
                ComponentKind::Daylight
            } else {
                ComponentKind::Standard
            };
            component.add_child(observance(kind, onset, &current, &after));
            current = after;

            // A second transition inside the same day is picked up next step.
            if current != observed {
                cursor = at;
                continue;
            }
        }
        cursor = next;
    }

    if component.children.is_empty() {
        let epoch = year_start(1970).unwrap_or(start);
        component.add_child(observance(ComponentKind::Standard, epoch, &initial, &initial));
    }

    tracing::trace!(
        tz = tz.name(),
        observances = component.children.len(),
        "Synthesized VTIMEZONE"
    );
    component
}
