//! iCalendar rendering of a resolved feed.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use clubcal_db::model::Event;
use clubcal_rfc::rfc::ical::build::{serialize, vtimezone};
use clubcal_rfc::rfc::ical::core::{self as ical, Component, ICalendar, Property, names};

use super::pipeline::FeedOptions;
use crate::error::{ServiceError, ServiceResult};

/// Everything serialization needs, assembled within one request.
#[derive(Debug, Clone)]
pub struct ResolvedFeed {
    pub entity_name: String,
    /// `None` renders every time in UTC.
    pub timezone: Option<Tz>,
    pub events: Vec<Event>,
}

fn timestamp(instant: DateTime<Utc>, tz: Option<Tz>) -> ical::DateTime {
    match tz {
        Some(tz) => ical::DateTime::zoned(instant, tz),
        None => ical::DateTime::utc(instant),
    }
}

/// Local years spanned by the events, widened one year back so the first
/// event is preceded by an observance onset.
fn covered_years(tz: Tz, events: &[Event], generated_at: DateTime<Utc>) -> (i32, i32) {
    let years = events
        .iter()
        .flat_map(|e| [e.starts_at, e.ends_at])
        .map(|instant| instant.with_timezone(&tz).year());
    let (min, max) = years.fold((None, None), |(lo, hi): (Option<i32>, Option<i32>), y| {
        (Some(lo.map_or(y, |lo| lo.min(y))), Some(hi.map_or(y, |hi| hi.max(y))))
    });
    let fallback = generated_at.with_timezone(&tz).year();
    (min.unwrap_or(fallback) - 1, max.unwrap_or(fallback))
}

fn vevent(event: &Event, tz: Option<Tz>, options: &FeedOptions, generated_at: DateTime<Utc>) -> Component {
    let mut component = Component::event();
    component.add_property(Property::raw(
        names::UID,
        format!("{}@{}", event.id, options.uid_domain),
    ));
    component.add_property(Property::datetime(names::DTSTAMP, ical::DateTime::utc(generated_at)));
    component.add_property(Property::datetime(names::DTSTART, timestamp(event.starts_at, tz)));
    component.add_property(Property::datetime(names::DTEND, timestamp(event.ends_at, tz)));
    component.add_property(Property::text(names::SUMMARY, event.title.clone()));
    if let Some(description) = &event.description {
        component.add_property(Property::text(names::DESCRIPTION, description.clone()));
    }
    if let Some(location) = &event.location {
        component.add_property(Property::text(names::LOCATION, location.clone()));
    }
    if let Some(url) = &event.url {
        component.add_property(Property::uri(names::URL, url.clone()));
    }
    if let Some(created) = event.created_at {
        component.add_property(Property::datetime(names::CREATED, ical::DateTime::utc(created)));
    }
    if let Some(updated) = event.updated_at {
        component.add_property(Property::datetime(
            names::LAST_MODIFIED,
            ical::DateTime::utc(updated),
        ));
    }
    component
}

/// ## Summary
/// Serializes a resolved feed to an iCalendar document.
///
/// Events keep their input order. When a timezone is resolved a matching
/// `VTIMEZONE` precedes the events and every `DTSTART`/`DTEND` is local time
/// with a `TZID`; otherwise they are UTC.
///
/// ## Errors
/// Returns `SerializationError` if any event ends before it starts. Nothing
/// is emitted in that case.
pub fn render(feed: &ResolvedFeed, options: &FeedOptions, generated_at: DateTime<Utc>) -> ServiceResult<String> {
    if let Some(bad) = feed.events.iter().find(|e| !e.has_valid_period()) {
        return Err(ServiceError::SerializationError(format!(
            "event {} ends before it starts",
            bad.id
        )));
    }

    let mut calendar = ICalendar::new(options.product_id.clone());
    calendar.add_property(Property::raw(names::CALSCALE, "GREGORIAN"));
    calendar.add_property(Property::raw(names::METHOD, "PUBLISH"));
    calendar.add_property(Property::text(names::X_WR_CALNAME, feed.entity_name.clone()));

    if let Some(tz) = feed.timezone {
        calendar.add_property(Property::raw(names::X_WR_TIMEZONE, tz.name()));
        let (from_year, to_year) = covered_years(tz, &feed.events, generated_at);
        calendar.add_timezone(vtimezone(tz, from_year, to_year));
    }

    for event in &feed.events {
        calendar.add_event(vevent(event, feed.timezone, options, generated_at));
    }

    Ok(serialize(&calendar))
}
