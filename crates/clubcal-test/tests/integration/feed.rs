//! Tests for `GET /calendar/{entity_type}/{entity_id}/feed`.
//!
//! Verifies status mapping, response headers, timezone resolution and that
//! every feed reads back through an independent iCalendar parser.

use salvo::http::StatusCode;

use super::helpers::*;

const EVENING: (&str, &str) = ("2026-06-13T23:00:00Z", "2026-06-14T02:00:00Z");

fn directory() -> FixtureDoc {
    FixtureDoc::new()
        .organization("nat", "National Office", "national", None, None)
        .organization("d-on", "Ontario District", "district", Some("Ontario"), None)
        .organization("d-bc", "Pacific District", "district", Some("British Columbia"), None)
        .organization("d-empty", "Prairie District", "district", Some("Manitoba"), None)
        .organization("c-tor", "Toronto Maple Club", "club", None, Some("d-on"))
        .organization("c-van", "Vancouver Harbour Club", "club", None, Some("d-bc"))
        .organization("c-ab", "Calgary Foothills Club", "club", Some("Alberta"), None)
        .organization("c-none", "Wandering Club", "club", None, None)
        .organization("z-west", "Western Zone", "zone", None, None)
        .organization("z-on", "Lakeshore Zone", "zone", None, Some("d-on"))
        .organization("c-zoned", "Port Credit Club", "club", None, Some("z-on"))
}

// ============================================================================
// Status mapping
// ============================================================================

#[test_log::test(tokio::test)]
async fn unknown_entity_type_is_400() {
    let service = create_test_service(&directory());

    let _response = TestRequest::get(&feed_path("foo", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_json_error()
        .assert_header("access-control-allow-origin", "*");
}

#[test_log::test(tokio::test)]
async fn entity_type_is_case_sensitive() {
    let service = create_test_service(&directory());

    let _response = TestRequest::get(&feed_path("Club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn unknown_entity_is_404() {
    let service = create_test_service(&directory());

    let _response = TestRequest::get(&feed_path("club", "c-missing"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_json_error();
}

#[test_log::test(tokio::test)]
async fn dangling_tag_is_500_without_detail() {
    let doc = directory().event(serde_json::json!({
        "id": "e-dangling",
        "title": "Orphan",
        "visibility": "public",
        "starts_at": EVENING.0,
        "ends_at": EVENING.1,
        "entity_kind": "club",
        "entity_id": "c-tor",
        "district_id": "d-gone",
    }));
    let service = create_test_service(&doc);

    let response = TestRequest::get(&feed_path("club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_json_error()
        .assert_body_not_contains("d-gone");
    assert!(response.body.contains("Internal server error"));
}

#[test_log::test(tokio::test)]
async fn reversed_event_period_is_500() {
    let doc = directory().public_event(
        "e-rev",
        "Backwards",
        ("club", "c-tor"),
        ("2026-06-13T23:00:00Z", "2026-06-13T22:00:00Z"),
    );
    let service = create_test_service(&doc);

    let _response = TestRequest::get(&feed_path("club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_json_error();
}

// ============================================================================
// Document shape
// ============================================================================

#[test_log::test(tokio::test)]
async fn empty_district_is_wrapper_only() {
    let service = create_test_service(&directory());

    let response = TestRequest::get(&feed_path("district", "d-empty"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/calendar; charset=utf-8")
        .assert_header(
            "content-disposition",
            "inline; filename=\"Prairie_District.ics\"",
        )
        .assert_header("cache-control", "public, max-age=60")
        .assert_header("access-control-allow-origin", "*")
        .assert_header("access-control-allow-methods", "GET")
        .assert_body_contains("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n")
        .assert_body_contains("X-WR-CALNAME:Prairie District\r\n")
        .assert_body_not_contains("X-WR-TIMEZONE")
        .assert_body_not_contains("BEGIN:VTIMEZONE");

    assert!(response.body.ends_with("END:VCALENDAR\r\n"));
    assert!(response.events().is_empty());
}

#[test_log::test(tokio::test)]
async fn district_feed_never_carries_timezone() {
    let doc = directory().public_event("e-d", "District convention", ("district", "d-on"), EVENING);
    let service = create_test_service(&doc);

    let response = TestRequest::get(&feed_path("district", "d-on"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("X-WR-TIMEZONE")
        .assert_body_contains("DTSTART:20260613T230000Z\r\n")
        .assert_body_contains("DTEND:20260614T020000Z\r\n");

    assert_eq!(response.events().len(), 1);
}

#[test_log::test(tokio::test)]
async fn national_feed_is_utc() {
    let doc = directory().public_event("e-n", "National assembly", ("national", "nat"), EVENING);
    let service = create_test_service(&doc);

    let _response = TestRequest::get(&feed_path("national", "nat"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("TZID")
        .assert_body_contains("DTSTART:20260613T230000Z\r\n");
}

#[test_log::test(tokio::test)]
async fn feed_excludes_private_and_child_events() {
    let doc = directory()
        .public_event("e-1", "Open house", ("club", "c-tor"), EVENING)
        .event(serde_json::json!({
            "id": "e-2",
            "title": "Board meeting",
            "visibility": "private",
            "starts_at": EVENING.0,
            "ends_at": EVENING.1,
            "entity_kind": "club",
            "entity_id": "c-tor",
        }))
        .public_event("e-3", "District picnic", ("district", "d-on"), EVENING);
    let service = create_test_service(&doc);

    let club = TestRequest::get(&feed_path("club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("Board meeting")
        .assert_body_not_contains("District picnic");
    assert_eq!(club.events().len(), 1);

    let district = TestRequest::get(&feed_path("district", "d-on"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("Open house");
    assert_eq!(district.events().len(), 1);
}

#[test_log::test(tokio::test)]
async fn events_round_trip_through_parser() {
    let doc = directory()
        .public_event("e-b", "Second; with punctuation, too", ("club", "c-tor"), (
            "2026-07-01T16:00:00Z",
            "2026-07-01T18:00:00Z",
        ))
        .public_event("e-a", "First", ("club", "c-tor"), EVENING);
    let service = create_test_service(&doc);

    let response = TestRequest::get(&feed_path("club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Second\\; with punctuation\\, too\r\n");

    let events = response.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].prop("UID"), Some("e-a@feeds.example.org"));
    assert_eq!(events[1].prop("UID"), Some("e-b@feeds.example.org"));
    assert_eq!(events[0].prop("DTSTART"), Some("20260613T190000"));
    assert_eq!(events[1].prop("DTSTART"), Some("20260701T120000"));
    assert!(events.iter().all(|e| e.prop("DTSTAMP").is_some()));
}

#[test_log::test(tokio::test)]
async fn long_descriptions_are_folded() {
    let description = "Bring a friend and a folding chair. ".repeat(8);
    let doc = directory().event(serde_json::json!({
        "id": "e-long",
        "title": "Concert in the park",
        "description": description,
        "location": "Queen's Park, Toronto",
        "url": "https://example.org/events/e-long",
        "visibility": "public",
        "starts_at": EVENING.0,
        "ends_at": EVENING.1,
        "entity_kind": "club",
        "entity_id": "c-tor",
    }));
    let service = create_test_service(&doc);

    let response = TestRequest::get(&feed_path("club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("LOCATION:Queen's Park\\, Toronto\r\n")
        .assert_body_contains("URL:https://example.org/events/e-long\r\n");

    for line in response.body.split("\r\n") {
        assert!(line.len() <= 75, "line exceeds 75 octets: {line:?}");
    }

    let events = response.events();
    let folded = events[0].prop("DESCRIPTION").expect("description");
    assert_eq!(folded.trim_end(), description.trim_end());
}

// ============================================================================
// Timezone resolution
// ============================================================================

#[test_log::test(tokio::test)]
async fn ontario_club_uses_toronto() {
    let doc = directory().public_event("e-1", "Open house", ("club", "c-tor"), EVENING);
    let service = create_test_service(&doc);

    let _response = TestRequest::get(&feed_path("club", "c-tor"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("X-WR-TIMEZONE:America/Toronto\r\n")
        .assert_body_contains("BEGIN:VTIMEZONE\r\nTZID:America/Toronto\r\n")
        .assert_body_contains("DTSTART;TZID=America/Toronto:20260613T190000\r\n")
        .assert_body_contains("DTEND;TZID=America/Toronto:20260613T220000\r\n");
}

#[test_log::test(tokio::test)]
async fn ancestor_province_beats_event_tags() {
    let doc = directory().event(serde_json::json!({
        "id": "e-1",
        "title": "Harbour cleanup",
        "visibility": "public",
        "starts_at": EVENING.0,
        "ends_at": EVENING.1,
        "entity_kind": "club",
        "entity_id": "c-van",
        "club_id": "c-ab",
    }));
    let service = create_test_service(&doc);

    let _response = TestRequest::get(&feed_path("club", "c-van"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("X-WR-TIMEZONE:America/Vancouver\r\n")
        .assert_body_contains("DTSTART;TZID=America/Vancouver:20260613T160000\r\n");
}

#[test_log::test(tokio::test)]
async fn club_under_zone_uses_district_province() {
    let doc = directory().event(serde_json::json!({
        "id": "e-1",
        "title": "Lakefront run",
        "visibility": "public",
        "starts_at": EVENING.0,
        "ends_at": EVENING.1,
        "entity_kind": "club",
        "entity_id": "c-zoned",
        "club_id": "c-ab",
    }));
    let service = create_test_service(&doc);

    let _response = TestRequest::get(&feed_path("club", "c-zoned"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("X-WR-TIMEZONE:America/Toronto\r\n")
        .assert_body_contains("DTSTART;TZID=America/Toronto:20260613T190000\r\n");
}

#[test_log::test(tokio::test)]
async fn zone_without_ancestor_uses_tagged_province() {
    let doc = directory().event(serde_json::json!({
        "id": "e-1",
        "title": "Zone rally",
        "visibility": "public",
        "starts_at": EVENING.0,
        "ends_at": EVENING.1,
        "entity_kind": "zone",
        "entity_id": "z-west",
        "club_id": "c-ab",
        "district_id": "d-bc",
    }));
    let service = create_test_service(&doc);

    let _response = TestRequest::get(&feed_path("zone", "z-west"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("X-WR-TIMEZONE:America/Edmonton\r\n")
        .assert_body_contains("DTSTART;TZID=America/Edmonton:20260613T170000\r\n");
}

#[test_log::test(tokio::test)]
async fn club_without_evidence_defaults_to_eastern() {
    let service = create_test_service(&directory());

    let response = TestRequest::get(&feed_path("club", "c-none"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("X-WR-TIMEZONE:America/Toronto\r\n")
        .assert_header(
            "content-disposition",
            "inline; filename=\"Wandering_Club.ics\"",
        );
    assert!(response.events().is_empty());
}
