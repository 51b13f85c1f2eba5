//! Tests for the `PostgreSQL` datastore.
//!
//! Runs against the database named by `TEST_DATABASE_URL` and is skipped
//! when it is unset. Rows are seeded under ids unique to the run and removed
//! afterwards.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use salvo::http::StatusCode;

use clubcal_test::component::db::db::connection::{DbPool, create_pool};
use clubcal_test::component::db::db::enums::Visibility;
use clubcal_test::component::db::db::migrate::run_migrations;
use clubcal_test::component::db::db::schema::{event, organization};
use clubcal_test::component::db::db::store::PgStore;
use clubcal_test::component::db::store::{Directory, EventStore};
use clubcal_test::component::types::EntityType;

use super::helpers::*;

fn database_url() -> Option<String> {
    let url = std::env::var("TEST_DATABASE_URL").ok();
    if url.is_none() {
        tracing::warn!("TEST_DATABASE_URL not set, skipping PostgreSQL test");
    }
    url
}

/// Ids of one seeded directory: district, zone under it, club under the zone.
struct Seed {
    district: String,
    zone: String,
    club: String,
    events: Vec<String>,
}

impl Seed {
    fn new() -> Self {
        let run = Utc::now().timestamp_micros();
        Self {
            district: format!("pg-d-{run}"),
            zone: format!("pg-z-{run}"),
            club: format!("pg-c-{run}"),
            events: vec![
                format!("pg-e1-{run}"),
                format!("pg-e2-{run}"),
                format!("pg-e3-{run}"),
            ],
        }
    }

    async fn insert(&self, pool: &DbPool) -> anyhow::Result<()> {
        let mut conn = pool.get().await?;

        diesel::insert_into(organization::table)
            .values(vec![
                (
                    organization::id.eq(&self.district),
                    organization::name.eq("Ontario District"),
                    organization::kind.eq("district"),
                    organization::province.eq(Some("Ontario")),
                    organization::parent_id.eq(None::<&str>),
                ),
                (
                    organization::id.eq(&self.zone),
                    organization::name.eq("Lakeshore Zone"),
                    organization::kind.eq("zone"),
                    organization::province.eq(None::<&str>),
                    organization::parent_id.eq(Some(self.district.as_str())),
                ),
                (
                    organization::id.eq(&self.club),
                    organization::name.eq("Port Credit Club"),
                    organization::kind.eq("club"),
                    organization::province.eq(None::<&str>),
                    organization::parent_id.eq(Some(self.zone.as_str())),
                ),
            ])
            .execute(&mut conn)
            .await?;

        let at = |day: u32, hour: u32| Utc.with_ymd_and_hms(2026, 6, day, hour, 0, 0).single();
        let rows = [
            (&self.events[0], 14, Visibility::Public),
            (&self.events[1], 13, Visibility::Public),
            (&self.events[2], 12, Visibility::Private),
        ];
        for (id, day, visibility) in rows {
            let starts_at = at(day, 23).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
            let ends_at = at(day + 1, 2).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
            diesel::insert_into(event::table)
                .values((
                    event::id.eq(id),
                    event::title.eq(format!("Event {id}")),
                    event::starts_at.eq(starts_at),
                    event::ends_at.eq(ends_at),
                    event::visibility.eq(visibility),
                    event::entity_kind.eq("club"),
                    event::entity_id.eq(&self.club),
                    event::district_id.eq(Some(self.district.as_str())),
                ))
                .execute(&mut conn)
                .await?;
        }

        Ok(())
    }

    async fn remove(&self, pool: &DbPool) -> anyhow::Result<()> {
        let mut conn = pool.get().await?;

        diesel::delete(event::table.filter(event::id.eq_any(&self.events)))
            .execute(&mut conn)
            .await?;
        diesel::delete(
            organization::table.filter(organization::id.eq_any([
                &self.club,
                &self.zone,
                &self.district,
            ])),
        )
        .execute(&mut conn)
        .await?;

        Ok(())
    }
}

async fn seeded_store(url: &str) -> (DbPool, Seed) {
    run_migrations(url).await.expect("migrations apply");
    let pool = create_pool(url, 2).await.expect("pool connects");
    let seed = Seed::new();
    seed.insert(&pool).await.expect("rows insert");
    (pool, seed)
}

#[test_log::test(tokio::test)]
async fn pg_store_walks_zone_to_district() {
    let Some(url) = database_url() else {
        return;
    };
    let (pool, seed) = seeded_store(&url).await;
    let store = PgStore::new(Arc::new(pool.clone()));

    let club = store.entity(EntityType::Club, &seed.club).await;
    let as_zone = store.entity(EntityType::Zone, &seed.club).await;
    let events = store.public_events(EntityType::Club, &seed.club).await;
    let district_events = store.public_events(EntityType::District, &seed.district).await;

    seed.remove(&pool).await.expect("rows delete");

    let club = club.expect("lookup succeeds").expect("club exists");
    let kinds: Vec<_> = club.ancestors().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntityType::Zone, EntityType::District]);
    assert_eq!(club.ancestor_provinces().next(), Some("Ontario"));

    assert!(as_zone.expect("lookup succeeds").is_none());

    let events = events.expect("events load");
    let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![seed.events[1].as_str(), seed.events[0].as_str()]);
    assert!(
        events
            .iter()
            .all(|e| e.tags.district.as_ref().is_some_and(|d| d.id == seed.district))
    );

    assert!(district_events.expect("events load").is_empty());
}

#[test_log::test(tokio::test)]
async fn pg_backed_feed_uses_district_timezone() {
    let Some(url) = database_url() else {
        return;
    };
    let (pool, seed) = seeded_store(&url).await;
    let service = create_service_with_store(Arc::new(PgStore::new(Arc::new(pool.clone()))));

    let response = TestRequest::get(&feed_path("club", &seed.club))
        .send(&service)
        .await;

    seed.remove(&pool).await.expect("rows delete");

    let response = response
        .assert_status(StatusCode::OK)
        .assert_body_contains("X-WR-TIMEZONE:America/Toronto\r\n")
        .assert_body_contains("DTSTART;TZID=America/Toronto:20260613T190000\r\n");
    assert_eq!(response.events().len(), 2);
}
