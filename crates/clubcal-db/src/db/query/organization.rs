//! Query functions for organizations.

use clubcal_core::types::EntityType;
use diesel::dsl::AsSelect;
use diesel::pg::Pg;
use diesel::prelude::*;

use crate::db::schema::organization;
use crate::model::row::OrganizationRow;

type BoxedQuery<'a, T> = organization::BoxedQuery<'a, Pg, AsSelect<T, Pg>>;

/// ## Summary
/// Returns a query to select all organizations.
#[must_use]
pub fn all<'a>() -> BoxedQuery<'a, OrganizationRow> {
    organization::table
        .select(OrganizationRow::as_select())
        .into_boxed()
}

/// ## Summary
/// Returns a query to find an organization by id.
#[must_use]
pub fn by_id(id: &str) -> BoxedQuery<'_, OrganizationRow> {
    all().filter(organization::id.eq(id))
}

/// ## Summary
/// Returns a query to find an organization by kind and id.
#[must_use]
pub fn by_kind_and_id(kind: EntityType, id: &str) -> BoxedQuery<'_, OrganizationRow> {
    by_id(id).filter(organization::kind.eq(kind.as_str()))
}

/// ## Summary
/// Returns a query to find every organization in `ids`.
#[must_use]
pub fn by_ids(ids: Vec<String>) -> BoxedQuery<'static, OrganizationRow> {
    all().filter(organization::id.eq_any(ids))
}
