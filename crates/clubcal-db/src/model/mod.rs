//! Feed data model.
//!
//! `row` mirrors the stored records one-to-one; `entity` and `event` are the
//! resolved shapes the feed pipeline consumes. `assemble` converts between them.

pub mod assemble;
pub mod entity;
pub mod event;
pub mod row;

pub use entity::{Entity, EntityRef};
pub use event::{Event, EventTags, Visibility};
