//! Feed pipeline stages.
//!
//! Control flows entity → events → timezone → render; each stage is a
//! function of its inputs and nothing is retained between requests.

pub mod entity;
pub mod events;
pub mod pipeline;
pub mod province;
pub mod render;
pub mod timezone;

pub use pipeline::{FeedOptions, RenderedFeed, build_feed};
pub use render::{ResolvedFeed, render};
