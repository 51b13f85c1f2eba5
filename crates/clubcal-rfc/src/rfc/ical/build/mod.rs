//! iCalendar serialization (RFC 5545).
//!
//! - `escape`: TEXT and parameter value escaping
//! - `fold`: content line folding at 75 octets
//! - `serializer`: document serialization, children in insertion order
//! - `vtimezone`: `VTIMEZONE` synthesis from the tz database

mod escape;
mod fold;
mod serializer;
mod vtimezone;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{serialize, serialize_component, serialize_property};
pub use vtimezone::vtimezone;
