use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of organizational entity a feed can be requested for.
///
/// Clubs and zones sit below a district; the national body sits above all
/// districts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Club,
    Zone,
    District,
    National,
}

impl EntityType {
    pub const ALL: [Self; 4] = [Self::Club, Self::Zone, Self::District, Self::National];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Club => "club",
            Self::Zone => "zone",
            Self::District => "district",
            Self::National => "national",
        }
    }

    /// Returns whether entities of this type may cover several provinces.
    ///
    /// Feeds for these types are always rendered in UTC.
    #[must_use]
    pub const fn spans_provinces(self) -> bool {
        matches!(self, Self::District | Self::National)
    }

    /// Returns whether an entity of this type is assumed to have a single
    /// physical location.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Club | Self::Zone)
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidEntityType(s.to_string()))
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
