use clubcal_core::types::EntityType;

/// An organizational entity with its ancestor chain.
///
/// A club's ancestor is its zone or district, and a zone's is its district.
/// Districts and the national body carry no single province and usually no
/// ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub kind: EntityType,
    pub province: Option<String>,
    pub ancestor: Option<Box<Entity>>,
}

impl Entity {
    /// Iterates the ancestor chain, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Entity> {
        std::iter::successors(self.ancestor.as_deref(), |e| e.ancestor.as_deref())
    }

    /// Provinces recorded on the ancestor chain, nearest first. Ancestors
    /// without a province are skipped.
    pub fn ancestor_provinces(&self) -> impl Iterator<Item = &str> {
        self.ancestors().filter_map(|e| e.province.as_deref())
    }
}

/// An entity association tagged on an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityType,
    pub id: String,
    pub name: String,
    pub province: Option<String>,
}
