//! Named unit templates.

use game_core::UnitData;

/// Unit templates looked up by name.
///
/// Keeps authoring order so listings are stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitCatalog {
    units: Vec<UnitData>,
}

impl UnitCatalog {
    /// Builds a catalog, sanitizing every template. Later duplicates replace
    /// earlier ones in place.
    pub fn new(units: impl IntoIterator<Item = UnitData>) -> Self {
        let mut catalog = Self::default();
        for unit in units {
            catalog.insert(unit);
        }
        catalog
    }

    pub fn insert(&mut self, unit: UnitData) {
        let unit = unit.sanitized();
        match self.units.iter_mut().find(|existing| existing.name == unit.name) {
            Some(existing) => *existing = unit,
            None => self.units.push(unit),
        }
    }

    pub fn get(&self, name: &str) -> Option<&UnitData> {
        self.units.iter().find(|unit| unit.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitData> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
