//! Display order of the experiences and educations selected for a résumé.
//!
//! Positions are neither contiguous nor unique. Entries sort by position, and ties
//! keep insertion order through a monotonically increasing sequence number that an
//! update never changes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two ordered sections of a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderedSection {
    Experiences,
    Educations,
}

impl OrderedSection {
    pub fn table(&self) -> &'static str {
        match self {
            OrderedSection::Experiences => "resume_experiences",
            OrderedSection::Educations => "resume_educations",
        }
    }

    pub fn entity_column(&self) -> &'static str {
        match self {
            OrderedSection::Experiences => "experience_id",
            OrderedSection::Educations => "education_id",
        }
    }

    pub fn entity_table(&self) -> &'static str {
        match self {
            OrderedSection::Experiences => "experiences",
            OrderedSection::Educations => "educations",
        }
    }
}

impl fmt::Display for OrderedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderedSection::Experiences => write!(f, "experience"),
            OrderedSection::Educations => write!(f, "education"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderEntry {
    pub entity_id: Uuid,
    pub position: i32,
    pub seq: i64,
}

/// Association list of `entity → position`, kept sorted by `(position, seq)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderedEntries {
    entries: Vec<OrderEntry>,
}

impl OrderedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(mut rows: Vec<OrderEntry>) -> Self {
        rows.sort_by_key(|e| (e.position, e.seq));
        OrderedEntries { entries: rows }
    }

    /// Sets the position of `entity_id`, updating in place when it is already listed.
    pub fn upsert(&mut self, entity_id: Uuid, position: i32) {
        match self.entries.iter_mut().find(|e| e.entity_id == entity_id) {
            Some(entry) => entry.position = position,
            None => {
                let seq = self.entries.iter().map(|e| e.seq).max().map_or(0, |s| s + 1);
                self.entries.push(OrderEntry { entity_id, position, seq });
            }
        }
        self.entries.sort_by_key(|e| (e.position, e.seq));
    }

    pub fn remove(&mut self, entity_id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.entity_id != entity_id);
        self.entries.len() != before
    }

    pub fn position_of(&self, entity_id: Uuid) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.entity_id == entity_id)
            .map(|e| e.position)
    }

    pub fn entity_ids(&self) -> Vec<Uuid> {
        self.entries.iter().map(|e| e.entity_id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Orders `items` to follow `order`, dropping items that are not listed.
pub fn arrange<T, F>(order: &OrderedEntries, items: Vec<T>, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> Uuid,
{
    let mut slots: Vec<Option<T>> = Vec::with_capacity(order.len());
    slots.resize_with(order.len(), || None);

    for item in items {
        let id = id_of(&item);
        if let Some(index) = order.iter().position(|e| e.entity_id == id) {
            slots[index] = Some(item);
        }
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(entity_id: Uuid, position: i32, seq: i64) -> OrderEntry {
        OrderEntry { entity_id, position, seq }
    }

    #[test]
    fn sorts_by_position_then_insertion() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let order = OrderedEntries::from_rows(vec![entry(a, 5, 1), entry(b, 1, 3), entry(c, 5, 0)]);

        assert_eq!(order.entity_ids(), vec![b, c, a]);
    }

    #[test]
    fn upsert_updates_in_place_without_duplicating() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut order = OrderedEntries::new();
        order.upsert(a, 0);
        order.upsert(b, 1);
        order.upsert(a, 2);

        assert_eq!(order.len(), 2);
        assert_eq!(order.entity_ids(), vec![b, a]);
        assert_eq!(order.position_of(a), Some(2));
    }

    #[test]
    fn ties_keep_original_insertion_after_update() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut order = OrderedEntries::new();
        order.upsert(a, 3);
        order.upsert(b, 1);
        // `a` moves to tie with `b` but was inserted first
        order.upsert(a, 1);

        assert_eq!(order.entity_ids(), vec![a, b]);
    }

    #[test]
    fn gaps_are_preserved() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut order = OrderedEntries::new();
        order.upsert(a, 10);
        order.upsert(b, 40);

        let positions: Vec<i32> = order.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![10, 40]);
    }

    #[test]
    fn remove_reports_presence() {
        let a = Uuid::new_v4();
        let mut order = OrderedEntries::new();
        order.upsert(a, 0);

        assert!(order.remove(a));
        assert!(!order.remove(a));
        assert!(order.is_empty());
    }

    #[test]
    fn arrange_follows_order_and_drops_unlisted() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let order = OrderedEntries::from_rows(vec![entry(b, 0, 0), entry(a, 1, 1)]);

        let arranged = arrange(&order, vec![a, c, b], |id| *id);
        assert_eq!(arranged, vec![b, a]);
    }
}
