//! Append-only collections with counter-based ids
//!
//! Ids come from a monotonic per-collection counter rather than the current
//! length. With no deletion path the two agree (`id == len + 1` at insert), but
//! the counter keeps ids unique should removal ever be introduced.

/// Records that carry a collection-assigned id
pub trait Record {
    fn id(&self) -> u32;
}

/// Ordered, insertion-preserving sequence of one entity type
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a collection from seed records, assigning ids 1..=n in order
    pub fn seeded<I, F>(seeds: I, mut build: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(u32, I::Item) -> T,
    {
        let mut collection = Self::new();
        for seed in seeds {
            collection.insert_with(|id| build(id, seed));
        }
        collection
    }

    /// Allocate the next id, build the record with it, and append
    pub fn insert_with(&mut self, build: impl FnOnce(u32) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(build(id));
        // just pushed, so last() is present
        &self.items[self.items.len() - 1]
    }

    /// Id the next insert will receive
    #[cfg(test)]
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Record for super::models::Alert {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for super::models::Product {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for super::models::Message {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for super::models::NewsItem {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn ids_follow_insertion_order_without_gaps() {
        let mut items = Collection::new();
        let labels = ["a", "b", "c", "d", "e"];
        for label in labels {
            items.insert_with(|id| Item { id, label });
        }

        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let order: Vec<&str> = items.iter().map(|i| i.label).collect();
        assert_eq!(order, labels);
    }

    #[test]
    fn counter_matches_length_plus_one() {
        let mut items: Collection<Item> = Collection::new();
        for n in 0..10 {
            assert_eq!(items.peek_next_id() as usize, items.len() + 1);
            let inserted = items.insert_with(|id| Item { id, label: "x" });
            assert_eq!(inserted.id, n + 1);
        }
    }

    #[test]
    fn seeded_collection_continues_numbering() {
        let mut items = Collection::seeded(["seed-1", "seed-2"], |id, label| Item { id, label });
        assert_eq!(items.len(), 2);

        let added = items.insert_with(|id| Item { id, label: "new" }).clone();
        assert_eq!(added.id, 3);
        assert_eq!(items.get(1).map(|i| i.label), Some("seed-1"));
        assert_eq!(items.get(4), None);
    }
}
