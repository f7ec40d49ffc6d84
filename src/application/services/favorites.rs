//! In-memory favorites.

use tracing::debug;

use crate::domain::entities::Photo;

/// Photos the user liked during this process, in the order they were added.
///
/// Nothing is persisted. Mutation takes `&mut self`; share the store behind
/// a lock if more than one task needs to change it.
#[derive(Debug, Default, Clone)]
pub struct FavoritesStore {
    favorites: Vec<Photo>,
}

impl FavoritesStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            favorites: Vec::new(),
        }
    }

    /// Adds `photo` unless a photo with the same id is already present.
    /// Returns true if it was inserted.
    pub fn add(&mut self, photo: Photo) -> bool {
        if self.contains(&photo) {
            return false;
        }
        debug!(photo_id = %photo.id(), "Added favorite");
        self.favorites.push(photo);
        true
    }

    /// Removes every entry sharing `photo`'s id. Returns true if any was removed.
    pub fn remove(&mut self, photo: &Photo) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|p| !p.same_id(photo));
        let removed = self.favorites.len() != before;
        if removed {
            debug!(photo_id = %photo.id(), "Removed favorite");
        }
        removed
    }

    /// Returns true if a photo with the same id is stored.
    #[must_use]
    pub fn contains(&self, photo: &Photo) -> bool {
        self.favorites.iter().any(|p| p.same_id(photo))
    }

    /// Flips the favorite state of `photo` and returns the new state.
    pub fn toggle(&mut self, photo: &Photo) -> bool {
        if self.contains(photo) {
            self.remove(photo);
            false
        } else {
            self.add(photo.clone());
            true
        }
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.favorites
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Returns true if nothing is liked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo::new(id, "2025-02-05", "Author", format!("https://img/{id}.jpg"))
    }

    #[test]
    fn test_add_then_contains() {
        let mut store = FavoritesStore::new();
        assert!(store.add(photo("a")));
        assert!(store.contains(&photo("a")));
        assert!(!store.contains(&photo("b")));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = FavoritesStore::new();
        store.add(photo("a"));
        assert!(!store.add(photo("a")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_matches_on_id_only() {
        let mut store = FavoritesStore::new();
        store.add(Photo::new("a", "t1", "Alice", "https://img/1.jpg"));
        assert!(!store.add(Photo::new("a", "t2", "Bob", "https://img/2.jpg")));
        assert_eq!(store.photos()[0].author_name(), "Alice");
    }

    #[test]
    fn test_remove_after_add() {
        let mut store = FavoritesStore::new();
        store.add(photo("a"));
        assert!(store.remove(&photo("a")));
        assert!(!store.contains(&photo("a")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = FavoritesStore::new();
        store.add(photo("a"));
        assert!(!store.remove(&photo("b")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = FavoritesStore::new();
        for id in ["c", "a", "b"] {
            store.add(photo(id));
        }
        store.remove(&photo("a"));
        store.add(photo("a"));

        let ids: Vec<_> = store.photos().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut store = FavoritesStore::new();
        assert!(store.toggle(&photo("a")));
        assert!(store.contains(&photo("a")));
        assert!(!store.toggle(&photo("a")));
        assert!(!store.contains(&photo("a")));
    }
}
