//! Detail view model for a single photo.

use crate::application::services::FavoritesStore;
use crate::domain::entities::Photo;

/// Presents one photo and its favorite state.
#[derive(Debug, Clone)]
pub struct PhotoDetails {
    photo: Photo,
}

impl PhotoDetails {
    /// Wraps `photo` for display.
    #[must_use]
    pub const fn new(photo: Photo) -> Self {
        Self { photo }
    }

    /// The presented photo.
    #[must_use]
    pub const fn photo(&self) -> &Photo {
        &self.photo
    }

    /// Two-line caption with the creation date and the author.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Date: {}\nAuthor: {}",
            self.photo.created_at(),
            self.photo.author_name()
        )
    }

    /// Returns true if the photo is in `favorites`.
    #[must_use]
    pub fn is_favorite(&self, favorites: &FavoritesStore) -> bool {
        favorites.contains(&self.photo)
    }

    /// Likes or unlikes the photo and returns the state read back from the store.
    pub fn toggle_favorite(&self, favorites: &mut FavoritesStore) -> bool {
        favorites.toggle(&self.photo);
        self.is_favorite(favorites)
    }
}
