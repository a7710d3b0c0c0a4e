use crate::catalog::{Catalog, Game};
use crate::storage::Storage;

pub const FAVORITES_KEY: &str = "favorites";
pub const RECENTLY_PLAYED_KEY: &str = "recentlyPlayed";
pub const COOKIE_NOTICE_KEY: &str = "cookieNotice";
const COOKIE_DISMISSED: &str = "dismissed";

pub const MAX_RECENT: usize = 20;

/// Favorites and play history, mirrored into storage after every change.
pub struct Library {
    storage: Box<dyn Storage>,
    favorites: Vec<String>,
    recent: Vec<String>,
}

impl Library {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let favorites = read_ids(storage.as_ref(), FAVORITES_KEY);
        let mut recent = read_ids(storage.as_ref(), RECENTLY_PLAYED_KEY);
        recent.truncate(MAX_RECENT);
        Self {
            storage,
            favorites,
            recent,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn toggle_favorite(&mut self, id: &str) {
        if self.is_favorite(id) {
            self.favorites.retain(|f| f != id);
            log::debug!("Removed {id} from favorites");
        } else {
            self.favorites.push(id.to_string());
            log::debug!("Added {id} to favorites");
        }
        write_ids(self.storage.as_mut(), FAVORITES_KEY, &self.favorites);
    }

    #[cfg(test)]
    pub fn favorite_ids(&self) -> &[String] {
        &self.favorites
    }

    /// Favorites in catalog order, at most `limit`.
    pub fn favorite_games(&self, catalog: &Catalog, limit: usize) -> Vec<Game> {
        catalog
            .games()
            .iter()
            .filter(|g| self.is_favorite(&g.id))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Moves `id` to the front of the history, capped at [`MAX_RECENT`].
    pub fn record_play(&mut self, id: &str) {
        self.recent.retain(|r| r != id);
        self.recent.insert(0, id.to_string());
        self.recent.truncate(MAX_RECENT);
        write_ids(self.storage.as_mut(), RECENTLY_PLAYED_KEY, &self.recent);
        log::info!("Recorded play of {id}");
    }

    #[cfg(test)]
    pub fn recent_ids(&self) -> &[String] {
        &self.recent
    }

    /// History resolved against the catalog, most recent first, at most
    /// `limit`. Games missing from the catalog are skipped.
    pub fn recent_games(&self, catalog: &Catalog, limit: usize) -> Vec<Game> {
        let mut games = catalog.resolve(&self.recent);
        games.truncate(limit);
        games
    }

    pub fn cookie_notice_visible(&self) -> bool {
        self.storage.get_item(COOKIE_NOTICE_KEY).as_deref() != Some(COOKIE_DISMISSED)
    }

    pub fn dismiss_cookie_notice(&mut self) {
        self.storage.set_item(COOKIE_NOTICE_KEY, COOKIE_DISMISSED);
    }
}

fn read_ids(storage: &dyn Storage, key: &str) -> Vec<String> {
    let Some(raw) = storage.get_item(key) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(mut ids) => {
            let mut seen = std::collections::HashSet::new();
            ids.retain(|id| seen.insert(id.clone()));
            ids
        }
        Err(e) => {
            log::warn!("Discarding malformed {key}: {e}");
            Vec::new()
        }
    }
}

fn write_ids(storage: &mut dyn Storage, key: &str, ids: &[String]) {
    match serde_json::to_string(ids) {
        Ok(raw) => storage.set_item(key, &raw),
        Err(e) => log::error!("Failed to encode {key}: {e}"),
    }
}
