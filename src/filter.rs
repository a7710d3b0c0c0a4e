use crate::catalog::Game;

/// Search box text plus the selected category ("" means all categories).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: String,
    pub category: String,
}

impl Filter {
    pub fn apply(&self, games: &[Game]) -> Vec<Game> {
        filter(games, &self.query, &self.category)
    }

    /// Steps "" -> first category -> ... -> last category -> "".
    pub fn cycle_category(&mut self, categories: &[String]) {
        let next = match categories.iter().position(|c| *c == self.category) {
            _ if self.category.is_empty() => categories.first(),
            Some(idx) => categories.get(idx + 1),
            None => None,
        };
        self.category = next.cloned().unwrap_or_default();
    }

    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            "All Categories"
        } else {
            &self.category
        }
    }
}

/// Case-insensitive substring match on title or description, narrowed to
/// `category` when one is given. A blank query matches everything; any other
/// query is matched as typed, padding included. Keeps input order.
pub fn filter(games: &[Game], query: &str, category: &str) -> Vec<Game> {
    let match_all = query.trim().is_empty();
    let needle = query.to_lowercase();
    games
        .iter()
        .filter(|g| category.is_empty() || g.category == category)
        .filter(|g| {
            match_all
                || g.title.to_lowercase().contains(&needle)
                || g.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
