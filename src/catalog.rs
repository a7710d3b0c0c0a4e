use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One embeddable game as listed in `games.json`.
///
/// Every field defaults to an empty string so a record with missing keys
/// still loads and simply renders blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub tags: String,
    pub thumb: String,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogSource::Url(raw.to_string())
        } else {
            CatalogSource::File(PathBuf::from(raw))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(path) => path.to_string_lossy().into_owned(),
            CatalogSource::Url(url) => url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Reads the whole catalog once. Any failure is logged and degrades to an
    /// empty catalog.
    pub fn load(source: &CatalogSource) -> Self {
        match Self::try_load(source) {
            Ok(catalog) if catalog.is_empty() => {
                log::warn!("Catalog at {} lists no games", source.describe());
                catalog
            }
            Ok(catalog) => {
                log::info!(
                    "Loaded {} games from {}",
                    catalog.len(),
                    source.describe()
                );
                catalog
            }
            Err(e) => {
                log::warn!("Cannot load catalog from {}: {}", source.describe(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(source: &CatalogSource) -> Result<Self, CatalogError> {
        let body = match source {
            CatalogSource::File(path) => fs::read_to_string(path)?,
            CatalogSource::Url(url) => reqwest::blocking::get(url)?
                .error_for_status()?
                .text()?,
        };
        Self::from_json(&body)
    }

    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let games: Vec<Game> = serde_json::from_str(body)?;
        Ok(Self::new(games))
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Unique, non-empty categories in ascending order.
    pub fn categories(&self) -> Vec<String> {
        self.games
            .iter()
            .filter(|g| !g.category.is_empty())
            .map(|g| g.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Maps ids to records in the order given; ids the catalog no longer
    /// knows are skipped.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Game> {
        ids.iter()
            .filter_map(|id| self.find(id.as_ref()).cloned())
            .collect()
    }

    /// A fresh random pick of `count` games.
    pub fn popular<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Game> {
        let mut shuffled = self.games.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        shuffled
    }
}

#[cfg(test)]
pub(crate) fn game(id: &str, title: &str, description: &str, category: &str) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: format!("https://games.example/{id}"),
        category: category.to_string(),
        tags: String::new(),
        thumb: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            game("a", "Tetris", "Stack falling blocks", "Puzzle"),
            game("b", "Snake", "Eat and grow", "Arcade"),
            game("c", "Sokoban", "Push crates", "Puzzle"),
            game("d", "Untagged", "", ""),
        ])
    }

    #[test]
    fn parses_source_kind() {
        assert_eq!(
            CatalogSource::parse("https://cdn.example/games.json"),
            CatalogSource::Url("https://cdn.example/games.json".into())
        );
        assert_eq!(
            CatalogSource::parse("public/games.json"),
            CatalogSource::File(PathBuf::from("public/games.json"))
        );
    }

    #[test]
    fn missing_fields_become_blank() {
        let catalog = Catalog::from_json(r#"[{"id":"x","title":"Only title"}]"#).unwrap();
        let g = catalog.find("x").unwrap();
        assert_eq!(g.title, "Only title");
        assert_eq!(g.description, "");
        assert_eq!(g.category, "");
    }

    #[test]
    fn malformed_file_loads_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();
        let source = CatalogSource::File(file.path().to_path_buf());

        assert!(matches!(
            Catalog::try_load(&source),
            Err(CatalogError::Json(_))
        ));
        assert!(Catalog::load(&source).is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::File(dir.path().join("nope.json"));
        assert!(matches!(Catalog::try_load(&source), Err(CatalogError::Io(_))));
        assert!(Catalog::load(&source).is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","title":"Tetris","description":"","url":"u","category":"Puzzle","tags":"","thumb":""}}]"#
        )
        .unwrap();
        let catalog = Catalog::load(&CatalogSource::File(file.path().to_path_buf()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.games()[0].category, "Puzzle");
    }

    #[test]
    fn bundled_catalog_parses() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("games.json");
        let catalog = Catalog::try_load(&CatalogSource::File(path))
            .unwrap_or_else(|e| panic!("bundled games.json: {e}"));
        assert!(!catalog.is_empty());
        assert!(catalog.games().iter().all(|g| !g.id.is_empty() && !g.url.is_empty()));
    }

    #[test]
    fn categories_are_unique_sorted_non_empty() {
        assert_eq!(sample().categories(), vec!["Arcade", "Puzzle"]);
    }

    #[test]
    fn resolve_keeps_order_and_drops_unknown() {
        let resolved = sample().resolve(&["c", "gone", "a"]);
        let ids: Vec<&str> = resolved.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn popular_takes_distinct_games() {
        let catalog = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = catalog.popular(&mut rng, 3);
        assert_eq!(picked.len(), 3);
        let mut ids: Vec<&str> = picked.iter().map(|g| g.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        assert_eq!(catalog.popular(&mut rng, 8).len(), 4);
    }
}
