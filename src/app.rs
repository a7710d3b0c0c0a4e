use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::{Catalog, Game};
use crate::filter::Filter;
use crate::library::{Library, MAX_RECENT};

/// Cards per grid row.
pub const COLUMNS: usize = 4;
pub const HOME_RECENT: usize = 4;
pub const HOME_POPULAR: usize = 8;
pub const HOME_FAVORITES: usize = 8;
const STATUS_TICKS: u16 = 30;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Home,
    AllGames,
    RecentlyPlayed,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::AllGames, Tab::RecentlyPlayed]
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Home => " Home ",
            Tab::AllGames => " All Games ",
            Tab::RecentlyPlayed => " Recently Played ",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::AllGames => 1,
            Tab::RecentlyPlayed => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Recent,
    Popular,
    Categories,
    Favorites,
}

impl Section {
    const ORDER: [Section; 4] = [
        Section::Recent,
        Section::Popular,
        Section::Categories,
        Section::Favorites,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Search box, category selector and grid cursor of a listing tab.
#[derive(Debug, Default, Clone)]
pub struct Listing {
    pub filter: Filter,
    pub selected: usize,
    pub searching: bool,
}

pub struct App {
    pub should_quit: bool,
    pub current_tab: Tab,
    /// `None` until the catalog load finishes.
    pub catalog: Option<Catalog>,
    pub library: Library,
    pub categories: Vec<String>,
    pub popular: Vec<Game>,
    pub section: Section,
    pub home_selected: usize,
    pub all_games: Listing,
    pub recently_played: Listing,
    pub show_privacy: bool,
    pub show_cookie_notice: bool,
    pub status: Option<String>,
    status_ticks: u16,
    pending_launch: Option<String>,
}

impl App {
    pub fn new(library: Library) -> Self {
        let show_cookie_notice = library.cookie_notice_visible();
        Self {
            should_quit: false,
            current_tab: Tab::Home,
            catalog: None,
            library,
            categories: Vec::new(),
            popular: Vec::new(),
            section: Section::Recent,
            home_selected: 0,
            all_games: Listing::default(),
            recently_played: Listing::default(),
            show_privacy: false,
            show_cookie_notice,
            status: None,
            status_ticks: 0,
            pending_launch: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn on_catalog(&mut self, catalog: Catalog) {
        self.categories = catalog.categories();
        self.popular = catalog.popular(&mut rand::thread_rng(), HOME_POPULAR);
        self.catalog = Some(catalog);
        self.section = self.first_filled_section().unwrap_or(Section::Recent);
        self.home_selected = 0;
    }

    fn reshuffle_popular(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.popular = catalog.popular(&mut rand::thread_rng(), HOME_POPULAR);
        }
    }

    pub fn on_tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status = None;
            }
        }
    }

    /// URL the user asked to open, if any. Opening it is the caller's job.
    pub fn take_launch(&mut self) -> Option<String> {
        self.pending_launch.take()
    }

    fn set_status(&mut self, msg: String) {
        self.status = Some(msg);
        self.status_ticks = STATUS_TICKS;
    }

    // ---- derived views ----

    pub fn recent_games(&self, limit: usize) -> Vec<Game> {
        match &self.catalog {
            Some(catalog) => self.library.recent_games(catalog, limit),
            None => Vec::new(),
        }
    }

    pub fn favorite_games(&self, limit: usize) -> Vec<Game> {
        match &self.catalog {
            Some(catalog) => self.library.favorite_games(catalog, limit),
            None => Vec::new(),
        }
    }

    /// Cards shown by a listing tab after search and category filtering.
    pub fn listing_games(&self, tab: Tab) -> Vec<Game> {
        match tab {
            Tab::Home => Vec::new(),
            Tab::AllGames => match &self.catalog {
                Some(catalog) => self.all_games.filter.apply(catalog.games()),
                None => Vec::new(),
            },
            Tab::RecentlyPlayed => self
                .recently_played
                .filter
                .apply(&self.recent_games(MAX_RECENT)),
        }
    }

    fn section_games(&self, section: Section) -> Vec<Game> {
        match section {
            Section::Recent => self.recent_games(HOME_RECENT),
            Section::Popular => self.popular.clone(),
            Section::Categories => Vec::new(),
            Section::Favorites => self.favorite_games(HOME_FAVORITES),
        }
    }

    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Categories => self.categories.len(),
            _ => self.section_games(section).len(),
        }
    }

    fn first_filled_section(&self) -> Option<Section> {
        Section::ORDER
            .into_iter()
            .find(|s| self.section_len(*s) > 0)
    }

    /// Game under the cursor on the current tab, if the cursor is on a card.
    pub fn selected_game(&self) -> Option<Game> {
        match self.current_tab {
            Tab::Home => self
                .section_games(self.section)
                .get(self.home_selected)
                .cloned(),
            tab => {
                let games = self.listing_games(tab);
                let idx = self.listing(tab)?.selected.min(games.len().saturating_sub(1));
                games.get(idx).cloned()
            }
        }
    }

    fn listing(&self, tab: Tab) -> Option<&Listing> {
        match tab {
            Tab::Home => None,
            Tab::AllGames => Some(&self.all_games),
            Tab::RecentlyPlayed => Some(&self.recently_played),
        }
    }

    fn listing_mut(&mut self, tab: Tab) -> Option<&mut Listing> {
        match tab {
            Tab::Home => None,
            Tab::AllGames => Some(&mut self.all_games),
            Tab::RecentlyPlayed => Some(&mut self.recently_played),
        }
    }

    // ---- actions ----

    pub fn play(&mut self, game: &Game) {
        self.library.record_play(&game.id);
        self.pending_launch = Some(game.url.clone());
        self.set_status(format!("Opening {}...", game.title));
        self.clamp_home_selection();
    }

    pub fn toggle_favorite(&mut self, game: &Game) {
        self.library.toggle_favorite(&game.id);
        let msg = if self.library.is_favorite(&game.id) {
            format!("Added {} to favorites", game.title)
        } else {
            format!("Removed {} from favorites", game.title)
        };
        self.set_status(msg);
        self.clamp_home_selection();
    }

    pub fn dismiss_cookie_notice(&mut self) {
        if self.show_cookie_notice {
            self.library.dismiss_cookie_notice();
            self.show_cookie_notice = false;
        }
    }

    fn browse_category(&mut self, category: String) {
        self.all_games.filter = Filter {
            query: String::new(),
            category,
        };
        self.all_games.selected = 0;
        self.all_games.searching = false;
        self.current_tab = Tab::AllGames;
    }

    fn clamp_home_selection(&mut self) {
        let len = self.section_len(self.section);
        if len == 0 {
            if let Some(section) = self.first_filled_section() {
                self.section = section;
            }
            self.home_selected = 0;
        } else if self.home_selected >= len {
            self.home_selected = len - 1;
        }
    }

    // ---- input ----

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The privacy dialog is modal.
        if self.show_privacy {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P')) {
                self.show_privacy = false;
            }
            return;
        }

        if self.listing(self.current_tab).is_some_and(|l| l.searching) {
            self.handle_search_input(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if matches!(self.current_tab, Tab::Home) {
                    self.should_quit = true;
                    return;
                }
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.prev_tab();
                } else {
                    self.next_tab();
                }
                return;
            }
            KeyCode::BackTab => {
                self.prev_tab();
                return;
            }
            KeyCode::Esc => {
                self.current_tab = Tab::Home;
                return;
            }
            KeyCode::Char('1') => {
                self.current_tab = Tab::Home;
                return;
            }
            KeyCode::Char('2') => {
                self.current_tab = Tab::AllGames;
                return;
            }
            KeyCode::Char('3') => {
                self.current_tab = Tab::RecentlyPlayed;
                return;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.show_privacy = true;
                return;
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.dismiss_cookie_notice();
                return;
            }
            _ => {}
        }

        if self.is_loading() {
            return;
        }

        match self.current_tab {
            Tab::Home => self.handle_home_key(key),
            tab => self.handle_listing_key(tab, key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => self.reshuffle_popular(),
            KeyCode::Char('/') => {
                self.all_games.searching = true;
                self.current_tab = Tab::AllGames;
            }
            KeyCode::Right => {
                if self.home_selected + 1 < self.section_len(self.section) {
                    self.home_selected += 1;
                }
            }
            KeyCode::Left => self.home_selected = self.home_selected.saturating_sub(1),
            KeyCode::Down => self.home_vertical(true),
            KeyCode::Up => self.home_vertical(false),
            KeyCode::Enter => {
                if self.section == Section::Categories {
                    if let Some(cat) = self.categories.get(self.home_selected).cloned() {
                        self.browse_category(cat);
                    }
                } else if let Some(game) = self.selected_game() {
                    self.play(&game);
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                if let Some(game) = self.selected_game() {
                    self.toggle_favorite(&game);
                }
            }
            _ => {}
        }
    }

    /// Moves a row within the section, spilling into the neighbouring
    /// non-empty section at the edges.
    fn home_vertical(&mut self, down: bool) {
        let len = self.section_len(self.section);
        if down && self.home_selected + COLUMNS < len {
            self.home_selected += COLUMNS;
            return;
        }
        if !down && self.home_selected >= COLUMNS {
            self.home_selected -= COLUMNS;
            return;
        }

        let pos = self.section.position();
        let candidates: Vec<Section> = if down {
            Section::ORDER[pos + 1..].to_vec()
        } else {
            Section::ORDER[..pos].iter().rev().copied().collect()
        };
        let Some(next) = candidates.into_iter().find(|s| self.section_len(*s) > 0) else {
            return;
        };

        let column = self.home_selected % COLUMNS;
        let next_len = self.section_len(next);
        self.home_selected = if down {
            column.min(next_len - 1)
        } else {
            let last_row_start = (next_len - 1) / COLUMNS * COLUMNS;
            (last_row_start + column).min(next_len - 1)
        };
        self.section = next;
    }

    fn handle_listing_key(&mut self, tab: Tab, key: KeyEvent) {
        let len = self.listing_games(tab).len();
        let categories = self.categories.clone();
        let Some(listing) = self.listing_mut(tab) else {
            return;
        };
        listing.selected = listing.selected.min(len.saturating_sub(1));

        match key.code {
            KeyCode::Char('/') => listing.searching = true,
            KeyCode::Char('c') | KeyCode::Char('C') => {
                listing.filter.cycle_category(&categories);
                listing.selected = 0;
            }
            KeyCode::Right => {
                if listing.selected + 1 < len {
                    listing.selected += 1;
                }
            }
            KeyCode::Left => listing.selected = listing.selected.saturating_sub(1),
            KeyCode::Down => {
                if listing.selected + COLUMNS < len {
                    listing.selected += COLUMNS;
                }
            }
            KeyCode::Up => listing.selected = listing.selected.saturating_sub(COLUMNS),
            KeyCode::Enter => {
                if let Some(game) = self.selected_game() {
                    self.play(&game);
                    if tab == Tab::RecentlyPlayed {
                        self.recently_played.selected = 0;
                    }
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                if let Some(game) = self.selected_game() {
                    self.toggle_favorite(&game);
                }
            }
            _ => {}
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent) {
        let Some(listing) = self.listing_mut(self.current_tab) else {
            return;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Esc => listing.searching = false,
            KeyCode::Backspace => {
                listing.filter.query.pop();
                listing.selected = 0;
            }
            KeyCode::Char(c) => {
                listing.filter.query.push(c);
                listing.selected = 0;
            }
            _ => {}
        }
    }

    fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::game;
    use crate::storage::MemoryStorage;

    pub(crate) fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub(crate) fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            game("tetris", "Tetris", "Stack the falling blocks", "Puzzle"),
            game("snake", "Snake", "Eat apples and grow", "Arcade"),
            game("pong", "Pong", "Two paddles and a ball", "Arcade"),
            game("sudoku", "Sudoku", "Fill the grid", "Puzzle"),
            game("racer", "Racer", "Drive fast", "Racing"),
        ])
    }

    pub(crate) fn loaded_app() -> App {
        let mut app = App::new(Library::new(Box::new(MemoryStorage::default())));
        app.on_catalog(sample_catalog());
        app
    }

    #[test]
    fn starts_loading_on_home() {
        let app = App::new(Library::new(Box::new(MemoryStorage::default())));
        assert!(app.is_loading());
        assert_eq!(app.current_tab, Tab::Home);
        assert!(app.show_cookie_notice);
    }

    #[test]
    fn catalog_fills_home_sections() {
        let app = loaded_app();
        assert_eq!(app.categories, vec!["Arcade", "Puzzle", "Racing"]);
        assert_eq!(app.popular.len(), 5);
        // Nothing played yet, so the cursor starts on Popular.
        assert_eq!(app.section, Section::Popular);
    }

    #[test]
    fn empty_catalog_is_not_loading() {
        let mut app = App::new(Library::new(Box::new(MemoryStorage::default())));
        app.on_catalog(Catalog::default());
        assert!(!app.is_loading());
        assert!(app.listing_games(Tab::AllGames).is_empty());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.take_launch(), None);
    }

    #[test]
    fn tabs_cycle_and_jump() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_tab, Tab::AllGames);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_tab, Tab::RecentlyPlayed);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_tab, Tab::AllGames);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_tab, Tab::Home);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_even_in_search() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn search_filters_all_games() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "TET");
        assert!(app.all_games.searching);
        let ids: Vec<String> = app.listing_games(Tab::AllGames).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["tetris"]);

        // Keys typed into the search box never switch tabs.
        type_text(&mut app, "1");
        assert_eq!(app.current_tab, Tab::AllGames);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert!(!app.all_games.searching);
        assert_eq!(app.all_games.filter.query, "TET");
    }

    #[test]
    fn category_cycles_on_listing() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.all_games.filter.category, "Arcade");
        let ids: Vec<String> = app.listing_games(Tab::AllGames).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["snake", "pong"]);
    }

    #[test]
    fn enter_plays_and_records() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.take_launch().as_deref(), Some("https://games.example/snake"));
        assert_eq!(app.take_launch(), None);
        assert_eq!(app.library.recent_ids(), ["snake"]);
        assert!(app.status.as_deref().unwrap_or("").contains("Snake"));
    }

    #[test]
    fn recently_played_view_lists_history() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('3'));
        let ids: Vec<String> = app.listing_games(Tab::RecentlyPlayed).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["pong", "tetris"]);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.library.recent_ids(), ["tetris", "pong"]);
        assert_eq!(app.recently_played.selected, 0);
    }

    #[test]
    fn recently_played_search_and_category() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        // Catalog order: tetris, snake, pong, sudoku, racer.
        for _ in 0..4 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.library.recent_ids(), ["sudoku", "pong", "snake", "tetris"]);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "S");
        press(&mut app, KeyCode::Enter);
        let ids: Vec<String> = app.listing_games(Tab::RecentlyPlayed).into_iter().map(|g| g.id).collect();
        // "s" hits Sudoku, Snake, Tetris ("Stack") and Pong ("paddles"), most recent first.
        assert_eq!(ids, vec!["sudoku", "pong", "snake", "tetris"]);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "n");
        press(&mut app, KeyCode::Enter);
        let ids: Vec<String> = app.listing_games(Tab::RecentlyPlayed).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["snake"]);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.recently_played.filter.category, "Arcade");
        let ids: Vec<String> = app.listing_games(Tab::RecentlyPlayed).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["pong", "snake"]);

        press(&mut app, KeyCode::Char('c'));
        let ids: Vec<String> = app.listing_games(Tab::RecentlyPlayed).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["sudoku", "tetris"]);

        // The category filter never reaches into games that were not played.
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.recently_played.filter.category, "Racing");
        assert!(app.listing_games(Tab::RecentlyPlayed).is_empty());
        // All Games keeps its own, untouched filter.
        assert_eq!(app.listing_games(Tab::AllGames).len(), 5);
    }

    #[test]
    fn favorite_toggle_from_listing() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.library.is_favorite("tetris"));
        assert_eq!(app.favorite_games(HOME_FAVORITES).len(), 1);
        press(&mut app, KeyCode::Char('f'));
        assert!(!app.library.is_favorite("tetris"));
    }

    #[test]
    fn home_category_opens_filtered_listing() {
        let mut app = loaded_app();
        // Popular holds five cards: the first Down stays on its second row.
        press(&mut app, KeyCode::Down);
        assert_eq!((app.section, app.home_selected), (Section::Popular, 4));
        press(&mut app, KeyCode::Down);
        assert_eq!((app.section, app.home_selected), (Section::Categories, 0));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_tab, Tab::AllGames);
        assert_eq!(app.all_games.filter.category, "Puzzle");
    }

    #[test]
    fn home_navigation_skips_empty_sections() {
        let mut app = loaded_app();
        assert_eq!(app.section, Section::Popular);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.section, Section::Popular);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.section, Section::Categories);

        press(&mut app, KeyCode::Up);
        assert_eq!((app.section, app.home_selected), (Section::Popular, 4));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!((app.section, app.home_selected), (Section::Recent, 0));
    }

    #[test]
    fn unfavoriting_last_home_card_moves_cursor() {
        let mut app = loaded_app();
        app.library.toggle_favorite("racer");
        app.section = Section::Favorites;
        app.home_selected = 0;
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.section_len(Section::Favorites), 0);
        assert_ne!(app.section, Section::Favorites);
        assert_eq!(app.home_selected, 0);
    }

    #[test]
    fn privacy_dialog_is_modal() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('p'));
        assert!(app.show_privacy);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.current_tab, Tab::Home);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_privacy);
    }

    #[test]
    fn cookie_notice_dismissal_persists() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.show_cookie_notice);
        assert!(!app.library.cookie_notice_visible());
    }

    #[test]
    fn status_expires_after_ticks() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.status.is_some());
        for _ in 0..STATUS_TICKS {
            app.on_tick();
        }
        assert!(app.status.is_none());
    }
}
