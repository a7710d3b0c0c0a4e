mod app;
mod catalog;
mod config;
mod error;
mod event;
mod filter;
mod launch;
mod library;
mod logger;
mod storage;
mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::Config;
use event::{Event, EventHandler};
use library::Library;
use storage::FileStorage;

fn main() -> io::Result<()> {
    let config = Config::load();
    if let Err(e) = logger::init(&config.log_path, config.log_level) {
        eprintln!("Logging disabled, cannot open {}: {}", config.log_path.display(), e);
    }
    config.log_summary();

    let library = Library::new(Box::new(FileStorage::open(&config.data_path)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(library);
    let event_handler = EventHandler::new(config.tick_rate_ms);
    event_handler.spawn_catalog_load(config.catalog.clone());

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Catalog(catalog) => app.on_catalog(catalog),
        }

        if let Some(url) = app.take_launch() {
            launch::open_in_browser(&url);
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    log::info!("Bye");

    Ok(())
}
