use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::catalog::{Catalog, CatalogSource};

pub enum Event {
    Key(KeyEvent),
    Tick,
    Catalog(Catalog),
}

pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        let input_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && input_tx.send(Event::Key(key)).is_err() {
                        return;
                    }
                }
            } else if input_tx.send(Event::Tick).is_err() {
                return;
            }
        });

        Self { tx, rx }
    }

    /// Loads the catalog off the UI thread; the result arrives once as
    /// [`Event::Catalog`].
    pub fn spawn_catalog_load(&self, source: CatalogSource) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let catalog = Catalog::load(&source);
            let _ = tx.send(Event::Catalog(catalog));
        });
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
