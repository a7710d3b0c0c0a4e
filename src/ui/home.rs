use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Section, Tab, COLUMNS, HOME_FAVORITES, HOME_RECENT};
use crate::ui::card::{self, CARD_HEIGHT};

const BANNER: &str = r#"
 ╔═══════════════════════════════════════════════╗
 ║   🎮  C R A Z Y   K E Y B O A R D   G A M E S  ║
 ╚═══════════════════════════════════════════════╝"#;

const SECTION_BORDER: Color = Color::Rgb(60, 150, 200);
const SECTION_TITLE: Color = Color::Rgb(200, 120, 255);
const ACCENT: Color = Color::Rgb(255, 220, 80);

fn section_block(title: &str, active: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(if active { BorderType::Double } else { BorderType::Rounded })
        .border_style(Style::default().fg(if active { ACCENT } else { SECTION_BORDER }))
        .title(title)
        .title_style(Style::default().fg(SECTION_TITLE).add_modifier(Modifier::BOLD))
}

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let category_rows = app.categories.len().div_ceil(COLUMNS).max(1) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                    // Banner
            Constraint::Length(2),                    // Hero line
            Constraint::Length(CARD_HEIGHT + 2),      // Recently played
            Constraint::Length(CARD_HEIGHT * 2 + 2),  // Popular
            Constraint::Length(category_rows * 3 + 2), // Categories
            Constraint::Min(CARD_HEIGHT + 2),         // Favorites
            Constraint::Length(2),                    // About
        ])
        .split(area);

    let banner = Paragraph::new(BANNER)
        .style(Style::default().fg(Color::Rgb(80, 200, 255)))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let hero = Paragraph::new(Line::from(vec![
        Span::styled(
            "100+ Keyboard & Mouse Games",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Play instantly. No downloads. Just fun.",
            Style::default()
                .fg(Color::Rgb(180, 180, 200))
                .add_modifier(Modifier::ITALIC),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[1]);

    if app.is_loading() {
        let rest = Rect::new(
            chunks[2].x,
            chunks[2].y,
            chunks[2].width,
            area.bottom().saturating_sub(chunks[2].y),
        );
        card::render_placeholder(frame, rest, "Loading games...");
        return;
    }

    let cursor = |section: Section| {
        (app.current_tab == Tab::Home && app.section == section).then_some(app.home_selected)
    };

    // Recently played
    let recent = app.recent_games(HOME_RECENT);
    let block = section_block(" 🕘 Recently Played · 3 View All ", app.section == Section::Recent);
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);
    if recent.is_empty() {
        card::render_placeholder(
            frame,
            inner,
            "No games played yet. Start playing to see your recent games here!",
        );
    } else {
        card::render_grid(frame, inner, &recent, cursor(Section::Recent), &app.library);
    }

    // Popular
    let block = section_block(
        " 🔥 Popular Games · r Shuffle · 2 View All Games ",
        app.section == Section::Popular,
    );
    let inner = block.inner(chunks[3]);
    frame.render_widget(block, chunks[3]);
    if app.popular.is_empty() {
        card::render_placeholder(frame, inner, "No games available.");
    } else {
        card::render_grid(frame, inner, &app.popular, cursor(Section::Popular), &app.library);
    }

    // Categories
    let block = section_block(" 🗂 Browse by Category ", app.section == Section::Categories);
    let inner = block.inner(chunks[4]);
    frame.render_widget(block, chunks[4]);
    render_categories(frame, inner, &app.categories, cursor(Section::Categories));

    // Favorites
    let favorites = app.favorite_games(HOME_FAVORITES);
    let block = section_block(" ♥ Favorites ", app.section == Section::Favorites);
    let inner = block.inner(chunks[5]);
    frame.render_widget(block, chunks[5]);
    if favorites.is_empty() {
        card::render_placeholder(
            frame,
            inner,
            "No favorites yet. Press f on any game to add it here!",
        );
    } else {
        card::render_grid(frame, inner, &favorites, cursor(Section::Favorites), &app.library);
    }

    let about = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "A distraction-free portal for instant keyboard and mouse games.",
            Style::default().fg(Color::Rgb(120, 120, 140)),
        ),
        Span::styled("  Contact: ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled(
            "hello@crazykeyboardgames.com",
            Style::default().fg(Color::Rgb(80, 200, 255)),
        ),
    ])])
    .alignment(Alignment::Center);
    frame.render_widget(about, chunks[6]);
}

fn render_categories(frame: &mut Frame, area: Rect, categories: &[String], selected: Option<usize>) {
    if categories.is_empty() {
        card::render_placeholder(frame, area, "No categories.");
        return;
    }
    let rows = categories.len().div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for col in 0..COLUMNS {
            let idx = row * COLUMNS + col;
            let Some(category) = categories.get(idx) else { break };
            let is_selected = selected == Some(idx);
            let button = Paragraph::new(Span::styled(
                category.as_str(),
                Style::default()
                    .fg(if is_selected { Color::White } else { card::category_color(category) })
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if is_selected { BorderType::Double } else { BorderType::Rounded })
                    .border_style(Style::default().fg(if is_selected {
                        ACCENT
                    } else {
                        Color::Rgb(60, 60, 80)
                    })),
            );
            frame.render_widget(button, cols[col]);
        }
    }
}
