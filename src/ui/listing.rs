use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Listing, Tab};
use crate::ui::card;

const ACCENT: Color = Color::Rgb(255, 220, 80);
const MUTED: Color = Color::Rgb(100, 100, 130);

/// All Games and Recently Played share one layout: a search row on top and
/// the filtered grid below.
pub fn render_listing(frame: &mut Frame, area: Rect, app: &App, tab: Tab) {
    let (title, listing) = match tab {
        Tab::RecentlyPlayed => ("🕘 Recently Played", &app.recently_played),
        _ => ("🎮 All Games", &app.all_games),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search + category
            Constraint::Min(0),    // Grid
        ])
        .split(area);

    let mut heading = vec![Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(Color::Rgb(200, 120, 255))
            .add_modifier(Modifier::BOLD),
    )];
    if tab == Tab::RecentlyPlayed {
        heading.push(Span::styled("   ← Esc Back to Home", Style::default().fg(MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)), chunks[0]);

    render_controls(frame, chunks[1], listing);

    if app.is_loading() {
        card::render_placeholder(frame, chunks[2], "Loading games...");
        return;
    }

    let games = app.listing_games(tab);
    if games.is_empty() {
        card::render_placeholder(frame, chunks[2], "No games found.");
        return;
    }
    let selected = listing.selected.min(games.len() - 1);
    card::render_grid(frame, chunks[2], &games, Some(selected), &app.library);
}

fn render_controls(frame: &mut Frame, area: Rect, listing: &Listing) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let search_style = if listing.searching {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::Rgb(60, 150, 200))
    };
    let mut text = vec![Span::styled("🔍 ", Style::default())];
    if listing.filter.query.is_empty() && !listing.searching {
        text.push(Span::styled("Search games...", Style::default().fg(MUTED)));
    } else {
        text.push(Span::styled(
            listing.filter.query.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    if listing.searching {
        text.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(search_style)
            .title(if listing.searching { " Enter done " } else { " / search " })
            .title_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(search, cols[0]);

    let category = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(MUTED)),
        Span::styled(
            listing.filter.category_label(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(MUTED)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .title(" c category ")
            .title_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(category, cols[1]);
}
