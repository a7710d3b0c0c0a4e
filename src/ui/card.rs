use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::COLUMNS;
use crate::catalog::Game;
use crate::library::Library;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 6;

const ACCENT: Color = Color::Rgb(255, 220, 80);
const HEART: Color = Color::Rgb(255, 100, 160);

/// Stable per-category tint so the same category always reads the same.
pub fn category_color(category: &str) -> Color {
    const PALETTE: [Color; 6] = [
        Color::Rgb(80, 220, 80),
        Color::Rgb(220, 80, 80),
        Color::Rgb(200, 120, 255),
        Color::Rgb(100, 180, 255),
        Color::Rgb(255, 160, 60),
        Color::Rgb(80, 200, 200),
    ];
    let hash = category
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    PALETTE[hash % PALETTE.len()]
}

fn render_game_card(frame: &mut Frame, area: Rect, game: &Game, favorite: bool, selected: bool) {
    let tint = category_color(&game.category);
    let border_color = if selected { ACCENT } else { Color::Rgb(60, 60, 80) };
    let border_type = if selected { BorderType::Double } else { BorderType::Rounded };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let heart = if favorite {
        Span::styled("♥ ", Style::default().fg(HEART).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("♡ ", Style::default().fg(Color::Rgb(100, 100, 120)))
    };
    let title_color = if selected { Color::White } else { tint };

    let mut lines = vec![
        Line::from(vec![
            heart,
            Span::styled(
                game.title.as_str(),
                Style::default().fg(title_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            game.category.as_str(),
            Style::default().fg(Color::Rgb(120, 120, 140)),
        )),
        Line::from(Span::styled(
            game.description.as_str(),
            Style::default().fg(if selected {
                Color::Rgb(180, 180, 200)
            } else {
                Color::Rgb(100, 100, 120)
            }),
        )),
    ];

    if selected {
        lines.push(Line::from(vec![
            Span::styled("▶ Enter", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(" play  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("f", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(" favorite", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]));
    }

    let p = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(p, inner);
}

/// Lays `games` out in rows of [`COLUMNS`], scrolled so `selected` stays
/// visible.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    games: &[Game],
    selected: Option<usize>,
    library: &Library,
) {
    if games.is_empty() || area.height == 0 {
        return;
    }

    let total_rows = games.len().div_ceil(COLUMNS);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let selected_row = selected.map(|s| s / COLUMNS).unwrap_or(0);
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(rows[slot]);
        for col in 0..COLUMNS {
            let idx = row * COLUMNS + col;
            let Some(game) = games.get(idx) else { break };
            render_game_card(
                frame,
                cols[col],
                game,
                library.is_favorite(&game.id),
                selected == Some(idx),
            );
        }
    }
}

/// Centred grey text for empty and loading states.
pub fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height.saturating_sub(1) / 2;
    let p = Paragraph::new(Span::styled(text, Style::default().fg(Color::Rgb(120, 120, 140))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(p, Rect::new(area.x, y, area.width, area.height - (y - area.y)));
}
