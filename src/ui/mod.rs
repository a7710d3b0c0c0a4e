pub mod card;
pub mod home;
pub mod listing;
pub mod tabs;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Tab};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    tabs::render_tabs(frame, app, chunks[0]);

    match app.current_tab {
        Tab::Home => home::render_home(frame, chunks[1], app),
        tab => listing::render_listing(frame, chunks[1], app, tab),
    }

    render_footer(frame, chunks[2], app);

    if app.show_cookie_notice {
        render_cookie_notice(frame, frame.area());
    }

    // Privacy dialog renders on top of everything
    if app.show_privacy {
        render_privacy(frame, frame.area());
    }
}

fn key_hint<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(label, Style::default().fg(Color::Rgb(100, 100, 130))),
    ]
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default()
                .fg(Color::Rgb(80, 200, 255))
                .add_modifier(Modifier::BOLD),
        )),
        None => {
            let mut spans = vec![Span::styled(
                " © 2025 Crazy Keyboard Games  │  ",
                Style::default().fg(Color::Rgb(80, 80, 100)),
            )];
            spans.extend(key_hint("Tab", " switch  "));
            spans.extend(key_hint("←↑↓→", " select  "));
            spans.extend(key_hint("/", " search  "));
            spans.extend(key_hint("P", " Privacy Policy  "));
            spans.extend(key_hint("Q", " quit"));
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_cookie_notice(frame: &mut Frame, area: Rect) {
    let w = 72u16.min(area.width.saturating_sub(2));
    let h = 4u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.bottom().saturating_sub(h + 1);
    let notice_area = Rect::new(x, y, w, h);

    frame.render_widget(Clear, notice_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(120, 120, 140)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(notice_area);
    frame.render_widget(block, notice_area);

    let mut spans = vec![Span::styled(
        "This app stores your favorites and history locally. ",
        Style::default().fg(Color::Rgb(180, 180, 200)),
    )];
    spans.extend(key_hint("D", " Got it"));
    let p = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(p, inner);
}

fn render_privacy(frame: &mut Frame, area: Rect) {
    let overlay_w = 60u16.min(area.width.saturating_sub(4));
    let overlay_h = 12u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    // Clear background
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .title(" Privacy Policy ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let body = Style::default().fg(Color::Rgb(180, 180, 200));
    let mut close = vec![Span::raw("  ")];
    close.extend(key_hint("Esc", " close"));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This app does not collect personal data. Recently played and favorite \
             games are stored only on this machine. No login or tracking is used.",
            body,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("For questions, contact ", body),
            Span::styled(
                "hello@crazykeyboardgames.com",
                Style::default().fg(Color::Rgb(80, 200, 255)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Last updated: 2025",
            Style::default().fg(Color::Rgb(100, 100, 130)),
        )),
        Line::from(""),
        Line::from(close),
    ];

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
