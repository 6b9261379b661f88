//! Shared UI components: header, player stats, message log and controls bar.

use crate::character::player::Player;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Green above two thirds, yellow above one third, red below.
pub fn health_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Draws the boxed screen title.
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(header, area);
}

/// Draws the player stats box shown on every screen.
pub fn draw_player_stats(frame: &mut Frame, area: Rect, player: &Player) {
    let hp_style = Style::default().fg(health_color(player.health_ratio()));
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Level ", label),
            Span::styled(
                player.level.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("HP    ", label),
            Span::styled(format!("{}/{}", player.health, player.max_health), hp_style),
        ]),
        Line::from(vec![
            Span::styled("ATK   ", label),
            Span::raw(player.attack.to_string()),
            Span::styled("  DEF ", label),
            Span::raw(player.defense.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Gold  ", label),
            Span::styled(player.gold.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("EXP   ", label),
            Span::raw(format!(
                "{}/{}",
                player.experience, player.exp_to_next_level
            )),
        ]),
        Line::from(vec![
            Span::styled("Floors ", label),
            Span::raw(player.floors_cleared.to_string()),
            Span::styled("  Dungeons ", label),
            Span::raw(player.dungeons_completed.to_string()),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", player.name)),
    );
    frame.render_widget(panel, area);
}

/// Draws the most recent messages, newest at the bottom.
pub fn draw_message_log<'a>(
    frame: &mut Frame,
    area: Rect,
    messages: impl Iterator<Item = &'a str>,
) {
    let lines: Vec<Line> = messages
        .map(|message| Line::from(message.to_string()))
        .collect();
    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(log, area);
}

/// One-line controls hint, e.g. `[1] Attack  [3] Flee`.
pub fn draw_controls(frame: &mut Frame, area: Rect, controls: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Centered dialog area clipped to the frame.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears `area` and draws a bordered dialog frame, returning the inner area.
pub fn draw_dialog(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
