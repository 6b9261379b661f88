use crate::core::game_state::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws lifetime achievements and progress toward the next level
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // XP bar
            Constraint::Min(5),    // Achievements
        ])
        .split(area);

    draw_xp_bar(frame, chunks[0], game_state);
    draw_achievements(frame, chunks[1], game_state);
}

fn draw_xp_bar(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = game_state.player();
    let ratio = if player.exp_to_next_level > 0 {
        (player.experience as f64 / player.exp_to_next_level as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Level {}", player.level)),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .label(format!(
            "XP: {}/{} ({:.1}%)",
            player.experience,
            player.exp_to_next_level,
            ratio * 100.0
        ))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_achievements(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = game_state.player();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Total Floors Cleared:     ", label),
            Span::styled(player.floors_cleared.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Total Dungeons Completed: ", label),
            Span::styled(player.dungeons_completed.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Current Level:            ", label),
            Span::styled(player.level.to_string(), value),
        ]),
    ];

    if let Some(saved_at) = game_state
        .last_save_time()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Last saved: ", label),
            Span::raw(saved_at.format("%Y-%m-%d %H:%M UTC").to_string()),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Achievements "),
    );
    frame.render_widget(panel, area);
}
