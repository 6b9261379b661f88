use super::game_common::health_color;
use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the combat arena: player and enemy HP bars plus the enemy's stats
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let title = format!(
        " {} - Floor {}/{} ",
        game_state.current_biome().display_name(),
        game_state.current_floor(),
        game_state.floor_count()
    );
    let combat_block = Block::default().borders(Borders::ALL).title(title);

    let inner = combat_block.inner(area);
    frame.render_widget(combat_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player HP bar
            Constraint::Length(3), // Enemy HP bar
            Constraint::Min(3),    // Enemy stats
            Constraint::Length(1), // Auto-battle status
        ])
        .split(inner);

    draw_player_hp(frame, chunks[0], game_state);
    draw_enemy_hp(frame, chunks[1], game_state);
    draw_enemy_stats(frame, chunks[2], game_state);
    draw_combat_status(frame, chunks[3], game_state);
}

fn draw_player_hp(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = game_state.player();
    let hp_ratio = player.health_ratio().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Player"))
        .gauge_style(
            Style::default()
                .fg(health_color(hp_ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("HP: {}/{}", player.health, player.max_health))
        .ratio(hp_ratio);

    frame.render_widget(gauge, area);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let Some(enemy) = game_state.current_enemy() else {
        let empty = Paragraph::new("No enemy")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Enemy"));
        frame.render_widget(empty, area);
        return;
    };

    let title = if enemy.is_boss { "Boss" } else { "Enemy" };
    let color = if enemy.is_boss {
        Color::Magenta
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .label(format!("{}: {}/{}", enemy.name, enemy.health, enemy.max_health))
        .ratio(enemy.health_ratio().clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

fn draw_enemy_stats(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let Some(enemy) = game_state.current_enemy() else {
        return;
    };
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Attack ", label),
            Span::raw(enemy.attack.to_string()),
            Span::styled("  Defense ", label),
            Span::raw(enemy.defense.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Reward ", label),
            Span::styled(
                format!("{} gold", enemy.gold_reward),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(", {} exp", enemy.exp_reward)),
        ]),
    ];
    if game_state.is_boss_floor() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Final floor! Defeat the boss to complete the dungeon.",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_combat_status(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let status = if game_state.is_auto_battle() {
        Span::styled(
            "Auto Battle ON - Fighting automatically...",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Auto Battle OFF", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Center),
        area,
    );
}
