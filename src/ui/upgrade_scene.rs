use crate::character::upgrades::UpgradeStat;
use crate::core::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the upgrade shop. Entries the player cannot afford are dimmed.
pub fn draw_upgrade_scene(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = game_state.player();
    let mut lines = vec![Line::from("")];

    for (i, stat) in UpgradeStat::all().iter().enumerate() {
        let cost = game_state.upgrade_cost(*stat);
        let affordable = player.can_afford(cost);
        let cost_style = if affordable {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{:<16}", stat.label())),
            Span::styled(format!("Cost: {} gold", cost), cost_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  0. Back to Main Menu",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Upgrades Available ({} gold) ", player.gold)),
    );
    frame.render_widget(panel, area);
}
