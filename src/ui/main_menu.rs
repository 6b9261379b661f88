use super::game_common::{centered_rect, draw_dialog};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MENU_ENTRIES: [(&str, &str); 6] = [
    ("1", "Enter Dungeon"),
    ("2", "Upgrade Stats"),
    ("3", "View Statistics"),
    ("4", "Save Game"),
    ("5", "Load Game"),
    ("6", "Exit"),
];

/// Draws the town menu
pub fn draw_main_menu(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (key, label) in MENU_ENTRIES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(label),
        ]));
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Main Menu "),
    );
    frame.render_widget(menu, area);
}

/// Draws the startup "load saved game?" dialog as an overlay
pub fn draw_load_prompt(frame: &mut Frame) {
    let dialog_area = centered_rect(frame.size(), 44, 7);
    let inner = draw_dialog(frame, dialog_area, " Saved Game ", Color::Cyan);

    let lines = vec![
        Line::from(""),
        Line::from("Found saved game. Load it?"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Y] Load",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] New Game",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
