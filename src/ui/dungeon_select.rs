//! Biome and size pickers used before entering a dungeon.

use crate::dungeon::types::{Biome, DungeonSize};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn menu_line(index: usize, text: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {}. ", index + 1),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(text),
    ])
}

fn back_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  0. {}", text),
        Style::default().fg(Color::DarkGray),
    ))
}

pub fn draw_biome_select(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (i, biome) in Biome::all().iter().enumerate() {
        lines.push(menu_line(i, biome.display_name().to_string()));
    }
    lines.push(Line::from(""));
    lines.push(back_line("Back to Main Menu"));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select Biome "),
    );
    frame.render_widget(panel, area);
}

/// Size list with floor count and difficulty for the chosen biome
pub fn draw_size_select(frame: &mut Frame, area: Rect, biome: Biome) {
    let mut lines = vec![Line::from("")];
    for (i, size) in DungeonSize::all().iter().enumerate() {
        let info = size.info();
        lines.push(menu_line(
            i,
            format!(
                "{} ({} floors, {}x difficulty)",
                info.display_name, info.floors, info.difficulty_multiplier
            ),
        ));
    }
    lines.push(Line::from(""));
    lines.push(back_line("Back"));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} - Select Size ", biome.display_name())),
    );
    frame.render_widget(panel, area);
}
