mod combat_scene;
mod dungeon_select;
pub mod game_common;
mod main_menu;
mod stats_panel;
mod upgrade_scene;

use crate::app::{App, Screen};
use crate::core::constants::MAX_LOG_LINES;
use game_common::{draw_controls, draw_header, draw_message_log, draw_player_stats};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Width of the player stats column
const STATS_PANEL_WIDTH: u16 = 30;

/// Main UI drawing function
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let game = app.game();

    // Header, body, message log, controls footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(MAX_LOG_LINES as u16 + 2),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(frame, v_chunks[0], &screen_title(app));

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(STATS_PANEL_WIDTH), Constraint::Min(20)])
        .split(v_chunks[1]);

    draw_player_stats(frame, h_chunks[0], game.player());

    let body = h_chunks[1];
    match app.screen() {
        Screen::LoadPrompt | Screen::MainMenu => main_menu::draw_main_menu(frame, body),
        Screen::BiomeSelect => dungeon_select::draw_biome_select(frame, body),
        Screen::SizeSelect(biome) => dungeon_select::draw_size_select(frame, body, biome),
        Screen::Combat => combat_scene::draw_combat_scene(frame, body, game),
        Screen::Upgrades => upgrade_scene::draw_upgrade_scene(frame, body, game),
        Screen::Statistics => stats_panel::draw_stats_panel(frame, body, game),
    }

    draw_message_log(frame, v_chunks[2], app.log());
    draw_controls(frame, v_chunks[3], screen_controls(app.screen()));

    if app.screen() == Screen::LoadPrompt {
        main_menu::draw_load_prompt(frame);
    }
}

fn screen_title(app: &App) -> String {
    let game = app.game();
    match app.screen() {
        Screen::LoadPrompt | Screen::MainMenu => "INCREMENTAL DUNGEON CRAWLER".to_string(),
        Screen::BiomeSelect => "SELECT DUNGEON".to_string(),
        Screen::SizeSelect(biome) => format!("{} - SELECT SIZE", biome.display_name()),
        Screen::Combat => format!(
            "COMBAT - {} Floor {}/{}",
            game.current_biome().display_name(),
            game.current_floor(),
            game.floor_count()
        ),
        Screen::Upgrades => "UPGRADE STATS".to_string(),
        Screen::Statistics => "STATISTICS".to_string(),
    }
}

fn screen_controls(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::LoadPrompt => &[("[Y]", "Load"), ("[N]", "New Game")],
        Screen::MainMenu => &[("[1-6]", "Choose"), ("[Q]", "Quit")],
        Screen::BiomeSelect | Screen::SizeSelect(_) => &[("[1-9]", "Choose"), ("[0/Esc]", "Back")],
        Screen::Combat => &[
            ("[1/Enter]", "Attack"),
            ("[2]", "Auto Battle"),
            ("[3/Esc]", "Flee"),
        ],
        Screen::Upgrades => &[("[1-3]", "Buy"), ("[0/Esc]", "Back")],
        Screen::Statistics => &[("[Any key]", "Return")],
    }
}
