//! UI-agnostic frontend state: which screen is showing, the message log, and
//! how menu input turns into engine calls.
//!
//! The terminal loop in `main.rs` maps key events to [`AppInput`] and calls
//! [`App::handle_input`] and [`App::tick`]; everything here is testable
//! without a terminal.

use crate::character::upgrades::UpgradeStat;
use crate::combat::types::CombatResult;
use crate::core::constants::{AUTO_BATTLE_INTERVAL_MS, MAX_LOG_LINES};
use crate::core::game_state::GameState;
use crate::dungeon::types::{Biome, DungeonSize};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Screens of the terminal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// "Found saved game. Load it? (y/n)"
    LoadPrompt,
    MainMenu,
    BiomeSelect,
    SizeSelect(Biome),
    Combat,
    Upgrades,
    Statistics,
}

/// Input events, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Character typed (menu digits, y/n)
    Char(char),
    /// Escape pressed
    Back,
    /// Enter pressed
    Confirm,
    /// Ctrl+C or equivalent
    Quit,
    /// Any other key
    Other,
}

/// Whether the loop should keep running after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub struct App {
    game: GameState,
    rng: ChaCha8Rng,
    save_path: PathBuf,
    screen: Screen,
    log: VecDeque<String>,
    last_auto_attack: Option<Instant>,
}

impl App {
    /// Starts on the load prompt when a save file already exists.
    pub fn new(save_path: impl Into<PathBuf>, rng: ChaCha8Rng) -> Self {
        let save_path = save_path.into();
        let screen = if save_path.exists() {
            Screen::LoadPrompt
        } else {
            Screen::MainMenu
        };
        Self {
            game: GameState::new(),
            rng,
            save_path,
            screen,
            log: VecDeque::with_capacity(MAX_LOG_LINES),
            last_auto_attack: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Message log, oldest first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn push_log(&mut self, message: impl Into<String>) {
        if self.log.len() >= MAX_LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(message.into());
    }

    pub fn handle_input(&mut self, input: AppInput, now: Instant) -> AppControl {
        if input == AppInput::Quit {
            return AppControl::Exit;
        }
        match self.screen {
            Screen::LoadPrompt => self.handle_load_prompt(input),
            Screen::MainMenu => return self.handle_main_menu(input),
            Screen::BiomeSelect => self.handle_biome_select(input),
            Screen::SizeSelect(biome) => self.handle_size_select(biome, input),
            Screen::Combat => self.handle_combat(input, now),
            Screen::Upgrades => self.handle_upgrades(input),
            Screen::Statistics => self.screen = Screen::MainMenu,
        }
        AppControl::Continue
    }

    /// Drives auto-battle: one attack per interval while the flag is on.
    pub fn tick(&mut self, now: Instant) {
        if self.screen != Screen::Combat || !self.game.is_auto_battle() {
            return;
        }
        let due = match self.last_auto_attack {
            Some(last) => {
                now.saturating_duration_since(last)
                    >= Duration::from_millis(AUTO_BATTLE_INTERVAL_MS)
            }
            None => true,
        };
        if due {
            self.last_auto_attack = Some(now);
            self.attack();
        }
    }

    fn handle_load_prompt(&mut self, input: AppInput) {
        match input {
            AppInput::Char('y') | AppInput::Char('Y') => {
                if self.load() {
                    self.push_log("Game loaded successfully!");
                } else {
                    self.push_log("Failed to load game. Starting new game...");
                    self.screen = Screen::MainMenu;
                }
            }
            AppInput::Char('n') | AppInput::Char('N') | AppInput::Back => {
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
    }

    fn handle_main_menu(&mut self, input: AppInput) -> AppControl {
        match input {
            AppInput::Char('1') => self.screen = Screen::BiomeSelect,
            AppInput::Char('2') => self.screen = Screen::Upgrades,
            AppInput::Char('3') => self.screen = Screen::Statistics,
            AppInput::Char('4') => {
                if self.game.save_game(&self.save_path) {
                    self.push_log("Game saved successfully!");
                } else {
                    self.push_log("Failed to save game!");
                }
            }
            AppInput::Char('5') => {
                if self.load() {
                    self.push_log("Game loaded successfully!");
                } else {
                    self.push_log("No save file found or failed to load!");
                }
            }
            AppInput::Char('6') | AppInput::Char('q') | AppInput::Char('Q') => {
                return AppControl::Exit;
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn handle_biome_select(&mut self, input: AppInput) {
        match input {
            AppInput::Char('0') | AppInput::Back => self.screen = Screen::MainMenu,
            AppInput::Char(c) => {
                if let Some(biome) = menu_pick(c, &Biome::all()) {
                    self.screen = Screen::SizeSelect(biome);
                }
            }
            _ => {}
        }
    }

    fn handle_size_select(&mut self, biome: Biome, input: AppInput) {
        match input {
            AppInput::Char('0') | AppInput::Back => self.screen = Screen::BiomeSelect,
            AppInput::Char(c) => {
                let Some(size) = menu_pick(c, &DungeonSize::all()) else {
                    return;
                };
                self.enter_dungeon(biome, size);
            }
            _ => {}
        }
    }

    fn enter_dungeon(&mut self, biome: Biome, size: DungeonSize) {
        if !self.game.start_dungeon(biome, size, &mut self.rng) {
            self.push_log("Already inside a dungeon!");
            return;
        }
        self.push_log(format!(
            "Entered the {} ({}, {} floors)",
            biome.display_name(),
            size.display_name(),
            size.floors()
        ));
        self.last_auto_attack = None;
        self.screen = Screen::Combat;
    }

    fn handle_combat(&mut self, input: AppInput, now: Instant) {
        match input {
            AppInput::Char('1') | AppInput::Char('a') | AppInput::Confirm => self.attack(),
            AppInput::Char('2') | AppInput::Char('t') => {
                self.game.toggle_auto_battle();
                self.last_auto_attack = Some(now);
                let status = if self.game.is_auto_battle() { "ON" } else { "OFF" };
                self.push_log(format!("Auto Battle: {}", status));
            }
            AppInput::Char('3') | AppInput::Char('f') | AppInput::Back => {
                self.game.flee_dungeon();
                self.push_log("You fled back to town and rested to full health.");
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
    }

    fn attack(&mut self) {
        // Cleared floor number has to be read before the engine advances it.
        let floor = self.game.current_floor();
        let result = self.game.attack_enemy(&mut self.rng);
        self.report_combat(&result, floor);
        if !self.game.is_in_dungeon() {
            self.screen = Screen::MainMenu;
        }
    }

    fn report_combat(&mut self, result: &CombatResult, floor: u32) {
        if !result.enemy_defeated && result.player_damage == 0 && !result.player_died {
            return;
        }
        self.push_log(format!("You dealt {} damage!", result.player_damage));

        if result.enemy_defeated {
            self.push_log(format!(
                "Enemy defeated! +{} gold, +{} exp",
                result.gold_reward, result.exp_reward
            ));
            if result.levels_gained > 0 {
                self.push_log(format!("Level up! Now level {}", self.game.player().level));
            }
            if result.dungeon_completed {
                self.push_log("DUNGEON COMPLETED!");
            } else if result.floor_cleared {
                self.push_log(format!("Floor {} cleared! Healing 30%...", floor));
            }
        } else {
            if result.enemy_damage > 0 {
                self.push_log(format!("Enemy dealt {} damage!", result.enemy_damage));
            }
            if result.player_died {
                self.push_log("You have been defeated! Returning to town...");
            }
        }
    }

    fn handle_upgrades(&mut self, input: AppInput) {
        let stat = match input {
            AppInput::Char('0') | AppInput::Back => {
                self.screen = Screen::MainMenu;
                return;
            }
            AppInput::Char(c) => match menu_pick(c, &UpgradeStat::all()) {
                Some(stat) => stat,
                None => return,
            },
            _ => return,
        };
        if self.game.upgrade_stat(stat) {
            self.push_log(format!("{} upgraded!", stat.label()));
        } else {
            self.push_log("Not enough gold!");
        }
    }

    /// Loads the save and jumps to combat when a run was restored.
    fn load(&mut self) -> bool {
        if !self.game.load_game(&self.save_path, &mut self.rng) {
            return false;
        }
        self.last_auto_attack = None;
        self.screen = if self.game.is_in_dungeon() {
            Screen::Combat
        } else {
            Screen::MainMenu
        };
        true
    }
}

/// Maps a 1-based menu digit to the matching entry.
fn menu_pick<T: Copy>(c: char, options: &[T]) -> Option<T> {
    let index = c.to_digit(10)? as usize;
    index.checked_sub(1).and_then(|i| options.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_app(dir: &tempfile::TempDir) -> App {
        App::new(
            dir.path().join("save_game.json"),
            ChaCha8Rng::seed_from_u64(42),
        )
    }

    fn press(app: &mut App, keys: &str) {
        let now = Instant::now();
        for c in keys.chars() {
            app.handle_input(AppInput::Char(c), now);
        }
    }

    #[test]
    fn test_starts_on_main_menu_without_save() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_starts_on_load_prompt_with_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.game_mut().player_mut().gold = 777;
        press(&mut app, "4");
        assert!(app.log().any(|line| line == "Game saved successfully!"));

        let mut reopened = test_app(&dir);
        assert_eq!(reopened.screen(), Screen::LoadPrompt);
        press(&mut reopened, "y");
        assert_eq!(reopened.screen(), Screen::MainMenu);
        assert_eq!(reopened.game().player().gold, 777);
    }

    #[test]
    fn test_declining_load_keeps_new_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.game_mut().player_mut().gold = 5;
        press(&mut app, "4");

        let mut reopened = test_app(&dir);
        press(&mut reopened, "n");
        assert_eq!(reopened.screen(), Screen::MainMenu);
        assert_eq!(reopened.game().player().gold, 0);
    }

    #[test]
    fn test_dungeon_select_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, "1");
        assert_eq!(app.screen(), Screen::BiomeSelect);
        press(&mut app, "4");
        assert_eq!(app.screen(), Screen::SizeSelect(Biome::Ice));
        press(&mut app, "0");
        assert_eq!(app.screen(), Screen::BiomeSelect);
        press(&mut app, "9");
        assert_eq!(app.screen(), Screen::BiomeSelect);
        press(&mut app, "0");
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_enter_dungeon_and_flee() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, "122");
        assert_eq!(app.screen(), Screen::Combat);
        assert!(app.game().is_in_dungeon());
        assert_eq!(app.game().current_biome(), Biome::Cave);
        assert_eq!(app.game().current_dungeon_size(), DungeonSize::Medium);

        press(&mut app, "1");
        assert!(app.log().any(|line| line == "You dealt 6 damage!"));

        press(&mut app, "3");
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(!app.game().is_in_dungeon());
        assert_eq!(app.game().player().health, app.game().player().max_health);
    }

    #[test]
    fn test_strong_hero_clears_and_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.game_mut().player_mut().attack = 1000;
        press(&mut app, "11");
        press(&mut app, "1");
        assert!(app.log().any(|line| line == "Floor 1 cleared! Healing 30%..."));
        press(&mut app, "1111");
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(app.log().any(|line| line == "DUNGEON COMPLETED!"));
        assert_eq!(app.game().player().dungeons_completed, 1);
    }

    #[test]
    fn test_auto_battle_ticks_on_interval() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, "11");
        let start = Instant::now();
        app.handle_input(AppInput::Char('2'), start);
        assert!(app.game().is_auto_battle());
        let health = app.game().current_enemy().map(|e| e.health);

        app.tick(start + Duration::from_millis(100));
        assert_eq!(app.game().current_enemy().map(|e| e.health), health);

        app.tick(start + Duration::from_millis(AUTO_BATTLE_INTERVAL_MS));
        assert_ne!(app.game().current_enemy().map(|e| e.health), health);
    }

    #[test]
    fn test_auto_battle_runs_until_death() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, "11");
        let start = Instant::now();
        app.handle_input(AppInput::Char('2'), start);
        for step in 1..=200u64 {
            app.tick(start + Duration::from_millis(step * AUTO_BATTLE_INTERVAL_MS));
        }
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(!app.game().is_auto_battle());
        assert!(app
            .log()
            .any(|line| line == "You have been defeated! Returning to town..."));
    }

    #[test]
    fn test_upgrade_shop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, "2");
        assert_eq!(app.screen(), Screen::Upgrades);
        press(&mut app, "2");
        assert!(app.log().any(|line| line == "Not enough gold!"));

        app.game_mut().player_mut().gold = 100;
        press(&mut app, "2");
        assert_eq!(app.game().player().attack, 15);
        assert_eq!(app.game().player().gold, 0);
        assert!(app.log().any(|line| line == "Attack +5 upgraded!"));

        press(&mut app, "0");
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_load_without_file_logs_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, "5");
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(app
            .log()
            .any(|line| line == "No save file found or failed to load!"));
    }

    #[test]
    fn test_log_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        for i in 0..(MAX_LOG_LINES + 5) {
            app.push_log(format!("line {}", i));
        }
        assert_eq!(app.log().count(), MAX_LOG_LINES);
        assert_eq!(app.log().next(), Some("line 5"));
    }

    #[test]
    fn test_exit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let now = Instant::now();
        assert_eq!(
            app.handle_input(AppInput::Char('6'), now),
            AppControl::Exit
        );
        press(&mut app, "1");
        assert_eq!(app.handle_input(AppInput::Quit, now), AppControl::Exit);
    }

    #[test]
    fn test_menu_pick() {
        let sizes = DungeonSize::all();
        assert_eq!(menu_pick('1', &sizes), Some(DungeonSize::Small));
        assert_eq!(menu_pick('4', &sizes), Some(DungeonSize::Epic));
        assert_eq!(menu_pick('0', &sizes), None);
        assert_eq!(menu_pick('5', &sizes), None);
        assert_eq!(menu_pick('x', &sizes), None);
    }
}
