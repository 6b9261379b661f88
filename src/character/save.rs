//! Save file format and the load-as-overlay rules.
//!
//! The file is a pretty-printed JSON object: a nested `player` record, then
//! the session keys `currentFloor`, `autoBattle`, `inDungeon`, plus `biome`,
//! `dungeonSize` and `lastSaveTime`. Loading parses the whole file first and
//! only then overlays whichever keys are present onto the running game, so a
//! missing key keeps the in-memory value and a broken file changes nothing.

use crate::core::game_state::GameState;
use crate::dungeon::types::{Biome, DungeonSize};
use crate::utils::persistence::{default_save_path, read_json, write_json};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

pub use crate::utils::persistence::SaveError;

/// Player block as written to disk, in file order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRecord<'a> {
    name: &'a str,
    level: u32,
    health: u32,
    max_health: u32,
    attack: u32,
    defense: u32,
    gold: u64,
    experience: u64,
    exp_to_next_level: u64,
    floors_cleared: u64,
    dungeons_completed: u64,
}

/// Full save as written to disk, in file order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveRecord<'a> {
    player: PlayerRecord<'a>,
    current_floor: u32,
    auto_battle: bool,
    in_dungeon: bool,
    biome: Biome,
    dungeon_size: DungeonSize,
    last_save_time: i64,
}

/// Player keys read back from a save. Absent keys are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerOverlay {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub health: Option<u32>,
    pub max_health: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub gold: Option<u64>,
    pub experience: Option<u64>,
    pub exp_to_next_level: Option<u64>,
    pub floors_cleared: Option<u64>,
    pub dungeons_completed: Option<u64>,
}

/// Everything read back from a save. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveOverlay {
    pub player: Option<PlayerOverlay>,
    pub current_floor: Option<u32>,
    pub auto_battle: Option<bool>,
    pub in_dungeon: Option<bool>,
    pub biome: Option<Biome>,
    pub dungeon_size: Option<DungeonSize>,
    pub last_save_time: Option<i64>,
}

/// Reads and writes the save file at one path.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// SaveManager for the default `~/.crawler/save_game.json`.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            save_path: default_save_path()?,
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes `state` and returns the timestamp stored in the file.
    pub fn save(&self, state: &GameState) -> Result<i64, SaveError> {
        let saved_at = Utc::now().timestamp();
        let player = state.player();
        let record = SaveRecord {
            player: PlayerRecord {
                name: &player.name,
                level: player.level,
                health: player.health,
                max_health: player.max_health,
                attack: player.attack,
                defense: player.defense,
                gold: player.gold,
                experience: player.experience,
                exp_to_next_level: player.exp_to_next_level,
                floors_cleared: player.floors_cleared,
                dungeons_completed: player.dungeons_completed,
            },
            current_floor: state.current_floor(),
            auto_battle: state.is_auto_battle(),
            in_dungeon: state.is_in_dungeon(),
            biome: state.current_biome(),
            dungeon_size: state.current_dungeon_size(),
            last_save_time: saved_at,
        };
        write_json(&self.save_path, &record)?;
        Ok(saved_at)
    }

    /// Parses the save file completely. Does not touch any game.
    pub fn load(&self) -> Result<SaveOverlay, SaveError> {
        read_json(&self.save_path)
    }
}

impl GameState {
    /// Saves to `path`. Returns false if the file could not be written.
    pub fn save_game(&mut self, path: &Path) -> bool {
        match SaveManager::with_path(path).save(self) {
            Ok(saved_at) => {
                self.last_save_time = Some(saved_at);
                tracing::info!(path = %path.display(), "game saved");
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                false
            }
        }
    }

    /// Loads from `path` over the current state.
    ///
    /// Returns false, leaving the game untouched, if the file is missing or
    /// does not parse.
    pub fn load_game<R: Rng>(&mut self, path: &Path, rng: &mut R) -> bool {
        match SaveManager::with_path(path).load() {
            Ok(overlay) => {
                self.apply_save(overlay, rng);
                tracing::info!(
                    path = %path.display(),
                    in_dungeon = self.in_dungeon,
                    "game loaded"
                );
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "load failed");
                false
            }
        }
    }

    /// Overlays a parsed save onto this game.
    ///
    /// Player keys that are present replace the current values. The session
    /// is only touched when `inDungeon` is present: a saved run is resumed on
    /// its floor with a fresh enemy if biome, size and floor all check out,
    /// otherwise the game returns to town.
    pub fn apply_save<R: Rng>(&mut self, overlay: SaveOverlay, rng: &mut R) {
        if let Some(p) = overlay.player {
            let player = &mut self.player;
            if let Some(name) = p.name {
                player.name = name;
            }
            if let Some(level) = p.level {
                player.level = level.max(1);
            }
            if let Some(health) = p.health {
                player.health = health;
            }
            if let Some(max_health) = p.max_health {
                player.max_health = max_health;
            }
            if let Some(attack) = p.attack {
                player.attack = attack;
            }
            if let Some(defense) = p.defense {
                player.defense = defense;
            }
            if let Some(gold) = p.gold {
                player.gold = gold;
            }
            if let Some(experience) = p.experience {
                player.experience = experience;
            }
            if let Some(exp_to_next_level) = p.exp_to_next_level {
                player.exp_to_next_level = exp_to_next_level.max(1);
            }
            if let Some(floors_cleared) = p.floors_cleared {
                player.floors_cleared = floors_cleared;
            }
            if let Some(dungeons_completed) = p.dungeons_completed {
                player.dungeons_completed = dungeons_completed;
            }
            // health <= max_health must survive a hand-edited file
            player.health = player.health.min(player.max_health);
            // Pay out any level-ups the stored experience already covers
            let levels = player.gain_experience(0);
            if levels > 0 {
                tracing::info!(levels, "applied pending level-ups from save");
            }
        }

        if let Some(saved_at) = overlay.last_save_time {
            self.last_save_time = Some(saved_at);
        }

        match (
            overlay.in_dungeon,
            overlay.biome,
            overlay.dungeon_size,
            overlay.current_floor,
        ) {
            (None, ..) => {}
            (Some(true), Some(biome), Some(size), Some(floor))
                if (1..=size.floors()).contains(&floor) =>
            {
                self.current_biome = biome;
                self.current_size = size;
                self.current_floor = floor;
                self.in_dungeon = true;
                self.auto_battle = overlay.auto_battle.unwrap_or(self.auto_battle);
                self.spawn_enemy(rng);
            }
            (Some(in_dungeon), ..) => {
                if in_dungeon {
                    tracing::warn!("saved dungeon run is incomplete, resuming in town");
                }
                self.return_to_town();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::Player;
    use crate::character::upgrades::UpgradeStat;
    use crate::core::game_state::DungeonPhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    fn seasoned_game() -> GameState {
        let mut game = GameState::new();
        let player = game.player_mut();
        player.name = "Ayla".to_string();
        player.level = 4;
        player.health = 77;
        player.max_health = 160;
        player.attack = 25;
        player.defense = 11;
        player.gold = 1234;
        player.experience = 42;
        player.exp_to_next_level = 337;
        player.floors_cleared = 19;
        player.dungeons_completed = 3;
        game
    }

    #[test]
    fn test_save_and_load_roundtrip_in_town() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("save_game.json");
        let mut rng = test_rng();

        let mut original = seasoned_game();
        assert!(original.save_game(&path));
        assert!(original.last_save_time().is_some());

        let mut loaded = GameState::new();
        assert!(loaded.load_game(&path, &mut rng));

        assert_eq!(loaded.player(), original.player());
        assert_eq!(loaded.current_floor(), original.current_floor());
        assert_eq!(loaded.is_in_dungeon(), original.is_in_dungeon());
        assert_eq!(loaded.is_auto_battle(), original.is_auto_battle());
        assert_eq!(loaded.last_save_time(), original.last_save_time());
    }

    #[test]
    fn test_save_and_load_resumes_dungeon_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("save_game.json");
        let mut rng = test_rng();

        let mut original = GameState::new();
        original.start_dungeon(Biome::Desert, DungeonSize::Medium, &mut rng);
        original.player_mut().attack = 1000;
        original.attack_enemy(&mut rng);
        original.attack_enemy(&mut rng);
        original.toggle_auto_battle();
        assert_eq!(original.current_floor(), 3);
        assert!(original.save_game(&path));

        let mut loaded = GameState::new();
        assert!(loaded.load_game(&path, &mut rng));

        assert_eq!(loaded.phase(), DungeonPhase::InCombat);
        assert_eq!(loaded.current_floor(), 3);
        assert_eq!(loaded.current_biome(), Biome::Desert);
        assert_eq!(loaded.current_dungeon_size(), DungeonSize::Medium);
        assert!(loaded.is_auto_battle());
        assert_eq!(loaded.player(), original.player());
        // Enemies are not saved; the floor's enemy is respawned at full health
        let enemy = loaded.current_enemy().expect("enemy respawned");
        assert_eq!(enemy.health, enemy.max_health);
        assert_eq!(
            enemy.max_health,
            original.current_enemy().map(|e| e.max_health).unwrap_or(0)
        );
    }

    #[test]
    fn test_saved_file_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("save_game.json");
        let mut game = GameState::new();
        assert!(game.save_game(&path));

        let text = fs::read_to_string(&path).expect("read save");
        let keys = [
            "\"player\"",
            "\"name\": \"Hero\"",
            "\"level\": 1",
            "\"health\": 100",
            "\"maxHealth\": 100",
            "\"attack\": 10",
            "\"defense\": 5",
            "\"gold\": 0",
            "\"experience\": 0",
            "\"expToNextLevel\": 100",
            "\"floorsCleared\": 0",
            "\"dungeonsCompleted\": 0",
            "\"currentFloor\": 0",
            "\"autoBattle\": false",
            "\"inDungeon\": false",
        ];
        let mut last = 0;
        for key in keys {
            let pos = text[last..]
                .find(key)
                .map(|p| p + last)
                .unwrap_or_else(|| panic!("{key} missing or out of order"));
            last = pos;
        }
    }

    #[test]
    fn test_missing_keys_keep_current_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "player": { "level": 7, "gold": 55 } }"#).expect("write");
        let mut rng = test_rng();

        let mut game = seasoned_game();
        let before = game.player().clone();
        assert!(game.load_game(&path, &mut rng));

        assert_eq!(game.player().level, 7);
        assert_eq!(game.player().gold, 55);
        assert_eq!(game.player().attack, before.attack);
        assert_eq!(game.player().defense, before.defense);
        assert_eq!(game.player().experience, before.experience);
        assert_eq!(game.player().name, before.name);
    }

    #[test]
    fn test_missing_session_keys_keep_active_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player_only.json");
        fs::write(&path, r#"{ "player": { "gold": 5 } }"#).expect("write");
        let mut rng = test_rng();

        let mut game = GameState::new();
        game.start_dungeon(Biome::Cave, DungeonSize::Small, &mut rng);
        assert!(game.load_game(&path, &mut rng));

        assert!(game.is_in_dungeon());
        assert_eq!(game.current_floor(), 1);
        assert!(game.current_enemy().is_some());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("extra.json");
        fs::write(
            &path,
            r#"{ "version": 9, "player": { "attack": 30, "mana": 12 }, "weather": "rain" }"#,
        )
        .expect("write");
        let mut rng = test_rng();

        let mut game = GameState::new();
        assert!(game.load_game(&path, &mut rng));
        assert_eq!(game.player().attack, 30);
    }

    #[test]
    fn test_truncated_file_changes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("truncated.json");
        fs::write(&path, "{\n  \"player\": {\n    \"level\": 9,\n    \"gold\": 99").expect("write");
        let mut rng = test_rng();

        let mut game = seasoned_game();
        let before = game.player().clone();
        assert!(!game.load_game(&path, &mut rng));
        assert_eq!(game.player(), &before);
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut rng = test_rng();
        let mut game = GameState::new();
        assert!(!game.load_game(&dir.path().join("nope.json"), &mut rng));
        assert_eq!(game.player(), &Player::new());

        let manager = SaveManager::with_path(dir.path().join("nope.json"));
        assert!(!manager.save_exists());
        assert!(matches!(manager.load(), Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut game = GameState::new();
        // Parent directory does not exist
        let path = dir.path().join("missing_dir").join("save_game.json");
        assert!(!game.save_game(&path));
        assert!(game.last_save_time().is_none());
    }

    #[test]
    fn test_in_dungeon_without_run_details_returns_to_town() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("legacy.json");
        fs::write(
            &path,
            r#"{ "player": { "level": 2 }, "currentFloor": 3, "autoBattle": true, "inDungeon": true }"#,
        )
        .expect("write");
        let mut rng = test_rng();

        let mut game = GameState::new();
        game.start_dungeon(Biome::Forest, DungeonSize::Small, &mut rng);
        assert!(game.load_game(&path, &mut rng));

        assert_eq!(game.phase(), DungeonPhase::Town);
        assert_eq!(game.current_floor(), 0);
        assert!(game.current_enemy().is_none());
        assert!(!game.is_auto_battle());
    }

    #[test]
    fn test_out_of_range_floor_returns_to_town() {
        let overlay = SaveOverlay {
            in_dungeon: Some(true),
            biome: Some(Biome::Ice),
            dungeon_size: Some(DungeonSize::Small),
            current_floor: Some(6),
            ..Default::default()
        };
        let mut rng = test_rng();
        let mut game = GameState::new();
        game.apply_save(overlay, &mut rng);
        assert_eq!(game.phase(), DungeonPhase::Town);
    }

    #[test]
    fn test_overlay_clamps_invalid_player_values() {
        let overlay = SaveOverlay {
            player: Some(PlayerOverlay {
                level: Some(0),
                health: Some(500),
                max_health: Some(120),
                exp_to_next_level: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut rng = test_rng();
        let mut game = GameState::new();
        game.apply_save(overlay, &mut rng);

        assert_eq!(game.player().level, 1);
        assert_eq!(game.player().health, 120);
        assert_eq!(game.player().exp_to_next_level, 1);
    }

    #[test]
    fn test_overlay_applies_pending_level_ups() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("banked_exp.json");
        fs::write(
            &path,
            r#"{ "player": { "experience": 500, "expToNextLevel": 100 } }"#,
        )
        .expect("write");
        let mut rng = test_rng();

        let mut game = GameState::new();
        assert!(game.load_game(&path, &mut rng));

        // 500 pays for 100 + 150 + 225, leaving 25 toward 337
        let player = game.player();
        assert_eq!(player.level, 4);
        assert_eq!(player.experience, 25);
        assert_eq!(player.exp_to_next_level, 337);
        assert!(player.experience < player.exp_to_next_level);
        assert_eq!(player.max_health, 160);
        assert_eq!(player.health, 160);
        assert_eq!(player.attack, 25);
        assert_eq!(player.defense, 11);
    }

    #[test]
    fn test_extreme_stats_from_file_do_not_overflow() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("maxed.json");
        fs::write(
            &path,
            r#"{ "player": { "maxHealth": 4294967290, "attack": 4294967295,
                 "defense": 4294967295, "level": 4294967295,
                 "gold": 18446744073709551615 } }"#,
        )
        .expect("write");
        let mut rng = test_rng();

        let mut game = GameState::new();
        assert!(game.load_game(&path, &mut rng));
        assert_eq!(game.upgrade_cost(UpgradeStat::Health), u64::MAX);
        assert!(game.upgrade_stat(UpgradeStat::Health));
        assert_eq!(game.player().max_health, u32::MAX);

        game.player_mut().gain_experience(100);
        let player = game.player();
        assert_eq!(player.level, u32::MAX);
        assert_eq!(player.attack, u32::MAX);
        assert_eq!(player.defense, u32::MAX);
        assert_eq!(player.health, u32::MAX);
    }

    #[test]
    fn test_wrong_value_type_fails_whole_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("typed.json");
        fs::write(&path, r#"{ "player": { "gold": 500, "level": "three" } }"#).expect("write");
        let mut rng = test_rng();

        let mut game = GameState::new();
        assert!(!game.load_game(&path, &mut rng));
        assert_eq!(game.player().gold, 0);
    }
}
