use crate::character::player::Player;
use crate::combat::types::Enemy;
use crate::dungeon::logic::is_boss_floor;
use crate::dungeon::types::{Biome, DungeonSize, DungeonSizeInfo};

/// Where the player currently is in the dungeon loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DungeonPhase {
    /// Between runs: floor 0, no enemy
    Town,
    /// Inside a dungeon facing a live enemy
    InCombat,
}

/// The progression engine: the player, the current enemy slot and the
/// dungeon-run session.
///
/// Session fields are private so that only the transitions in
/// `core::game_logic` can move between [`DungeonPhase`]s.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) player: Player,
    pub(crate) current_biome: Biome,
    pub(crate) current_size: DungeonSize,
    /// 0 in town, 1..=floors while inside a dungeon
    pub(crate) current_floor: u32,
    pub(crate) current_enemy: Option<Enemy>,
    pub(crate) auto_battle: bool,
    pub(crate) in_dungeon: bool,
    /// Unix seconds of the last successful save or load, if any
    pub(crate) last_save_time: Option<i64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with a base-stat hero standing in town.
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            current_biome: Biome::Forest,
            current_size: DungeonSize::Small,
            current_floor: 0,
            current_enemy: None,
            auto_battle: false,
            in_dungeon: false,
            last_save_time: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn current_biome(&self) -> Biome {
        self.current_biome
    }

    pub fn current_dungeon_size(&self) -> DungeonSize {
        self.current_size
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn current_enemy(&self) -> Option<&Enemy> {
        self.current_enemy.as_ref()
    }

    pub fn is_auto_battle(&self) -> bool {
        self.auto_battle
    }

    pub fn is_in_dungeon(&self) -> bool {
        self.in_dungeon
    }

    pub fn last_save_time(&self) -> Option<i64> {
        self.last_save_time
    }

    pub fn phase(&self) -> DungeonPhase {
        if self.in_dungeon {
            DungeonPhase::InCombat
        } else {
            DungeonPhase::Town
        }
    }

    /// Floor count of the current (or last selected) dungeon size.
    pub fn floor_count(&self) -> u32 {
        self.current_size.floors()
    }

    /// True while fighting the final-floor boss.
    pub fn is_boss_floor(&self) -> bool {
        self.in_dungeon && is_boss_floor(self.current_floor, self.current_size)
    }

    pub fn biome_name(&self, biome: Biome) -> &'static str {
        biome.display_name()
    }

    pub fn dungeon_size_info(&self, size: DungeonSize) -> DungeonSizeInfo {
        size.info()
    }

    pub fn all_biomes(&self) -> [Biome; 5] {
        Biome::all()
    }

    pub fn all_dungeon_sizes(&self) -> [DungeonSize; 4] {
        DungeonSize::all()
    }

    /// Drops the current run and returns to town. Shared by completion,
    /// death and flee; callers decide whether the player is healed.
    pub(crate) fn return_to_town(&mut self) {
        self.current_floor = 0;
        self.current_enemy = None;
        self.in_dungeon = false;
        self.auto_battle = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_in_town() {
        let game = GameState::new();
        assert_eq!(game.phase(), DungeonPhase::Town);
        assert_eq!(game.current_floor(), 0);
        assert!(game.current_enemy().is_none());
        assert!(!game.is_in_dungeon());
        assert!(!game.is_auto_battle());
        assert!(game.last_save_time().is_none());
        assert_eq!(game.player(), &Player::new());
    }

    #[test]
    fn test_enumerations() {
        let game = GameState::new();
        assert_eq!(game.all_biomes().len(), 5);
        assert_eq!(game.all_dungeon_sizes().len(), 4);
        assert_eq!(game.biome_name(Biome::Ice), "Ice Cavern");
        assert_eq!(game.dungeon_size_info(DungeonSize::Large).floors, 20);
    }

    #[test]
    fn test_not_boss_floor_in_town() {
        let game = GameState::new();
        assert!(!game.is_boss_floor());
    }

    #[test]
    fn test_return_to_town_clears_session() {
        let mut game = GameState::new();
        game.current_floor = 3;
        game.in_dungeon = true;
        game.auto_battle = true;
        game.current_enemy = Some(Enemy::new("Bat".to_string(), 5, 1, 1, 1, 1));
        game.player.health = 10;

        game.return_to_town();

        assert_eq!(game.phase(), DungeonPhase::Town);
        assert_eq!(game.current_floor(), 0);
        assert!(game.current_enemy().is_none());
        assert!(!game.is_auto_battle());
        // healing is the caller's call
        assert_eq!(game.player().health, 10);
    }
}
