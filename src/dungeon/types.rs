//! Dungeon configuration tables: biomes, their enemy pools, and size tiers.
//!
//! All tables are static and indexed by enum variant.

use serde::{Deserialize, Serialize};

/// Where a dungeon takes place. Decides enemy names and the boss title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Forest,
    Cave,
    Desert,
    Ice,
    Volcano,
}

impl Biome {
    /// All biomes in menu order.
    pub fn all() -> [Biome; 5] {
        [
            Biome::Forest,
            Biome::Cave,
            Biome::Desert,
            Biome::Ice,
            Biome::Volcano,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Biome::Forest => "Forest",
            Biome::Cave => "Cave",
            Biome::Desert => "Desert",
            Biome::Ice => "Ice Cavern",
            Biome::Volcano => "Volcano",
        }
    }

    /// Regular enemy names for this biome. Never empty.
    pub fn enemy_pool(&self) -> &'static [&'static str] {
        match self {
            Biome::Forest => &["Goblin", "Wolf", "Bear", "Troll"],
            Biome::Cave => &["Bat", "Spider", "Slime", "Golem"],
            Biome::Desert => &["Scorpion", "Snake", "Mummy", "Sand Elemental"],
            Biome::Ice => &["Ice Sprite", "Frost Wolf", "Yeti", "Ice Dragon"],
            Biome::Volcano => &["Fire Imp", "Lava Golem", "Magma Worm", "Phoenix"],
        }
    }

    /// Name given to the final-floor enemy, e.g. "Forest Boss".
    pub fn boss_name(&self) -> String {
        format!("{} Boss", self.display_name())
    }
}

/// Display metadata and scaling for a dungeon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DungeonSizeInfo {
    pub display_name: &'static str,
    pub floors: u32,
    pub difficulty_multiplier: f64,
}

/// Size tier of a dungeon run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonSize {
    /// 5 floors, 1.0x
    Small,
    /// 10 floors, 1.5x
    Medium,
    /// 20 floors, 2.0x
    Large,
    /// 50 floors, 3.0x
    Epic,
}

impl DungeonSize {
    /// All sizes in menu order.
    pub fn all() -> [DungeonSize; 4] {
        [
            DungeonSize::Small,
            DungeonSize::Medium,
            DungeonSize::Large,
            DungeonSize::Epic,
        ]
    }

    pub fn info(&self) -> DungeonSizeInfo {
        match self {
            DungeonSize::Small => DungeonSizeInfo {
                display_name: "Small",
                floors: 5,
                difficulty_multiplier: 1.0,
            },
            DungeonSize::Medium => DungeonSizeInfo {
                display_name: "Medium",
                floors: 10,
                difficulty_multiplier: 1.5,
            },
            DungeonSize::Large => DungeonSizeInfo {
                display_name: "Large",
                floors: 20,
                difficulty_multiplier: 2.0,
            },
            DungeonSize::Epic => DungeonSizeInfo {
                display_name: "Epic",
                floors: 50,
                difficulty_multiplier: 3.0,
            },
        }
    }

    pub fn floors(&self) -> u32 {
        self.info().floors
    }

    pub fn difficulty_multiplier(&self) -> f64 {
        self.info().difficulty_multiplier
    }

    pub fn display_name(&self) -> &'static str {
        self.info().display_name
    }
}
