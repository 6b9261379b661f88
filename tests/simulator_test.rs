//! Integration test: balance simulator over the real engine

use crawler::dungeon::DungeonSize;
use crawler::simulator::{run_simulation, SimConfig};

fn quick_config() -> SimConfig {
    SimConfig {
        num_runs: 4,
        seed: Some(42),
        attempts_per_run: 10,
        verbosity: 0,
        ..Default::default()
    }
}

#[test]
fn test_small_dungeon_gets_cleared_with_shop() {
    let report = run_simulation(&quick_config());
    assert_eq!(report.num_runs, 4);
    // Combat has no dice: every hero clears by the fifth attempt
    assert_eq!(report.runs_with_clear, 4);
    assert_eq!(report.avg_first_clear_attempt, Some(5.0));
    assert!(report.avg_deaths >= 4.0);
    assert_eq!(report.avg_timeouts, 0.0);
}

#[test]
fn test_no_shop_progresses_slower() {
    let shop = run_simulation(&quick_config());
    let no_shop = run_simulation(&SimConfig {
        buy_upgrades: false,
        ..quick_config()
    });
    assert_eq!(no_shop.avg_upgrades_bought, 0.0);
    assert!(no_shop.avg_final_gold > shop.avg_final_gold);
    assert!(shop.avg_clears >= no_shop.avg_clears);
}

#[test]
fn test_epic_dungeon_is_out_of_reach_early() {
    let report = run_simulation(&SimConfig {
        size: DungeonSize::Epic,
        attempts_per_run: 3,
        ..quick_config()
    });
    assert_eq!(report.runs_with_clear, 0);
    assert!(report.avg_first_clear_attempt.is_none());
    assert!(report.to_text().contains("TOO HARD"));
}

#[test]
fn test_json_report_parses() {
    let report = run_simulation(&quick_config());
    let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(value["num_runs"], 4);
    assert_eq!(value["dungeon_size"], "Small");
    assert_eq!(value["floors"], 5);
}
