//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub biome: &'static str,
    pub dungeon_size: &'static str,
    pub floors: u32,
    pub num_runs: u32,
    pub attempts_per_run: u32,
    /// Runs that cleared the dungeon at least once
    pub runs_with_clear: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_final_gold: f64,
    pub avg_clears: f64,
    pub avg_deaths: f64,
    pub avg_timeouts: f64,
    pub avg_attacks: f64,
    pub avg_upgrades_bought: f64,
    pub avg_first_clear_attempt: Option<f64>,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    pub deepest_floor_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean<I: Iterator<Item = f64>>(values: I, count: u32) -> f64 {
    values.sum::<f64>() / count.max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_with_clear = runs.iter().filter(|r| r.dungeons_completed > 0).count() as u32;

        let avg_final_level = mean(runs.iter().map(|r| r.final_level as f64), num_runs);
        let avg_final_gold = mean(runs.iter().map(|r| r.final_gold as f64), num_runs);
        let avg_clears = mean(runs.iter().map(|r| r.dungeons_completed as f64), num_runs);
        let avg_deaths = mean(runs.iter().map(|r| r.deaths as f64), num_runs);
        let avg_timeouts = mean(runs.iter().map(|r| r.timeouts as f64), num_runs);
        let avg_attacks = mean(runs.iter().map(|r| r.total_attacks as f64), num_runs);
        let avg_upgrades_bought = mean(runs.iter().map(|r| r.upgrades_bought as f64), num_runs);
        let avg_first_clear_attempt = (runs_with_clear > 0).then(|| {
            mean(
                runs.iter()
                    .filter_map(|r| r.first_clear_attempt)
                    .map(|a| a as f64),
                runs_with_clear,
            )
        });

        let mut level_distribution = BTreeMap::new();
        let mut deepest_floor_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            *deepest_floor_distribution
                .entry(run.deepest_floor)
                .or_insert(0) += 1;
        }

        Self {
            biome: config.biome.display_name(),
            dungeon_size: config.size.display_name(),
            floors: config.size.floors(),
            num_runs,
            attempts_per_run: config.attempts_per_run,
            runs_with_clear,
            avg_final_level,
            avg_final_gold,
            avg_clears,
            avg_deaths,
            avg_timeouts,
            avg_attacks,
            avg_upgrades_bought,
            avg_first_clear_attempt,
            level_distribution,
            deepest_floor_distribution,
            run_stats: runs,
        }
    }

    /// Share of runs that cleared at least once, as a percentage.
    pub fn clear_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.runs_with_clear as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!(
            "               {} - {} ({} floors)\n",
            self.biome, self.dungeon_size, self.floors
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} attempts each, {} cleared at least once\n\n",
            self.num_runs, self.attempts_per_run, self.runs_with_clear
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Final Gold:      {:.0}\n", self.avg_final_gold));
        report.push_str(&format!("  Avg Clears:          {:.1}\n", self.avg_clears));
        report.push_str(&format!("  Avg Deaths:          {:.1}\n", self.avg_deaths));
        report.push_str(&format!("  Avg Timeouts:        {:.1}\n", self.avg_timeouts));
        report.push_str(&format!("  Avg Attacks:         {:.0}\n", self.avg_attacks));
        report.push_str(&format!(
            "  Avg Upgrades Bought: {:.1}\n",
            self.avg_upgrades_bought
        ));
        match self.avg_first_clear_attempt {
            Some(attempt) => {
                report.push_str(&format!("  Avg First Clear:     attempt {:.1}\n\n", attempt))
            }
            None => report.push_str("  Avg First Clear:     never\n\n"),
        }

        report.push_str("── DEEPEST FLOOR ────────────────────────────────────────────────\n");
        for (floor, count) in &self.deepest_floor_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Floor {:3}: {:>5.1}% {}\n", floor, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let clear_rate = self.clear_rate();
        let rating = if clear_rate > 95.0 && self.avg_deaths < 1.0 {
            "TOO EASY - Heroes rarely die"
        } else if clear_rate > 50.0 {
            "GOOD - Challenging but fair"
        } else if clear_rate > 10.0 {
            "HARD - Few heroes clear"
        } else {
            "TOO HARD - Almost nobody clears"
        };
        report.push_str(&format!("  Clear Rate:      {:.1}%\n", clear_rate));
        report.push_str(&format!("  Rating:          {}\n", rating));
        if self.avg_timeouts > 0.0 {
            report.push_str("  ⚠️  Some attempts hit the attack cap - stalemate fights?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
