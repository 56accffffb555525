use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::defaults::{default_stats, default_weights, machine_weights, DEFAULT_MUTATION_RATE};
use crate::errors::Result;

/// Weight vector over the named heuristic traits.
///
/// `structure`, `mobility` and `center` live in [0.0, 1.0]; `risk_penalty`
/// is optional, may be negative and is exempt from adaptation clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityWeights {
    pub structure: f64,
    pub mobility: f64,
    pub center: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_penalty: Option<f64>,
}

/// Per-personality win/loss/draw counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl OutcomeStats {
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Weights stay frozen until a personality has this many recorded games
const MIN_GAMES_TO_ADAPT: u32 = 10;

/// Below this win rate the weights are nudged up
const LOW_WIN_RATE: f64 = 0.3;

/// Above this win rate the weights are nudged down (at half the rate)
const HIGH_WIN_RATE: f64 = 0.7;

/// Durable per-personality outcome stats and weight profiles.
///
/// The store owns the authoritative in-memory copies: both documents are
/// loaded (or created from defaults) at construction, mutated only through
/// [`record_outcome`](Self::record_outcome) /
/// [`tune_weights`](Self::tune_weights) / [`reset_all`](Self::reset_all),
/// and written back after every update. The backing files are whole-document
/// JSON reads and writes with a single assumed writer; concurrent access
/// from several processes is out of scope.
#[derive(Debug)]
pub struct PersonalityStore {
    stats_path: PathBuf,
    weights_path: PathBuf,
    mutation_rate: f64,
    stats: BTreeMap<String, OutcomeStats>,
    weights: BTreeMap<String, PersonalityWeights>,
}

impl PersonalityStore {
    /// Load the stats and weights documents, creating either from built-in
    /// defaults when absent. A present but schema-mismatched document is a
    /// configuration error.
    pub fn open(stats_path: impl Into<PathBuf>, weights_path: impl Into<PathBuf>) -> Result<Self> {
        let stats_path = stats_path.into();
        let weights_path = weights_path.into();

        let stats = load_or_create(&stats_path, default_stats())?;
        let weights = load_or_create(&weights_path, default_weights())?;

        Ok(Self {
            stats_path,
            weights_path,
            mutation_rate: DEFAULT_MUTATION_RATE,
            stats,
            weights,
        })
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Write both documents back to their backing files
    pub fn save(&self) -> Result<()> {
        write_document(&self.stats_path, &self.stats)?;
        write_document(&self.weights_path, &self.weights)
    }

    /// Record a finished game for `personality` and adapt its weights.
    ///
    /// `result` must be one of `"win"`, `"loss"` or `"draw"`; anything else
    /// is a logged no-op, as is an unknown personality name. Recognized
    /// outcomes increment the matching counter, run weight tuning and
    /// persist both documents.
    pub fn record_outcome(&mut self, personality: &str, result: &str) -> Result<()> {
        if !matches!(result, "win" | "loss" | "draw") {
            warn!("ignoring unrecognized game result {:?} for {}", result, personality);
            return Ok(());
        }

        let Some(stats) = self.stats.get_mut(personality) else {
            warn!("ignoring outcome for unknown personality {:?}", personality);
            return Ok(());
        };

        match result {
            "win" => stats.wins += 1,
            "loss" => stats.losses += 1,
            "draw" => stats.draws += 1,
            _ => unreachable!(),
        }

        self.tune_weights(personality);
        info!(
            "[{}] win rate: {}% | weights: {:?}",
            personality,
            self.win_rate(personality),
            self.weights.get(personality),
        );
        self.save()
    }

    /// Nudge `personality`'s weights based on its cumulative win rate.
    ///
    /// With fewer than 10 recorded games the profile is frozen. A win rate
    /// under 0.3 adds the mutation rate to every trait, one over 0.7
    /// subtracts half of it; adjusted traits are clamped to [0.0, 1.0].
    /// `risk_penalty` is never touched.
    pub fn tune_weights(&mut self, personality: &str) {
        let Some(stats) = self.stats.get(personality) else {
            return;
        };
        let total_games = stats.total();
        if total_games < MIN_GAMES_TO_ADAPT {
            return;
        }
        let win_rate = stats.wins as f64 / total_games as f64;

        let Some(weights) = self.weights.get_mut(personality) else {
            return;
        };

        let delta = if win_rate < LOW_WIN_RATE {
            self.mutation_rate
        } else if win_rate > HIGH_WIN_RATE {
            -self.mutation_rate * 0.5
        } else {
            return;
        };

        weights.structure = (weights.structure + delta).clamp(0.0, 1.0);
        weights.mobility = (weights.mobility + delta).clamp(0.0, 1.0);
        weights.center = (weights.center + delta).clamp(0.0, 1.0);
    }

    /// Weight profile for `personality`; unrecognized names fall back to the
    /// machine defaults
    pub fn weights_for(&self, personality: &str) -> PersonalityWeights {
        self.weights
            .get(personality)
            .copied()
            .unwrap_or_else(machine_weights)
    }

    pub fn stats_for(&self, personality: &str) -> Option<&OutcomeStats> {
        self.stats.get(personality)
    }

    pub fn personalities(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Uniform-random pick among the configured personality names. The
    /// random source is injected so selection is deterministic under test.
    pub fn choose_personality<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let names: Vec<&str> = self.personalities().collect();
        names[rng.gen_range(0..names.len())]
    }

    /// Win percentage rounded to 2 decimals, 0 when no games are recorded
    pub fn win_rate(&self, personality: &str) -> f64 {
        let Some(stats) = self.stats.get(personality) else {
            return 0.0;
        };
        let total = stats.total();
        if total == 0 {
            return 0.0;
        }
        (stats.wins as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
    }

    /// Restore built-in default stats and weights and persist them
    pub fn reset_all(&mut self) -> Result<()> {
        self.stats = default_stats();
        self.weights = default_weights();
        self.save()
    }

    /// Log every personality's win rate and current weights
    pub fn log_summary(&self) {
        for name in self.weights.keys() {
            info!(
                "{:<13} -> win rate: {:>6.2}% | weights: {:?}",
                name,
                self.win_rate(name),
                self.weights[name],
            );
        }
    }
}

fn load_or_create<T>(path: &Path, default: T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    if !path.exists() {
        write_document(path, &default)?;
        return Ok(default);
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}
