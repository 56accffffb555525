//! Built-in default stats and weight profiles.
//!
//! Defaults are produced as fresh owned values so a store can never leak
//! mutations back into shared configuration.

use std::collections::BTreeMap;

use super::store::{OutcomeStats, PersonalityWeights};

/// The closed set of personality identifiers
pub const PERSONALITIES: [&str; 5] = [
    "machine",
    "positionalist",
    "gambiteer",
    "grinder",
    "romantic",
];

/// Increment applied to weights during adaptation
pub const DEFAULT_MUTATION_RATE: f64 = 0.02;

/// Fallback profile for unrecognized personality names
pub fn machine_weights() -> PersonalityWeights {
    PersonalityWeights {
        structure: 0.4,
        mobility: 0.5,
        center: 0.25,
        risk_penalty: None,
    }
}

pub fn default_weights() -> BTreeMap<String, PersonalityWeights> {
    let mut weights = BTreeMap::new();
    weights.insert(
        "positionalist".to_string(),
        PersonalityWeights {
            structure: 0.6,
            mobility: 0.3,
            center: 0.4,
            risk_penalty: None,
        },
    );
    weights.insert(
        "gambiteer".to_string(),
        PersonalityWeights {
            structure: 0.2,
            mobility: 0.7,
            center: 0.1,
            risk_penalty: Some(-0.1),
        },
    );
    weights.insert(
        "grinder".to_string(),
        PersonalityWeights {
            structure: 0.7,
            mobility: 0.4,
            center: 0.3,
            risk_penalty: None,
        },
    );
    weights.insert(
        "romantic".to_string(),
        PersonalityWeights {
            structure: 0.1,
            mobility: 0.8,
            center: 0.2,
            risk_penalty: None,
        },
    );
    weights.insert("machine".to_string(), machine_weights());
    weights
}

pub fn default_stats() -> BTreeMap<String, OutcomeStats> {
    PERSONALITIES
        .iter()
        .map(|name| (name.to_string(), OutcomeStats::default()))
        .collect()
}
