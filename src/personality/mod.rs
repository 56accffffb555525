pub mod defaults;
mod store;

pub use defaults::{DEFAULT_MUTATION_RATE, PERSONALITIES};
pub use store::{OutcomeStats, PersonalityStore, PersonalityWeights};
