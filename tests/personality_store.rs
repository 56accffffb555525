use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use persona_chess::personality::{PersonalityStore, PERSONALITIES};
use persona_chess::EngineError;

fn open_in(dir: &tempfile::TempDir) -> PersonalityStore {
    let _ = env_logger::builder().is_test(true).try_init();
    PersonalityStore::open(dir.path().join("stats.json"), dir.path().join("weights.json"))
        .expect("store should open")
}

#[test]
fn absent_documents_are_created_with_defaults() {
    let dir = tempdir().unwrap();
    let store = open_in(&dir);

    assert!(dir.path().join("stats.json").exists());
    assert!(dir.path().join("weights.json").exists());

    let machine = store.weights_for("machine");
    assert_eq!(machine.structure, 0.4);
    assert_eq!(machine.mobility, 0.5);
    assert_eq!(machine.center, 0.25);
    assert_eq!(machine.risk_penalty, None);

    let gambiteer = store.weights_for("gambiteer");
    assert_eq!(gambiteer.risk_penalty, Some(-0.1));

    for name in PERSONALITIES {
        assert_eq!(store.stats_for(name).unwrap().total(), 0);
    }
}

#[test]
fn unknown_personality_falls_back_to_machine_weights() {
    let dir = tempdir().unwrap();
    let store = open_in(&dir);

    assert_eq!(store.weights_for("swindler"), store.weights_for("machine"));
}

#[test]
fn outcomes_round_trip_through_the_documents() {
    let dir = tempdir().unwrap();

    {
        let mut store = open_in(&dir);
        store.record_outcome("grinder", "win").unwrap();
        store.record_outcome("grinder", "loss").unwrap();
        store.record_outcome("romantic", "draw").unwrap();
    }

    let reloaded = open_in(&dir);
    let grinder = reloaded.stats_for("grinder").unwrap();
    assert_eq!((grinder.wins, grinder.losses, grinder.draws), (1, 1, 0));
    assert_eq!(reloaded.stats_for("romantic").unwrap().draws, 1);
    assert_eq!(reloaded.weights_for("grinder"), {
        let fresh = open_in(&tempdir().unwrap());
        fresh.weights_for("grinder")
    });
}

#[test]
fn unrecognized_result_label_is_a_silent_no_op() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);

    store.record_outcome("machine", "victory").unwrap();
    store.record_outcome("machine", "").unwrap();

    assert_eq!(store.stats_for("machine").unwrap().total(), 0);
}

#[test]
fn unknown_personality_outcome_is_a_no_op() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);

    store.record_outcome("swindler", "win").unwrap();

    for name in PERSONALITIES {
        assert_eq!(store.stats_for(name).unwrap().total(), 0);
    }
}

#[test]
fn weights_are_frozen_below_ten_games() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);
    let before = store.weights_for("positionalist");

    for _ in 0..9 {
        store.record_outcome("positionalist", "loss").unwrap();
    }

    assert_eq!(store.weights_for("positionalist"), before);
}

#[test]
fn low_win_rate_adds_the_mutation_rate() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);

    // 2 wins, 8 losses: the tenth game lands at win rate 0.2
    for _ in 0..2 {
        store.record_outcome("positionalist", "win").unwrap();
    }
    for _ in 0..8 {
        store.record_outcome("positionalist", "loss").unwrap();
    }

    let tuned = store.weights_for("positionalist");
    assert!((tuned.structure - 0.62).abs() < 1e-9);
    assert!((tuned.mobility - 0.32).abs() < 1e-9);
    assert!((tuned.center - 0.42).abs() < 1e-9);
}

#[test]
fn high_win_rate_subtracts_half_the_mutation_rate() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);

    // 8 wins, 2 draws: the tenth game lands at win rate 0.8
    for _ in 0..8 {
        store.record_outcome("machine", "win").unwrap();
    }
    for _ in 0..2 {
        store.record_outcome("machine", "draw").unwrap();
    }

    let tuned = store.weights_for("machine");
    assert!((tuned.structure - 0.39).abs() < 1e-9);
    assert!((tuned.mobility - 0.49).abs() < 1e-9);
    assert!((tuned.center - 0.24).abs() < 1e-9);
}

#[test]
fn risk_penalty_is_exempt_from_adaptation() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);

    for _ in 0..10 {
        store.record_outcome("gambiteer", "loss").unwrap();
    }

    let tuned = store.weights_for("gambiteer");
    assert!((tuned.structure - 0.22).abs() < 1e-9);
    assert_eq!(tuned.risk_penalty, Some(-0.1), "risk term never adapts");
}

#[test]
fn adapted_weights_clamp_to_the_unit_interval() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir).with_mutation_rate(0.5);

    for _ in 0..10 {
        store.record_outcome("romantic", "loss").unwrap();
    }
    let raised = store.weights_for("romantic");
    assert_eq!(raised.mobility, 1.0, "0.8 + 0.5 clamps at 1.0");
    assert!((raised.structure - 0.6).abs() < 1e-9);

    let mut store = store.with_mutation_rate(2.0);
    for _ in 0..10 {
        store.record_outcome("grinder", "win").unwrap();
    }
    let lowered = store.weights_for("grinder");
    assert_eq!(lowered.structure, 0.0, "0.7 - 1.0 clamps at 0.0");
    assert_eq!(lowered.mobility, 0.0);
    assert_eq!(lowered.center, 0.0);
}

#[test]
fn win_rate_is_a_rounded_percentage() {
    let dir = tempdir().unwrap();
    let mut store = open_in(&dir);

    assert_eq!(store.win_rate("machine"), 0.0);

    store.record_outcome("machine", "win").unwrap();
    store.record_outcome("machine", "loss").unwrap();
    store.record_outcome("machine", "loss").unwrap();

    assert_eq!(store.win_rate("machine"), 33.33);
    assert_eq!(store.win_rate("swindler"), 0.0);
}

#[test]
fn choose_personality_is_deterministic_with_a_seeded_rng() {
    let dir = tempdir().unwrap();
    let store = open_in(&dir);

    let first = store.choose_personality(&mut StdRng::seed_from_u64(42)).to_string();
    let second = store.choose_personality(&mut StdRng::seed_from_u64(42)).to_string();

    assert_eq!(first, second);
    assert!(PERSONALITIES.contains(&first.as_str()));
}

#[test]
fn reset_all_restores_and_persists_defaults() {
    let dir = tempdir().unwrap();

    {
        let mut store = open_in(&dir);
        for _ in 0..10 {
            store.record_outcome("romantic", "loss").unwrap();
        }
        store.reset_all().unwrap();
    }

    let reloaded = open_in(&dir);
    assert_eq!(reloaded.stats_for("romantic").unwrap().total(), 0);
    assert_eq!(reloaded.weights_for("romantic").structure, 0.1);
}

#[test]
fn schema_mismatched_document_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stats.json"), "{\"machine\": \"not-a-record\"}").unwrap();

    let result = PersonalityStore::open(
        dir.path().join("stats.json"),
        dir.path().join("weights.json"),
    );

    assert!(matches!(result, Err(EngineError::Configuration(_))));
}
