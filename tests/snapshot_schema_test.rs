//! Schema gate - the JSON shape of host-facing frames is a compatibility
//! contract; renaming a field must fail here first.

use match_rush::core::MatchSet;
use match_rush::engine::{CascadeStep, Engine, StateFrame, StepFrame};
use match_rush::types::Position;

#[test]
fn test_state_frame_schema() {
    let mut engine = Engine::new(77);
    engine.start_match().unwrap();
    engine.select_tile(Position::new(2, 5));

    let frame = StateFrame::from(&engine);
    let value = serde_json::to_value(&frame).expect("frame must serialize");
    let obj = value.as_object().expect("frame must be a JSON object");

    for key in [
        "board",
        "phase",
        "score",
        "chain",
        "multiplier",
        "remaining_secs",
        "selection",
        "spawned",
    ] {
        assert!(obj.contains_key(key), "missing field {:?}", key);
    }
    assert_eq!(obj.len(), 8, "unexpected extra fields in StateFrame");

    assert_eq!(value["phase"], "awaiting_second");
    assert_eq!(value["selection"], serde_json::json!([2, 5]));
    assert_eq!(value["board"].as_array().unwrap().len(), 7);
    assert_eq!(value["board"][0].as_array().unwrap().len(), 7);
}

#[test]
fn test_step_frame_schema() {
    let mut matched = MatchSet::new();
    matched.insert(Position::new(6, 0));
    matched.insert(Position::new(6, 1));
    matched.insert(Position::new(6, 2));

    let step = CascadeStep {
        board: [[1u8; 7]; 7],
        matched,
        spawned: MatchSet::new(),
        chain: 1,
        multiplier: 1.0,
        score: 30,
        done: false,
    };

    let value = serde_json::to_value(StepFrame::from(&step)).unwrap();
    let obj = value.as_object().unwrap();

    for key in ["board", "matched", "spawned", "chain", "multiplier", "score", "done"] {
        assert!(obj.contains_key(key), "missing field {:?}", key);
    }
    assert_eq!(obj.len(), 7, "unexpected extra fields in StepFrame");

    assert_eq!(
        value["matched"],
        serde_json::json!([[6, 0], [6, 1], [6, 2]])
    );
    assert_eq!(value["score"], 30);
    assert_eq!(value["done"], false);
}
