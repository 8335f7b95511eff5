//! Snapshots serialize for logging and view layers.

use tictactoe_engine::{GameEngine, GameState, Mark, Outcome};

#[test]
fn test_fresh_snapshot_json() {
    let json = serde_json::to_value(GameState::new()).expect("serializes");
    assert_eq!(json["turn"], "X");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["squares"].as_array().map(Vec::len), Some(9));
    assert_eq!(json["board"]["squares"][0], "Empty");
}

#[test]
fn test_won_snapshot_round_trips() {
    let mut engine = GameEngine::new();
    for index in [0, 4, 1, 5, 2] {
        engine.apply_move(index);
    }
    let state = engine.state();

    let text = serde_json::to_string(&state).expect("serializes");
    assert!(text.contains(r#""outcome":{"Won":"X"}"#));

    let back: GameState = serde_json::from_str(&text).expect("deserializes");
    assert_eq!(back, state);
    assert_eq!(*back.outcome(), Outcome::Won(Mark::X));
}
