//! Integration tests for sessions, traces, and self-play collection.

use gridgame::core::Player;
use gridgame::error::Error;
use gridgame::games::tictactoe::TicTacToe;
use gridgame::rules::GameStatus;
use gridgame::training::{GameSession, SelfPlayConfig, SelfPlayWorker, TraceBuffer};

// =============================================================================
// Session Lifecycle
// =============================================================================

#[test]
fn test_session_plays_a_full_game() {
    let mut session = GameSession::new(TicTacToe::new());

    for slot in [4, 0, 8, 2, 6, 3, 7] {
        assert!(!session.is_over());
        session.play(slot).unwrap();
    }

    // One holds 4, 8, 6, 7: the 6-7-8 bottom row completes last.
    assert_eq!(session.status(), GameStatus::PlayerOneWin);
    assert_eq!(session.past_states().len(), 8);
    assert_eq!(session.moves_for(Player::One), &[4, 8, 6, 7]);
    assert_eq!(session.moves_for(Player::Two), &[0, 2, 3]);
}

#[test]
fn test_finished_session_rejects_every_slot() {
    let mut session = GameSession::new(TicTacToe::new());
    for slot in [0, 3, 1, 4, 2] {
        session.play(slot).unwrap();
    }
    assert!(session.is_over());

    for slot in 0..9 {
        let err = session.play(slot).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { .. }));
    }

    // By name too, including cells that are still empty.
    let err = session.play_by_name("2, 2").unwrap_err();
    assert!(matches!(err, Error::IllegalMove { slot: 8, .. }));
}

#[test]
fn test_session_reprompt_flow() {
    // The interactive loop's contract: bad input errors are retryable and
    // change nothing.
    let mut session = GameSession::new(TicTacToe::new());
    session.play_by_name("1, 1").unwrap();

    assert!(session.play_by_name("not a move").is_err());
    assert!(session.play_by_name("1, 1").is_err());
    assert_eq!(session.to_move(), Player::Two);

    // A corrected retry succeeds.
    session.play_by_name("0, 1").unwrap();
    assert_eq!(session.to_move(), Player::One);
}

#[test]
fn test_session_valid_move_names_shrink() {
    let mut session = GameSession::new(TicTacToe::new());
    assert_eq!(session.valid_move_names().len(), 9);

    session.play_by_name("0, 0").unwrap();
    let names = session.valid_move_names();
    assert_eq!(names.len(), 8);
    assert!(!names.contains(&"0, 0"));
}

// =============================================================================
// Traces
// =============================================================================

#[test]
fn test_trace_captures_whole_game() {
    let mut session = GameSession::new(TicTacToe::new());
    for slot in [0, 3, 1, 4, 2] {
        session.play(slot).unwrap();
    }

    let trace = session.trace();

    assert_eq!(trace.states.len(), 6);
    assert_eq!(trace.move_count(), 5);
    assert_eq!(trace.status, GameStatus::PlayerOneWin);
    assert_eq!(trace.rewards()[Player::One], 1.0);
    assert_eq!(trace.rewards()[Player::Two], 0.0);

    // First snapshot is the empty board, last is the winning position.
    assert!(trace.states[0].iter_cells().all(|c| c == 0));
    assert_eq!(trace.final_state().get(0, 2), Player::One.code());
}

#[test]
fn test_trace_buffer_round_trips_through_disk() {
    let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
    let mut buffer = TraceBuffer::new(100);
    for trace in worker.play_games(5).unwrap() {
        buffer.push(trace);
    }

    let path = std::env::temp_dir().join("gridgame_session_tests_buffer.bin");
    buffer.save(&path).unwrap();
    let loaded = TraceBuffer::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.len(), buffer.len());
    assert_eq!(loaded.total_moves(), buffer.total_moves());
    for (a, b) in loaded.iter().zip(buffer.iter()) {
        assert_eq!(a, b);
    }
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_self_play_batch_terminates() {
    let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());

    for trace in worker.play_games(25).unwrap() {
        assert!(trace.status.is_terminal());
        assert!((5..=9).contains(&trace.move_count()));
        assert_eq!(trace.states.len(), trace.move_count() + 1);

        // Consecutive snapshots differ by exactly one new piece.
        for pair in trace.states.windows(2) {
            let filled_before = 9 - pair[0].count(0);
            let filled_after = 9 - pair[1].count(0);
            assert_eq!(filled_after, filled_before + 1);
        }
    }
}

#[test]
fn test_self_play_is_reproducible() {
    let config = SelfPlayConfig::default().with_seed_offset(77);

    let mut worker1 = SelfPlayWorker::new(TicTacToe::new(), config.clone());
    let mut worker2 = SelfPlayWorker::new(TicTacToe::new(), config);

    let batch1 = worker1.play_games(10).unwrap();
    let batch2 = worker2.play_games(10).unwrap();

    assert_eq!(batch1, batch2);
}
