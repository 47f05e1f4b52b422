//! Board model integration tests: transition, terminal and utility properties.

use std::io;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use proptest::sample::Index;
use tracing::Level;

use tictactoe_ab::core::{Action, Board, Cell, Player};
use tictactoe_ab::rules::{
    actions, game_result, initial_state, player, result, terminal, utility, winner, GameResult,
};
use tictactoe_ab::Error;

/// Boards reached by playing random legal moves from the empty board.
fn reachable_board(max_moves: usize) -> impl Strategy<Value = Board> {
    prop::collection::vec(any::<Index>(), 0..=max_moves).prop_map(|picks| {
        let mut board = initial_state();
        for pick in picks {
            if terminal(&board) {
                break;
            }
            let legal = actions(&board);
            board = result(&board, legal[pick.index(legal.len())]).unwrap();
        }
        board
    })
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();

    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert_eq!(game_result(&board), Some(GameResult::Draw));
}

#[test]
fn test_rows_constructor_matches_parser() {
    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Taken(Player::X);
    const O: Cell = Cell::Taken(Player::O);

    let from_rows = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]).unwrap();
    let parsed: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(from_rows, parsed);
    assert_eq!(player(&from_rows), Player::X);
}

#[test]
fn test_every_cell_of_empty_board_is_legal() {
    let board = initial_state();
    for index in 0..9 {
        let action = Action::from_index(index).unwrap();
        let next = result(&board, action).unwrap();
        assert_eq!(next.at(action), Some(Cell::Taken(Player::X)));
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Log sink shared between a test and its subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn reject_occupied_with_logs(level: Level) -> String {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert!(result(&board, Action::new(0, 0)).is_err());
    });
    logs.text()
}

#[test]
fn test_rejected_action_is_silent_at_info() {
    assert_eq!(reject_occupied_with_logs(Level::INFO), "");
}

#[test]
fn test_rejected_action_is_logged_at_debug() {
    let text = reject_occupied_with_logs(Level::DEBUG);
    assert!(text.contains("DEBUG"));
    assert!(text.contains("rejected action"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_terminal_iff_winner_or_full(board in reachable_board(9)) {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        prop_assert_eq!(terminal(&board), expected);
    }

    #[test]
    fn prop_count_invariant_holds(board in reachable_board(9)) {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn prop_result_changes_only_target(board in reachable_board(8), pick in any::<Index>()) {
        prop_assume!(!terminal(&board));
        let legal = actions(&board);
        let action = legal[pick.index(legal.len())];
        let before = board;

        let next = result(&board, action).unwrap();

        prop_assert_eq!(board, before);
        let target = action.index().unwrap();
        for i in 0..9 {
            if i == target {
                prop_assert_eq!(next.cells()[i], Cell::Taken(player(&board)));
            } else {
                prop_assert_eq!(next.cells()[i], board.cells()[i]);
            }
        }
    }

    #[test]
    fn prop_result_rejects_occupied(board in reachable_board(9)) {
        for index in 0..9 {
            if !board.cells()[index].is_empty() {
                let action = Action::from_index(index).unwrap();
                prop_assert_eq!(result(&board, action), Err(Error::InvalidAction { action }));
            }
        }
    }

    #[test]
    fn prop_result_rejects_out_of_range(board in reachable_board(9), row in 0u8..10, col in 3u8..10) {
        let action = Action::new(row, col);
        prop_assert_eq!(result(&board, action), Err(Error::InvalidAction { action }));
        let flipped = Action::new(col, row);
        prop_assert_eq!(result(&board, flipped), Err(Error::InvalidAction { action: flipped }));
    }

    #[test]
    fn prop_utility_matches_result(board in reachable_board(9)) {
        match game_result(&board) {
            Some(outcome) => prop_assert_eq!(outcome.utility(), utility(&board)),
            None => prop_assert!(!terminal(&board)),
        }
    }

    #[test]
    fn prop_display_parses_back(board in reachable_board(9)) {
        let text = board.to_string().replace("-+-+-", "");
        let parsed: Board = text.parse().unwrap();
        prop_assert_eq!(parsed, board);
    }
}
