//! Computer-vs-computer games.
//!
//! Each side plays at its own difficulty. Every applied move is recorded,
//! and the record can be stepped back through to rebuild each board,
//! which is all a replay display needs.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Action, Board, GameRng, MoveRecord, Player};
use crate::error::Result;
use crate::policy::{ai_move, AiPlayer, Difficulty};
use crate::rules::{game_result, initial_state, player, result, GameResult};

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Difficulty X played at.
    pub x_difficulty: Difficulty,

    /// Difficulty O played at.
    pub o_difficulty: Difficulty,

    /// Moves in the order they were applied.
    pub moves: Vector<MoveRecord>,

    /// The terminal board.
    pub final_board: Board,

    /// How the game ended.
    pub result: GameResult,
}

impl GameRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Difficulty the given side played at.
    #[must_use]
    pub fn difficulty(&self, side: Player) -> Difficulty {
        match side {
            Player::X => self.x_difficulty,
            Player::O => self.o_difficulty,
        }
    }

    /// Terminal utility from X's perspective.
    #[must_use]
    pub fn utility(&self) -> i32 {
        self.result.utility()
    }

    /// Every board of the game, from the empty board to the final one.
    ///
    /// Rebuilt by re-applying the recorded moves, so the result has
    /// `len() + 1` entries.
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut board = initial_state();
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(board);
        for record in self.moves.iter() {
            board = result(&board, record.action)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

/// Play one game with X and O at the given difficulties.
///
/// Medium uses the default coin-flip probability. Both sides draw from `rng`.
#[instrument(level = "debug", skip(rng))]
pub fn play_game(x: Difficulty, o: Difficulty, rng: &mut GameRng) -> Result<GameRecord> {
    run_game(x, o, |board, difficulty| ai_move(board, difficulty, rng))
}

/// Play one game with both sides choosing through `ai`.
///
/// Uses the player's configured Medium-tier probability and RNG stream.
pub fn play_game_with(x: Difficulty, o: Difficulty, ai: &mut AiPlayer) -> Result<GameRecord> {
    run_game(x, o, |board, difficulty| ai.choose(board, difficulty))
}

fn run_game(
    x: Difficulty,
    o: Difficulty,
    mut choose: impl FnMut(&Board, Difficulty) -> Result<Action>,
) -> Result<GameRecord> {
    let mut board = initial_state();
    let mut moves = Vector::new();

    let outcome = loop {
        if let Some(outcome) = game_result(&board) {
            break outcome;
        }

        let mover = player(&board);
        let difficulty = match mover {
            Player::X => x,
            Player::O => o,
        };
        let action = choose(&board, difficulty)?;
        board = result(&board, action)?;
        moves.push_back(MoveRecord::new(moves.len() as u32, mover, action));
    };

    debug!(?outcome, moves = moves.len(), "game finished");

    Ok(GameRecord {
        x_difficulty: x,
        o_difficulty: o,
        moves,
        final_board: board,
        result: outcome,
    })
}
