pub mod config;
pub mod eval;
pub mod search;

use crate::board::*;
use crate::engine::config::*;
use crate::engine::search::*;
use rand::Rng;
use std::str::FromStr;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Difficulty, String> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: '{}'", other)),
        }
    }
}

// one participant, fixed at game setup. difficulty is None for humans.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub mark: Mark,
    pub difficulty: Option<Difficulty>,
}

impl Player {
    pub fn human(name: &str, mark: Mark) -> Player {
        Player {
            name: name.to_string(),
            mark,
            difficulty: None,
        }
    }

    pub fn computer(mark: Mark, difficulty: Difficulty) -> Player {
        Player {
            name: format!("{:?} AI {}", difficulty, mark.to_char()),
            mark,
            difficulty: Some(difficulty),
        }
    }

    pub fn is_computer(&self) -> bool {
        self.difficulty.is_some()
    }
}

// uniform-random empty cell by rejection sampling. The board must not
// be full or this never terminates.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Idx {
    debug_assert!(!board.is_full());
    loop {
        let index = rng.gen_range(0, BOARD_SIZE);
        if !board.is_occupied(index) {
            return index;
        }
    }
}

// one computer turn: pick a cell for `player` on the current board.
// The caller applies the move; the board comes back unchanged.
pub fn decide_move<R: Rng>(
    board: &mut Board,
    player: &Player,
    opponent: Mark,
    config: &PolicyConfig,
    rng: &mut R,
) -> Idx {
    debug_assert!(!board.is_full());
    match player.difficulty {
        Some(Difficulty::Easy) => random_move(board, rng),
        Some(Difficulty::Medium) => {
            if rng.gen::<f64>() < config.medium_search_chance {
                find_best_move(board, player.mark, opponent)
            } else {
                random_move(board, rng)
            }
        }
        Some(Difficulty::Hard) => find_best_move(board, player.mark, opponent),
        None => panic!("decide_move called for human player '{}'", player.name),
    }
}
