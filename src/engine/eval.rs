use crate::board::*;
use crate::engine::config::*;

/*
The 8 winning lines as occupancy masks, in rows -> columns -> diagonals
order. LINE_CELLS holds the same lines as index triples for display.
*/
pub static LINES: [B9; 8] = [
    0b000000111, // 0 1 2
    0b000111000, // 3 4 5
    0b111000000, // 6 7 8
    0b001001001, // 0 3 6
    0b010010010, // 1 4 7
    0b100100100, // 2 5 8
    0b100010001, // 0 4 8
    0b001010100, // 2 4 6
];

pub static LINE_CELLS: [[Idx; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameResult {
    Won(Mark),
    Draw,
    Ongoing,
}

// score the board for `subject`: +10 if a line is all subject's,
// -10 if all the opponent's, 0 otherwise. Zero means in-progress OR tie;
// callers separate the two with is_full(). Reads cell values only, so it
// is well-defined on boards unreachable under legal play.
pub fn evaluate(board: &Board, subject: Mark, other: Mark) -> Score {
    let subject_occ = board.mark_occ(subject);
    let other_occ = board.mark_occ(other);
    for line in &LINES {
        if subject_occ & line == *line {
            return SCORE_WIN;
        }
        if other_occ & line == *line {
            return SCORE_LOSS;
        }
    }
    return 0;
}

// the first completed line for `mark`, as cell indices
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Idx; 3]> {
    let occ = board.mark_occ(mark);
    for (i, line) in LINES.iter().enumerate() {
        if occ & line == *line {
            return Some(LINE_CELLS[i]);
        }
    }
    return None;
}

pub fn game_result(board: &Board) -> GameResult {
    if winning_line(board, Mark::X).is_some() {
        return GameResult::Won(Mark::X);
    }
    if winning_line(board, Mark::O).is_some() {
        return GameResult::Won(Mark::O);
    }
    if board.is_full() {
        return GameResult::Draw;
    }
    return GameResult::Ongoing;
}
