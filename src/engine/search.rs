use crate::board::*;
use crate::engine::config::*;
use crate::engine::eval::*;
use std::collections::HashMap;

// scores already computed for this top-level search, keyed by Board::key().
// Valid for one find_best_move call only: every tentative placement below is
// undone before returning, so within one call a key always names the same
// logical state. A board from a later turn would silently collide.
pub type Memo = HashMap<u32, Score>;

/*
Exhaustive minimax over the remaining empty cells. `maximizing` is true on
the subject's plies. Scores are shaped by depth on the way out of the
recursion (win sooner > win later), EXCEPT for positions that are already
won when entered: those were produced at some ancestor's depth and are
reported as-is. The memo stores the shaped value.
*/
pub fn minimax(
    board: &mut Board,
    depth: u16,
    maximizing: bool,
    subject: Mark,
    other: Mark,
    memo: &mut Memo,
) -> Score {
    let key = board.key();
    if let Some(&score) = memo.get(&key) {
        return score;
    }

    let score = evaluate(board, subject, other);
    if score == SCORE_WIN || score == SCORE_LOSS {
        return score;
    }
    if board.is_full() {
        // tie
        return 0;
    }

    let mut best_score = if maximizing {
        SCORE_NEG_INF
    } else {
        SCORE_POS_INF
    };
    let on_move = if maximizing { subject } else { other };

    for index in board.empty_cells() {
        let score = board.with_move(index, on_move, |b| {
            minimax(b, depth + 1, !maximizing, subject, other, memo)
        });
        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    // prefer faster wins / slower losses
    let adjusted = if maximizing {
        best_score - depth as Score
    } else {
        best_score + depth as Score
    };
    memo.insert(key, adjusted);
    return adjusted;
}

// best cell for `subject` on the current board. Strictly-greater comparison
// over ascending cell order, so ties break toward the lowest index. Callers
// must not pass a full board.
pub fn find_best_move(board: &mut Board, subject: Mark, other: Mark) -> Idx {
    debug_assert!(!board.is_full());
    let mut memo = Memo::new();
    let mut best_score = SCORE_NEG_INF;
    let mut best_move = NULL_IDX;

    for index in board.empty_cells() {
        let score = board.with_move(index, subject, |b| {
            // the ply after the candidate move is the opponent's
            minimax(b, 0, false, subject, other, &mut memo)
        });
        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    debug_assert!(best_move != NULL_IDX);
    return best_move;
}
