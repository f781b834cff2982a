use ttt::board::*;
use ttt::engine::eval::*;

// build a board from a base-3 cell encoding: digit 0 empty, 1 X, 2 O.
// Covers plenty of boards unreachable under legal play; the evaluator
// only reads cell values so it must behave on all of them.
fn board_from_code(mut code: u32) -> Board {
    let mut board = Board::new();
    for i in 0..BOARD_SIZE {
        match code % 3 {
            0 => {}
            1 => board.place(i, Mark::X),
            2 => board.place(i, Mark::O),
            _ => unreachable!(),
        }
        code /= 3;
    }
    return board;
}

fn line_complete(board: &Board, cells: &[Idx; 3], mark: Mark) -> bool {
    cells.iter().all(|&i| board.mark_at(i) == Some(mark))
}

// reference evaluation by direct triple inspection
fn evaluate_reference(board: &Board, subject: Mark, other: Mark) -> i32 {
    for cells in &LINE_CELLS {
        if line_complete(board, cells, subject) {
            return 10;
        }
        if line_complete(board, cells, other) {
            return -10;
        }
    }
    return 0;
}

#[test]
fn exhaustive_synthetic_boards() {
    // all 3^9 fillings
    for code in 0..19683 {
        let board = board_from_code(code);
        board.assert();
        assert_eq!(
            evaluate(&board, Mark::X, Mark::O),
            evaluate_reference(&board, Mark::X, Mark::O),
            "board:\n{}",
            board
        );
        assert_eq!(
            evaluate(&board, Mark::O, Mark::X),
            evaluate_reference(&board, Mark::O, Mark::X),
            "board:\n{}",
            board
        );
    }
}

#[test]
fn full_count_matches_is_full() {
    for code in 0..19683 {
        let board = board_from_code(code);
        let empties = (0..BOARD_SIZE).filter(|&i| board.mark_at(i).is_none()).count();
        assert_eq!(board.is_full(), empties == 0);
        assert_eq!(board.empty_cells().size() as usize, empties);
    }
}

#[test]
fn evaluate_has_no_side_effects() {
    let board = Board::from_compact("X.O.X.O..");
    let before = board.key();
    evaluate(&board, Mark::X, Mark::O);
    evaluate(&board, Mark::O, Mark::X);
    winning_line(&board, Mark::X);
    game_result(&board);
    assert_eq!(board.key(), before);
}

#[test]
fn line_scan_order_is_rows_columns_diagonals() {
    // both the top row and the left column are complete; the row is
    // declared first so it is the line reported
    let board = Board::from_compact("XXXX..X..");
    assert_eq!(winning_line(&board, Mark::X), Some([0, 1, 2]));
}

#[test]
fn tie_is_full_plus_zero_score() {
    let board = Board::from_compact("XXOOOXXXO");
    assert!(board.is_full());
    assert_eq!(evaluate(&board, Mark::X, Mark::O), 0);
    assert_eq!(evaluate(&board, Mark::O, Mark::X), 0);
    assert_eq!(game_result(&board), GameResult::Draw);
}
