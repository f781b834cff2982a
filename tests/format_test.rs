use ttt::board::*;

#[test]
fn compact_round_trip() {
    let reprs = ["XX.OO....", ".........", "XXOOOXXXO", "....X...."];
    for repr in &reprs {
        let board = Board::from_compact(repr);
        assert_eq!(board.to_compact(), *repr);
    }
}

#[test]
fn compact_accepts_alternate_cell_chars() {
    let board = Board::from_compact("xo_ XO.__");
    assert_eq!(board.mark_at(0), Some(Mark::X));
    assert_eq!(board.mark_at(1), Some(Mark::O));
    assert_eq!(board.mark_at(2), None);
    assert_eq!(board.mark_at(3), None);
    assert_eq!(board.mark_at(4), Some(Mark::X));
    assert_eq!(board.mark_at(5), Some(Mark::O));
}

#[test]
#[should_panic]
fn compact_rejects_bad_chars() {
    Board::from_compact("XX?OO....");
}

#[test]
#[should_panic]
fn compact_rejects_short_input() {
    Board::from_compact("XXOO");
}

#[test]
fn pretty_board_shape() {
    let board = Board::from_compact("X...O...X");
    let pretty = board.to_pretty_board();
    assert_eq!(pretty.lines().count(), 5);
    assert_eq!(pretty.matches('X').count(), 2);
    assert_eq!(pretty.matches('O').count(), 1);
    assert_eq!(format!("{}", board), pretty);
}
