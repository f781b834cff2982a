/* For importing/exporting board positions */

use crate::board::*;
use std::fmt;

impl Board {
    /*
    A compact board is 9 chars of X, O or . in cell order, e.g.

     XX.OO....

    is X on 0 and 1, O on 3 and 4, everything else empty.
    */
    pub fn from_compact(repr: &str) -> Board {
        assert_eq!(repr.chars().count(), 9, "compact board must be 9 cells");
        let mut board = Board::new();
        for (i, c) in repr.chars().enumerate() {
            match c {
                'X' | 'x' => board.place(i, Mark::X),
                'O' | 'o' => board.place(i, Mark::O),
                '.' | '_' | ' ' => {}
                _ => panic!("bad cell char: {:?}", c),
            }
        }
        return board;
    }

    pub fn to_compact(&self) -> String {
        (0..BOARD_SIZE)
            .map(|i| match self.mark_at(i) {
                Some(mark) => mark.to_char(),
                None => '.',
            })
            .collect()
    }

    pub fn to_pretty_board(&self) -> String {
        let mut repr = String::new();
        for row in 0..3 {
            if row != 0 {
                repr.push_str("---------\n");
            }
            for col in 0..3 {
                if col != 0 {
                    repr.push_str("| ");
                }
                match self.mark_at(row * 3 + col) {
                    Some(mark) => repr.push(mark.to_char()),
                    None => repr.push('.'),
                }
                repr.push(' ');
            }
            repr.push('\n');
        }
        return repr;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_pretty_board())
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
