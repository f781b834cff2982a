/*
The board is a 3x3 grid indexed row-major from the top-left:

0 | 1 | 2
---------
3 | 4 | 5
---------
6 | 7 | 8

Each mark gets its own 9-bit occupancy mask; bit i is set iff
cell i holds that mark. The two masks never overlap.
*/

pub type B9 = u16;
pub type Idx = usize;

pub const BOARD_SIZE: Idx = 9;
pub const NULL_IDX: Idx = std::usize::MAX;

pub(crate) const BOARD_OCC: B9 = 0b111111111;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mark {
    X = 0,
    O = 1,
}

impl Mark {
    pub fn other(&self) -> Mark {
        match self {
            Self::O => Self::X,
            Self::X => Self::O,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

// set of cell indices, iterated in ascending order
#[derive(Copy, Clone)]
pub struct Cells {
    occupancy: B9,
}

impl Cells {
    pub fn size(&self) -> u32 {
        self.occupancy.count_ones()
    }

    pub fn contains(&self, index: Idx) -> bool {
        self.occupancy & (1 << index) != 0
    }
}

impl Iterator for Cells {
    type Item = Idx;

    fn next(&mut self) -> Option<Self::Item> {
        if self.occupancy == 0 {
            return None;
        }
        let i = self.occupancy.trailing_zeros() as Idx;
        self.occupancy &= self.occupancy - 1;
        return Some(i);
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub(crate) occ: [B9; 2],
}

impl Board {
    pub fn new() -> Board {
        Board { occ: [0; 2] }
    }

    #[inline(always)]
    pub fn is_occupied(&self, index: Idx) -> bool {
        assert!(index < BOARD_SIZE);
        self.both_occ() & (1 << index) != 0
    }

    // the tie test is is_full() plus no completed line
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.both_occ() == BOARD_OCC
    }

    pub fn mark_at(&self, index: Idx) -> Option<Mark> {
        assert!(index < BOARD_SIZE);
        if self.occ[Mark::X as usize] & (1 << index) != 0 {
            Some(Mark::X)
        } else if self.occ[Mark::O as usize] & (1 << index) != 0 {
            Some(Mark::O)
        } else {
            None
        }
    }

    // callers must pass an empty cell; writing over a mark is a contract breach
    pub fn place(&mut self, index: Idx, mark: Mark) {
        assert!(index < BOARD_SIZE);
        debug_assert_eq!(self.both_occ() & (1 << index), 0);
        self.occ[mark as usize] |= 1 << index;
    }

    pub fn clear(&mut self, index: Idx) {
        assert!(index < BOARD_SIZE);
        self.occ[Mark::X as usize] &= !(1 << index);
        self.occ[Mark::O as usize] &= !(1 << index);
    }

    // tentative placement for search: place, run f, restore. The cell is
    // cleared on every return path of f, so no mutation leaks upward.
    pub fn with_move<T>(&mut self, index: Idx, mark: Mark, f: impl FnOnce(&mut Board) -> T) -> T {
        self.place(index, mark);
        let result = f(self);
        self.clear(index);
        return result;
    }

    pub fn empty_cells(&self) -> Cells {
        Cells {
            occupancy: !self.both_occ() & BOARD_OCC,
        }
    }

    #[inline(always)]
    pub fn mark_occ(&self, mark: Mark) -> B9 {
        self.occ[mark as usize]
    }

    #[inline(always)]
    fn both_occ(&self) -> B9 {
        self.occ[0] | self.occ[1]
    }

    // canonical serialization of the 9 cells: X occupancy in the high bits,
    // O occupancy in the low bits. Injective over legal boards, so equal keys
    // mean equal cell contents.
    #[inline(always)]
    pub fn key(&self) -> u32 {
        ((self.occ[0] as u32) << 9) | self.occ[1] as u32
    }

    #[allow(dead_code)]
    pub fn assert(&self) {
        // marks don't overlap
        assert_eq!(self.occ[0] & self.occ[1], 0);
        // bit representations are within range
        assert_eq!(self.occ[0] & !BOARD_OCC, 0);
        assert_eq!(self.occ[1] & !BOARD_OCC, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_clear() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert!(board.is_occupied(4));
        assert_eq!(board.mark_at(4), Some(Mark::X));
        board.clear(4);
        assert!(!board.is_occupied(4));
        assert_eq!(board.mark_at(4), None);
        board.assert();
    }

    #[test]
    fn with_move_restores() {
        let mut board = Board::new();
        board.place(0, Mark::O);
        let before = board.key();
        let seen = board.with_move(8, Mark::X, |b| b.key());
        assert_ne!(seen, before);
        assert_eq!(board.key(), before);
    }

    #[test]
    fn empty_cells_ascending() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(4, Mark::O);
        let cells: Vec<Idx> = board.empty_cells().collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.empty_cells().size(), 7);
        assert!(!board.empty_cells().contains(4));
    }

    #[test]
    fn full_board() {
        let mut board = Board::new();
        for i in 0..BOARD_SIZE {
            assert!(!board.is_full());
            board.place(i, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(board.is_full());
    }
}
