use super::board::Board;
use super::mark::Mark;
use crate::Index;
use crate::LINES;
use crate::SIDE;

/// The first line in [`LINES`] order held entirely by one mark.
pub fn line(board: &Board) -> Option<[Index; SIDE]> {
    LINES.iter().copied().find(|[a, b, c]| {
        board
            .get(*a)
            .is_some_and(|m| board.get(*b) == Some(m) && board.get(*c) == Some(m))
    })
}

/// The mark holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    line(board).and_then(|[a, _, _]| board.get(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CELLS;

    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }

    #[test]
    fn empty_has_no_winner() {
        assert_eq!(winner(&Board::empty()), None);
        assert_eq!(line(&Board::empty()), None);
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for mark in [Mark::X, Mark::O] {
            for triple in LINES {
                let b = triple
                    .iter()
                    .fold(Board::empty(), |b, i| b.with(*i, mark));
                assert_eq!(winner(&b), Some(mark), "{}", b);
                assert_eq!(line(&b), Some(triple), "{}", b);
            }
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        assert_eq!(winner(&board("XXO/.../...")), None);
        assert_eq!(winner(&board("X../O../X..")), None);
        assert_eq!(winner(&board("X../.O./..X")), None);
    }

    #[test]
    fn draw_has_no_winner() {
        let b = board("XOX/XOO/OXX");
        assert!(b.is_full());
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn first_line_in_order_is_reported() {
        // row 0 and column 0 both complete
        let b = board("XXX/X../X..");
        assert_eq!(line(&b), Some([0, 1, 2]));
        assert_eq!(winner(&b), Some(Mark::X));
    }

    #[test]
    fn exhaustive_against_brute_force() {
        // 3^9 boards, reachable or not
        for code in 0..3usize.pow(CELLS as u32) {
            let mut b = Board::empty();
            let mut n = code;
            for i in 0..CELLS {
                match n % 3 {
                    1 => b = b.with(i, Mark::X),
                    2 => b = b.with(i, Mark::O),
                    _ => {}
                }
                n /= 3;
            }
            let uniform = |mark: Mark| {
                LINES
                    .iter()
                    .any(|l| l.iter().all(|i| b.get(*i) == Some(mark)))
            };
            match winner(&b) {
                Some(mark) => assert!(uniform(mark), "{}", b),
                None => assert!(!uniform(Mark::X) && !uniform(Mark::O), "{}", b),
            }
        }
    }
}
