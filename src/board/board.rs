use super::mark::Mark;
use crate::CELLS;
use crate::Index;
use crate::SIDE;
use serde::Deserialize;
use serde::Serialize;

/// One cell of the grid. `None` is empty.
pub type Cell = Option<Mark>;

/// An immutable 3x3 snapshot of the grid, row-major.
///
/// Serializes as `{"squares": [..9 cells..]}`, which is the shape saved
/// games store for each entry of their history. Any other number of
/// squares fails to deserialize.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Cell; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn squares(&self) -> &[Cell; CELLS] {
        &self.squares
    }
    /// Out-of-range indices read as empty.
    pub fn get(&self, index: Index) -> Cell {
        self.squares.get(index).copied().flatten()
    }
    pub fn is_open(&self, index: Index) -> bool {
        index < CELLS && self.squares[index].is_none()
    }
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|c| c.is_some()).count()
    }
    pub fn open(&self) -> impl Iterator<Item = Index> + '_ {
        (0..CELLS).filter(|i| self.is_open(*i))
    }
    /// a copy of this board with `mark` written at `index`.
    /// callers check `is_open` first; this overwrites unconditionally.
    pub fn with(mut self, index: Index, mark: Mark) -> Self {
        self.squares[index] = Some(mark);
        self
    }
    /// number of cells in which two boards disagree
    pub fn distance(&self, other: &Self) -> usize {
        self.squares
            .iter()
            .zip(other.squares.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<[Cell; CELLS]> for Board {
    fn from(squares: [Cell; CELLS]) -> Self {
        Self { squares }
    }
}

/// str isomorphism
///
/// Nine of `X`, `O`, `.` in row-major order. Row separators `/`
/// and whitespace are ignored, so `"XO./.X./..O"` reads the way it prints.
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c {
                '.' => Ok(None),
                'X' | 'x' => Ok(Some(Mark::X)),
                'O' | 'o' => Ok(Some(Mark::O)),
                c => Err(format!("invalid cell '{}'", c)),
            })
            .collect::<Result<Vec<Cell>, String>>()?;
        let n = cells.len();
        TryInto::<[Cell; CELLS]>::try_into(cells)
            .map(Self::from)
            .map_err(|_| format!("expected {} cells, found {}", CELLS, n))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.squares.iter().enumerate() {
            if i > 0 && i % SIDE == 0 {
                write!(f, "/")?;
            }
            match cell {
                Some(mark) => write!(f, "{}", mark)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
