use crate::Index;
use crate::board::Cell;

/// One clickable region of the grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tile {
    pub index: Index,
    pub cell: Cell,
    /// accepts clicks: round not finished and cell empty
    pub active: bool,
    /// part of the winning line
    pub highlight: bool,
}

impl Tile {
    /// what the tile shows: its mark, or nothing
    pub fn label(&self) -> String {
        self.cell.map(|m| m.to_string()).unwrap_or_default()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell {
            Some(mark) => write!(f, "{}", mark),
            None => write!(f, "{}", self.index),
        }
    }
}
