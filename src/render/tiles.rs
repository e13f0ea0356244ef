use super::tile::Tile;
use crate::CELLS;
use crate::Index;
use crate::SIDE;
use crate::board::Board;
use crate::board::line;
use crate::game::Game;

/// The nine tiles of one snapshot, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiles([Tile; CELLS]);

impl Tiles {
    /// Forward a click only if it landed on a live tile.
    pub fn click(&self, index: Index) -> Option<Index> {
        self.0
            .get(index)
            .filter(|tile| tile.active)
            .map(|tile| tile.index)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.0.iter()
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.0.chunks(SIDE)
    }
    pub fn active(&self) -> impl Iterator<Item = Index> + '_ {
        self.iter().filter(|t| t.active).map(|t| t.index)
    }
}

impl From<(&Board, bool)> for Tiles {
    fn from((board, finished): (&Board, bool)) -> Self {
        let winning = line(board);
        Self(std::array::from_fn(|index| Tile {
            index,
            cell: board.get(index),
            active: !finished && board.is_open(index),
            highlight: winning.is_some_and(|l| l.contains(&index)),
        }))
    }
}

impl From<&Game> for Tiles {
    fn from(game: &Game) -> Self {
        Self::from((game.current(), game.finished()))
    }
}

impl<'a> IntoIterator for &'a Tiles {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
