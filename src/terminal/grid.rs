use crate::SIDE;
use crate::board::Mark;
use crate::render::Tile;
use crate::render::Tiles;
use colored::Colorize;
use std::fmt::Display;

/// Terminal drawing of the tiles. Empty cells show the index to type.
pub struct Grid<'a>(pub &'a Tiles);

impl Grid<'_> {
    fn paint(tile: &Tile) -> String {
        let text = tile.to_string();
        match (tile.cell, tile.highlight) {
            (Some(_), true) => text.green().bold().to_string(),
            (Some(Mark::X), false) => text.red().bold().to_string(),
            (Some(Mark::O), false) => text.blue().bold().to_string(),
            (None, _) if tile.active => text.dimmed().to_string(),
            (None, _) => " ".to_string(),
        }
    }
}

impl Display for Grid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.0.rows().enumerate() {
            if r > 0 {
                writeln!(f, "{}", vec!["───"; SIDE].join("┼"))?;
            }
            let cells = row.iter().map(|t| format!(" {} ", Self::paint(t)));
            writeln!(f, "{}", cells.collect::<Vec<_>>().join("│"))?;
        }
        Ok(())
    }
}
