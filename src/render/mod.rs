//! Passive display surface for the grid.
//!
//! Turns a snapshot and the finished flag into nine tiles, and forwards
//! clicks on live tiles back to the caller. No game rules live here; the
//! terminal and browser shells both draw from [`Tiles`].
mod tile;
mod tiles;

pub use tile::*;
pub use tiles::*;
