mod game;
mod phase;
mod placement;
mod player;
mod status;

pub use game::*;
pub use phase::*;
pub use placement::*;
pub use player::*;
pub use status::*;
