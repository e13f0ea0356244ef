mod board;
mod detect;
mod mark;

pub use board::*;
pub use detect::*;
pub use mark::*;
