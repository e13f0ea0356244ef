//! Interactive terminal shell: prompts in place of the browser's inputs
//! and buttons, a JSON file in place of `localStorage`.
mod args;
mod grid;
mod session;

pub use args::*;
pub use grid::*;
pub use session::*;
