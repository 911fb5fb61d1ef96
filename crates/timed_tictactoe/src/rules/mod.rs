//! Rule evaluation for tic-tac-toe boards.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, evaluate};
