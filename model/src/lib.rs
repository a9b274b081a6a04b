pub mod board;
pub mod cell;
pub mod event;
pub mod game;
pub mod tile;

pub use board::{Board, Side};
pub use event::BoardEvent;
pub use game::{Game, GameListener, GameState, MoveOutcome, WIN_VALUE};
