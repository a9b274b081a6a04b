use log::info;

use crate::board::{Board, Side};
use crate::event::BoardEvent;

pub const WIN_VALUE: u32 = 2048;
const START_TILES: usize = 2;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Active,
    /// A tile reached `WIN_VALUE`; input is ignored until `continue_playing`.
    Won,
    /// No move can change the board; input is ignored until `reset`.
    Over,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveOutcome {
    pub changed: bool,
    pub merges: usize,
    pub score_delta: u32,
}

/// Receives everything a presentation layer needs to stay in sync with the game.
pub trait GameListener {
    fn cell_changed(&mut self, _row: usize, _col: usize, _value: Option<u32>) {}
    fn score_changed(&mut self, _score: u32, _delta: u32) {}
    fn won(&mut self) {}
    fn game_over(&mut self) {}
    fn reset(&mut self) {}
}

impl GameListener for () {}

pub struct Game<L: GameListener = ()> {
    board: Board,
    score: u32,
    reached_win: bool,
    state: GameState,
    listener: L,
}

impl<L: GameListener> Game<L> {
    /// Starts a fresh session on `board`: cleared, with two random tiles.
    pub fn new(board: Board, listener: L) -> Self {
        let mut game = Self::from_board(board, listener);
        game.reset();
        game
    }

    /// Continues from whatever position `board` holds, with a zero score.
    /// The listener is told about every tile already on the board.
    pub fn from_board(board: Board, listener: L) -> Self {
        let state = if board.is_terminal() {
            GameState::Over
        } else {
            GameState::Active
        };
        let reached_win = board.max_value().map_or(false, |v| v >= WIN_VALUE);
        let mut game = Self {
            board,
            score: 0,
            reached_win,
            state,
            listener,
        };
        game.dispatch_events();
        for ((row, col), &value) in game.board.into_array().indexed_iter() {
            if value != 0 {
                game.listener.cell_changed(row, col, Some(value));
            }
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn has_won(&self) -> bool {
        self.reached_win
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn play(&mut self, side: Side) -> MoveOutcome {
        if self.state != GameState::Active {
            return MoveOutcome::default();
        }
        let changed = self.board.play_move(side);
        let (merges, score_delta, won) = self.dispatch_events();
        if score_delta > 0 {
            self.score += score_delta;
            self.listener.score_changed(self.score, score_delta);
        }
        if won {
            info!("reached {} with score {}", WIN_VALUE, self.score);
            self.state = GameState::Won;
            self.listener.won();
        }
        if self.board.is_terminal() {
            info!("game over with score {}", self.score);
            self.state = GameState::Over;
            self.listener.game_over();
        }
        MoveOutcome {
            changed,
            merges,
            score_delta,
        }
    }

    /// Acknowledges a win and resumes play. Returns false if there was nothing to acknowledge.
    pub fn continue_playing(&mut self) -> bool {
        if self.state != GameState::Won {
            return false;
        }
        self.state = GameState::Active;
        true
    }

    pub fn reset(&mut self) {
        self.listener.reset();
        self.score = 0;
        self.reached_win = false;
        self.board.reset();
        for _ in 0..START_TILES {
            self.board.add_random_tile();
        }
        self.state = GameState::Active;
        self.dispatch_events();
        self.listener.score_changed(0, 0);
        info!("new game\n{}", self.board);
    }

    /// Forwards queued board events and returns `(merges, score delta, first win)`.
    fn dispatch_events(&mut self) -> (usize, u32, bool) {
        let mut merges = 0;
        let mut delta = 0;
        let mut won = false;
        for event in self.board.drain_events() {
            match event {
                BoardEvent::CellChanged { row, col, value } => {
                    self.listener.cell_changed(row, col, value);
                }
                BoardEvent::Merged { amount, .. } => {
                    merges += 1;
                    delta += amount;
                    if !self.reached_win && amount * 2 >= WIN_VALUE {
                        self.reached_win = true;
                        won = true;
                    }
                }
                BoardEvent::Spawned { .. } => {}
            }
        }
        (merges, delta, won)
    }
}
