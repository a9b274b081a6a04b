//! Change notifications emitted by the board for whoever presents it.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoardEvent {
    /// The tile at `(row, col)` was replaced, removed or doubled.
    CellChanged {
        row: usize,
        col: usize,
        value: Option<u32>,
    },
    /// Two tiles were merged into `(row, col)`. `amount` is the value before doubling.
    Merged { row: usize, col: usize, amount: u32 },
    /// A random tile appeared after a move.
    Spawned { row: usize, col: usize, value: u32 },
}

#[derive(Debug, Default)]
pub struct EventQueue(Vec<BoardEvent>);

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BoardEvent) {
        self.0.push(event)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.0)
    }
}
