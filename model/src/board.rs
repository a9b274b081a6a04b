use std::fmt;

use log::debug;
use ndarray::{s, Array2, ArrayView1, ArrayViewMut1, Axis};
use rand::{Rng, RngCore};

use crate::cell::Cell;
use crate::event::{BoardEvent, EventQueue};
use Side::{Down, Left, Right, Up};

pub const DEFAULT_SIZE: usize = 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Down,
    Left,
    Up,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Up, Down, Left, Right];
}

/// Square grid of cells. Tiles slide and merge towards one side per move.
pub struct Board {
    grid: Array2<Cell>,
    free_cells: usize,
    events: EventQueue,
    rng: Box<dyn RngCore>,
}

/// Resolves one line towards index 0 and returns whether anything moved.
///
/// Every pass walks adjacent pairs once, so `passes` must be at least the line
/// length: a tile may need to travel `len - 1` cells and then merge. Merged tiles
/// stay unstable until the end of the call, which keeps them sliding into empty
/// cells but out of any further merge.
fn resolve_line(mut line: ArrayViewMut1<Cell>, passes: usize, events: &mut EventQueue) -> bool {
    let mut changed = false;
    for _ in 0..passes {
        for i in 1..line.len() {
            let (mut head, mut tail) = line.view_mut().split_at(Axis(0), i);
            let dst = &mut head[i - 1];
            let src = &mut tail[0];
            match (dst.tile(), src.tile()) {
                (None, Some(_)) => {
                    src.shift_tile_to(dst, events);
                    changed = true;
                }
                (Some(a), Some(b))
                    if a.is_stable() && b.is_stable() && a.value() == b.value() =>
                {
                    let amount = dst.double_tile_in_place(events);
                    src.clear(events);
                    let (row, col) = dst.position();
                    events.push(BoardEvent::Merged { row, col, amount });
                    changed = true;
                }
                _ => {}
            }
        }
    }
    line.iter_mut().for_each(Cell::stabilize);
    changed
}

/// Rows or columns of `grid`, each oriented so that tiles move towards index 0.
fn lines_mut(grid: &mut Array2<Cell>, side: Side) -> Vec<ArrayViewMut1<'_, Cell>> {
    let lanes = match side {
        Left | Right => grid.rows_mut(),
        Up | Down => grid.columns_mut(),
    };
    lanes
        .into_iter()
        .map(|line| match side {
            Left | Up => line,
            Right | Down => line.slice_move(s![..;-1]),
        })
        .collect()
}

impl Board {
    pub fn new(rng: impl RngCore + 'static) -> Self {
        Self::with_size(DEFAULT_SIZE, rng)
    }

    pub fn with_size(size: usize, rng: impl RngCore + 'static) -> Self {
        assert!(size >= 2, "board size must be at least 2, got {}", size);
        Self {
            grid: Array2::from_shape_fn((size, size), |(row, col)| Cell::new(row, col)),
            free_cells: size * size,
            events: EventQueue::new(),
            rng: Box::new(rng),
        }
    }

    /// Builds a board from tile values, `0` meaning an empty cell.
    pub fn from_array(array: Array2<u32>, rng: impl RngCore + 'static) -> Self {
        let (h, w) = array.dim();
        assert_eq!(h, w, "board must be square, got {}x{}", h, w);
        let mut board = Self::with_size(h, rng);
        let mut discarded = EventQueue::new();
        for ((row, col), v) in array.indexed_iter() {
            match *v {
                0 => {}
                v if v >= 2 && v.count_ones() == 1 => {
                    board.grid[(row, col)].add_new_tile(v, &mut discarded)
                }
                v => panic!("Expected values 0,2,4,8,16..., got {}", v),
            }
        }
        board.recount_free_cells();
        board
    }

    pub fn into_array(&self) -> Array2<u32> {
        self.grid.map(|cell| cell.value().unwrap_or(0))
    }

    pub fn size(&self) -> usize {
        self.grid.nrows()
    }

    pub fn free_cells(&self) -> usize {
        self.free_cells
    }

    pub fn tile_count(&self) -> usize {
        self.grid.len() - self.free_cells
    }

    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        self.grid[(row, col)].value()
    }

    pub fn max_value(&self) -> Option<u32> {
        self.grid.iter().filter_map(Cell::value).max()
    }

    pub fn sum(&self) -> u32 {
        self.grid.iter().filter_map(Cell::value).sum()
    }

    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        self.events.drain()
    }

    fn recount_free_cells(&mut self) {
        self.free_cells = self.grid.iter().filter(|cell| cell.is_empty()).count();
    }

    /// Slides and merges every line towards `side` without spawning.
    pub fn swipe(&mut self, side: Side) -> bool {
        let passes = self.size();
        let events = &mut self.events;
        let mut changed = false;
        for line in lines_mut(&mut self.grid, side) {
            changed |= resolve_line(line, passes, events);
        }
        if changed {
            self.recount_free_cells();
        }
        changed
    }

    /// A full move: swipe, then spawn one tile if anything moved.
    pub fn play_move(&mut self, side: Side) -> bool {
        let changed = self.swipe(side);
        if changed {
            self.add_random_tile();
        }
        debug!("move {:?} changed={}\n{}", side, changed, self);
        changed
    }

    /// Puts a 2 or a 4 into a uniformly chosen empty cell.
    pub fn add_random_tile(&mut self) -> Option<(usize, usize)> {
        let free: Vec<(usize, usize)> = self
            .grid
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect();
        if free.is_empty() {
            return None;
        }
        let (row, col) = free[self.rng.gen_range(0..free.len())];
        let value = 2 + 2 * self.rng.gen_range(0..2u32);
        self.grid[(row, col)].add_new_tile(value, &mut self.events);
        self.events.push(BoardEvent::Spawned { row, col, value });
        self.free_cells -= 1;
        Some((row, col))
    }

    pub fn moves_possible(&self) -> bool {
        if self.free_cells > 0 {
            return true;
        }
        let has_equal_neighbours = |line: ArrayView1<Cell>| {
            line.iter()
                .zip(line.iter().skip(1))
                .any(|(a, b)| a.value() == b.value())
        };
        self.grid.rows().into_iter().any(has_equal_neighbours)
            || self.grid.columns().into_iter().any(has_equal_neighbours)
    }

    pub fn is_terminal(&self) -> bool {
        !self.moves_possible()
    }

    pub fn reset(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.clear(&mut self.events);
        }
        self.free_cells = self.grid.len();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row.iter() {
                match cell.value() {
                    Some(v) => write!(f, "{:>6}", v)?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
