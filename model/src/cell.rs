use crate::event::{BoardEvent, EventQueue};
use crate::tile::Tile;

/// A fixed grid position holding at most one tile.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    row: usize,
    col: usize,
    tile: Option<Tile>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            tile: None,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    pub fn value(&self) -> Option<u32> {
        self.tile.map(|tile| tile.value())
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Panics if the cell is already occupied.
    pub fn add_new_tile(&mut self, value: u32, events: &mut EventQueue) {
        assert!(
            self.tile.is_none(),
            "cell ({}, {}) already holds a tile",
            self.row,
            self.col
        );
        self.accept_tile(Some(Tile::new(value)), events);
    }

    pub fn accept_tile(&mut self, tile: Option<Tile>, events: &mut EventQueue) {
        if let Some(tile) = tile {
            self.tile = Some(tile);
            self.notify(events);
        }
    }

    pub fn shift_tile_to(&mut self, other: &mut Cell, events: &mut EventQueue) {
        if self.tile.is_none() {
            return;
        }
        other.accept_tile(self.tile, events);
        self.clear(events);
    }

    pub fn clear(&mut self, events: &mut EventQueue) {
        if self.tile.take().is_some() {
            self.notify(events);
        }
    }

    /// Doubles the held tile and returns its value before doubling.
    /// Panics if the cell is empty.
    pub fn double_tile_in_place(&mut self, events: &mut EventQueue) -> u32 {
        let tile = match self.tile.as_mut() {
            Some(tile) => tile,
            None => panic!("cell ({}, {}) has no tile to double", self.row, self.col),
        };
        let amount = tile.value();
        tile.double();
        self.notify(events);
        amount
    }

    pub(crate) fn stabilize(&mut self) {
        if let Some(tile) = self.tile.as_mut() {
            tile.stabilize();
        }
    }

    fn notify(&self, events: &mut EventQueue) {
        events.push(BoardEvent::CellChanged {
            row: self.row,
            col: self.col,
            value: self.value(),
        });
    }
}
