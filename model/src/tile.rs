/// A numbered tile. `stable` is cleared by a merge and restored when the move ends,
/// so a tile takes part in at most one merge per move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tile {
    value: u32,
    stable: bool,
}

impl Tile {
    pub fn new(value: u32) -> Self {
        debug_assert!(
            value >= 2 && value.count_ones() == 1,
            "Expected values 2,4,8,16..., got {}",
            value
        );
        Self {
            value,
            stable: true,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn double(&mut self) {
        self.value *= 2;
        self.stable = false;
    }

    pub fn stabilize(&mut self) {
        self.stable = true;
    }
}

#[test]
fn double_marks_unstable() {
    let mut tile = Tile::new(8);
    assert!(tile.is_stable());
    tile.double();
    assert_eq!(tile.value(), 16);
    assert!(!tile.is_stable());
    tile.stabilize();
    assert!(tile.is_stable());
    assert_eq!(tile.value(), 16);
}
