use crate::constants::*;

const ROOM_AREA: usize = ROOM_WIDTH as usize * ROOM_HEIGHT as usize;

/// Dense per-tile cost grid for a single room. Zero is default terrain cost;
/// `BLOCKED_COST` forbids stepping onto the tile.
#[derive(Clone)]
pub struct LocalCostMatrix {
    data: Box<[u8; ROOM_AREA]>,
}

impl LocalCostMatrix {
    pub fn new() -> LocalCostMatrix {
        LocalCostMatrix {
            data: Box::new([0; ROOM_AREA]),
        }
    }

    pub fn get(&self, x: u8, y: u8) -> u8 {
        self.data[index_of(x, y)]
    }

    pub fn set(&mut self, x: u8, y: u8, val: u8) {
        self.data[index_of(x, y)] = val;
    }

    pub fn is_blocked(&self, x: u8, y: u8) -> bool {
        self.get(x, y) == BLOCKED_COST
    }
}

impl Default for LocalCostMatrix {
    fn default() -> LocalCostMatrix {
        LocalCostMatrix::new()
    }
}

fn index_of(x: u8, y: u8) -> usize {
    debug_assert!(x < ROOM_WIDTH && y < ROOM_HEIGHT);

    y as usize * ROOM_WIDTH as usize + x as usize
}
