pub const ROOM_WIDTH: u8 = 50;
pub const ROOM_HEIGHT: u8 = 50;

pub const ROOM_EDGE_X: u8 = ROOM_WIDTH - 1;
pub const ROOM_EDGE_Y: u8 = ROOM_HEIGHT - 1;

pub const HIGHWAY_STRIDE: i32 = 10;

pub const BLOCKED_COST: u8 = u8::MAX;
