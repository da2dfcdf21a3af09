use crate::constants::*;
use crate::roomname::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile within a named room. Local coordinates are in [0, 49] on both
/// axes; 0 or 49 on either axis is a room-edge tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    room: RoomName,
    x: u8,
    y: u8,
}

impl Position {
    pub fn new(room: RoomName, x: u8, y: u8) -> Position {
        assert!(x < ROOM_WIDTH && y < ROOM_HEIGHT);

        Position { room, x, y }
    }

    pub fn room(&self) -> RoomName {
        self.room
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn is_room_edge(&self) -> bool {
        self.x == 0 || self.x == ROOM_EDGE_X || self.y == 0 || self.y == ROOM_EDGE_Y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{} in {}]", self.x, self.y, self.room)
    }
}

/// Objects that may resolve to a room position. Returning `None` marks the
/// object as having no position at all, which callers surface as an
/// invalid-input failure.
pub trait HasPosition {
    fn try_pos(&self) -> Option<Position>;
}

impl HasPosition for Position {
    fn try_pos(&self) -> Option<Position> {
        Some(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_edge_tiles() {
        let room = RoomName::new(0, 0);

        assert!(Position::new(room, 0, 25).is_room_edge());
        assert!(Position::new(room, 49, 25).is_room_edge());
        assert!(Position::new(room, 25, 0).is_room_edge());
        assert!(Position::new(room, 25, 49).is_room_edge());
        assert!(!Position::new(room, 25, 25).is_room_edge());
        assert!(!Position::new(room, 1, 48).is_room_edge());
    }

    #[test]
    fn position_resolves_to_itself() {
        let pos = Position::new(RoomName::new(2, 3), 10, 20);

        assert_eq!(pos.try_pos(), Some(pos));
    }
}
