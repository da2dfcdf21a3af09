use crate::position::*;
use crate::roomname::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Normal,
    Novice,
    Respawn,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Normal => write!(f, "normal"),
            RoomStatus::Novice => write!(f, "novice"),
            RoomStatus::Respawn => write!(f, "respawn"),
        }
    }
}

/// Live structural data for rooms. Returns `None` when there is currently
/// no vision into the room, otherwise the wall structures it contains.
pub trait WorldView {
    fn room_walls(&self, room: RoomName) -> Option<Vec<Position>>;
}

/// Status classification service, keyed by room.
pub trait RoomStatusSource {
    fn room_status(&self, room: RoomName) -> RoomStatus;
}
