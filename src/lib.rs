#![warn(clippy::all)]

mod barrier;
mod constants;
mod costmatrix;
mod logging;
mod pathsearch;
mod position;
mod roomname;
mod world;
mod zonestatus;

pub use barrier::{BarrierScan, ExitDirection};
pub use constants::*;
pub use costmatrix::LocalCostMatrix;
pub use logging::{setup_logging, LevelFilter};
pub use pathsearch::{GridPathfinder, PathSearch, SearchGoal, SearchResults};
pub use position::{HasPosition, Position};
pub use roomname::{RoomName, RoomNameParseError};
pub use world::{RoomStatus, RoomStatusSource, WorldView};
pub use zonestatus::{ZoneStatusError, ZoneStatusResolver};
