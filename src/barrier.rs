use crate::constants::*;
use crate::costmatrix::*;
use crate::position::*;
use crate::roomname::*;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitDirection {
    Top,
    Right,
    Bottom,
    Left,
}

impl ExitDirection {
    pub const ALL: [ExitDirection; 4] = [
        ExitDirection::Top,
        ExitDirection::Right,
        ExitDirection::Bottom,
        ExitDirection::Left,
    ];

    fn index(self) -> usize {
        match self {
            ExitDirection::Top => 0,
            ExitDirection::Right => 1,
            ExitDirection::Bottom => 2,
            ExitDirection::Left => 3,
        }
    }

    /// Which edge a tile belongs to, checked left, right, top, bottom.
    /// Corner tiles resolve to the vertical edge.
    pub fn of_edge_tile(x: u8, y: u8) -> Option<ExitDirection> {
        if x == 0 {
            Some(ExitDirection::Left)
        } else if x == ROOM_EDGE_X {
            Some(ExitDirection::Right)
        } else if y == 0 {
            Some(ExitDirection::Top)
        } else if y == ROOM_EDGE_Y {
            Some(ExitDirection::Bottom)
        } else {
            None
        }
    }

    pub fn contains_edge_tile(self, x: u8, y: u8) -> bool {
        match self {
            ExitDirection::Top => y == 0,
            ExitDirection::Bottom => y == ROOM_EDGE_Y,
            ExitDirection::Left => x == 0,
            ExitDirection::Right => x == ROOM_EDGE_X,
        }
    }

    fn edge_tiles(self) -> impl Iterator<Item = (u8, u8)> {
        (0..ROOM_WIDTH).map(move |i| match self {
            ExitDirection::Top => (i, 0),
            ExitDirection::Bottom => (i, ROOM_EDGE_Y),
            ExitDirection::Left => (0, i),
            ExitDirection::Right => (ROOM_EDGE_X, i),
        })
    }
}

/// Wall layout of a single room: the per-direction exit-wall references and
/// a cost matrix blocking every wall tile. Recomputed fresh per query.
pub struct BarrierScan {
    room: RoomName,
    exit_walls: [Option<Position>; 4],
    costs: LocalCostMatrix,
    wall_count: usize,
}

impl BarrierScan {
    pub fn from_walls(room: RoomName, walls: &[Position]) -> BarrierScan {
        let mut exit_walls = [None; 4];
        let mut costs = LocalCostMatrix::new();

        for wall in walls {
            costs.set(wall.x(), wall.y(), BLOCKED_COST);

            // Interior walls block terrain but define no barrier side. For
            // duplicate walls on one edge the last one enumerated wins.
            if let Some(direction) = ExitDirection::of_edge_tile(wall.x(), wall.y()) {
                exit_walls[direction.index()] = Some(*wall);
            }
        }

        debug!(
            "Scanned {} walls in room {} - walled edges: {:?}",
            walls.len(),
            room,
            ExitDirection::ALL
                .iter()
                .filter(|direction| exit_walls[direction.index()].is_some())
                .collect::<Vec<_>>()
        );

        BarrierScan {
            room,
            exit_walls,
            costs,
            wall_count: walls.len(),
        }
    }

    pub fn room(&self) -> RoomName {
        self.room
    }

    pub fn has_walls(&self) -> bool {
        self.wall_count > 0
    }

    pub fn exit_wall(&self, direction: ExitDirection) -> Option<Position> {
        self.exit_walls[direction.index()]
    }

    pub fn walled_directions(&self) -> impl Iterator<Item = ExitDirection> + '_ {
        ExitDirection::ALL
            .iter()
            .copied()
            .filter(move |direction| self.exit_wall(*direction).is_some())
    }

    pub fn costs(&self) -> &LocalCostMatrix {
        &self.costs
    }

    /// Open (non-walled) tiles along one edge.
    pub fn open_edge_tiles(&self, direction: ExitDirection) -> Vec<Position> {
        direction
            .edge_tiles()
            .filter(|&(x, y)| !self.costs.is_blocked(x, y))
            .map(|(x, y)| Position::new(self.room, x, y))
            .collect()
    }
}
