use crate::barrier::*;
use crate::pathsearch::*;
use crate::position::*;
use crate::roomname::*;
use crate::world::*;
use log::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZoneStatusError {
    #[error("object does not resolve to a position")]
    InvalidInput,
    #[error("no vision into room {0}")]
    NoVision(RoomName),
    #[error("no path from {0} to any open exit")]
    Unreachable(Position),
}

/// Resolves the zone status of a position. Non-highway rooms read the
/// status service directly; highway rooms bisected by exit walls resolve
/// which side of the barrier the position is on and return the status of
/// the neighboring room across it.
pub struct ZoneStatusResolver<'a> {
    world: &'a dyn WorldView,
    statuses: &'a dyn RoomStatusSource,
    pathfinder: &'a dyn PathSearch,
}

impl<'a> ZoneStatusResolver<'a> {
    pub fn new(
        world: &'a dyn WorldView,
        statuses: &'a dyn RoomStatusSource,
        pathfinder: &'a dyn PathSearch,
    ) -> ZoneStatusResolver<'a> {
        ZoneStatusResolver {
            world,
            statuses,
            pathfinder,
        }
    }

    pub fn object_status(&self, object: &dyn HasPosition) -> Result<RoomStatus, ZoneStatusError> {
        let pos = object.try_pos().ok_or(ZoneStatusError::InvalidInput)?;

        self.position_status(pos)
    }

    pub fn position_status(&self, pos: Position) -> Result<RoomStatus, ZoneStatusError> {
        let room = pos.room();

        if !room.is_highway() {
            return Ok(self.statuses.room_status(room));
        }

        let walls = self.world.room_walls(room).ok_or(ZoneStatusError::NoVision(room))?;

        let scan = BarrierScan::from_walls(room, &walls);

        if !scan.has_walls() {
            return Ok(RoomStatus::Normal);
        }

        let neighbor = self.resolve_barrier_side(pos, &scan)?;

        debug!("Position {} resolves across the barrier to room {}", pos, neighbor);

        Ok(self.statuses.room_status(neighbor))
    }

    fn resolve_barrier_side(&self, pos: Position, scan: &BarrierScan) -> Result<RoomName, ZoneStatusError> {
        let top = scan.exit_wall(ExitDirection::Top);
        let right = scan.exit_wall(ExitDirection::Right);
        let bottom = scan.exit_wall(ExitDirection::Bottom);
        let left = scan.exit_wall(ExitDirection::Left);

        match (top, right, bottom, left) {
            (Some(top_wall), None, Some(bottom_wall), None) => {
                self.resolve_vertical_pair(pos, scan, top_wall, bottom_wall)
            }
            (None, Some(right_wall), None, Some(left_wall)) => {
                self.resolve_horizontal_pair(pos, scan, left_wall, right_wall)
            }
            _ => self.resolve_corner(pos, scan),
        }
    }

    /// Walls on the top and bottom edges only: the barrier runs vertically
    /// and the neighbor is east or west of the wall.
    fn resolve_vertical_pair(
        &self,
        pos: Position,
        scan: &BarrierScan,
        top_wall: Position,
        bottom_wall: Position,
    ) -> Result<RoomName, ZoneStatusError> {
        let goals = exit_goals(scan, &[ExitDirection::Top, ExitDirection::Bottom]);
        let end = self.search_to_exits(pos, scan, &goals)?;

        let wall = if end.y() == 0 { top_wall } else { bottom_wall };
        let dx = if end.x() > wall.x() { 1 } else { -1 };

        Ok(pos.room().offset(dx, 0))
    }

    fn resolve_horizontal_pair(
        &self,
        pos: Position,
        scan: &BarrierScan,
        left_wall: Position,
        right_wall: Position,
    ) -> Result<RoomName, ZoneStatusError> {
        let goals = exit_goals(scan, &[ExitDirection::Left, ExitDirection::Right]);
        let end = self.search_to_exits(pos, scan, &goals)?;

        let wall = if end.x() == 0 { left_wall } else { right_wall };
        let dy = if end.y() > wall.y() { 1 } else { -1 };

        Ok(pos.room().offset(0, dy))
    }

    /// Any other walled combination: the barrier cuts a corner and the
    /// neighbor is diagonal. The first direction comes from the edge the
    /// path terminus sits on, the second from which side of that edge's
    /// wall the terminus is.
    fn resolve_corner(&self, pos: Position, scan: &BarrierScan) -> Result<RoomName, ZoneStatusError> {
        let directions: Vec<ExitDirection> = scan.walled_directions().collect();
        let goals = exit_goals(scan, &directions);
        let end = self.search_to_exits(pos, scan, &goals)?;

        let first = ExitDirection::of_edge_tile(end.x(), end.y()).unwrap_or(ExitDirection::Bottom);

        let (first, first_wall) = match scan.exit_wall(first) {
            Some(wall) => (first, wall),
            // The terminus is an open corner tile shared with an unwalled
            // edge; use the walled edge it also touches.
            None => scan
                .walled_directions()
                .find(|direction| direction.contains_edge_tile(end.x(), end.y()))
                .and_then(|direction| scan.exit_wall(direction).map(|wall| (direction, wall)))
                .ok_or(ZoneStatusError::Unreachable(pos))?,
        };

        let second = match first {
            ExitDirection::Top | ExitDirection::Bottom => {
                if end.x() > first_wall.x() {
                    ExitDirection::Right
                } else {
                    ExitDirection::Left
                }
            }
            ExitDirection::Left | ExitDirection::Right => {
                if end.y() > first_wall.y() {
                    ExitDirection::Bottom
                } else {
                    ExitDirection::Top
                }
            }
        };

        let dx = if first == ExitDirection::Right || second == ExitDirection::Right {
            1
        } else {
            -1
        };
        let dy = if first == ExitDirection::Bottom || second == ExitDirection::Bottom {
            1
        } else {
            -1
        };

        Ok(pos.room().offset(dx, dy))
    }

    fn search_to_exits(
        &self,
        pos: Position,
        scan: &BarrierScan,
        goals: &[SearchGoal],
    ) -> Result<Position, ZoneStatusError> {
        let results = self.pathfinder.search(pos, goals, scan.costs());

        if results.incomplete {
            return Err(ZoneStatusError::Unreachable(pos));
        }

        results.path.last().copied().ok_or(ZoneStatusError::Unreachable(pos))
    }
}

fn exit_goals(scan: &BarrierScan, directions: &[ExitDirection]) -> Vec<SearchGoal> {
    directions
        .iter()
        .flat_map(|&direction| scan.open_edge_tiles(direction))
        .map(|pos| SearchGoal::new(pos, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use std::collections::HashMap;

    struct FakeWorld {
        rooms: HashMap<RoomName, Vec<Position>>,
    }

    impl FakeWorld {
        fn empty() -> FakeWorld {
            FakeWorld { rooms: HashMap::new() }
        }

        fn with_walls(room: RoomName, walls: Vec<Position>) -> FakeWorld {
            let mut rooms = HashMap::new();

            rooms.insert(room, walls);

            FakeWorld { rooms }
        }
    }

    impl WorldView for FakeWorld {
        fn room_walls(&self, room: RoomName) -> Option<Vec<Position>> {
            self.rooms.get(&room).cloned()
        }
    }

    struct FakeStatuses {
        default: RoomStatus,
        overrides: HashMap<RoomName, RoomStatus>,
    }

    impl FakeStatuses {
        fn all_normal() -> FakeStatuses {
            FakeStatuses {
                default: RoomStatus::Normal,
                overrides: HashMap::new(),
            }
        }

        fn with(mut self, room: &str, status: RoomStatus) -> FakeStatuses {
            self.overrides.insert(room.parse().unwrap(), status);
            self
        }
    }

    impl RoomStatusSource for FakeStatuses {
        fn room_status(&self, room: RoomName) -> RoomStatus {
            self.overrides.get(&room).copied().unwrap_or(self.default)
        }
    }

    struct Unpositioned;

    impl HasPosition for Unpositioned {
        fn try_pos(&self) -> Option<Position> {
            None
        }
    }

    fn pos(room: RoomName, x: u8, y: u8) -> Position {
        Position::new(room, x, y)
    }

    #[test]
    fn object_without_position_is_invalid_input() {
        let world = FakeWorld::empty();
        let statuses = FakeStatuses::all_normal();
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        assert_eq!(resolver.object_status(&Unpositioned), Err(ZoneStatusError::InvalidInput));
    }

    #[test]
    fn non_highway_room_reads_status_service_directly() {
        let room: RoomName = "E5S5".parse().unwrap();

        // No vision anywhere - proves walls are never consulted off the
        // highway lattice.
        let world = FakeWorld::empty();
        let statuses = FakeStatuses::all_normal().with("E5S5", RoomStatus::Novice);
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        assert_eq!(resolver.position_status(pos(room, 25, 25)), Ok(RoomStatus::Novice));
    }

    #[test]
    fn highway_room_without_vision_fails() {
        let room: RoomName = "E10S5".parse().unwrap();

        let world = FakeWorld::empty();
        let statuses = FakeStatuses::all_normal();
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        assert_eq!(
            resolver.position_status(pos(room, 25, 25)),
            Err(ZoneStatusError::NoVision(room))
        );
    }

    #[test]
    fn highway_room_without_walls_is_normal() {
        let room: RoomName = "E10S5".parse().unwrap();

        let world = FakeWorld::with_walls(room, Vec::new());
        let statuses = FakeStatuses::all_normal().with("E10S5", RoomStatus::Respawn);
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        assert_eq!(resolver.position_status(pos(room, 25, 25)), Ok(RoomStatus::Normal));
    }

    #[test]
    fn vertical_wall_pair_resolves_east_and_west_neighbors() {
        let room: RoomName = "E10N0".parse().unwrap();

        // Top edge walled except x=5, bottom edge walled except x=45.
        // Corners stay clear so the left/right edges are unwalled.
        let mut walls = Vec::new();

        for x in 1..ROOM_EDGE_X {
            if x != 5 {
                walls.push(pos(room, x, 0));
            }
            if x != 45 {
                walls.push(pos(room, x, ROOM_EDGE_Y));
            }
        }

        let world = FakeWorld::with_walls(room, walls);
        let statuses = FakeStatuses::all_normal()
            .with("E9N0", RoomStatus::Novice)
            .with("E11N0", RoomStatus::Respawn);
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        // Near the top gap: terminus (5,0), west of the wall reference.
        assert_eq!(resolver.position_status(pos(room, 10, 5)), Ok(RoomStatus::Novice));

        // Near the top-right corner: terminus (49,0), east of every top wall.
        assert_eq!(resolver.position_status(pos(room, 47, 3)), Ok(RoomStatus::Respawn));
    }

    #[test]
    fn horizontal_wall_pair_resolves_vertical_neighbor() {
        let room: RoomName = "E0S20".parse().unwrap();

        // Left edge walled except y=7, right edge fully walled between the
        // corners. Walls pushed in descending y so the retained left
        // reference is (0,1).
        let mut walls = Vec::new();

        for y in (1..ROOM_EDGE_Y).rev() {
            if y != 7 {
                walls.push(pos(room, 0, y));
            }
            walls.push(pos(room, ROOM_EDGE_X, y));
        }

        let world = FakeWorld::with_walls(room, walls);
        let statuses = FakeStatuses::all_normal().with("E0S21", RoomStatus::Respawn);
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        // Terminus (0,7), south of the wall reference (0,1).
        assert_eq!(resolver.position_status(pos(room, 5, 6)), Ok(RoomStatus::Respawn));
    }

    #[test]
    fn adjacent_wall_corner_resolves_diagonal_neighbor() {
        let room: RoomName = "E20N20".parse().unwrap();

        // Left edge walled except y=10, top edge walled except x=49. Left
        // walls pushed in descending y so the retained reference is (0,0).
        let mut walls = Vec::new();

        for y in (0..ROOM_HEIGHT).rev() {
            if y != 10 {
                walls.push(pos(room, 0, y));
            }
        }
        for x in 1..ROOM_EDGE_X {
            walls.push(pos(room, x, 0));
        }

        let world = FakeWorld::with_walls(room, walls);
        let statuses = FakeStatuses::all_normal().with("E19N19", RoomStatus::Novice);
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        // Terminus (0,10): first direction Left, wall (0,0), terminus below
        // it, so the second direction is Bottom and the neighbor is (-1,+1).
        assert_eq!(resolver.position_status(pos(room, 5, 5)), Ok(RoomStatus::Novice));
    }

    #[test]
    fn enclosed_position_is_unreachable() {
        let room: RoomName = "E10S10".parse().unwrap();

        let start = pos(room, 10, 25);

        let mut walls = vec![pos(room, 25, 0)];

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx != 0 || dy != 0 {
                    walls.push(pos(room, (10 + dx) as u8, (25 + dy) as u8));
                }
            }
        }

        let world = FakeWorld::with_walls(room, walls);
        let statuses = FakeStatuses::all_normal();
        let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

        assert_eq!(resolver.position_status(start), Err(ZoneStatusError::Unreachable(start)));
    }

    #[test]
    fn corner_resolution_is_independent_of_wall_enumeration_order() {
        let room: RoomName = "E30N30".parse().unwrap();

        // One short wall run per edge so the retained references never
        // change the comparison outcome.
        let walls = vec![
            pos(room, 0, 0),
            pos(room, 0, 1),
            pos(room, 0, 2),
            pos(room, 1, 0),
            pos(room, 2, 0),
            pos(room, 3, 0),
        ];

        let statuses = FakeStatuses::all_normal().with("E31N31", RoomStatus::Respawn);

        let mut orderings = vec![walls.clone()];

        let mut reversed = walls.clone();
        reversed.reverse();
        orderings.push(reversed);

        let interleaved: Vec<_> = walls
            .iter()
            .step_by(2)
            .chain(walls.iter().skip(1).step_by(2))
            .copied()
            .collect();
        orderings.push(interleaved);

        for ordering in orderings {
            let world = FakeWorld::with_walls(room, ordering);
            let resolver = ZoneStatusResolver::new(&world, &statuses, &GridPathfinder);

            // Terminus (4,0): first direction Top, east of every top wall,
            // so the neighbor is (+1,-1) for any enumeration order.
            assert_eq!(resolver.position_status(pos(room, 3, 1)), Ok(RoomStatus::Respawn));
        }
    }
}
