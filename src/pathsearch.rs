use crate::constants::*;
use crate::costmatrix::*;
use crate::position::*;
use itertools::iproduct;
use pathfinding::prelude::astar;

#[derive(Copy, Clone, Debug)]
pub struct SearchGoal {
    pos: Position,
    range: u32,
}

impl SearchGoal {
    pub fn new(pos: Position, range: u32) -> SearchGoal {
        SearchGoal { pos, range }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn range(&self) -> u32 {
        self.range
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchResults {
    pub path: Vec<Position>,
    pub incomplete: bool,
}

impl SearchResults {
    pub fn incomplete() -> SearchResults {
        SearchResults {
            path: Vec::new(),
            incomplete: true,
        }
    }
}

/// Shortest-path capability constrained to the start room: every room other
/// than `start.room()` is treated as fully blocked, and tiles carrying
/// `BLOCKED_COST` in the supplied matrix are impassable. A complete result's
/// path starts at `start` and ends within acceptance range of some goal.
pub trait PathSearch {
    fn search(&self, start: Position, goals: &[SearchGoal], room_costs: &LocalCostMatrix) -> SearchResults;
}

/// Default in-room search over the 50x50 grid: 8-directional uniform-cost
/// A* with a Chebyshev heuristic. Embedders with a game-engine pathfinder
/// can inject that instead.
pub struct GridPathfinder;

impl PathSearch for GridPathfinder {
    fn search(&self, start: Position, goals: &[SearchGoal], room_costs: &LocalCostMatrix) -> SearchResults {
        let room = start.room();

        // Goals outside the start room are unreachable under the
        // single-room constraint.
        let in_room_goals: Vec<(u8, u8, u32)> = goals
            .iter()
            .filter(|goal| goal.pos().room() == room)
            .map(|goal| (goal.pos().x(), goal.pos().y(), goal.range()))
            .collect();

        if in_room_goals.is_empty() {
            return SearchResults::incomplete();
        }

        let result = astar(
            &(start.x(), start.y()),
            |&(x, y)| {
                iproduct!(-1i32..=1, -1i32..=1)
                    .filter(|&(dx, dy)| dx != 0 || dy != 0)
                    .filter_map(|(dx, dy)| {
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;

                        if nx < 0 || ny < 0 || nx >= ROOM_WIDTH as i32 || ny >= ROOM_HEIGHT as i32 {
                            return None;
                        }

                        let nx = nx as u8;
                        let ny = ny as u8;

                        if room_costs.is_blocked(nx, ny) {
                            return None;
                        }

                        Some(((nx, ny), 1u32))
                    })
                    .collect::<Vec<_>>()
            },
            |&(x, y)| {
                in_room_goals
                    .iter()
                    .map(|&(gx, gy, range)| chebyshev_distance(x, y, gx, gy).saturating_sub(range))
                    .min()
                    .unwrap_or(u32::MAX)
            },
            |&(x, y)| {
                in_room_goals
                    .iter()
                    .any(|&(gx, gy, range)| chebyshev_distance(x, y, gx, gy) <= range)
            },
        );

        match result {
            Some((path, _)) => SearchResults {
                path: path.into_iter().map(|(x, y)| Position::new(room, x, y)).collect(),
                incomplete: false,
            },
            None => SearchResults::incomplete(),
        }
    }
}

fn chebyshev_distance(x: u8, y: u8, gx: u8, gy: u8) -> u32 {
    let dx = (x as i32 - gx as i32).unsigned_abs();
    let dy = (y as i32 - gy as i32).unsigned_abs();

    dx.max(dy)
}
