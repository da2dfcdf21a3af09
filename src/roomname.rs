use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Room identity as signed lattice coordinates. The room east/south of the
/// world center is (0, 0); west/north rooms use a reflected encoding where
/// displayed index n maps to coordinate -(n + 1), so `W0N0` is (-1, -1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomName {
    x: i32,
    y: i32,
}

impl RoomName {
    pub fn new(x: i32, y: i32) -> RoomName {
        RoomName { x, y }
    }

    pub fn x_coord(&self) -> i32 {
        self.x
    }

    pub fn y_coord(&self) -> i32 {
        self.y
    }

    pub fn offset(&self, dx: i32, dy: i32) -> RoomName {
        RoomName::new(self.x + dx, self.y + dy)
    }

    /// Highway rooms sit on the decade lattice. The reflected negative
    /// encoding is shifted by one so that the edge room of each decade on
    /// the west/north side (displayed index 10, 20, ...) lands on it.
    pub fn is_highway(&self) -> bool {
        let x = normalize_axis(self.x);
        let y = normalize_axis(self.y);

        x % HIGHWAY_STRIDE == 0 || y % HIGHWAY_STRIDE == 0
    }
}

fn normalize_axis(value: i32) -> i32 {
    if value < 0 {
        value + 1
    } else {
        value
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x >= 0 {
            write!(f, "E{}", self.x)?;
        } else {
            write!(f, "W{}", -self.x - 1)?;
        }

        if self.y >= 0 {
            write!(f, "S{}", self.y)
        } else {
            write!(f, "N{}", -self.y - 1)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoomNameParseError {
    #[error("room name is empty")]
    Empty,
    #[error("expected an axis letter, found {0:?}")]
    BadAxisLetter(char),
    #[error("room name ended before the vertical axis")]
    MissingVerticalAxis,
    #[error("invalid room index digits")]
    BadIndex,
}

impl FromStr for RoomName {
    type Err = RoomNameParseError;

    fn from_str(s: &str) -> Result<RoomName, RoomNameParseError> {
        let mut chars = s.chars();

        let west = match chars.next() {
            Some('E') | Some('e') => false,
            Some('W') | Some('w') => true,
            Some(c) => return Err(RoomNameParseError::BadAxisLetter(c)),
            None => return Err(RoomNameParseError::Empty),
        };

        // The x digit run is variable width - scan for the first non-digit
        // rather than assuming a fixed offset.
        let rest = chars.as_str();
        let (x_digits, rest) = match rest.find(|c: char| !c.is_ascii_digit()) {
            Some(split) => rest.split_at(split),
            None => return Err(RoomNameParseError::MissingVerticalAxis),
        };

        let mut chars = rest.chars();

        let north = match chars.next() {
            Some('S') | Some('s') => false,
            Some('N') | Some('n') => true,
            Some(c) => return Err(RoomNameParseError::BadAxisLetter(c)),
            None => return Err(RoomNameParseError::MissingVerticalAxis),
        };

        let y_digits = chars.as_str();

        let x_index: i32 = parse_index(x_digits)?;
        let y_index: i32 = parse_index(y_digits)?;

        Ok(RoomName::new(decode_axis(x_index, west), decode_axis(y_index, north)))
    }
}

fn parse_index(digits: &str) -> Result<i32, RoomNameParseError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(RoomNameParseError::BadIndex);
    }

    digits.parse().map_err(|_| RoomNameParseError::BadIndex)
}

fn decode_axis(index: i32, reflected: bool) -> i32 {
    if reflected {
        -index - 1
    } else {
        index
    }
}
