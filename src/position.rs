use std::ops;

use serde::{Deserialize, Serialize};

/// A point in a 2d coordinate space. No unit or orientation is imposed
/// here, that is up to the surface the positions refer to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }
}

impl ops::Add for Position {
    type Output = Position;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}

impl ops::Sub for Position {
    type Output = Position;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -2.0);
        assert_eq!(a + b, Position::new(1.5, 0.0));
    }

    #[test]
    fn sub() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -2.0);
        assert_eq!(a - b, Position::new(0.5, 4.0));
    }

    #[test]
    fn missing_field_does_not_deserialize() {
        let res: Result<Position, _> = serde_json::from_str("{\"x\": 1.0}");
        assert!(res.is_err());
    }
}
