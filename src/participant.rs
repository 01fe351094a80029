use serde::{Deserialize, Serialize};

use crate::{Color, Position};

/// An identified, named actor located at a position. Ids are handed
/// out by the surrounding system, nothing here enforces uniqueness.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    pub color: Color,
    pub position: Position,
}

impl Participant {
    pub fn new(id: u64, name: &str, position: Position) -> Participant {
        Participant {
            id,
            name: name.to_string(),
            color: Color::default(),
            position,
        }
    }
}
