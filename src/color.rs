use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Participant colors. Only one color exists in the current scope and
/// the serialized form is the lowercase literal, so anything other
/// than "blue" is rejected at the boundary.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
        }
    }

    pub fn parse(string: &str) -> Result<Color, ColorError> {
        match string {
            "blue" => Ok(Color::Blue),
            _ => Err(ColorError::Unsupported {
                found: string.to_string(),
            }),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Color::parse(string)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Unsupported color {found:?}, expected \"blue\"")]
    Unsupported { found: String },
}
